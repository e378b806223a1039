//! PDF page planning
//!
//! Everything here is pure geometry: given page dimensions and the captured
//! content, compute where the image, link overlays and lines of text go.
//! Coordinates are millimetres with the origin at the top-left corner of the
//! page and y growing downwards. The host feeds the plan to its PDF writer.

mod document;
mod element;
mod image;
mod links;
mod options;
mod page;
mod text_block;

pub use document::{DocumentPlan, DocumentPlanner};
pub use element::{ImagePlacement, LinkOverlay, PlacedElement, TextLine, TextLines};
pub use image::plan_image_placement;
pub use links::plan_link_overlays;
pub use options::LayoutOptions;
pub use page::{PageLayout, DEFAULT_MARGIN_MM};
pub use text_block::{plan_text_block, plan_text_block_with};
