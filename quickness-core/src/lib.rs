//! # quickness
//!
//! The computational core of THE QUICKNESS, a web capture tool that turns a
//! screenshot, a page element or a quick note into an annotated PDF.
//!
//! The crate is a library of pure functions. A host (the browser extension)
//! hands in snapshots of what it sees and gets back decisions and page
//! plans; it keeps all DOM, download and PDF byte handling to itself.
//!
//! ## Features
//!
//! - **Capture targeting**: score DOM element snapshots and pick the best
//!   ancestor to highlight under the pointer
//! - **Image fitting**: scale a captured image into the page below the header
//! - **Link overlays**: map hyperlinks from viewport pixels onto the placed image
//! - **Text flow**: wrap text with standard font metrics and paginate it
//! - **Document planning**: lay out a complete capture document
//! - **File naming**: timestamped, note-derived file names
//!
//! ## Quick Start
//!
//! ### Picking a capture target
//!
//! ```rust
//! use quickness::{select_best_candidate, ElementDescriptor, DEFAULT_MAX_DEPTH};
//!
//! // pointer target first, then its ancestors
//! let chain = vec![
//!     ElementDescriptor::new("SPAN", 40.0, 10.0).with_text_length(5),
//!     ElementDescriptor::new("IMG", 300.0, 150.0),
//!     ElementDescriptor::new("BODY", 1280.0, 4000.0),
//! ];
//!
//! let best = select_best_candidate(&chain, DEFAULT_MAX_DEPTH).unwrap();
//! assert_eq!(best.tag_name, "IMG");
//! ```
//!
//! ### Planning a page
//!
//! ```rust
//! use quickness::{plan_image_placement, plan_link_overlays, LinkRef, PageLayout};
//!
//! let page = PageLayout::a4();
//! let image = plan_image_placement(
//!     page.page_width_mm,
//!     page.page_height_mm,
//!     page.margin_mm,
//!     50.0,
//!     1700.0,
//!     850.0,
//!     0.0,
//! );
//! assert_eq!(image.width, 170.0);
//!
//! let links = vec![LinkRef::new("Docs", "https://example.com/docs").at(100.0, 40.0, 200.0, 20.0)];
//! let overlays = plan_link_overlays(&links, 1700.0, 850.0, &image);
//! assert_eq!(overlays.len(), 1);
//! ```
//!
//! ### Planning a whole document
//!
//! ```rust
//! use quickness::{CaptureContent, CaptureSession, DocumentPlanner, ImageSource};
//!
//! let session = CaptureSession::new(
//!     "https://example.com",
//!     CaptureContent::Screenshot {
//!         image: ImageSource::new(1280.0, 720.0, "capture-1"),
//!         links: Vec::new(),
//!     },
//! )
//! .with_note("Pricing table for the Q3 review");
//!
//! let plan = DocumentPlanner::default().plan(&session);
//! assert_eq!(plan.page_count, 1);
//! assert!(plan.filename.ends_with("_pricing-table.pdf"));
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod text;

pub use capture::{
    classify_capture, note_slug, score_element, select_best_candidate, suggest_filename,
    suggest_filename_now, CaptureContent, CaptureKind, CaptureSession, ElementDescriptor,
    ImageSource, LinkRef, ScoredCandidate, ScoringWeights, TargetScorer, DEFAULT_MAX_DEPTH,
};
pub use config::QuicknessConfig;
pub use error::{QuicknessError, Result};
pub use geometry::{Point, Rect, SelectionRect, MIN_SELECTION_PX};
pub use layout::{
    plan_image_placement, plan_link_overlays, plan_text_block, plan_text_block_with,
    DocumentPlan, DocumentPlanner, ImagePlacement, LayoutOptions, LinkOverlay, PageLayout,
    PlacedElement, TextLine, TextLines,
};
pub use text::{measure_text, pt_to_mm, wrap_text, Font, FontMeasurer, TextMeasurer};

/// Current version of quickness
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
