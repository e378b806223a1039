//! Font metrics and line wrapping

mod flow;
mod font;
mod metrics;

pub use flow::{truncate_to_width, wrap_text, FontMeasurer, TextMeasurer};
pub use font::Font;
pub use metrics::{measure_char, measure_text, pt_to_mm, split_into_words, FontMetrics, MM_PER_PT};
