use crate::geometry::sanitize_length;
use crate::layout::TextLine;
use crate::text::{wrap_text, FontMeasurer, TextMeasurer};
use tracing::{debug, trace};

/// Wrap `text` and lay the lines out top to bottom, paginating on overflow.
///
/// Words are measured as Helvetica 12 pt; see [`plan_text_block_with`] for
/// other fonts. Page indices are relative to the page `start_y` is on.
#[allow(clippy::too_many_arguments)]
pub fn plan_text_block(
    text: &str,
    start_x: f64,
    start_y: f64,
    max_width_mm: f64,
    line_height_mm: f64,
    page_width_mm: f64,
    page_height_mm: f64,
    margin_mm: f64,
) -> Vec<TextLine> {
    plan_text_block_with(
        &FontMeasurer::default(),
        text,
        start_x,
        start_y,
        max_width_mm,
        line_height_mm,
        page_width_mm,
        page_height_mm,
        margin_mm,
    )
}

/// [`plan_text_block`] with an explicit width measurer.
///
/// A line whose top would fall below `page_height_mm - margin_mm` moves to
/// the top margin of the next page. A line that opens a page is always
/// placed there, so even a page with no vertical room terminates.
#[allow(clippy::too_many_arguments)]
pub fn plan_text_block_with(
    measurer: &dyn TextMeasurer,
    text: &str,
    start_x: f64,
    start_y: f64,
    max_width_mm: f64,
    line_height_mm: f64,
    page_width_mm: f64,
    page_height_mm: f64,
    margin_mm: f64,
) -> Vec<TextLine> {
    if start_x + max_width_mm > page_width_mm - margin_mm {
        debug!(start_x, max_width_mm, page_width_mm, "text block runs into the right margin");
    }
    let line_height = sanitize_length(line_height_mm);
    let bottom = page_height_mm - margin_mm;

    let mut page_index = 0;
    let mut y = start_y;
    let mut placed = Vec::new();

    for (i, line) in wrap_text(text, max_width_mm, measurer).into_iter().enumerate() {
        if i > 0 {
            y += line_height;
        }
        if y > bottom {
            page_index += 1;
            y = margin_mm;
            trace!(page_index, "text block continues on next page");
        }
        placed.push(TextLine {
            text: line,
            x: start_x,
            y,
            page_index,
        });
    }

    placed
}
