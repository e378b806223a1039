use crate::text::{measure_text, pt_to_mm, split_into_words, Font};

/// Width measurement used when wrapping text onto a page.
///
/// Widths are in millimetres, the unit of the page plan.
pub trait TextMeasurer: Send + Sync {
    /// Measure the rendered width of `text`.
    fn measure_mm(&self, text: &str) -> f64;
}

/// Measures with the standard font metric tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMeasurer {
    pub font: Font,
    pub font_size_pt: f64,
}

impl FontMeasurer {
    pub fn new(font: Font, font_size_pt: f64) -> Self {
        Self { font, font_size_pt }
    }
}

impl Default for FontMeasurer {
    fn default() -> Self {
        Self::new(Font::Helvetica, 12.0)
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure_mm(&self, text: &str) -> f64 {
        pt_to_mm(measure_text(text, self.font, self.font_size_pt))
    }
}

/// Greedily wrap `text` into lines no wider than `max_width_mm`.
///
/// Whitespace runs collapse to a single space. A whitespace run containing a
/// newline forces a break. A word wider than the limit is kept whole on a
/// line of its own.
pub fn wrap_text(text: &str, max_width_mm: f64, measurer: &dyn TextMeasurer) -> Vec<String> {
    let space_width = measurer.measure_mm(" ");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for token in split_into_words(text) {
        if token.chars().all(char::is_whitespace) {
            if token.contains('\n') && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            continue;
        }

        let word_width = measurer.measure_mm(token);
        if current.is_empty() {
            current.push_str(token);
            current_width = word_width;
        } else if current_width + space_width + word_width > max_width_mm {
            lines.push(std::mem::replace(&mut current, token.to_string()));
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(token);
            current_width += space_width + word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shorten `text` with a trailing ellipsis until it fits `max_width_mm`.
///
/// Text that already fits is returned unchanged. If not even the ellipsis
/// fits, the result is empty. The longest fitting prefix is found by binary
/// search, so very long inputs (`data:` URLs) cost `O(n log n)`.
pub fn truncate_to_width(text: &str, max_width_mm: f64, measurer: &dyn TextMeasurer) -> String {
    if measurer.measure_mm(text) <= max_width_mm {
        return text.to_string();
    }

    // prefix ends at every char boundary short of the full text
    let ends: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let fitting = ends.partition_point(|&end| {
        measurer.measure_mm(&with_ellipsis(&text[..end])) <= max_width_mm
    });

    match fitting.checked_sub(1) {
        Some(last) => with_ellipsis(&text[..ends[last]]),
        None => String::new(),
    }
}

fn with_ellipsis(prefix: &str) -> String {
    format!("{}{ELLIPSIS}", prefix.trim_end())
}

const ELLIPSIS: &str = "...";
