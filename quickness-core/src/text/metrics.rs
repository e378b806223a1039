use crate::text::Font;
use std::collections::HashMap;

/// Millimetres per PDF point (1/72 inch).
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Convert a length in points to millimetres.
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * MM_PER_PT
}

/// Character width information for standard PDF fonts
/// All widths are in 1/1000 of a unit (font size 1.0)
#[derive(Clone)]
pub struct FontMetrics {
    widths: HashMap<char, u16>,
    default_width: u16,
}

impl FontMetrics {
    fn new(default_width: u16) -> Self {
        Self {
            widths: HashMap::new(),
            default_width,
        }
    }

    fn with_widths(mut self, widths: &[(char, u16)]) -> Self {
        self.widths.extend(widths.iter().copied());
        self
    }

    pub fn char_width(&self, ch: char) -> u16 {
        self.widths.get(&ch).copied().unwrap_or(self.default_width)
    }
}

lazy_static::lazy_static! {
    static ref FONT_METRICS: HashMap<Font, FontMetrics> = {
        let mut metrics = HashMap::new();

        metrics.insert(Font::Helvetica, FontMetrics::new(556).with_widths(&[
            (' ', 278), ('!', 278), ('"', 355), ('#', 556), ('$', 556), ('%', 889),
            ('&', 667), ('\'', 191), ('(', 333), (')', 333), ('*', 389), ('+', 584),
            (',', 278), ('-', 333), ('.', 278), ('/', 278), (':', 278), (';', 278),
            ('<', 584), ('=', 584), ('>', 584), ('?', 556), ('@', 1015), ('A', 667),
            ('B', 667), ('C', 722), ('D', 722), ('E', 667), ('F', 611), ('G', 778),
            ('H', 722), ('I', 278), ('J', 500), ('K', 667), ('L', 556), ('M', 833),
            ('N', 722), ('O', 778), ('P', 667), ('Q', 778), ('R', 722), ('S', 667),
            ('T', 611), ('U', 722), ('V', 667), ('W', 944), ('X', 667), ('Y', 667),
            ('Z', 611), ('[', 278), ('\\', 278), (']', 278), ('^', 469), ('`', 333),
            ('c', 500), ('f', 278), ('i', 222), ('j', 222), ('k', 500), ('l', 222),
            ('m', 833), ('r', 333), ('s', 500), ('t', 278), ('v', 500), ('w', 722),
            ('x', 500), ('y', 500), ('z', 500), ('{', 334), ('|', 260), ('}', 334),
            ('~', 584),
        ]));

        metrics.insert(Font::HelveticaBold, FontMetrics::new(611).with_widths(&[
            (' ', 278), ('!', 333), ('"', 474), ('#', 556), ('$', 556), ('%', 889),
            ('&', 722), ('\'', 238), ('(', 333), (')', 333), ('*', 389), ('+', 584),
            (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
            ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
            ('8', 556), ('9', 556), (':', 333), (';', 333), ('<', 584), ('=', 584),
            ('>', 584), ('@', 975), ('A', 722), ('B', 722), ('C', 722), ('D', 722),
            ('E', 667), ('G', 778), ('H', 722), ('I', 278), ('J', 556), ('K', 722),
            ('M', 833), ('N', 722), ('O', 778), ('P', 667), ('Q', 778), ('R', 722),
            ('S', 667), ('U', 722), ('V', 667), ('W', 944), ('X', 667), ('Y', 667),
            ('[', 333), ('\\', 278), (']', 333), ('^', 584), ('_', 556), ('`', 333),
            ('a', 556), ('c', 556), ('e', 556), ('f', 333), ('i', 278), ('j', 278),
            ('k', 556), ('l', 278), ('m', 889), ('r', 389), ('s', 556), ('t', 333),
            ('v', 556), ('w', 778), ('x', 556), ('y', 556), ('z', 500), ('{', 389),
            ('|', 280), ('}', 389), ('~', 584),
        ]));

        // Courier is monospaced
        metrics.insert(Font::Courier, FontMetrics::new(600));
        metrics.insert(Font::CourierBold, FontMetrics::new(600));

        metrics
    };
}

fn metrics_for(font: Font) -> Option<&'static FontMetrics> {
    FONT_METRICS.get(&font)
}

/// Measure the width of a text string in points for a given font and size
pub fn measure_text(text: &str, font: Font, font_size: f64) -> f64 {
    let Some(metrics) = metrics_for(font) else {
        // average glyph width
        return text.chars().count() as f64 * font_size * 0.6;
    };

    let width_units: u32 = text.chars().map(|ch| metrics.char_width(ch) as u32).sum();

    (width_units as f64 / 1000.0) * font_size
}

/// Measure the width of a single character in points
pub fn measure_char(ch: char, font: Font, font_size: f64) -> f64 {
    match metrics_for(font) {
        Some(metrics) => (metrics.char_width(ch) as f64 / 1000.0) * font_size,
        None => font_size * 0.6,
    }
}

/// Split text into words, preserving whitespace runs as separate tokens
pub fn split_into_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut in_space = false;

    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() != in_space {
            if i > start {
                words.push(&text[start..i]);
            }
            start = i;
            in_space = ch.is_whitespace();
        }
    }

    if start < text.len() {
        words.push(&text[start..]);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_metrics_with_widths() {
        let metrics = FontMetrics::new(500).with_widths(&[('A', 600), ('B', 700)]);

        assert_eq!(metrics.char_width('A'), 600);
        assert_eq!(metrics.char_width('B'), 700);
        assert_eq!(metrics.char_width('Z'), 500); // Default for unmapped
    }

    #[test]
    fn test_measure_text_helvetica() {
        // "H" = 722, "e" = 556, "l" = 222, "l" = 222, "o" = 556
        // Total = 2278 units = 2.278 at size 1.0, * 12.0 = 27.336
        let width = measure_text("Hello", Font::Helvetica, 12.0);
        assert!((width - 27.336).abs() < 0.01);
    }

    #[test]
    fn test_measure_text_courier() {
        let width = measure_text("ABC", Font::Courier, 10.0);
        assert_eq!(width, 18.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = measure_text("Captured Text:", Font::Helvetica, 12.0);
        let bold = measure_text("Captured Text:", Font::HelveticaBold, 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_measure_char() {
        // Helvetica "A" = 667 units
        assert!((measure_char('A', Font::Helvetica, 12.0) - 8.004).abs() < 0.01);
        assert_eq!(measure_char('X', Font::Courier, 10.0), 6.0);
    }

    #[test]
    fn test_measure_non_latin_uses_default_width() {
        // Characters outside the table fall back to the font default
        let width = measure_char('é', Font::Helvetica, 1000.0);
        assert_eq!(width, 556.0);
    }

    #[test]
    fn test_pt_to_mm() {
        assert!((pt_to_mm(72.0) - 25.4).abs() < 1e-9);
        assert_eq!(pt_to_mm(0.0), 0.0);
    }

    #[test]
    fn test_split_into_words() {
        assert_eq!(split_into_words("Hello World"), vec!["Hello", " ", "World"]);
        assert_eq!(split_into_words("Hello   World"), vec!["Hello", "   ", "World"]);
        assert_eq!(
            split_into_words(" Hello\tWorld\n"),
            vec![" ", "Hello", "\t", "World", "\n"]
        );
        assert!(split_into_words("").is_empty());
        assert_eq!(split_into_words("   "), vec!["   "]);
    }
}
