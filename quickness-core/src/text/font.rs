#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard PDF fonts the capture document uses.
///
/// The PDF writer on the host side maps these by [`Font::pdf_name`]; jsPDF
/// and every PDF viewer ship them without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Font {
    /// Helvetica (sans-serif)
    #[default]
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Courier (monospace)
    Courier,
    /// Courier Bold
    CourierBold,
}

impl Font {
    /// Get the PDF name for this font
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Font::HelveticaBold | Font::CourierBold)
    }

    /// The bold face of the same family.
    pub fn bold(self) -> Self {
        match self {
            Font::Helvetica | Font::HelveticaBold => Font::HelveticaBold,
            Font::Courier | Font::CourierBold => Font::CourierBold,
        }
    }

    pub fn is_monospace(&self) -> bool {
        matches!(self, Font::Courier | Font::CourierBold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_names() {
        assert_eq!(Font::Helvetica.pdf_name(), "Helvetica");
        assert_eq!(Font::HelveticaBold.pdf_name(), "Helvetica-Bold");
        assert_eq!(Font::Courier.pdf_name(), "Courier");
        assert_eq!(Font::CourierBold.pdf_name(), "Courier-Bold");
    }

    #[test]
    fn test_bold_faces() {
        assert_eq!(Font::Helvetica.bold(), Font::HelveticaBold);
        assert_eq!(Font::HelveticaBold.bold(), Font::HelveticaBold);
        assert_eq!(Font::Courier.bold(), Font::CourierBold);
        assert!(Font::CourierBold.is_bold());
        assert!(!Font::Helvetica.is_bold());
    }

    #[test]
    fn test_default_font() {
        assert_eq!(Font::default(), Font::Helvetica);
        assert!(Font::Courier.is_monospace());
        assert!(!Font::HelveticaBold.is_monospace());
    }
}
