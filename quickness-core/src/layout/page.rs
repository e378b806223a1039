use crate::error::{QuicknessError, Result};
use crate::geometry::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Margin used by the capture document on every side.
pub const DEFAULT_MARGIN_MM: f64 = 20.0;

/// Fixed page geometry, in millimetres.
///
/// # Example
///
/// ```rust
/// use quickness::PageLayout;
///
/// let page = PageLayout::a4();
/// assert_eq!(page.content_width(), 170.0);
/// assert_eq!(page.content_bottom(), 277.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageLayout {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageLayout {
    pub fn new(page_width_mm: f64, page_height_mm: f64, margin_mm: f64) -> Self {
        Self {
            page_width_mm,
            page_height_mm,
            margin_mm,
        }
    }

    /// A4 (210 x 297 mm), the jsPDF default.
    pub fn a4() -> Self {
        Self::new(210.0, 297.0, DEFAULT_MARGIN_MM)
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(215.9, 279.4, DEFAULT_MARGIN_MM)
    }

    /// US Legal (8.5 x 14 inches).
    pub fn legal() -> Self {
        Self::new(215.9, 355.6, DEFAULT_MARGIN_MM)
    }

    /// Look up a preset by name (`a4`, `letter`, `legal`, any case).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(Self::a4()),
            "letter" => Ok(Self::letter()),
            "legal" => Ok(Self::legal()),
            _ => Err(QuicknessError::InvalidPageSize(name.to_string())),
        }
    }

    pub fn with_margin(mut self, margin_mm: f64) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> f64 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Lowest y a line may start at.
    pub fn content_bottom(&self) -> f64 {
        self.page_height_mm - self.margin_mm
    }

    /// The area inside the margins.
    pub fn content_area(&self) -> Rect {
        Rect::new(
            self.margin_mm,
            self.margin_mm,
            self.content_width(),
            self.page_height_mm - 2.0 * self.margin_mm,
        )
    }

    /// Reject geometry that leaves no room for content.
    pub fn validate(&self) -> Result<()> {
        let dims = [self.page_width_mm, self.page_height_mm, self.margin_mm];
        if dims.iter().any(|v| !v.is_finite()) {
            return Err(QuicknessError::InvalidConfig(
                "page dimensions must be finite".to_string(),
            ));
        }
        if self.margin_mm < 0.0 {
            return Err(QuicknessError::InvalidConfig(format!(
                "margin must not be negative, got {}",
                self.margin_mm
            )));
        }
        let area = self.content_area();
        if area.width <= 0.0 || area.height <= 0.0 {
            return Err(QuicknessError::InvalidConfig(format!(
                "margin {} mm leaves no content area on a {} x {} mm page",
                self.margin_mm, self.page_width_mm, self.page_height_mm
            )));
        }
        Ok(())
    }
}
