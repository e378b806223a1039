use crate::error::{QuicknessError, Result};
use crate::layout::PageLayout;
use crate::text::Font;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Typography and spacing of the capture document.
///
/// Lengths are millimetres, font sizes points. The defaults reproduce the
/// extension's A4 layout: title at the top margin, the source line 15 mm
/// below it, content from 50 mm down.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutOptions {
    pub page: PageLayout,
    /// Base font; headings use its bold face
    pub font: Font,
    pub title: String,
    pub title_font_size_pt: f64,
    /// Distance from the title line to the source line
    pub title_advance_mm: f64,
    pub source_font_size_pt: f64,
    /// Distance from the source line to the content
    pub source_advance_mm: f64,
    pub heading_font_size_pt: f64,
    /// Distance from a section heading to its content
    pub heading_advance_mm: f64,
    pub body_font_size_pt: f64,
    pub body_line_height_mm: f64,
    /// Distance between consecutive entries of a link list
    pub link_line_height_mm: f64,
    /// Space after the captured image
    pub image_gap_mm: f64,
    /// Space after a text section
    pub section_gap_mm: f64,
    /// Height kept free below the image when the capture has a note
    pub notes_reserve_mm: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page: PageLayout::a4(),
            font: Font::Helvetica,
            title: "THE QUICKNESS Capture".to_string(),
            title_font_size_pt: 16.0,
            title_advance_mm: 15.0,
            source_font_size_pt: 10.0,
            source_advance_mm: 15.0,
            heading_font_size_pt: 12.0,
            heading_advance_mm: 10.0,
            body_font_size_pt: 12.0,
            body_line_height_mm: 5.0,
            link_line_height_mm: 8.0,
            image_gap_mm: 15.0,
            section_gap_mm: 10.0,
            notes_reserve_mm: 27.0,
        }
    }
}

impl LayoutOptions {
    pub fn with_page(mut self, page: PageLayout) -> Self {
        self.page = page;
        self
    }

    /// Where content starts on the first page.
    pub fn header_height_mm(&self) -> f64 {
        self.page.margin_mm + self.title_advance_mm + self.source_advance_mm
    }

    pub fn validate(&self) -> Result<()> {
        self.page.validate()?;

        let font_sizes = [
            ("titleFontSizePt", self.title_font_size_pt),
            ("sourceFontSizePt", self.source_font_size_pt),
            ("headingFontSizePt", self.heading_font_size_pt),
            ("bodyFontSizePt", self.body_font_size_pt),
            ("bodyLineHeightMm", self.body_line_height_mm),
            ("linkLineHeightMm", self.link_line_height_mm),
        ];
        for (name, value) in font_sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(QuicknessError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let spacings = [
            ("titleAdvanceMm", self.title_advance_mm),
            ("sourceAdvanceMm", self.source_advance_mm),
            ("headingAdvanceMm", self.heading_advance_mm),
            ("imageGapMm", self.image_gap_mm),
            ("sectionGapMm", self.section_gap_mm),
            ("notesReserveMm", self.notes_reserve_mm),
        ];
        for (name, value) in spacings {
            if !(value.is_finite() && value >= 0.0) {
                return Err(QuicknessError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}
