//! Placed elements: the output of the layout engine

use crate::geometry::Rect;
use crate::text::Font;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the captured image goes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImagePlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub page_index: usize,
}

impl ImagePlacement {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Zero-size placements mean "draw a placeholder instead".
    pub fn is_empty(&self) -> bool {
        self.bounds().is_empty()
    }
}

/// An invisible clickable region pointing at `href`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LinkOverlay {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub href: String,
    pub page_index: usize,
}

impl LinkOverlay {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// One wrapped line of text; `y` is the top of the line box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub page_index: usize,
}

/// Consecutive lines sharing a page and a style.
///
/// The first line's box starts at `y`; line `k` starts at
/// `y + k * line_height_mm`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextLines {
    pub lines: Vec<String>,
    pub x: f64,
    pub y: f64,
    pub page_index: usize,
    pub font: Font,
    pub font_size_pt: f64,
    pub line_height_mm: f64,
}

impl TextLines {
    /// A single line.
    pub fn single(
        text: impl Into<String>,
        x: f64,
        y: f64,
        page_index: usize,
        font: Font,
        font_size_pt: f64,
        line_height_mm: f64,
    ) -> Self {
        Self {
            lines: vec![text.into()],
            x,
            y,
            page_index,
            font,
            font_size_pt,
            line_height_mm,
        }
    }

    /// Group positioned lines into one run per page, preserving order.
    pub fn group(lines: &[TextLine], font: Font, font_size_pt: f64, line_height_mm: f64) -> Vec<Self> {
        let mut runs: Vec<Self> = Vec::new();

        for line in lines {
            match runs.last_mut() {
                Some(run) if run.page_index == line.page_index => run.lines.push(line.text.clone()),
                _ => runs.push(Self {
                    lines: vec![line.text.clone()],
                    x: line.x,
                    y: line.y,
                    page_index: line.page_index,
                    font,
                    font_size_pt,
                    line_height_mm,
                }),
            }
        }

        runs
    }

    /// Positioned lines of this run.
    pub fn positioned(&self) -> impl Iterator<Item = TextLine> + '_ {
        self.lines.iter().enumerate().map(move |(k, text)| TextLine {
            text: text.clone(),
            x: self.x,
            y: self.y + k as f64 * self.line_height_mm,
            page_index: self.page_index,
        })
    }
}

/// One visual element of the document plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum PlacedElement {
    Image(ImagePlacement),
    LinkOverlay(LinkOverlay),
    TextLines(TextLines),
}

impl PlacedElement {
    pub fn page_index(&self) -> usize {
        match self {
            PlacedElement::Image(image) => image.page_index,
            PlacedElement::LinkOverlay(link) => link.page_index,
            PlacedElement::TextLines(text) => text.page_index,
        }
    }
}
