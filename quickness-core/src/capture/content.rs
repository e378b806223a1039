//! Captured content handed over by the host for one capture session

use crate::capture::ElementDescriptor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of captured pixel data plus the host's key for the pixels.
///
/// The library never touches pixel data; `handle` is whatever the host uses
/// to find it again (a data URL, a blob id, ...).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImageSource {
    pub width_px: f64,
    pub height_px: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub handle: String,
}

impl ImageSource {
    pub fn new(width_px: f64, height_px: f64, handle: impl Into<String>) -> Self {
        Self {
            width_px,
            height_px,
            handle: handle.into(),
        }
    }

    /// True when the capture produced something drawable.
    pub fn has_pixels(&self) -> bool {
        self.width_px.is_finite()
            && self.height_px.is_finite()
            && self.width_px > 0.0
            && self.height_px > 0.0
    }
}

/// A hyperlink found inside the captured region.
///
/// Coordinates are CSS pixels relative to the captured viewport.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkRef {
    pub text: String,
    pub href: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LinkRef {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn at(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Links without area cannot become clickable overlays.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Text shown for the link in a link list; falls back to the URL.
    pub fn label(&self) -> &str {
        let text = self.text.trim();
        if text.is_empty() {
            &self.href
        } else {
            text
        }
    }
}

/// What was captured.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum CaptureContent {
    /// A dragged-out region of the page, rasterised
    Screenshot {
        image: ImageSource,
        #[cfg_attr(feature = "serde", serde(default))]
        links: Vec<LinkRef>,
    },
    /// A single image element
    Image {
        image: ImageSource,
        #[cfg_attr(feature = "serde", serde(default))]
        src: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        alt: Option<String>,
    },
    /// The text content of an element and the links inside it
    TextBlock {
        text: String,
        #[cfg_attr(feature = "serde", serde(default))]
        links: Vec<LinkRef>,
    },
    /// A quick note with no captured page content
    Note {
        #[cfg_attr(feature = "serde", serde(default))]
        text: String,
    },
}

impl CaptureContent {
    pub fn kind(&self) -> CaptureKind {
        match self {
            CaptureContent::Screenshot { .. } => CaptureKind::Screenshot,
            CaptureContent::Image { .. } => CaptureKind::Image,
            CaptureContent::TextBlock { .. } => CaptureKind::Text,
            CaptureContent::Note { .. } => CaptureKind::Note,
        }
    }

    pub fn links(&self) -> &[LinkRef] {
        match self {
            CaptureContent::Screenshot { links, .. } | CaptureContent::TextBlock { links, .. } => {
                links
            }
            CaptureContent::Image { .. } | CaptureContent::Note { .. } => &[],
        }
    }
}

/// Capture modes, as chosen by the host or by [`classify_capture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CaptureKind {
    Screenshot,
    Image,
    Text,
    Note,
}

/// Decide how a hovered element would be captured on click.
///
/// Only `IMG` becomes an image capture. `SVG` and `VIDEO` are worth
/// highlighting but, like text containers, are captured as text. Text
/// containers only qualify when they actually hold text. Everything else is
/// not capturable.
pub fn classify_capture(descriptor: &ElementDescriptor) -> Option<CaptureKind> {
    if descriptor.tag_is(&["IMG"]) {
        return Some(CaptureKind::Image);
    }
    if descriptor.tag_is(&["SVG", "VIDEO"]) {
        return Some(CaptureKind::Text);
    }

    let text_tags = [
        "P", "DIV", "SPAN", "H1", "H2", "H3", "H4", "H5", "H6", "ARTICLE", "SECTION",
    ];
    if descriptor.text_length > 0 && descriptor.tag_is(&text_tags) {
        return Some(CaptureKind::Text);
    }

    None
}

/// Everything the host knows when the user presses "Save PDF".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CaptureSession {
    /// Page URL the capture came from
    pub url: String,
    /// Page title
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    pub content: CaptureContent,
    /// The user's note, possibly empty
    #[cfg_attr(feature = "serde", serde(default))]
    pub note: String,
}

impl CaptureSession {
    pub fn new(url: impl Into<String>, content: CaptureContent) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            content,
            note: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// The note with surrounding whitespace removed, or `None` if blank.
    pub fn trimmed_note(&self) -> Option<&str> {
        let note = self.note.trim();
        (!note.is_empty()).then_some(note)
    }
}
