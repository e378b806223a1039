//! Whole-document planning for a capture session
//!
//! The planner lays out the same document the extension saves: a title, a
//! clickable source line, the captured content and the user's notes. The
//! header sits at fixed offsets on the first page; everything after it
//! flows down the page and onto new pages as needed.

use crate::capture::{suggest_filename, CaptureContent, CaptureSession, ImageSource, LinkRef};
use crate::error::Result;
use crate::layout::{
    plan_image_placement, plan_link_overlays, plan_text_block_with, ImagePlacement, LayoutOptions,
    LinkOverlay, PageLayout, PlacedElement, TextLines,
};
use crate::text::{pt_to_mm, truncate_to_width, FontMeasurer, TextMeasurer};
use chrono::{DateTime, Utc};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height of one text line box relative to the font size.
const LINE_BOX_FACTOR: f64 = 1.15;

const SCREENSHOT_PLACEHOLDER: &str = "Screenshot capture failed";
const IMAGE_PLACEHOLDER: &str = "Image could not be loaded";

/// The complete page plan for one capture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DocumentPlan {
    pub layout: PageLayout,
    pub page_count: usize,
    pub elements: Vec<PlacedElement>,
    /// Document title for the PDF metadata: the captured page's title, or
    /// the heading title when the page had none
    pub title: String,
    /// Suggested file name for the saved PDF
    pub filename: String,
}

impl DocumentPlan {
    pub fn elements_on_page(&self, page_index: usize) -> impl Iterator<Item = &PlacedElement> {
        self.elements
            .iter()
            .filter(move |element| element.page_index() == page_index)
    }

    pub fn images(&self) -> impl Iterator<Item = &ImagePlacement> {
        self.elements.iter().filter_map(|element| match element {
            PlacedElement::Image(image) => Some(image),
            _ => None,
        })
    }

    pub fn link_overlays(&self) -> impl Iterator<Item = &LinkOverlay> {
        self.elements.iter().filter_map(|element| match element {
            PlacedElement::LinkOverlay(link) => Some(link),
            _ => None,
        })
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextLines> {
        self.elements.iter().filter_map(|element| match element {
            PlacedElement::TextLines(text) => Some(text),
            _ => None,
        })
    }

    /// Every planned line of text, in document order.
    pub fn lines(&self) -> Vec<&str> {
        self.text_runs()
            .flat_map(|run| run.lines.iter().map(String::as_str))
            .collect()
    }
}

/// Plans capture documents with a fixed set of [`LayoutOptions`].
#[derive(Debug, Clone, Default)]
pub struct DocumentPlanner {
    options: LayoutOptions,
}

impl DocumentPlanner {
    /// Create a planner, rejecting options that cannot produce a page.
    pub fn new(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Plan `session`, naming the file after the current time.
    pub fn plan(&self, session: &CaptureSession) -> DocumentPlan {
        self.plan_at(session, Utc::now())
    }

    /// Plan `session` as if it were saved at `timestamp`.
    pub fn plan_at(&self, session: &CaptureSession, timestamp: DateTime<Utc>) -> DocumentPlan {
        let options = &self.options;
        let mut flow = Flow::new(options);

        flow.place_header(session);

        let has_note = session.trimmed_note().is_some();
        match &session.content {
            CaptureContent::Screenshot { image, links } => {
                flow.place_image(image, links, has_note, SCREENSHOT_PLACEHOLDER);
            }
            CaptureContent::Image { image, src, alt } => {
                let placeholder = match alt.as_deref().map(str::trim) {
                    Some(alt) if !alt.is_empty() => format!("{IMAGE_PLACEHOLDER}: {alt}"),
                    _ => IMAGE_PLACEHOLDER.to_string(),
                };
                flow.place_image(image, &[], has_note, &placeholder);

                if let Some(src) = src.as_deref().filter(|src| !src.trim().is_empty()) {
                    flow.heading("Image Source:");
                    flow.link_line(src, src, options.link_line_height_mm);
                    flow.gap(options.section_gap_mm);
                }
            }
            CaptureContent::TextBlock { text, links } => {
                flow.heading("Captured Text:");
                flow.paragraph(text);
                flow.gap(options.section_gap_mm);

                let listed: Vec<&LinkRef> = links
                    .iter()
                    .filter(|link| !link.href.trim().is_empty())
                    .collect();
                if !listed.is_empty() {
                    flow.heading("Links:");
                    for link in listed {
                        flow.link_line(link.label(), &link.href, options.link_line_height_mm);
                    }
                    flow.gap(options.section_gap_mm);
                }
            }
            CaptureContent::Note { text } => {
                flow.heading("Quick Note:");
                if !text.trim().is_empty() {
                    flow.paragraph(text);
                }
                flow.gap(options.section_gap_mm);
            }
        }

        if let Some(note) = session.trimmed_note() {
            flow.heading("Notes:");
            flow.paragraph(note);
        }

        let elements = flow.finish();
        let page_count = elements
            .iter()
            .map(PlacedElement::page_index)
            .max()
            .map_or(1, |last| last + 1);

        debug!(
            kind = ?session.content.kind(),
            page_count,
            element_count = elements.len(),
            "planned capture document"
        );

        DocumentPlan {
            layout: options.page,
            page_count,
            elements,
            title: document_title(session, options),
            filename: suggest_filename(&session.note, timestamp),
        }
    }
}

fn document_title(session: &CaptureSession, options: &LayoutOptions) -> String {
    match session.title.trim() {
        "" => options.title.clone(),
        title => title.to_string(),
    }
}

/// Cursor that places elements top to bottom and breaks pages.
struct Flow<'a> {
    options: &'a LayoutOptions,
    page_index: usize,
    y: f64,
    elements: Vec<PlacedElement>,
}

impl<'a> Flow<'a> {
    fn new(options: &'a LayoutOptions) -> Self {
        Self {
            options,
            page_index: 0,
            y: options.page.margin_mm,
            elements: Vec::new(),
        }
    }

    fn measurer(&self, size_pt: f64, bold: bool) -> FontMeasurer {
        let font = if bold {
            self.options.font.bold()
        } else {
            self.options.font
        };
        FontMeasurer::new(font, size_pt)
    }

    /// Start a new page unless `needed_mm` still fits above the bottom
    /// margin. A page that is still empty is never left behind.
    fn ensure_room(&mut self, needed_mm: f64) {
        let page = self.options.page;
        if self.y + needed_mm > page.content_bottom() && self.y > page.margin_mm {
            self.page_index += 1;
            self.y = page.margin_mm;
        }
    }

    /// Height of a line box at `size_pt`.
    fn line_box(size_pt: f64) -> f64 {
        pt_to_mm(size_pt) * LINE_BOX_FACTOR
    }

    fn gap(&mut self, mm: f64) {
        self.y += mm;
    }

    /// Title and source line at fixed offsets; content starts below them.
    fn place_header(&mut self, session: &CaptureSession) {
        let options = self.options;
        let margin = options.page.margin_mm;
        let width = options.page.content_width();

        let title_measurer = self.measurer(options.title_font_size_pt, true);
        let title = truncate_to_width(&options.title, width, &title_measurer);
        self.elements.push(PlacedElement::TextLines(TextLines::single(
            title,
            margin,
            margin,
            0,
            title_measurer.font,
            options.title_font_size_pt,
            options.title_advance_mm,
        )));

        self.y = margin + options.title_advance_mm;
        let source = format!("Source: {}", session.url);
        if session.url.trim().is_empty() {
            let measurer = self.measurer(options.source_font_size_pt, false);
            self.push_line(&source, &measurer, options.source_advance_mm);
        } else {
            self.link_line_sized(
                &source,
                &session.url,
                options.source_font_size_pt,
                options.source_advance_mm,
            );
        }

        self.y = options.header_height_mm();
    }

    /// A section heading, kept on the same page as its first body line.
    fn heading(&mut self, text: &str) {
        let options = self.options;
        self.ensure_room(options.heading_advance_mm + Self::line_box(options.body_font_size_pt));
        let measurer = self.measurer(options.heading_font_size_pt, true);
        self.push_line(text, &measurer, options.heading_advance_mm);
    }

    /// One unwrapped line, shortened to the content width.
    fn push_line(&mut self, text: &str, measurer: &FontMeasurer, advance_mm: f64) {
        let width = self.options.page.content_width();
        self.elements.push(PlacedElement::TextLines(TextLines::single(
            truncate_to_width(text, width, measurer),
            self.options.page.margin_mm,
            self.y,
            self.page_index,
            measurer.font,
            measurer.font_size_pt,
            advance_mm,
        )));
        self.y += advance_mm;
    }

    fn link_line(&mut self, label: &str, href: &str, advance_mm: f64) {
        self.ensure_room(Self::line_box(self.options.body_font_size_pt));
        self.link_line_sized(label, href, self.options.body_font_size_pt, advance_mm);
    }

    /// A line of text with a clickable overlay over exactly that text.
    fn link_line_sized(&mut self, label: &str, href: &str, size_pt: f64, advance_mm: f64) {
        let measurer = self.measurer(size_pt, false);
        let width = self.options.page.content_width();
        let text = truncate_to_width(label, width, &measurer);
        let text_width = measurer.measure_mm(&text);

        if text_width > 0.0 {
            self.elements.push(PlacedElement::LinkOverlay(LinkOverlay {
                x: self.options.page.margin_mm,
                y: self.y,
                width: text_width,
                height: Self::line_box(size_pt),
                href: href.to_string(),
                page_index: self.page_index,
            }));
        }
        self.push_line(&text, &measurer, advance_mm);
    }

    /// Wrapped body text, continuing onto new pages as needed.
    fn paragraph(&mut self, text: &str) {
        self.ensure_room(0.0);
        let options = self.options;
        let page = options.page;
        let line_height = options.body_line_height_mm;
        let measurer = self.measurer(options.body_font_size_pt, false);

        let mut lines = plan_text_block_with(
            &measurer,
            text,
            page.margin_mm,
            self.y,
            page.content_width(),
            line_height,
            page.page_width_mm,
            page.page_height_mm,
            page.margin_mm,
        );
        let Some(last) = lines.last() else {
            return;
        };
        let (last_page, last_y) = (self.page_index + last.page_index, last.y);

        for line in &mut lines {
            line.page_index += self.page_index;
        }
        self.elements.extend(
            TextLines::group(&lines, measurer.font, measurer.font_size_pt, line_height)
                .into_iter()
                .map(PlacedElement::TextLines),
        );

        self.page_index = last_page;
        self.y = last_y + line_height;
    }

    /// The captured image with its link overlays, or a placeholder line.
    fn place_image(
        &mut self,
        image: &ImageSource,
        links: &[LinkRef],
        reserve_for_notes: bool,
        placeholder: &str,
    ) {
        let options = self.options;
        let page = options.page;
        let reserve = if reserve_for_notes {
            options.notes_reserve_mm
        } else {
            0.0
        };

        let mut placement = plan_image_placement(
            page.page_width_mm,
            page.page_height_mm,
            page.margin_mm,
            self.y,
            image.width_px,
            image.height_px,
            reserve,
        );
        placement.page_index = self.page_index;

        if placement.is_empty() {
            debug!(
                width_px = image.width_px,
                height_px = image.height_px,
                "image has no drawable area, using placeholder"
            );
            let measurer = self.measurer(options.body_font_size_pt, false);
            self.push_line(placeholder, &measurer, options.image_gap_mm);
            return;
        }

        self.elements.push(PlacedElement::Image(placement));
        self.elements.extend(
            plan_link_overlays(links, image.width_px, image.height_px, &placement)
                .into_iter()
                .map(PlacedElement::LinkOverlay),
        );
        self.y = placement.bounds().bottom() + options.image_gap_mm;
    }

    fn finish(self) -> Vec<PlacedElement> {
        self.elements
    }
}
