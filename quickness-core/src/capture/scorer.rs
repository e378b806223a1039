//! Capture-target scoring for hover capture
//!
//! While the user hovers with the capture modifier held, the host walks from
//! the element under the pointer up through its ancestors and asks which of
//! them looks most like meaningful content. Scoring is a sum of independent
//! bonuses (size, tag, text, styling) minus a penalty for tiny elements,
//! floored at zero; invisible elements are vetoed outright.

use crate::geometry::sanitize_length;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of candidates considered, starting at the pointer target.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Snapshot of one DOM-like node, taken by the host for each hover event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ElementDescriptor {
    /// Element tag as reported by the DOM (`IMG`, `div`, `svg`, ...)
    pub tag_name: String,
    /// Length of the trimmed text content
    pub text_length: usize,
    /// Layout width in CSS pixels
    pub width: f64,
    /// Layout height in CSS pixels
    pub height: f64,
    /// Whether a computed `background-image` is set
    pub has_background_image: bool,
    /// Computed font size in CSS pixels
    pub font_size_px: f64,
    /// Whether the element is rendered at all
    pub visible: bool,
}

impl Default for ElementDescriptor {
    fn default() -> Self {
        Self {
            tag_name: String::new(),
            text_length: 0,
            width: 0.0,
            height: 0.0,
            has_background_image: false,
            font_size_px: 0.0,
            visible: true,
        }
    }
}

impl ElementDescriptor {
    pub fn new(tag_name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            tag_name: tag_name.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_text_length(mut self, text_length: usize) -> Self {
        self.text_length = text_length;
        self
    }

    pub fn with_font_size(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    pub fn with_background_image(mut self) -> Self {
        self.has_background_image = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// True for the node that terminates a candidate chain.
    pub fn is_document_root(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("HTML") || self.tag_name == "#document"
    }

    pub(crate) fn tag_is(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.tag_name.eq_ignore_ascii_case(tag))
    }
}

/// A candidate together with its score and distance from the pointer target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredCandidate {
    pub descriptor: ElementDescriptor,
    pub score: i32,
    /// 0 is the pointer target itself, 1 its parent, and so on
    pub depth: usize,
}

/// Thresholds and weights used by [`TargetScorer`].
///
/// Sizes are CSS pixels. The defaults are the tuned values the extension
/// ships with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ScoringWeights {
    /// Elements wider and taller than this earn `sized_bonus`
    pub sized_min_width: f64,
    pub sized_min_height: f64,
    pub sized_bonus: i32,
    /// Elements wider and taller than this additionally earn `large_bonus`
    pub large_min_width: f64,
    pub large_min_height: f64,
    pub large_bonus: i32,
    /// IMG, SVG
    pub image_tag_bonus: i32,
    /// VIDEO, CANVAS
    pub media_tag_bonus: i32,
    /// H1 to H6
    pub heading_tag_bonus: i32,
    /// P, ARTICLE, SECTION
    pub block_tag_bonus: i32,
    /// DIV, SPAN
    pub generic_tag_bonus: i32,
    pub text_length_threshold: usize,
    pub text_bonus: i32,
    pub long_text_length_threshold: usize,
    pub long_text_bonus: i32,
    pub background_image_bonus: i32,
    pub large_font_threshold_px: f64,
    pub large_font_bonus: i32,
    /// Elements narrower or shorter than this lose `tiny_penalty`
    pub tiny_max_width: f64,
    pub tiny_max_height: f64,
    pub tiny_penalty: i32,
    /// Number of chain entries considered, pointer target included
    pub max_depth: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sized_min_width: 50.0,
            sized_min_height: 20.0,
            sized_bonus: 10,
            large_min_width: 200.0,
            large_min_height: 100.0,
            large_bonus: 20,
            image_tag_bonus: 50,
            media_tag_bonus: 45,
            heading_tag_bonus: 40,
            block_tag_bonus: 35,
            generic_tag_bonus: 10,
            text_length_threshold: 20,
            text_bonus: 15,
            long_text_length_threshold: 100,
            long_text_bonus: 10,
            background_image_bonus: 20,
            large_font_threshold_px: 16.0,
            large_font_bonus: 10,
            tiny_max_width: 30.0,
            tiny_max_height: 15.0,
            tiny_penalty: 20,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

const HEADING_TAGS: [&str; 6] = ["H1", "H2", "H3", "H4", "H5", "H6"];

/// Scores elements and picks the best one along an ancestor chain.
#[derive(Debug, Clone, Default)]
pub struct TargetScorer {
    weights: ScoringWeights,
}

impl TargetScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Capture-worthiness of a single element. Never negative.
    pub fn score(&self, descriptor: &ElementDescriptor) -> i32 {
        if !descriptor.visible {
            return 0;
        }

        let w = &self.weights;
        let width = sanitize_length(descriptor.width);
        let height = sanitize_length(descriptor.height);
        let font_size = sanitize_length(descriptor.font_size_px);
        let mut score = 0;

        if width > w.sized_min_width && height > w.sized_min_height {
            score += w.sized_bonus;
        }
        if width > w.large_min_width && height > w.large_min_height {
            score += w.large_bonus;
        }

        score += self.tag_bonus(descriptor);

        if descriptor.text_length > w.text_length_threshold {
            score += w.text_bonus;
        }
        if descriptor.text_length > w.long_text_length_threshold {
            score += w.long_text_bonus;
        }
        if descriptor.has_background_image {
            score += w.background_image_bonus;
        }
        if font_size > w.large_font_threshold_px {
            score += w.large_font_bonus;
        }
        if width < w.tiny_max_width || height < w.tiny_max_height {
            score -= w.tiny_penalty;
        }

        score.max(0)
    }

    fn tag_bonus(&self, descriptor: &ElementDescriptor) -> i32 {
        let w = &self.weights;
        if descriptor.tag_is(&["IMG", "SVG"]) {
            w.image_tag_bonus
        } else if descriptor.tag_is(&["VIDEO", "CANVAS"]) {
            w.media_tag_bonus
        } else if descriptor.tag_is(&HEADING_TAGS) {
            w.heading_tag_bonus
        } else if descriptor.tag_is(&["P", "ARTICLE", "SECTION"]) {
            w.block_tag_bonus
        } else if descriptor.tag_is(&["DIV", "SPAN"]) {
            w.generic_tag_bonus
        } else {
            0
        }
    }

    /// Every non-zero candidate within `max_depth`, best first.
    ///
    /// Equal scores keep chain order, so the more nested element ranks first.
    pub fn rank(&self, chain: &[ElementDescriptor], max_depth: usize) -> Vec<ScoredCandidate> {
        let mut ranked: Vec<ScoredCandidate> = chain
            .iter()
            .take(max_depth)
            .take_while(|descriptor| !descriptor.is_document_root())
            .enumerate()
            .filter_map(|(depth, descriptor)| {
                let score = self.score(descriptor);
                trace!(depth, tag = %descriptor.tag_name, score, "scored candidate");
                (score > 0).then(|| ScoredCandidate {
                    descriptor: descriptor.clone(),
                    score,
                    depth,
                })
            })
            .collect();

        // stable sort keeps depth order among ties
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// The single best candidate, with its score and depth.
    pub fn best_candidate(
        &self,
        chain: &[ElementDescriptor],
        max_depth: usize,
    ) -> Option<ScoredCandidate> {
        let best = self.best_index(chain, max_depth).map(|(depth, score)| ScoredCandidate {
            descriptor: chain[depth].clone(),
            score,
            depth,
        });

        match &best {
            Some(candidate) => debug!(
                depth = candidate.depth,
                tag = %candidate.descriptor.tag_name,
                score = candidate.score,
                "selected capture target"
            ),
            None => debug!(chain_len = chain.len(), "no capture target worth highlighting"),
        }

        best
    }

    /// The element to highlight, or `None` when nothing in reach scores.
    pub fn select_best_candidate<'a>(
        &self,
        chain: &'a [ElementDescriptor],
        max_depth: usize,
    ) -> Option<&'a ElementDescriptor> {
        self.best_index(chain, max_depth).map(|(depth, _)| &chain[depth])
    }

    fn best_index(&self, chain: &[ElementDescriptor], max_depth: usize) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;

        for (depth, descriptor) in chain.iter().enumerate().take(max_depth) {
            if descriptor.is_document_root() {
                break;
            }
            let score = self.score(descriptor);
            // strictly greater: the earliest candidate wins ties
            if score > 0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((depth, score));
            }
        }

        best
    }
}

/// Score an element with the default weights.
pub fn score_element(descriptor: &ElementDescriptor) -> i32 {
    TargetScorer::default().score(descriptor)
}

/// Pick the best candidate of `chain` with the default weights.
pub fn select_best_candidate(
    chain: &[ElementDescriptor],
    max_depth: usize,
) -> Option<&ElementDescriptor> {
    TargetScorer::default().select_best_candidate(chain, max_depth)
}
