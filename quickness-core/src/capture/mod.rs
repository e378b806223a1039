//! Capture side: picking the element under the pointer and describing what
//! was captured

pub mod content;
pub mod filename;
pub mod scorer;

pub use content::{
    classify_capture, CaptureContent, CaptureKind, CaptureSession, ImageSource, LinkRef,
};
pub use filename::{note_slug, suggest_filename, suggest_filename_now};
pub use scorer::{
    score_element, select_best_candidate, ElementDescriptor, ScoredCandidate, ScoringWeights,
    TargetScorer, DEFAULT_MAX_DEPTH,
};
