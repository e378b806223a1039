//! File names for saved captures
//!
//! Names look like `2026-10-16T09-41-07_meeting-notes.pdf`: the UTC capture
//! time followed by the first two words of the user's note.

use chrono::{DateTime, Utc};
use unicode_normalization::UnicodeNormalization;

const SLUG_WORDS: usize = 2;
const FALLBACK_SLUG: &str = "note";

/// Build the file name for a capture taken at `timestamp`.
pub fn suggest_filename(note: &str, timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp.format("%Y-%m-%dT%H-%M-%S");
    let slug = note_slug(note);
    let slug = if slug.is_empty() { FALLBACK_SLUG } else { &slug };
    format!("{stamp}_{slug}.pdf")
}

/// [`suggest_filename`] for a capture taken now.
pub fn suggest_filename_now(note: &str) -> String {
    suggest_filename(note, Utc::now())
}

/// Lowercase ASCII slug of the first words of `note`.
///
/// Accents are folded (`café` becomes `cafe`); anything that is not an ASCII
/// letter, digit or hyphen is dropped.
pub fn note_slug(note: &str) -> String {
    let joined = note
        .split_whitespace()
        .take(SLUG_WORDS)
        .collect::<Vec<_>>()
        .join("-");

    let slug: String = joined
        .nfd()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect();

    slug.trim_matches('-').to_string()
}
