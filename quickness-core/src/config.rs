//! Combined configuration for scoring and layout
//!
//! With the `serde` feature the configuration can be read from JSON. Every
//! field is optional; anything missing keeps its default.
//!
//! ```json
//! {
//!   "scoring": { "maxDepth": 3, "tinyPenalty": 40 },
//!   "layout": { "page": { "pageWidthMm": 215.9, "pageHeightMm": 279.4, "marginMm": 15 } }
//! }
//! ```

use crate::capture::ScoringWeights;
use crate::error::{QuicknessError, Result};
use crate::layout::LayoutOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct QuicknessConfig {
    pub scoring: ScoringWeights,
    pub layout: LayoutOptions,
}

impl QuicknessConfig {
    /// Parse and validate a JSON configuration.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Pretty-printed JSON of the full configuration, defaults included.
    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        validate_weights(&self.scoring)?;
        self.layout.validate()
    }
}

fn validate_weights(weights: &ScoringWeights) -> Result<()> {
    let thresholds = [
        ("sizedMinWidth", weights.sized_min_width),
        ("sizedMinHeight", weights.sized_min_height),
        ("largeMinWidth", weights.large_min_width),
        ("largeMinHeight", weights.large_min_height),
        ("largeFontThresholdPx", weights.large_font_threshold_px),
        ("tinyMaxWidth", weights.tiny_max_width),
        ("tinyMaxHeight", weights.tiny_max_height),
    ];

    match thresholds
        .iter()
        .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
    {
        Some((name, value)) => Err(QuicknessError::InvalidConfig(format!(
            "{name} must be a non-negative number, got {value}"
        ))),
        None => Ok(()),
    }
}
