//! Confidence result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        };
        f.write_str(s)
    }
}

/// Traffic-light badge rendered next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceBadge {
    #[serde(rename = "🔴")]
    Red,
    #[serde(rename = "🟡")]
    Yellow,
    #[serde(rename = "🟢")]
    Green,
}

impl fmt::Display for ConfidenceBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Red => "🔴",
            Self::Yellow => "🟡",
            Self::Green => "🟢",
        };
        f.write_str(s)
    }
}

/// The confidence engine's output for one pipeline run.
///
/// Immutable once computed; derived entirely from the run's valid
/// documents and analysis result, with no cross-run state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    /// Composite score in [0, 100], rounded to one decimal
    pub score: f64,

    /// Tier derived from the score
    pub label: ConfidenceLabel,

    /// Traffic-light badge derived from the score
    pub badge: ConfidenceBadge,

    /// Mean domain authority of the source URLs, in [0, 1]
    pub source_strength: f64,

    /// Share of evidence items backed by a source URL, in [0, 1]
    pub evidence_coverage: f64,

    /// Mean recency of documents with usable dates, in [0, 1]
    pub freshness: f64,

    /// Source-count saturation score, in [0, 1]
    pub consensus: f64,

    /// Number of valid documents with a non-empty URL
    pub sources_count: usize,
}
