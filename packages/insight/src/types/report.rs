//! Pipeline result types.

use serde::{Deserialize, Serialize};

use super::analysis::Analysis;

/// Message carried by the degenerate no-documents result.
pub const NO_VALID_DOCUMENTS: &str = "No valid documents collected";

/// The persisted unit of one successful pipeline run.
///
/// Each run produces exactly one report and overwrites the store's
/// "latest" slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// The query the run was executed for
    pub query: String,

    /// Count of valid documents, never the raw URL count
    pub documents_collected: usize,

    /// Analysis result, with confidence fields merged in when scored
    pub insights: Analysis,

    /// URLs of the valid documents, order-preserving
    pub sources: Vec<String>,
}

/// The distinguished result when zero valid documents survive crawling.
///
/// Returned to the caller but never persisted: there is nothing
/// actionable to store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyReport {
    /// Always [`NO_VALID_DOCUMENTS`]
    pub error: String,

    /// Always zero
    pub documents_collected: usize,
}

impl EmptyReport {
    /// Create the canonical empty result.
    pub fn new() -> Self {
        Self {
            error: NO_VALID_DOCUMENTS.to_string(),
            documents_collected: 0,
        }
    }
}

impl Default for EmptyReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one pipeline run.
///
/// The degenerate no-documents result and the normal result are one
/// exhaustive variant so downstream consumers cannot forget either case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineOutcome {
    /// Full result: analyzed, possibly scored, persisted
    Completed(InsightReport),

    /// Zero valid documents: analysis, scoring, and persistence skipped
    Empty(EmptyReport),
}

impl PipelineOutcome {
    /// The report, when the run completed.
    pub fn report(&self) -> Option<&InsightReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Empty(_) => None,
        }
    }

    /// Whether the run ended in the empty-input terminal state.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_report_shape() {
        let value = serde_json::to_value(PipelineOutcome::Empty(EmptyReport::new())).unwrap();
        assert_eq!(
            value,
            json!({"error": "No valid documents collected", "documents_collected": 0})
        );
    }

    #[test]
    fn test_outcome_round_trip() {
        let report = InsightReport {
            query: "q".to_string(),
            documents_collected: 2,
            insights: Analysis::new(),
            sources: vec!["u1".to_string(), "u2".to_string()],
        };
        let outcome = PipelineOutcome::Completed(report);

        let json = serde_json::to_string(&outcome).unwrap();
        let back: PipelineOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
        assert!(!back.is_empty());
    }
}
