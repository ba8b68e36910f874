//! Analyze capability for structured insight extraction.

use async_trait::async_trait;

use crate::types::{Analysis, Document};

/// LLM analysis capability.
///
/// Like crawling, analysis is a total function at the contract boundary:
/// transport failures and malformed model output are signaled through an
/// `error` field inside the returned [`Analysis`], never a raised fault.
/// The orchestrator still returns (and persists) the degraded result —
/// analysis failure hurts insight quality, not the run.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze the filtered document set and return structured insights.
    async fn analyze(&self, documents: &[Document]) -> Analysis;
}
