//! Search capability for URL discovery.

use async_trait::async_trait;

use crate::error::SearchError;

/// Web search capability.
///
/// The single entry stage of a pipeline run. Failure here is fatal to the
/// run and propagates unchanged; retry policy, if any, belongs inside the
/// provider.
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Search the web and return result URLs in provider order.
    ///
    /// Duplicates are not deduplicated; the orchestrator crawls whatever
    /// comes back, in order.
    async fn search(&self, query: &str) -> Result<Vec<String>, SearchError>;
}
