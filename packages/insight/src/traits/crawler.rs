//! Crawl capability and its optional teardown.

use async_trait::async_trait;

use crate::error::CrawlError;
use crate::types::Document;

/// Page crawl capability.
///
/// `crawl` is a total function: it never returns an error to its caller.
/// Any internal failure (network, status, empty page) becomes a
/// [`Document::failed`] with the `error` field set. This contract is what
/// lets the orchestrator fan out over many URLs without one bad URL
/// aborting the run.
#[async_trait]
pub trait Crawler: Send + Sync {
    /// Fetch one URL and return its document, valid or failed.
    async fn crawl(&self, url: &str) -> Document;
}

/// Optional teardown capability for providers that hold resources.
///
/// Providers that keep an underlying client alive implement this in
/// addition to [`Crawler`]; the pipeline wires it in at construction via
/// [`ResearchPipeline::with_teardown`](crate::pipeline::ResearchPipeline::with_teardown).
/// Providers without resources simply don't implement it.
#[async_trait]
pub trait Teardown: Send + Sync {
    /// Release held resources. Called at most once per pipeline lifecycle.
    async fn close(&self) -> Result<(), CrawlError>;
}
