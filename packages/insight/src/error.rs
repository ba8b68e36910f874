//! Typed errors for the insight library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during web search.
///
/// Search failure is fatal to a pipeline run: without URLs there is
/// nothing to crawl.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request to the search backend failed
    #[error("search request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Search backend returned a non-success status
    #[error("search API error: {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body could not be decoded
    #[error("invalid search response: {0}")]
    InvalidResponse(String),
}

/// Errors that can occur inside crawl providers.
///
/// These never escape `Crawler::crawl` — the crawl contract converts them
/// into a `Document` with the `error` field set. They surface only from
/// `Teardown::close`.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Remote returned a non-success status
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Page yielded no usable content
    #[error("Empty content")]
    EmptyContent,

    /// Teardown of the underlying client failed
    #[error("teardown failed: {0}")]
    Teardown(String),
}

/// Errors that can occur in insight stores.
///
/// Persistence failure is fatal to a pipeline run: the store contract has
/// no partial-success signal.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored report could not be encoded or decoded
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Fatal errors of a pipeline run.
///
/// Per-URL crawl failures and analysis failures are not represented here:
/// the former are isolated into invalid documents, the latter into an
/// `error` field of the returned analysis.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The search stage failed; no URLs, no run
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// Persisting the final report failed
    #[error("failed to persist insight report: {0}")]
    Store(#[from] StoreError),

    /// Crawler teardown failed during close
    #[error("pipeline close failed: {0}")]
    Close(#[from] CrawlError),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
