//! Research pipeline orchestrator.
//!
//! Drives one run end to end: search once, crawl each URL, drop invalid
//! documents, analyze the survivors, score when enough sources corroborate,
//! persist, return. Providers are injected at construction; the
//! orchestrator never inspects their internals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::traits::{Analyzer, Crawler, InsightStore, Searcher, Teardown};
use crate::trust::{calculate_confidence, explain_confidence};
use crate::types::{Document, EmptyReport, InsightReport, PipelineOutcome};

/// Scoring runs only when more than this many valid documents survive.
/// Below that, a confidence number would suggest corroboration that
/// isn't there.
pub const SCORING_THRESHOLD: usize = 2;

/// One research pipeline instance.
///
/// A run is atomic from the caller's perspective: no retries, no
/// mid-pipeline cancellation. Crawls happen sequentially in URL order so
/// the document sequence always matches the search result order.
///
/// # Example
///
/// ```rust,ignore
/// use insight::pipeline::ResearchPipeline;
///
/// let pipeline = ResearchPipeline::new(searcher, crawler, analyzer, store)
///     .with_teardown();
/// let outcome = pipeline.run("Dubai luxury property trends").await?;
/// pipeline.close().await?;
/// ```
pub struct ResearchPipeline<S, C, A, R> {
    searcher: S,
    crawler: Arc<C>,
    analyzer: A,
    store: R,
    teardown: Option<Arc<dyn Teardown>>,
    closed: AtomicBool,
}

impl<S, C, A, R> ResearchPipeline<S, C, A, R>
where
    S: Searcher,
    C: Crawler,
    A: Analyzer,
    R: InsightStore,
{
    /// Build a pipeline from its four providers.
    pub fn new(searcher: S, crawler: C, analyzer: A, store: R) -> Self {
        Self {
            searcher,
            crawler: Arc::new(crawler),
            analyzer,
            store,
            teardown: None,
            closed: AtomicBool::new(false),
        }
    }

    /// Register the crawler's teardown capability.
    ///
    /// Only callable when the crawler actually implements [`Teardown`],
    /// so the capability is checked at construction time rather than
    /// probed at runtime.
    pub fn with_teardown(mut self) -> Self
    where
        C: Teardown + 'static,
    {
        self.teardown = Some(self.crawler.clone());
        self
    }

    /// Execute one run for the given query.
    ///
    /// Fatal failures (search, persistence) propagate as errors. Per-URL
    /// crawl failures and analysis failures degrade the result instead of
    /// aborting it. Zero valid documents short-circuits to
    /// [`PipelineOutcome::Empty`] without analyzing or persisting.
    pub async fn run(&self, query: &str) -> Result<PipelineOutcome> {
        info!(query = %query, "Pipeline run starting");

        let urls = self.searcher.search(query).await?;
        info!(query = %query, urls = urls.len(), "Search completed");

        let mut documents: Vec<Document> = Vec::with_capacity(urls.len());
        for url in &urls {
            let document = self.crawler.crawl(url).await;
            if let Some(error) = &document.error {
                if !error.is_empty() {
                    warn!(url = %url, error = %error, "Crawl failed for URL");
                }
            }
            documents.push(document);
        }

        let valid: Vec<Document> = documents.into_iter().filter(Document::is_valid).collect();
        debug!(
            urls = urls.len(),
            valid = valid.len(),
            "Filtered crawled documents"
        );

        if valid.is_empty() {
            warn!(query = %query, "No valid documents collected; skipping analysis");
            return Ok(PipelineOutcome::Empty(EmptyReport::new()));
        }

        let mut insights = self.analyzer.analyze(&valid).await;
        if insights.is_error() {
            warn!(query = %query, "Analyzer signaled failure; returning unscored result");
        }

        if valid.len() > SCORING_THRESHOLD {
            let confidence = calculate_confidence(&valid, &insights);
            let explanation = explain_confidence(&confidence);
            info!(
                score = confidence.score,
                label = %confidence.label,
                sources = confidence.sources_count,
                "Confidence computed"
            );
            insights.attach_confidence(&confidence, explanation);
        } else {
            debug!(
                valid = valid.len(),
                "Too few documents for scoring; confidence skipped"
            );
        }

        let sources: Vec<String> = valid.iter().map(|doc| doc.url.clone()).collect();
        let report = InsightReport {
            query: query.to_string(),
            documents_collected: valid.len(),
            insights,
            sources,
        };

        self.store.save(&report).await?;
        info!(
            query = %query,
            documents_collected = report.documents_collected,
            "Pipeline run complete"
        );

        Ok(PipelineOutcome::Completed(report))
    }

    /// Release provider resources.
    ///
    /// Invokes the registered teardown capability at most once; repeated
    /// calls and pipelines without a teardown are no-ops.
    pub async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        if let Some(teardown) = &self.teardown {
            teardown.close().await?;
            debug!("Crawler teardown complete");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PipelineError, SearchError};
    use crate::stores::MemoryStore;
    use crate::testing::{FailingStore, MockAnalyzer, MockCrawler, MockSearcher};
    use crate::types::Analysis;
    use serde_json::json;

    fn analyzer_with(value: serde_json::Value) -> MockAnalyzer {
        MockAnalyzer::new().with_analysis(serde_json::from_value::<Analysis>(value).unwrap())
    }

    #[tokio::test]
    async fn test_two_valid_documents_skip_scoring() {
        let searcher = MockSearcher::new().with_urls(&["u1", "u2", "u3"]);
        let crawler = MockCrawler::new()
            .with_page("u1", "content one")
            .with_page("u2", "content two")
            .with_failure("u3", "connection refused");
        let analyzer = analyzer_with(json!({"summary": "ok", "evidence": []}));
        let store = MemoryStore::new();

        let pipeline = ResearchPipeline::new(searcher, crawler, analyzer, store);
        let outcome = pipeline.run("q").await.unwrap();

        let report = outcome.report().unwrap();
        assert_eq!(report.documents_collected, 2);
        assert_eq!(report.sources, vec!["u1".to_string(), "u2".to_string()]);
        assert!(!report.insights.has_confidence());
    }

    #[tokio::test]
    async fn test_three_valid_documents_attach_confidence() {
        let searcher = MockSearcher::new().with_urls(&["u1", "u2", "u3"]);
        let crawler = MockCrawler::new()
            .with_page("u1", "a")
            .with_page("u2", "b")
            .with_page("u3", "c");
        let analyzer = analyzer_with(json!({"summary": "ok", "evidence": []}));
        let store = MemoryStore::new();

        let pipeline = ResearchPipeline::new(searcher, crawler, analyzer, store);
        let outcome = pipeline.run("q").await.unwrap();

        let report = outcome.report().unwrap();
        assert_eq!(report.documents_collected, 3);
        assert!(report.insights.has_confidence());
        assert!(report.insights.get("confidence_explanation").is_some());
    }

    #[tokio::test]
    async fn test_zero_valid_documents_short_circuits() {
        let searcher = MockSearcher::new().with_urls(&["u1"]);
        let crawler = MockCrawler::new().with_failure("u1", "boom");
        let analyzer = MockAnalyzer::new();
        let store = MemoryStore::new();

        let pipeline = ResearchPipeline::new(searcher, crawler, analyzer, store);
        let outcome = pipeline.run("q").await.unwrap();

        assert!(outcome.is_empty());
        // Nothing persisted, analyzer never called.
        assert!(pipeline.store.load_latest().await.unwrap().is_none());
        assert_eq!(pipeline.analyzer.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_failure_is_fatal() {
        let searcher =
            MockSearcher::new().with_error(|| SearchError::InvalidResponse("bad".to_string()));
        let crawler = MockCrawler::new();
        let analyzer = MockAnalyzer::new();
        let store = MemoryStore::new();

        let pipeline = ResearchPipeline::new(searcher, crawler, analyzer, store);
        let err = pipeline.run("q").await.unwrap_err();
        assert!(matches!(err, PipelineError::Search(_)));
    }

    #[tokio::test]
    async fn test_store_failure_is_fatal() {
        let searcher = MockSearcher::new().with_urls(&["u1"]);
        let crawler = MockCrawler::new().with_page("u1", "content");
        let analyzer = analyzer_with(json!({"summary": "ok"}));
        let store = FailingStore::new();

        let pipeline = ResearchPipeline::new(searcher, crawler, analyzer, store);
        let err = pipeline.run("q").await.unwrap_err();
        assert!(matches!(err, PipelineError::Store(_)));
    }

    #[tokio::test]
    async fn test_analyzer_error_still_persists_report() {
        let searcher = MockSearcher::new().with_urls(&["u1"]);
        let crawler = MockCrawler::new().with_page("u1", "content");
        let analyzer =
            MockAnalyzer::new().with_analysis(Analysis::from_error("Invalid JSON from AI"));
        let store = MemoryStore::new();

        let pipeline = ResearchPipeline::new(searcher, crawler, analyzer, store);
        let outcome = pipeline.run("q").await.unwrap();

        let report = outcome.report().unwrap();
        assert!(report.insights.is_error());
        assert!(!report.insights.has_confidence());

        let persisted = pipeline.store.load_latest().await.unwrap().unwrap();
        assert_eq!(&persisted, report);
    }

    #[tokio::test]
    async fn test_document_order_matches_url_order() {
        let searcher = MockSearcher::new().with_urls(&["u3", "u1", "u2"]);
        let crawler = MockCrawler::new()
            .with_page("u1", "a")
            .with_page("u2", "b")
            .with_page("u3", "c");
        let analyzer = analyzer_with(json!({"summary": "ok"}));
        let store = MemoryStore::new();

        let pipeline = ResearchPipeline::new(searcher, crawler, analyzer, store);
        let outcome = pipeline.run("q").await.unwrap();

        assert_eq!(
            outcome.report().unwrap().sources,
            vec!["u3".to_string(), "u1".to_string(), "u2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_close_invokes_teardown_once() {
        let searcher = MockSearcher::new().with_urls(&[]);
        let crawler = MockCrawler::new();
        let close_count = crawler.close_counter();
        let analyzer = MockAnalyzer::new();
        let store = MemoryStore::new();

        let pipeline =
            ResearchPipeline::new(searcher, crawler, analyzer, store).with_teardown();

        pipeline.close().await.unwrap();
        pipeline.close().await.unwrap();
        assert_eq!(close_count.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_close_without_teardown_is_noop() {
        let pipeline = ResearchPipeline::new(
            MockSearcher::new(),
            MockCrawler::new(),
            MockAnalyzer::new(),
            MemoryStore::new(),
        );
        pipeline.close().await.unwrap();
    }
}
