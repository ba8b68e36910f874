//! Testing utilities including mock providers.
//!
//! Deterministic, configurable implementations of every provider contract,
//! for exercising pipeline logic without network or model calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::{CrawlError, SearchError, StoreError};
use crate::traits::{Analyzer, Crawler, InsightStore, Searcher, Teardown};
use crate::types::{Analysis, Document, InsightReport};

type SearchErrorFactory = Box<dyn Fn() -> SearchError + Send + Sync>;
type StoreErrorFactory = Box<dyn Fn() -> StoreError + Send + Sync>;

/// Mock searcher returning a fixed URL list or a fabricated error.
#[derive(Default)]
pub struct MockSearcher {
    urls: Vec<String>,
    error: Option<SearchErrorFactory>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return these URLs, in order, for every query.
    pub fn with_urls(mut self, urls: &[&str]) -> Self {
        self.urls = urls.iter().map(|u| u.to_string()).collect();
        self
    }

    /// Fail every search with the produced error.
    pub fn with_error(mut self, factory: impl Fn() -> SearchError + Send + Sync + 'static) -> Self {
        self.error = Some(Box::new(factory));
        self
    }
}

#[async_trait]
impl Searcher for MockSearcher {
    async fn search(&self, _query: &str) -> Result<Vec<String>, SearchError> {
        if let Some(factory) = &self.error {
            return Err(factory());
        }
        Ok(self.urls.clone())
    }
}

/// Mock crawler with canned documents per URL.
///
/// Unconfigured URLs yield the failure shape, honoring the total-function
/// contract. Teardown calls are counted for assertions.
#[derive(Default)]
pub struct MockCrawler {
    pages: RwLock<HashMap<String, Document>>,
    close_count: Arc<AtomicUsize>,
}

impl MockCrawler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a valid document with this content for the URL.
    pub fn with_page(self, url: &str, content: &str) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(url.to_string(), Document::new(url, content));
        self
    }

    /// Serve a fully specified document for its URL.
    pub fn with_document(self, document: Document) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(document.url.clone(), document);
        self
    }

    /// Serve the failure shape for the URL.
    pub fn with_failure(self, url: &str, error: &str) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(url.to_string(), Document::failed(url, error));
        self
    }

    /// Shared counter of `close` invocations.
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        self.close_count.clone()
    }
}

#[async_trait]
impl Crawler for MockCrawler {
    async fn crawl(&self, url: &str) -> Document {
        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Document::failed(url, "no mock page configured"))
    }
}

#[async_trait]
impl Teardown for MockCrawler {
    async fn close(&self) -> Result<(), CrawlError> {
        self.close_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Mock analyzer returning a canned analysis and counting calls.
#[derive(Default)]
pub struct MockAnalyzer {
    analysis: RwLock<Analysis>,
    calls: AtomicUsize,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this analysis for every call.
    pub fn with_analysis(self, analysis: Analysis) -> Self {
        *self.analysis.write().unwrap() = analysis;
        self
    }

    /// Number of analyze calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(&self, _documents: &[Document]) -> Analysis {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.analysis.read().unwrap().clone()
    }
}

/// Store whose saves always fail, for exercising the fatal persistence
/// path.
pub struct FailingStore {
    error: StoreErrorFactory,
}

impl FailingStore {
    pub fn new() -> Self {
        Self {
            error: Box::new(|| {
                StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "save failed"))
            }),
        }
    }

    /// Fail with the produced error instead of the default.
    pub fn with_error(factory: impl Fn() -> StoreError + Send + Sync + 'static) -> Self {
        Self {
            error: Box::new(factory),
        }
    }
}

impl Default for FailingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightStore for FailingStore {
    async fn save(&self, _report: &InsightReport) -> Result<(), StoreError> {
        Err((self.error)())
    }

    async fn load_latest(&self) -> Result<Option<InsightReport>, StoreError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_crawler_total_function() {
        let crawler = MockCrawler::new();
        let doc = crawler.crawl("https://nowhere.invalid").await;
        assert!(doc.error.is_some());
        assert!(doc.content.is_none());
    }

    #[tokio::test]
    async fn test_mock_searcher_order_preserved() {
        let searcher = MockSearcher::new().with_urls(&["b", "a", "c"]);
        let urls = searcher.search("q").await.unwrap();
        assert_eq!(urls, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_mock_analyzer_counts_calls() {
        let analyzer = MockAnalyzer::new();
        analyzer.analyze(&[]).await;
        analyzer.analyze(&[]).await;
        assert_eq!(analyzer.calls(), 2);
    }
}
