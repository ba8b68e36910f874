//! Research pipeline with confidence-scored insight extraction.
//!
//! Gathers web documents about a topic, has a language model extract
//! structured claims from them, and attaches a numeric confidence score
//! explaining how trustworthy that extraction is.
//!
//! # Design Philosophy
//!
//! The pipeline is a mechanical orchestrator over four narrow capability
//! contracts — search, crawl, analyze, store. Providers are injected at
//! construction and never inspected; failure policy lives at the
//! contract boundary (crawl and analyze are total functions, search and
//! persistence are fatal).
//!
//! # Usage
//!
//! ```rust,ignore
//! use insight::analyzers::OllamaAnalyzer;
//! use insight::crawlers::HttpCrawler;
//! use insight::pipeline::ResearchPipeline;
//! use insight::searchers::TavilySearcher;
//! use insight::stores::JsonFileStore;
//!
//! let pipeline = ResearchPipeline::new(
//!     TavilySearcher::new(tavily_key)?,
//!     HttpCrawler::new(),
//!     OllamaAnalyzer::new("http://localhost:11434", ollama_key),
//!     JsonFileStore::new("storage/insights").await?,
//! )
//! .with_teardown();
//!
//! let outcome = pipeline.run("Dubai luxury property trends").await?;
//! pipeline.close().await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Capability contracts (Searcher, Crawler, Analyzer, InsightStore)
//! - [`types`] - Domain data types
//! - [`pipeline`] - The research pipeline orchestrator
//! - [`trust`] - Confidence engine and explanation generator
//! - [`searchers`] / [`crawlers`] / [`analyzers`] - Concrete providers
//! - [`stores`] - Store implementations (JSON file, memory)
//! - [`testing`] - Mock providers for tests

pub mod analyzers;
pub mod crawlers;
pub mod error;
pub mod pipeline;
pub mod searchers;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod trust;
pub mod types;

// Re-export core types at crate root
pub use error::{CrawlError, PipelineError, SearchError, StoreError};
pub use traits::{Analyzer, Crawler, InsightStore, Searcher, Teardown};
pub use types::{
    Analysis, Confidence, ConfidenceBadge, ConfidenceLabel, Document, EmptyReport, EvidenceItem,
    InsightReport, PipelineOutcome, NO_VALID_DOCUMENTS,
};

// Re-export the orchestrator and confidence engine entry points
pub use pipeline::{ResearchPipeline, SCORING_THRESHOLD};
pub use trust::{calculate_confidence, explain_confidence};

// Re-export providers and stores
pub use analyzers::OllamaAnalyzer;
pub use crawlers::HttpCrawler;
pub use searchers::TavilySearcher;
pub use stores::{JsonFileStore, MemoryStore};
