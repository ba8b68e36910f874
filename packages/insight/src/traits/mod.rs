//! Core trait abstractions (Searcher, Crawler, Analyzer, InsightStore).

pub mod analyzer;
pub mod crawler;
pub mod searcher;
pub mod store;

pub use analyzer::Analyzer;
pub use crawler::{Crawler, Teardown};
pub use searcher::Searcher;
pub use store::InsightStore;
