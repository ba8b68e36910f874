//! Search provider implementations.

pub mod tavily;

pub use tavily::{normalize_query, TavilySearcher};
