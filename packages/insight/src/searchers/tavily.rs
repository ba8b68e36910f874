//! Tavily-backed search provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::traits::Searcher;

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

/// Keywords appended to every query to steer search toward the market
/// intelligence domain.
const BASE_KEYWORDS: &[&str] = &[
    "Dubai real estate",
    "property market",
    "prices",
    "investment",
    "trends",
];

/// Enrich a raw query with the fixed domain keyword set.
pub fn normalize_query(query: &str) -> String {
    format!("{} {}", query, BASE_KEYWORDS.join(" "))
}

#[derive(Debug, Serialize)]
struct TavilyRequest {
    api_key: String,
    query: String,
    search_depth: &'static str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    url: String,
}

/// Search provider backed by the Tavily API.
///
/// Returns result URLs in API order; failures propagate as
/// [`SearchError`] and are fatal to the run.
pub struct TavilySearcher {
    api_key: String,
    client: reqwest::Client,
    max_results: usize,
}

impl TavilySearcher {
    /// Create a searcher with the default result limit.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        Ok(Self {
            api_key: api_key.into(),
            client,
            max_results: 10,
        })
    }

    /// Set the maximum number of result URLs per search.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[async_trait]
impl Searcher for TavilySearcher {
    async fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let request = TavilyRequest {
            api_key: self.api_key.clone(),
            query: normalize_query(query),
            search_depth: "basic",
            max_results: self.max_results,
        };

        let response = self
            .client
            .post(TAVILY_ENDPOINT)
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api { status, body });
        }

        let parsed: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let urls = parsed
            .results
            .into_iter()
            .map(|r| r.url)
            .filter(|url| !url.is_empty())
            .collect();

        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query_appends_keywords() {
        let normalized = normalize_query("market size analysis");
        assert!(normalized.starts_with("market size analysis "));
        assert!(normalized.contains("Dubai real estate"));
        assert!(normalized.contains("property market"));
        assert!(normalized.ends_with("trends"));
    }

    #[test]
    fn test_response_parsing_keeps_api_order() {
        let body = r#"{
            "results": [
                {"url": "https://a.com/1", "title": "A", "score": 0.9},
                {"url": "https://b.com/2", "title": "B", "score": 0.8},
                {"url": "", "title": "empty"}
            ]
        }"#;

        let parsed: TavilyResponse = serde_json::from_str(body).unwrap();
        let urls: Vec<String> = parsed
            .results
            .into_iter()
            .map(|r| r.url)
            .filter(|u| !u.is_empty())
            .collect();

        assert_eq!(urls, vec!["https://a.com/1", "https://b.com/2"]);
    }
}
