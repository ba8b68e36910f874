//! Default provider wiring.

use anyhow::{Context, Result};

use insight::analyzers::OllamaAnalyzer;
use insight::crawlers::HttpCrawler;
use insight::pipeline::ResearchPipeline;
use insight::searchers::TavilySearcher;
use insight::stores::JsonFileStore;

use crate::config::Config;

/// The production pipeline type.
pub type DefaultPipeline =
    ResearchPipeline<TavilySearcher, HttpCrawler, OllamaAnalyzer, JsonFileStore>;

/// Build the default pipeline: Tavily search, HTTP crawling, Ollama
/// analysis, JSON file persistence.
pub async fn build_pipeline(config: &Config) -> Result<DefaultPipeline> {
    let searcher = TavilySearcher::new(config.tavily_api_key.clone())
        .context("Failed to create Tavily searcher")?;
    let crawler = HttpCrawler::new();
    let analyzer = OllamaAnalyzer::new(
        config.ollama_base_url.clone(),
        config.ollama_api_key.clone(),
    );
    let store = JsonFileStore::new(&config.storage_path)
        .await
        .context("Failed to create insight store")?;

    Ok(ResearchPipeline::new(searcher, crawler, analyzer, store).with_teardown())
}
