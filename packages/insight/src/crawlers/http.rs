//! HTTP crawl provider.
//!
//! Fetches pages with reqwest and extracts text plus metadata with
//! regex-based stripping. Suitable for static sites; JavaScript-heavy
//! pages need a rendering backend behind the same trait.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::CrawlError;
use crate::traits::{Crawler, Teardown};
use crate::types::Document;

/// HTTP crawler honoring the total-function crawl contract.
///
/// The underlying client is acquired lazily on the first crawl and
/// released by [`Teardown::close`]. Every failure path returns
/// [`Document::failed`]; nothing escapes to the orchestrator.
pub struct HttpCrawler {
    client: Mutex<Option<reqwest::Client>>,
    user_agent: String,
    timeout_secs: u64,
}

impl Default for HttpCrawler {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpCrawler {
    /// Create a crawler with default settings.
    pub fn new() -> Self {
        Self {
            client: Mutex::new(None),
            user_agent: "PulsarEstateBot/1.0".to_string(),
            timeout_secs: 20,
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    async fn client(&self) -> Result<reqwest::Client, CrawlError> {
        let mut guard = self.client.lock().await;
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| CrawlError::Http(Box::new(e)))?;
        *guard = Some(client.clone());
        debug!("HTTP client acquired");
        Ok(client)
    }

    async fn fetch(&self, url: &str) -> Result<Document, CrawlError> {
        let client = self.client().await?;

        let response = client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| CrawlError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| CrawlError::Http(Box::new(e)))?;

        let content = html_to_text(&html);
        if content.is_empty() {
            return Err(CrawlError::EmptyContent);
        }

        let mut document = Document::new(url, content);
        if let Some(title) = extract_title(&html) {
            document = document.with_title(title);
        }
        if let Some(published) = extract_published_date(&html) {
            document = document.with_published_at(published);
        }
        if let Some(author) = extract_author(&html) {
            document = document.with_author(author);
        }

        Ok(document)
    }
}

#[async_trait]
impl Crawler for HttpCrawler {
    async fn crawl(&self, url: &str) -> Document {
        debug!(url = %url, "Crawl starting");
        match self.fetch(url).await {
            Ok(document) => document,
            Err(e) => {
                warn!(url = %url, error = %e, "Crawl failed");
                Document::failed(url, e.to_string())
            }
        }
    }
}

#[async_trait]
impl Teardown for HttpCrawler {
    async fn close(&self) -> Result<(), CrawlError> {
        let mut guard = self.client.lock().await;
        if guard.take().is_some() {
            debug!("HTTP client released");
        }
        Ok(())
    }
}

/// Extract the `<title>` text.
fn extract_title(html: &str) -> Option<String> {
    let pattern = regex::Regex::new(r"(?s)<title[^>]*>(.*?)</title>").unwrap();
    pattern
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Extract a `YYYY-MM-DD` publication date from article metadata.
fn extract_published_date(html: &str) -> Option<String> {
    let pattern = regex::Regex::new(
        r#"<meta[^>]*property\s*=\s*["']article:published_time["'][^>]*content\s*=\s*["']([^"']+)["']"#,
    )
    .unwrap();
    let raw = pattern
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())?;

    // Keep only the date portion of ISO timestamps; scoring parses
    // YYYY-MM-DD and discards anything else.
    let date = raw.get(..10)?;
    if regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap().is_match(date) {
        Some(date.to_string())
    } else {
        None
    }
}

/// Extract the author meta tag.
fn extract_author(html: &str) -> Option<String> {
    let pattern = regex::Regex::new(
        r#"<meta[^>]*name\s*=\s*["']author["'][^>]*content\s*=\s*["']([^"']+)["']"#,
    )
    .unwrap();
    pattern
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|author| !author.is_empty())
}

/// Strip HTML down to readable text.
fn html_to_text(html: &str) -> String {
    let mut text = html.to_string();

    let script_pattern = regex::Regex::new(r"(?s)<script[^>]*>.*?</script>").unwrap();
    let style_pattern = regex::Regex::new(r"(?s)<style[^>]*>.*?</style>").unwrap();
    text = script_pattern.replace_all(&text, "").to_string();
    text = style_pattern.replace_all(&text, "").to_string();

    let block_pattern = regex::Regex::new(r"</(p|div|h1|h2|h3|h4|li|tr)>").unwrap();
    text = block_pattern.replace_all(&text, "\n").to_string();
    let br_pattern = regex::Regex::new(r"<br\s*/?>").unwrap();
    text = br_pattern.replace_all(&text, "\n").to_string();

    let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
    text = tag_pattern.replace_all(&text, "").to_string();

    let multi_newline = regex::Regex::new(r"\n{3,}").unwrap();
    text = multi_newline.replace_all(&text, "\n\n").to_string();

    text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    text.trim().to_string()
}
