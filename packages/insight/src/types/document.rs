//! Crawled document type.

use serde::{Deserialize, Serialize};

/// A document produced by a crawl provider.
///
/// The crawl contract is a total function: providers never raise outward.
/// Any internal failure becomes a document with `error` set and all
/// content fields `None`, so one bad URL can never abort a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// URL this document was fetched from
    pub url: String,

    /// Page title, if the crawler could extract one
    #[serde(default)]
    pub title: Option<String>,

    /// Extracted text content
    #[serde(default)]
    pub content: Option<String>,

    /// Publication date as reported by the page (`YYYY-MM-DD` when usable)
    #[serde(default)]
    pub published_at: Option<String>,

    /// Author, if the crawler could extract one
    #[serde(default)]
    pub author: Option<String>,

    /// Set when the crawl failed; such documents are filtered out
    /// before analysis
    #[serde(default)]
    pub error: Option<String>,
}

impl Document {
    /// Create a document with content and no error.
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            content: Some(content.into()),
            published_at: None,
            author: None,
            error: None,
        }
    }

    /// Create the failure shape: `error` set, all content fields `None`.
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            content: None,
            published_at: None,
            author: None,
            error: Some(error.into()),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the publication date.
    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// A document is valid iff it has no error and non-empty content.
    /// Only valid documents reach analysis and scoring.
    pub fn is_valid(&self) -> bool {
        self.error.as_deref().map_or(true, str::is_empty)
            && self.content.as_deref().map_or(false, |c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_with_content_is_valid() {
        let doc = Document::new("https://example.com", "body text");
        assert!(doc.is_valid());
    }

    #[test]
    fn test_failed_document_is_invalid() {
        let doc = Document::failed("https://example.com", "timeout");
        assert!(!doc.is_valid());
        assert!(doc.content.is_none());
        assert!(doc.title.is_none());
    }

    #[test]
    fn test_empty_content_is_invalid() {
        let mut doc = Document::new("https://example.com", "");
        assert!(!doc.is_valid());

        doc.content = None;
        assert!(!doc.is_valid());
    }

    #[test]
    fn test_empty_error_string_does_not_invalidate() {
        let mut doc = Document::new("https://example.com", "text");
        doc.error = Some(String::new());
        assert!(doc.is_valid());
    }

    #[test]
    fn test_serde_round_trip() {
        let doc = Document::new("https://example.com", "text")
            .with_title("Title")
            .with_published_at("2024-01-01")
            .with_author("Author");

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
