//! Ollama-backed analyze provider.
//!
//! Talks to an OpenAI-compatible chat completions endpoint. Honors the
//! total-function analyze contract: every failure becomes an `error`
//! field inside the returned analysis, never a raised fault.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::traits::Analyzer;
use crate::types::{Analysis, Document};

const SYSTEM_PROMPT: &str = "You are a real estate market analyst. Return ONLY valid JSON.";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Analyze provider backed by an Ollama chat completions endpoint.
pub struct OllamaAnalyzer {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OllamaAnalyzer {
    /// Create an analyzer for the given endpoint and key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: "llama3.1".to_string(),
            temperature: 0.2,
            client: reqwest::Client::new(),
        }
    }

    /// Select a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    async fn complete(&self, prompt: String) -> Result<String, String> {
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(std::time::Duration::from_secs(60))
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("AI request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("AI API error: {}", status));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| format!("Invalid AI response: {}", e))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| "AI response contained no choices".to_string())
    }
}

/// Build the analysis prompt, embedding only documents that have content.
fn build_prompt(documents: &[Document]) -> String {
    let sources: Vec<Value> = documents
        .iter()
        .filter(|doc| doc.content.as_deref().map_or(false, |c| !c.is_empty()))
        .map(|doc| {
            json!({
                "url": doc.url,
                "title": doc.title,
                "published_at": doc.published_at,
                "content": doc.content,
            })
        })
        .collect();

    format!(
        r#"Analyze the following real estate articles and return JSON in this format:

{{
    "summary": "...",
    "key_trends": ["...", "..."],
    "market_sentiment": "positive|neutral|negative",
    "evidence": [
        {{
            "claim": "...",
            "source_url": "..."
        }}
    ]
}}

Articles:
{}"#,
        serde_json::to_string_pretty(&sources).unwrap_or_else(|_| "[]".to_string())
    )
}

/// Parse the model's reply into an analysis, degrading on invalid JSON.
fn parse_response(content: &str) -> Analysis {
    match serde_json::from_str::<Analysis>(content) {
        Ok(analysis) => analysis,
        Err(_) => Analysis::from_error_with_raw("Invalid JSON from AI", content),
    }
}

#[async_trait]
impl Analyzer for OllamaAnalyzer {
    async fn analyze(&self, documents: &[Document]) -> Analysis {
        let prompt = build_prompt(documents);

        match self.complete(prompt).await {
            Ok(content) => parse_response(&content),
            Err(message) => {
                warn!(error = %message, "Analysis request failed");
                Analysis::from_error(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_json() {
        let analysis = parse_response(
            r#"{"summary":"ok","key_trends":[],"market_sentiment":"neutral","evidence":[]}"#,
        );
        assert!(!analysis.is_error());
        assert_eq!(
            analysis.get("summary"),
            Some(&Value::String("ok".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_json_degrades() {
        let analysis = parse_response("The market looks great!");
        assert!(analysis.is_error());
        assert_eq!(
            analysis.get("raw_output"),
            Some(&Value::String("The market looks great!".to_string()))
        );
    }

    #[test]
    fn test_prompt_skips_documents_without_content() {
        let documents = vec![
            Document::new("https://a.com/1", "body text").with_title("A"),
            Document::failed("https://b.com/2", "timeout"),
        ];

        let prompt = build_prompt(&documents);
        assert!(prompt.contains("https://a.com/1"));
        assert!(!prompt.contains("https://b.com/2"));
        assert!(prompt.contains("market_sentiment"));
    }

    #[test]
    fn test_chat_response_deserialization() {
        let body = r#"{"choices":[{"message":{"content":"{\"summary\":\"ok\"}"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, r#"{"summary":"ok"}"#);
    }
}
