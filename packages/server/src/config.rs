//! Process configuration.
//!
//! An explicit struct passed to provider constructors — no process-wide
//! singleton. Values come from `DPP_`-prefixed environment variables
//! with development defaults.

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub environment: String,
    pub port: u16,
    pub ollama_base_url: String,
    pub ollama_api_key: String,
    pub tavily_api_key: String,
    pub storage_path: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary lookup, for tests.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = get("DPP_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("DPP_PORT must be a valid port number")?;

        Ok(Self {
            app_name: get("DPP_APP_NAME").unwrap_or_else(|| "PulsarEstate".to_string()),
            environment: get("DPP_ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
            port,
            ollama_base_url: get("DPP_OLLAMA_BASE_URL")
                .unwrap_or_else(|| "http://localhost:11434".to_string()),
            ollama_api_key: get("DPP_OLLAMA_API_KEY").unwrap_or_default(),
            tavily_api_key: get("DPP_TAVILY_API_KEY")
                .context("DPP_TAVILY_API_KEY must be set")?,
            storage_path: get("DPP_STORAGE_PATH")
                .unwrap_or_else(|| "storage/insights".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DPP_TAVILY_API_KEY", "tvly-test")])).unwrap();

        assert_eq!(config.app_name, "PulsarEstate");
        assert_eq!(config.environment, "dev");
        assert_eq!(config.port, 8000);
        assert_eq!(config.ollama_base_url, "http://localhost:11434");
        assert_eq!(config.storage_path, "storage/insights");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DPP_TAVILY_API_KEY", "tvly-test"),
            ("DPP_PORT", "9090"),
            ("DPP_OLLAMA_BASE_URL", "http://ollama:11434"),
            ("DPP_STORAGE_PATH", "/var/lib/insights"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.ollama_base_url, "http://ollama:11434");
        assert_eq!(config.storage_path, "/var/lib/insights");
    }

    #[test]
    fn test_missing_tavily_key_fails() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        let result = Config::from_lookup(lookup(&[
            ("DPP_TAVILY_API_KEY", "tvly-test"),
            ("DPP_PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }
}
