//! Analyze provider implementations.

pub mod ollama;

pub use ollama::OllamaAnalyzer;
