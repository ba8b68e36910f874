//! Analysis result produced by an analyze provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::confidence::Confidence;

/// One structured claim extracted by the model, with the URL backing it.
///
/// Parsed leniently: a malformed array entry degrades to defaults rather
/// than failing the whole evidence list, because the total item count is
/// what evidence coverage divides by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// The extracted claim text
    #[serde(default)]
    pub claim: String,

    /// URL of the document the claim came from
    #[serde(default)]
    pub source_url: Option<String>,
}

impl EvidenceItem {
    /// Create an evidence item backed by a source URL.
    pub fn new(claim: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            source_url: Some(source_url.into()),
        }
    }

    /// Create an evidence item with no backing URL.
    pub fn unsourced(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            source_url: None,
        }
    }

    /// An item is backed iff its `source_url` is present and non-empty.
    pub fn is_backed(&self) -> bool {
        self.source_url.as_deref().map_or(false, |u| !u.is_empty())
    }
}

/// Opaque structured output of an analyze provider.
///
/// The model decides the shape; the pipeline only recognizes two optional
/// fields: `evidence` (array of [`EvidenceItem`]) and `error` (presence
/// signals an analysis failure that is still returned to the caller,
/// unscored). Confidence fields are merged in after scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Analysis {
    fields: Map<String, Value>,
}

impl Analysis {
    /// Create an empty analysis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build the failure shape an analyzer returns instead of raising.
    pub fn from_error(message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("error".to_string(), Value::String(message.into()));
        Self { fields }
    }

    /// Failure shape carrying the raw model output for debugging.
    pub fn from_error_with_raw(message: impl Into<String>, raw_output: impl Into<String>) -> Self {
        let mut analysis = Self::from_error(message);
        analysis
            .fields
            .insert("raw_output".to_string(), Value::String(raw_output.into()));
        analysis
    }

    /// Whether the analyzer signaled failure.
    pub fn is_error(&self) -> bool {
        self.fields.contains_key("error")
    }

    /// Get a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Insert a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Parse the `evidence` array, if present.
    ///
    /// Non-object entries and missing fields degrade to defaults so the
    /// returned length always matches the array length.
    pub fn evidence(&self) -> Vec<EvidenceItem> {
        match self.fields.get("evidence") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Merge a confidence result and its explanation in place.
    ///
    /// Keys become `confidence` and `confidence_explanation`, visible to
    /// whatever consumes the persisted report.
    pub fn attach_confidence(&mut self, confidence: &Confidence, explanation: impl Into<String>) {
        let value = serde_json::to_value(confidence)
            .unwrap_or_else(|_| Value::Object(Map::new()));
        self.fields.insert("confidence".to_string(), value);
        self.fields.insert(
            "confidence_explanation".to_string(),
            Value::String(explanation.into()),
        );
    }

    /// Whether confidence fields have been attached.
    pub fn has_confidence(&self) -> bool {
        self.fields.contains_key("confidence")
    }
}
