//! Confidence engine: sub-score rules, composite scoring, and the
//! explanation generator.

pub mod explainer;
pub mod rules;
pub mod scoring;

pub use explainer::explain_confidence;
pub use rules::{
    consensus_score, evidence_coverage, freshness_score, freshness_signal, source_strength,
    DEFAULT_AUTHORITY, DOMAIN_AUTHORITY, MAX_DAYS,
};
pub use scoring::{calculate_confidence, confidence_badge, confidence_label};
