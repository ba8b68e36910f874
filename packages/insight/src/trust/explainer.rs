//! Human-readable rationale for a confidence result.

use crate::types::Confidence;

/// Render a confidence result as a fixed-template explanation.
///
/// One sentence per factor plus a lead sentence, joined by single spaces.
/// Pure and deterministic: identical input always renders the identical
/// string, which golden-output tests rely on.
pub fn explain_confidence(confidence: &Confidence) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "This insight is rated '{}' with a confidence score of {:.1}/100.",
        confidence.label, confidence.score
    ));

    if confidence.sources_count >= 3 {
        parts.push(format!(
            "It is supported by {} independent sources.",
            confidence.sources_count
        ));
    } else if confidence.sources_count == 2 {
        parts.push("It is supported by two independent sources.".to_string());
    } else {
        parts.push("It relies on limited source coverage.".to_string());
    }

    if confidence.source_strength >= 0.8 {
        parts.push("The referenced domains have strong authority.".to_string());
    } else if confidence.source_strength >= 0.5 {
        parts.push("The referenced domains have moderate authority.".to_string());
    } else {
        parts.push("The referenced domains have limited authority.".to_string());
    }

    if confidence.freshness >= 0.7 {
        parts.push("The information is based on recent publications.".to_string());
    } else if confidence.freshness >= 0.4 {
        parts.push("The information has moderate recency.".to_string());
    } else {
        parts.push("The information may be outdated.".to_string());
    }

    if confidence.evidence_coverage >= 0.7 {
        parts.push("Most claims are directly supported by evidence.".to_string());
    } else if confidence.evidence_coverage >= 0.4 {
        parts.push("Some claims are supported by evidence.".to_string());
    } else {
        parts.push("Evidence coverage is limited.".to_string());
    }

    parts.join(" ")
}
