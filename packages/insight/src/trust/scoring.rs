//! Composite confidence scoring.
//!
//! Weights: source strength 0.4, evidence coverage 0.2, freshness 0.2,
//! consensus 0.2. The composite is scaled to [0, 100] and rounded to one
//! decimal before labeling.

use crate::types::{Analysis, Confidence, ConfidenceBadge, ConfidenceLabel, Document};

use super::rules::{
    consensus_score, evidence_coverage, freshness_signal, round2, source_strength,
};

/// Map a composite score to its tier.
pub fn confidence_label(score: f64) -> ConfidenceLabel {
    if score >= 85.0 {
        ConfidenceLabel::VeryHigh
    } else if score >= 70.0 {
        ConfidenceLabel::High
    } else if score >= 50.0 {
        ConfidenceLabel::Moderate
    } else if score >= 30.0 {
        ConfidenceLabel::Low
    } else {
        ConfidenceLabel::VeryLow
    }
}

/// Map a composite score to its traffic-light badge.
pub fn confidence_badge(score: f64) -> ConfidenceBadge {
    if score >= 70.0 {
        ConfidenceBadge::Green
    } else if score >= 50.0 {
        ConfidenceBadge::Yellow
    } else {
        ConfidenceBadge::Red
    }
}

/// Compute the confidence result for one run's valid documents and
/// analysis.
///
/// Documents with a missing or unparseable publication date are excluded
/// from the freshness average; if none has a usable date, freshness is
/// 0.0.
pub fn calculate_confidence(documents: &[Document], analysis: &Analysis) -> Confidence {
    let urls: Vec<String> = documents
        .iter()
        .filter(|doc| !doc.url.is_empty())
        .map(|doc| doc.url.clone())
        .collect();

    let source = source_strength(&urls);
    let evidence = evidence_coverage(&analysis.evidence());

    let freshness_scores: Vec<f64> = documents
        .iter()
        .filter_map(|doc| doc.published_at.as_deref())
        .filter_map(freshness_signal)
        .collect();
    let freshness = if freshness_scores.is_empty() {
        0.0
    } else {
        round2(freshness_scores.iter().sum::<f64>() / freshness_scores.len() as f64)
    };

    let consensus = consensus_score(urls.len());

    let composite = (source * 0.4 + evidence * 0.2 + freshness * 0.2 + consensus * 0.2) * 100.0;
    let score = (composite * 10.0).round() / 10.0;

    Confidence {
        score,
        label: confidence_label(score),
        badge: confidence_badge(score),
        source_strength: source,
        evidence_coverage: evidence,
        freshness,
        consensus,
        sources_count: urls.len(),
    }
}
