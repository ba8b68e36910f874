//! Sub-score rules for the confidence engine.
//!
//! Pure functions, each returning a value in [0, 1]. The composite score
//! lives in [`super::scoring`].

use chrono::{NaiveDate, Utc};

use crate::types::EvidenceItem;

/// Known-domain authority table. Suffix match against the URL host; the
/// first matching entry wins, so order is part of the rule.
pub const DOMAIN_AUTHORITY: &[(&str, f64)] = &[
    // High authority government and official sources
    ("dubailand.gov.ae", 0.95),
    ("dari.ae", 0.95),
    ("dubai.ae", 0.95),
    ("wam.ae", 0.95),
    ("u.ae", 0.95),
    ("ncema.gov.ae", 0.95),
    // High authority international news sources
    ("reuters.com", 0.9),
    ("bloomberg.com", 0.9),
    ("forbes.com", 0.9),
    ("cnbc.com", 0.9),
    ("edition.cnn.com", 0.9),
    ("wsj.com", 0.9),
    ("bbc.com", 0.9),
    ("ft.com", 0.9),
    ("globalpropertyguide.com", 0.9),
    // High authority regional news and real estate sources
    ("bayut.com", 0.9),
    ("khaleejtimes.com", 0.9),
    ("dxbproperties.ae", 0.9),
    ("propertyfinder.ae", 0.9),
    ("aljazeera.com", 0.9),
    ("gulfnews.com", 0.9),
    ("iqiglobal.com", 0.9),
    ("thenationalnews.com", 0.9),
    ("anika-property.com", 0.9),
    ("mordorintelligence.com", 0.9),
    ("arabianbusiness.com", 0.9),
    ("dxbinteract.com", 0.9),
    ("jamesedition.com", 0.9),
    ("knightfrank.ae", 0.9),
    ("emirates.estate", 0.9),
    ("economymiddleeast.com", 0.9),
    ("miradevelopments.ae", 0.9),
    ("dubai-immo.com", 0.9),
];

/// Authority assigned to hosts not in the table.
pub const DEFAULT_AUTHORITY: f64 = 0.3;

/// Freshness horizon in days.
pub const MAX_DAYS: i64 = 365;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn domain_authority(url: &str) -> f64 {
    let host = match url::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_lowercase(),
            None => return DEFAULT_AUTHORITY,
        },
        Err(_) => return DEFAULT_AUTHORITY,
    };

    DOMAIN_AUTHORITY
        .iter()
        .find(|(known, _)| host.ends_with(known))
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_AUTHORITY)
}

/// Mean domain authority over the source URLs. Empty set scores 0.0.
pub fn source_strength(urls: &[String]) -> f64 {
    if urls.is_empty() {
        return 0.0;
    }

    let total: f64 = urls.iter().map(|url| domain_authority(url)).sum();
    round2(total / urls.len() as f64)
}

/// Share of evidence items backed by a non-empty source URL.
/// Empty evidence scores 0.0.
pub fn evidence_coverage(evidence: &[EvidenceItem]) -> f64 {
    if evidence.is_empty() {
        return 0.0;
    }

    let backed = evidence.iter().filter(|item| item.is_backed()).count();
    round2(backed as f64 / evidence.len() as f64)
}

/// Freshness of one publication date, with unusable dates forced to 0.0.
///
/// Dates parse as `YYYY-MM-DD`. Age counts from today (UTC); future dates
/// clamp to age zero. Anything older than [`MAX_DAYS`] scores 0.0.
pub fn freshness_score(published: &str) -> f64 {
    freshness_signal(published).unwrap_or(0.0)
}

/// Freshness of one publication date, or `None` when the date is missing
/// or unparseable. The averaging form: unusable dates are excluded from
/// the mean rather than dragging it to zero.
pub fn freshness_signal(published: &str) -> Option<f64> {
    if published.is_empty() {
        return None;
    }

    let date = NaiveDate::parse_from_str(published, "%Y-%m-%d").ok()?;
    let days_old = (Utc::now().date_naive() - date).num_days().max(0);

    if days_old > MAX_DAYS {
        return Some(0.0);
    }

    Some(round2(1.0 - days_old as f64 / MAX_DAYS as f64))
}

/// Corroboration score: saturates at 5 sources.
pub fn consensus_score(num_sources: usize) -> f64 {
    round2((num_sources as f64 / 5.0).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn days_ago(days: i64) -> String {
        (Utc::now().date_naive() - Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    #[test]
    fn test_source_strength_empty() {
        assert_eq!(source_strength(&[]), 0.0);
    }

    #[test]
    fn test_source_strength_known_and_unknown() {
        let urls = vec![
            "https://reuters.com/x".to_string(),
            "https://example.com/y".to_string(),
        ];
        assert_eq!(source_strength(&urls), 0.6);
    }

    #[test]
    fn test_source_strength_suffix_match() {
        let urls = vec!["https://www.bayut.com/article".to_string()];
        assert_eq!(source_strength(&urls), 0.9);
    }

    #[test]
    fn test_source_strength_government_domain() {
        let urls = vec!["https://dubailand.gov.ae/en/news".to_string()];
        assert_eq!(source_strength(&urls), 0.95);
    }

    #[test]
    fn test_unparseable_url_gets_default() {
        let urls = vec!["u1".to_string()];
        assert_eq!(source_strength(&urls), DEFAULT_AUTHORITY);
    }

    #[test]
    fn test_evidence_coverage_empty() {
        assert_eq!(evidence_coverage(&[]), 0.0);
    }

    #[test]
    fn test_evidence_coverage_partial() {
        let evidence = vec![
            EvidenceItem::new("a", "https://reuters.com/x"),
            EvidenceItem::unsourced("b"),
        ];
        assert_eq!(evidence_coverage(&evidence), 0.5);
    }

    #[test]
    fn test_freshness_today_is_one() {
        assert_eq!(freshness_score(&days_ago(0)), 1.0);
    }

    #[test]
    fn test_freshness_365_days_is_zero() {
        assert_eq!(freshness_score(&days_ago(365)), 0.0);
    }

    #[test]
    fn test_freshness_beyond_horizon_is_zero() {
        assert_eq!(freshness_score(&days_ago(400)), 0.0);
    }

    #[test]
    fn test_freshness_unparseable_is_zero() {
        assert_eq!(freshness_score("last Tuesday"), 0.0);
        assert_eq!(freshness_score(""), 0.0);
    }

    #[test]
    fn test_freshness_signal_excludes_unusable() {
        assert_eq!(freshness_signal("not a date"), None);
        assert_eq!(freshness_signal(""), None);
        assert!(freshness_signal(&days_ago(10)).is_some());
    }

    #[test]
    fn test_freshness_future_date_clamps_to_one() {
        let future = (Utc::now().date_naive() + Duration::days(30))
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(freshness_score(&future), 1.0);
    }

    #[test]
    fn test_consensus_zero() {
        assert_eq!(consensus_score(0), 0.0);
    }

    #[test]
    fn test_consensus_saturates_at_five() {
        assert_eq!(consensus_score(5), 1.0);
        assert_eq!(consensus_score(10), 1.0);
    }

    #[test]
    fn test_consensus_partial() {
        assert_eq!(consensus_score(2), 0.4);
    }
}
