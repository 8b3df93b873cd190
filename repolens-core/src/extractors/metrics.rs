//! Repository metrics

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{RawSnapshot, RepoMetrics, UserContext, UserProvidedMetrics};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        })
}

/// Whole days between `updated_at` and `now`, rounded, never negative
///
/// Missing or unparseable timestamps count as "just updated".
pub fn days_since(updated_at: &str, now: DateTime<Utc>) -> u64 {
    match parse_timestamp(updated_at) {
        Some(updated) => {
            let days = (now - updated).num_milliseconds() as f64 / MILLIS_PER_DAY;
            days.round().max(0.0) as u64
        }
        None => 0,
    }
}

pub fn extract_metrics(snapshot: &RawSnapshot, context: &UserContext, now: DateTime<Utc>) -> RepoMetrics {
    let meta = snapshot.meta();
    let last_updated = meta.text_or("updated_at", "");
    let watchers = match meta.count("subscribers_count") {
        0 => meta.count("watchers_count"),
        subscribers => subscribers,
    };

    RepoMetrics {
        stars: meta.count("stargazers_count"),
        forks: meta.count("forks_count"),
        watchers,
        open_issues: meta.count("open_issues_count"),
        contributors: snapshot.contributors.len() as u64,
        releases: snapshot.releases.len() as u64,
        days_since_update: days_since(&last_updated, now),
        last_updated,
        user_provided: UserProvidedMetrics {
            metrics: context.metrics.trim().to_string(),
            use_cases: context.use_case_list(),
            industry: context.industry.trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(parse_timestamp("2024-06-01T00:00:00Z"), Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
        assert_eq!(parse_timestamp("2024-06-01"), Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
        assert_eq!(parse_timestamp("last tuesday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_days_since_rounds_and_clamps() {
        assert_eq!(days_since("2024-06-01T00:00:00Z", now()), 15);
        assert_eq!(days_since("2024-06-14T23:00:00Z", now()), 1);
        assert_eq!(days_since("2030-01-01T00:00:00Z", now()), 0);
        assert_eq!(days_since("", now()), 0);
        assert_eq!(days_since("garbage", now()), 0);
    }

    #[test]
    fn test_extract_metrics() {
        let snapshot = RawSnapshot {
            meta: json!({
                "stargazers_count": 42,
                "forks_count": 7,
                "watchers_count": 42,
                "subscribers_count": 5,
                "open_issues_count": 3,
                "updated_at": "2024-06-10T12:00:00Z"
            }),
            releases: vec![json!({}), json!({})],
            contributors: vec![json!({"login": "a"})],
            ..RawSnapshot::default()
        };
        let context = UserContext::new().with_metrics(" 30% faster ").with_use_cases("Audit; Billing").with_industry("Finance ");

        let metrics = extract_metrics(&snapshot, &context, now());
        assert_eq!(metrics.stars, 42);
        assert_eq!(metrics.watchers, 5);
        assert_eq!(metrics.releases, 2);
        assert_eq!(metrics.contributors, 1);
        assert_eq!(metrics.days_since_update, 5);
        assert_eq!(metrics.last_updated, "2024-06-10T12:00:00Z");
        assert_eq!(metrics.user_provided.metrics, "30% faster");
        assert_eq!(metrics.user_provided.use_cases, vec!["Audit", "Billing"]);
        assert_eq!(metrics.user_provided.industry, "Finance");
    }

    #[test]
    fn test_watchers_fall_back_to_watchers_count() {
        let snapshot = RawSnapshot { meta: json!({"watchers_count": 9}), ..RawSnapshot::default() };
        assert_eq!(extract_metrics(&snapshot, &UserContext::default(), now()).watchers, 9);
    }
}
