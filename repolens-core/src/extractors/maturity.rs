//! Maturity scoring

use crate::constants::MaturityThresholds as T;
use crate::models::{Maturity, RawSnapshot};

/// Score community and engineering signals and map the total to a band
///
/// Paths are matched as reported: the contribution guide must sit at the
/// root with its exact name, test detection ignores case.
pub fn assess_maturity(snapshot: &RawSnapshot) -> Maturity {
    let stars = snapshot.meta().count("stargazers_count");
    let releases = snapshot.releases.len() as u64;
    let contributors = snapshot.contributors.len() as u64;

    let mut score = 0;
    if stars > T::STARS_NOTABLE {
        score += T::STARS_WEIGHT;
    }
    if stars > T::STARS_POPULAR {
        score += T::STARS_WEIGHT;
    }
    if releases > 0 {
        score += T::FIRST_RELEASE_WEIGHT;
    }
    if releases > T::RELEASES_FREQUENT {
        score += T::FREQUENT_RELEASE_WEIGHT;
    }
    if contributors > T::CONTRIBUTORS_TEAM {
        score += T::CONTRIBUTORS_WEIGHT;
    }
    if contributors > T::CONTRIBUTORS_COMMUNITY {
        score += T::CONTRIBUTORS_WEIGHT;
    }

    if snapshot.paths().any(|path| path == T::CONTRIBUTING_GUIDE) {
        score += T::CONTRIBUTING_GUIDE_WEIGHT;
    }
    if snapshot.lowercase_paths().iter().any(|path| path.contains("test") || path.contains("spec")) {
        score += T::TEST_PATHS_WEIGHT;
    }
    if snapshot.paths().any(|path| path.starts_with(T::WORKFLOW_PREFIX)) {
        score += T::CI_WORKFLOW_WEIGHT;
    }

    let level = T::level_for(score);
    tracing::debug!("maturity score {} -> {}", score, level);
    Maturity { level, badge: level.badge(), score }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BadgeColor, MaturityLevel, TreeEntry};
    use serde_json::json;

    #[test]
    fn test_empty_snapshot_is_experimental() {
        let maturity = assess_maturity(&RawSnapshot::default());
        assert_eq!(maturity.score, 0);
        assert_eq!(maturity.level, MaturityLevel::Experimental);
        assert_eq!(maturity.badge, BadgeColor::Blue);
    }

    #[test]
    fn test_established_project_is_production_ready() {
        let snapshot = RawSnapshot {
            meta: json!({"stargazers_count": 2000}),
            releases: vec![json!({}); 6],
            contributors: vec![json!({}); 12],
            file_tree: vec![
                TreeEntry::blob("CONTRIBUTING.md"),
                TreeEntry::blob("src/Spec/Parser.rb"),
                TreeEntry::blob(".github/workflows/ci.yml"),
            ],
            ..RawSnapshot::default()
        };

        let maturity = assess_maturity(&snapshot);
        assert_eq!(maturity.score, 12);
        assert_eq!(maturity.level, MaturityLevel::ProductionReady);
        assert_eq!(maturity.badge, BadgeColor::Green);
    }

    #[test]
    fn test_contributing_guide_must_be_exact() {
        let snapshot = RawSnapshot {
            file_tree: vec![TreeEntry::blob("docs/CONTRIBUTING.md"), TreeEntry::blob("contributing.md")],
            ..RawSnapshot::default()
        };
        assert_eq!(assess_maturity(&snapshot).score, 0);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let snapshot = RawSnapshot {
            meta: json!({"stargazers_count": 100}),
            releases: vec![json!({}); 5],
            contributors: vec![json!({}); 3],
            ..RawSnapshot::default()
        };
        let maturity = assess_maturity(&snapshot);
        assert_eq!(maturity.score, 2);
        assert_eq!(maturity.level, MaturityLevel::Experimental);
    }
}
