//! Maturity scoring weights and bands

use crate::models::MaturityLevel;

/// Point weights and thresholds for the maturity score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaturityThresholds;

impl MaturityThresholds {
    pub const STARS_NOTABLE: u64 = 100;
    pub const STARS_POPULAR: u64 = 1000;
    pub const STARS_WEIGHT: u32 = 2;          // per star threshold crossed

    pub const RELEASES_FREQUENT: u64 = 5;
    pub const FIRST_RELEASE_WEIGHT: u32 = 2;
    pub const FREQUENT_RELEASE_WEIGHT: u32 = 1;

    pub const CONTRIBUTORS_TEAM: u64 = 3;
    pub const CONTRIBUTORS_COMMUNITY: u64 = 10;
    pub const CONTRIBUTORS_WEIGHT: u32 = 1;   // per contributor threshold crossed

    pub const CONTRIBUTING_GUIDE_WEIGHT: u32 = 1;
    pub const TEST_PATHS_WEIGHT: u32 = 1;
    pub const CI_WORKFLOW_WEIGHT: u32 = 1;

    /// Exact root path of a contribution guide
    pub const CONTRIBUTING_GUIDE: &'static str = "CONTRIBUTING.md";
    pub const WORKFLOW_PREFIX: &'static str = ".github/workflows/";

    /// Minimum score per band, highest first
    pub const BANDS: &'static [(u32, MaturityLevel)] = &[
        (9, MaturityLevel::ProductionReady),
        (6, MaturityLevel::ActiveDevelopment),
        (3, MaturityLevel::EarlyStage),
    ];

    /// Band for a score
    pub fn level_for(score: u32) -> MaturityLevel {
        Self::BANDS
            .iter()
            .find(|(minimum, _)| score >= *minimum)
            .map_or(MaturityLevel::Experimental, |(_, level)| *level)
    }
}
