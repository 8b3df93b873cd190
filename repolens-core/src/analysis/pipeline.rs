//! Extraction pipeline
//!
//! Runs every extractor over one snapshot and assembles the analysis
//! record. The only ambient input is the reference instant used for
//! `days_since_update`, which can be pinned for reproducible runs.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::extractors::{
    architecture::extract_architecture, design_decisions::extract_design_decisions, domains::infer_domains,
    features::extract_features, getting_started::extract_getting_started, maturity::assess_maturity,
    meta::extract_meta, metrics::extract_metrics, narrative::build_narrative, personas::infer_personas,
    tech_stack::extract_tech_stack, use_cases::extract_use_cases,
};
use crate::models::{AnalysisResult, RawSnapshot, UserContext};

/// Snapshot analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    reference_time: Option<DateTime<Utc>>,
}

impl Analyzer {
    /// Analyzer that measures recency against the wall clock
    pub fn new() -> Self {
        Self { reference_time: None }
    }

    /// Analyzer pinned to a fixed instant
    pub fn at(reference_time: DateTime<Utc>) -> Self {
        Self { reference_time: Some(reference_time) }
    }

    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }

    pub fn analyze(&self, snapshot: &RawSnapshot, context: &UserContext) -> AnalysisResult {
        let now = self.reference_time();
        let raw_meta = snapshot.meta();
        debug!("analyzing {}/{} at {}", snapshot.owner, snapshot.repo, now);

        let meta = extract_meta(snapshot);
        let tech_stack = extract_tech_stack(snapshot);
        let architecture = extract_architecture(snapshot);
        let features = extract_features(&snapshot.readme, &meta.topics);
        debug!("{} features", features.len());

        let use_cases = extract_use_cases(&snapshot.readme, &meta.primary_language, context);
        let personas = infer_personas(&snapshot.readme, &meta.topics, raw_meta.text("name"), context);
        let metrics = extract_metrics(snapshot, context, now);
        let narrative = build_narrative(raw_meta.text("name"), &meta.description, context);
        let domains = infer_domains(&meta.topics, raw_meta.text("description"), &snapshot.readme, context);
        let maturity = assess_maturity(snapshot);
        let getting_started = extract_getting_started(snapshot);
        let design_decisions = extract_design_decisions(snapshot);

        info!(
            "analysis of {} complete: {} stack entries, {} features, maturity {}",
            meta.full_name,
            tech_stack.len(),
            features.len(),
            maturity.level
        );

        AnalysisResult {
            meta,
            tech_stack,
            architecture,
            features,
            use_cases,
            personas,
            metrics,
            narrative,
            domains,
            maturity,
            getting_started,
            design_decisions,
            context: context.normalized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn pinned() -> Analyzer {
        Analyzer::at(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_empty_snapshot_has_complete_record() {
        let analysis = pinned().analyze(&RawSnapshot::default(), &UserContext::default());

        assert_eq!(analysis.features.len(), 4);
        assert_eq!(analysis.getting_started.commands.len(), 1);
        assert!(!analysis.use_cases.is_empty());
        assert!(!analysis.personas.is_empty());
        assert!(!analysis.architecture.components.is_empty());
        assert!(!analysis.architecture.patterns.is_empty());
        assert!(!analysis.architecture.deployment.is_empty());
        assert_eq!(analysis.metrics.days_since_update, 0);
        assert!(analysis.narrative.starts_with("This project exists"));
    }

    #[test]
    fn test_pinned_analysis_is_deterministic() {
        let snapshot = RawSnapshot {
            owner: "acme".to_string(),
            repo: "lens".to_string(),
            meta: json!({"name": "lens", "updated_at": "2024-05-16T00:00:00Z", "topics": ["cli"]}),
            readme: "## Features\n- Renders briefs\n".to_string(),
            ..RawSnapshot::default()
        };
        let context = UserContext::new().with_industry("  Media ");

        let first = pinned().analyze(&snapshot, &context);
        let second = pinned().analyze(&snapshot, &context);

        assert_eq!(first, second);
        assert_eq!(first.metrics.days_since_update, 30);
        assert_eq!(first.context.industry, "Media");
    }

    #[test]
    fn test_persona_pain_uses_raw_name() {
        let snapshot = RawSnapshot { repo: "lens".to_string(), ..RawSnapshot::default() };
        let context = UserContext::new().with_personas("Editor");
        let analysis = pinned().analyze(&snapshot, &context);

        assert_eq!(analysis.meta.name, "lens");
        assert_eq!(analysis.personas[0].pain, "Needs a reliable way to execute the project outcomes quickly.");
    }
}
