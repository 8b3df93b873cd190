//! Design-decision extraction

use repolens_utils::{clean_sentence, dedupe};

use super::manifest::NodeManifest;
use super::readme::{bullet_lines, extract_section};
use super::FallbackChain;
use crate::constants::limits::{DECISION_MIN_CHARS, MAX_DESIGN_DECISIONS};
use crate::constants::section_keywords::DESIGN_SECTION;
use crate::models::RawSnapshot;

pub const ES_MODULES_DECISION: &str = "Adopts ES modules for explicit imports and modern runtime compatibility.";
pub const TEST_SCRIPT_DECISION: &str = "Defines test automation scripts to reduce release risk.";

pub fn extract_design_decisions(snapshot: &RawSnapshot) -> Vec<String> {
    let decisions = FallbackChain::new()
        .then(|| documented_decisions(&snapshot.readme))
        .then(|| manifest_decisions(snapshot))
        .resolve();

    dedupe(decisions).into_iter().take(MAX_DESIGN_DECISIONS).collect()
}

fn documented_decisions(readme: &str) -> Vec<String> {
    let section = extract_section(readme, DESIGN_SECTION);
    bullet_lines(&section)
        .iter()
        .map(|line| clean_sentence(line))
        .filter(|cleaned| cleaned.chars().count() > DECISION_MIN_CHARS)
        .collect()
}

fn manifest_decisions(snapshot: &RawSnapshot) -> Vec<String> {
    let Some(manifest) = snapshot.config("package.json").and_then(NodeManifest::parse) else {
        return Vec::new();
    };

    let mut decisions = Vec::new();
    if manifest.is_es_module() {
        decisions.push(ES_MODULES_DECISION.to_string());
    }
    if manifest.has_test_script() {
        decisions.push(TEST_SCRIPT_DECISION.to_string());
    }
    decisions
}
