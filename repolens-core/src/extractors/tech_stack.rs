//! Technology stack detection
//!
//! Sources are consulted in a fixed order (language histogram, Node
//! manifest, Python requirements, Cargo manifest, file tree, README) and
//! the first entry for each display name wins.

use serde_json::{Map, Value};

use super::manifest::{cargo_dependency_names, NodeManifest};
use super::push_unique_by;
use crate::constants::limits::MAX_TECH_ITEMS;
use crate::constants::tech_signals::{
    TechSignal, CARGO_DEPENDENCY_SIGNALS, NODE_DEPENDENCY_SIGNALS, PYTHON_DEPENDENCY_SIGNALS,
    README_SIGNALS, TREE_SIGNALS,
};
use crate::models::snapshot::coerce_count;
use crate::models::{RawSnapshot, TechCategory, TechItem};

/// Ordered, name-deduplicated stack
#[derive(Debug, Default)]
struct StackBuilder {
    items: Vec<TechItem>,
}

impl StackBuilder {
    fn push(&mut self, item: TechItem) {
        push_unique_by(&mut self.items, item, |existing| existing.name.clone());
    }

    fn push_signal(&mut self, (_, name, category): &TechSignal) {
        self.push(TechItem::new(*name, *category));
    }

    fn finish(mut self) -> Vec<TechItem> {
        self.items.truncate(MAX_TECH_ITEMS);
        self.items
    }
}

pub fn extract_tech_stack(snapshot: &RawSnapshot) -> Vec<TechItem> {
    let mut stack = StackBuilder::default();

    for item in language_shares(&snapshot.languages) {
        stack.push(item);
    }

    if let Some(manifest) = snapshot.config("package.json").and_then(NodeManifest::parse) {
        // dependency order outside, catalogue order inside
        for dependency in manifest.dependency_names() {
            let dependency = dependency.to_lowercase();
            for signal in NODE_DEPENDENCY_SIGNALS.iter().filter(|(token, _, _)| dependency.contains(token)) {
                stack.push_signal(signal);
            }
        }
        if let Some(version) = manifest.node_engine() {
            stack.push(TechItem::new(format!("Node.js {version}"), TechCategory::Runtime));
        }
    }

    if let Some(requirements) = snapshot.config("requirements.txt") {
        let requirements = requirements.to_lowercase();
        for signal in PYTHON_DEPENDENCY_SIGNALS.iter().filter(|(token, _, _)| requirements.contains(token)) {
            stack.push_signal(signal);
        }
    }

    if let Some(cargo) = snapshot.config("Cargo.toml") {
        let crates: Vec<String> = cargo_dependency_names(cargo)
            .iter()
            .map(|name| name.to_lowercase())
            .collect();
        for signal in CARGO_DEPENDENCY_SIGNALS
            .iter()
            .filter(|(token, _, _)| crates.iter().any(|name| name.contains(token)))
        {
            stack.push_signal(signal);
        }
    }

    let paths = snapshot.lowercase_paths();
    for (rule, name, category) in TREE_SIGNALS {
        if rule.matches_any(&paths) {
            stack.push(TechItem::new(*name, *category));
        }
    }

    let readme = snapshot.readme.to_lowercase();
    for (tokens, name, category) in README_SIGNALS {
        if tokens.iter().any(|token| readme.contains(token)) {
            stack.push(TechItem::new(*name, *category));
        }
    }

    let items = stack.finish();
    tracing::debug!("detected {} stack entries", items.len());
    items
}

/// Language entries sorted by bytes descending (ties keep host order)
///
/// Each percentage is rounded on its own, so the column need not sum to 100.
pub fn language_shares(languages: &Map<String, Value>) -> Vec<TechItem> {
    let mut entries: Vec<(&String, u64)> = languages
        .iter()
        .map(|(name, bytes)| (name, coerce_count(bytes)))
        .collect();
    let total: u128 = entries.iter().map(|(_, bytes)| u128::from(*bytes)).sum();

    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .map(|(name, bytes)| {
            let percentage = if total == 0 {
                0
            } else {
                (bytes as f64 / total as f64 * 100.0).round() as u8
            };
            TechItem::language(name.clone(), percentage)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TreeEntry;
    use serde_json::json;

    fn languages(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_equal_languages_split_evenly() {
        let shares = language_shares(&languages(json!({"A": 50, "B": 50})));
        assert_eq!(shares, vec![TechItem::language("A", 50), TechItem::language("B", 50)]);
    }

    #[test]
    fn test_language_percentages_are_not_renormalized() {
        let shares = language_shares(&languages(json!({"C": 1, "A": 1, "B": 1})));
        let names: Vec<&str> = shares.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert!(shares.iter().all(|item| item.percentage == Some(33)));
    }

    #[test]
    fn test_huge_byte_counts_do_not_overflow() {
        let shares = language_shares(&languages(json!({"Rust": "1e30", "Go": "1e30", "C": 0})));
        let percentages: Vec<Option<u8>> = shares.iter().map(|item| item.percentage).collect();
        assert_eq!(percentages, vec![Some(50), Some(50), Some(0)]);
    }

    #[test]
    fn test_languages_sorted_by_bytes() {
        let shares = language_shares(&languages(json!({"Shell": 100, "Rust": 900, "Junk": "x"})));
        assert_eq!(shares[0], TechItem::language("Rust", 90));
        assert_eq!(shares[1], TechItem::language("Shell", 10));
        assert_eq!(shares[2], TechItem::language("Junk", 0));
    }

    #[test]
    fn test_react_substring_matches_once() {
        let mut snapshot = RawSnapshot::default();
        snapshot.config_contents.insert(
            "package.json".to_string(),
            r#"{"dependencies": {"react": "18", "react-dom": "18"}, "devDependencies": {"@testing-library/react": "14"}}"#
                .to_string(),
        );

        let stack = extract_tech_stack(&snapshot);
        assert_eq!(stack.iter().filter(|item| item.name == "React").count(), 1);
    }

    #[test]
    fn test_all_sources_in_order() {
        let mut snapshot = RawSnapshot {
            readme: "Deploy on Kubernetes with Postgres".to_string(),
            file_tree: vec![
                TreeEntry::blob("Dockerfile"),
                TreeEntry::blob(".github/workflows/ci.yml"),
                TreeEntry::blob("infra/terraform/main.tf"),
            ],
            languages: languages(json!({"TypeScript": 800, "Python": 200})),
            ..RawSnapshot::default()
        };
        snapshot.config_contents.insert(
            "package.json".to_string(),
            r#"{"dependencies": {"express": "4", "pg": "8"}, "devDependencies": {"typescript": "5"}, "engines": {"node": ">=20"}}"#
                .to_string(),
        );
        snapshot.config_contents.insert("requirements.txt".to_string(), "FastAPI==0.110\nnumpy\n".to_string());
        snapshot.config_contents.insert(
            "Cargo.toml".to_string(),
            "[dependencies]\ntokio = \"1\"\nsqlx = \"0.7\"\n".to_string(),
        );

        let names: Vec<String> = extract_tech_stack(&snapshot).into_iter().map(|item| item.name).collect();
        assert_eq!(
            names,
            vec![
                "TypeScript", "Python", "Express.js", "PostgreSQL", "Node.js >=20", "FastAPI", "NumPy",
                "Tokio", "SQLx", "Docker", "GitHub Actions", "Terraform", "Kubernetes",
            ]
        );
    }

    #[test]
    fn test_malformed_manifests_are_ignored() {
        let mut snapshot = RawSnapshot::default();
        snapshot.config_contents.insert("package.json".to_string(), "{oops".to_string());
        snapshot.config_contents.insert("Cargo.toml".to_string(), "[[[".to_string());
        assert!(extract_tech_stack(&snapshot).is_empty());
    }

    #[test]
    fn test_stack_is_capped() {
        let mut histogram = Map::new();
        for i in 0..40 {
            histogram.insert(format!("Lang{i}"), json!(i + 1));
        }
        let snapshot = RawSnapshot { languages: histogram, ..RawSnapshot::default() };
        assert_eq!(extract_tech_stack(&snapshot).len(), MAX_TECH_ITEMS);
    }
}
