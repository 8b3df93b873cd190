//! Package manifest readers
//!
//! Malformed manifests read as absent; nothing here errors.

use serde_json::Value;

use crate::constants::tech_signals::CARGO_DEPENDENCY_TABLES;

/// Parsed `package.json`
#[derive(Debug, Clone)]
pub struct NodeManifest {
    value: Value,
}

impl NodeManifest {
    /// `None` when the text is not a JSON object
    pub fn parse(text: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) if value.is_object() => Some(Self { value }),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("ignoring malformed package.json: {}", e);
                None
            }
        }
    }

    /// Names in `dependencies` then `devDependencies`, declaration order,
    /// each name once
    pub fn dependency_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for table in ["dependencies", "devDependencies"] {
            if let Some(entries) = self.value.get(table).and_then(Value::as_object) {
                for name in entries.keys() {
                    if !names.contains(name) {
                        names.push(name.clone());
                    }
                }
            }
        }
        names
    }

    /// `engines.node` version requirement
    pub fn node_engine(&self) -> Option<&str> {
        self.value
            .get("engines")
            .and_then(|engines| engines.get("node"))
            .and_then(Value::as_str)
            .filter(|version| !version.is_empty())
    }

    /// `"type": "module"`
    pub fn is_es_module(&self) -> bool {
        self.value.get("type").and_then(Value::as_str) == Some("module")
    }

    /// Non-empty `scripts.test`
    pub fn has_test_script(&self) -> bool {
        self.value
            .get("scripts")
            .and_then(|scripts| scripts.get("test"))
            .and_then(Value::as_str)
            .is_some_and(|script| !script.is_empty())
    }
}

/// Dependency names declared in a `Cargo.toml`
///
/// Covers the package tables and `[workspace.dependencies]`. Malformed TOML
/// yields nothing.
pub fn cargo_dependency_names(text: &str) -> Vec<String> {
    let manifest: toml::Table = match toml::from_str(text) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::debug!("ignoring malformed Cargo.toml: {}", e);
            return Vec::new();
        }
    };

    let workspace = manifest
        .get("workspace")
        .and_then(toml::Value::as_table)
        .and_then(|workspace| workspace.get("dependencies"));

    let mut names: Vec<String> = Vec::new();
    let tables = CARGO_DEPENDENCY_TABLES
        .iter()
        .filter_map(|table| manifest.get(*table))
        .chain(workspace);

    for table in tables.filter_map(toml::Value::as_table) {
        for name in table.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_manifest_dependencies_in_order() {
        let manifest = NodeManifest::parse(
            r#"{"dependencies": {"vue": "^3", "react": "^18"}, "devDependencies": {"react": "^18", "jest": "29"}}"#,
        )
        .unwrap();
        assert_eq!(manifest.dependency_names(), vec!["vue", "react", "jest"]);
    }

    #[test]
    fn test_node_manifest_signals() {
        let manifest = NodeManifest::parse(
            r#"{"type": "module", "scripts": {"test": "vitest"}, "engines": {"node": ">=18"}}"#,
        )
        .unwrap();
        assert!(manifest.is_es_module());
        assert!(manifest.has_test_script());
        assert_eq!(manifest.node_engine(), Some(">=18"));

        let bare = NodeManifest::parse(r#"{"scripts": {"test": ""}}"#).unwrap();
        assert!(!bare.is_es_module());
        assert!(!bare.has_test_script());
        assert_eq!(bare.node_engine(), None);
    }

    #[test]
    fn test_malformed_node_manifest() {
        assert!(NodeManifest::parse("{not json").is_none());
        assert!(NodeManifest::parse("[1, 2]").is_none());
    }

    #[test]
    fn test_cargo_dependency_names() {
        let names = cargo_dependency_names(
            "[package]\nname = \"demo\"\n\n[dependencies]\ntokio = { version = \"1\" }\naxum = \"0.7\"\n\n[dev-dependencies]\nproptest = \"1\"\n\n[workspace.dependencies]\nserde = \"1\"\n",
        );
        assert_eq!(names, vec!["tokio", "axum", "proptest", "serde"]);
        assert!(cargo_dependency_names("[dependencies\ntokio =").is_empty());
    }
}
