//! Architecture inference from the file tree

use crate::constants::architecture_signals::{
    COMPONENT_SIGNALS, CORE_MODULES_COMPONENT, DEPLOYMENT_MANIFEST_SIGNALS, DEPLOYMENT_PATH_SIGNALS,
    FALLBACK_DEPLOYMENT, FALLBACK_PATTERN, PATTERN_SIGNALS, SPARSE_COMPONENT_COUNT,
};
use crate::constants::limits::{MAX_COMPONENTS, MAX_PATTERNS};
use crate::models::{Architecture, Component, RawSnapshot};

pub fn extract_architecture(snapshot: &RawSnapshot) -> Architecture {
    let paths = snapshot.lowercase_paths();

    let mut components: Vec<Component> = COMPONENT_SIGNALS
        .iter()
        .filter(|(rule, _, _)| rule.matches_any(&paths))
        .map(|(_, name, role)| Component { name: name.to_string(), role: role.to_string() })
        .collect();
    if components.len() <= SPARSE_COMPONENT_COUNT {
        let (name, role) = CORE_MODULES_COMPONENT;
        components.push(Component { name: name.to_string(), role: role.to_string() });
    }
    components.truncate(MAX_COMPONENTS);

    let mut patterns: Vec<String> = PATTERN_SIGNALS
        .iter()
        .filter(|(rule, _)| rule.matches_any(&paths))
        .map(|(_, pattern)| pattern.to_string())
        .collect();
    if patterns.is_empty() {
        patterns.push(FALLBACK_PATTERN.to_string());
    }
    patterns.truncate(MAX_PATTERNS);

    let mut deployment: Vec<String> = DEPLOYMENT_PATH_SIGNALS
        .iter()
        .filter(|(rule, _)| rule.matches_any(&paths))
        .map(|(_, label)| label.to_string())
        .collect();
    deployment.extend(
        DEPLOYMENT_MANIFEST_SIGNALS
            .iter()
            .filter(|(file, _)| snapshot.config(file).is_some())
            .map(|(_, label)| label.to_string()),
    );
    if deployment.is_empty() {
        deployment.push(FALLBACK_DEPLOYMENT.to_string());
    }

    tracing::debug!(
        "architecture: {} components, {} patterns, {} deployment traits",
        components.len(),
        patterns.len(),
        deployment.len()
    );

    Architecture { components, patterns, deployment }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TreeEntry;

    fn snapshot_with(paths: &[&str]) -> RawSnapshot {
        RawSnapshot {
            file_tree: paths.iter().map(|path| TreeEntry::blob(*path)).collect(),
            ..RawSnapshot::default()
        }
    }

    fn component_names(architecture: &Architecture) -> Vec<&str> {
        architecture.components.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_tree_uses_fallbacks() {
        let architecture = extract_architecture(&RawSnapshot::default());
        assert_eq!(component_names(&architecture), vec!["Core Modules"]);
        assert_eq!(architecture.patterns, vec!["Modular project composition"]);
        assert_eq!(architecture.deployment, vec!["Source-based deployment with environment configuration"]);
    }

    #[test]
    fn test_components_are_capped_and_ordered() {
        let architecture = extract_architecture(&snapshot_with(&[
            "src/main.ts",
            "src/api/routes.ts",
            "web/index.html",
            "db/migrations/001.sql",
            "workers/email.ts",
            "tests/api.test.ts",
            ".github/workflows/ci.yml",
            "docs/guide.md",
        ]));

        assert_eq!(
            component_names(&architecture),
            vec![
                "Application Core",
                "API Layer",
                "Client Interface",
                "Data Layer",
                "Background Processing",
                "Quality Gate",
                "CI Pipeline",
            ]
        );
    }

    #[test]
    fn test_sparse_tree_gets_core_modules() {
        let architecture = extract_architecture(&snapshot_with(&["SRC/lib.rs", "README.md"]));
        assert_eq!(component_names(&architecture), vec!["Application Core", "Documentation", "Core Modules"]);
    }

    #[test]
    fn test_patterns() {
        let architecture = extract_architecture(&snapshot_with(&[
            "packages/core/user_controller_service.ts",
            "cli/main.go",
            "plugins/loader.go",
            "events/bus.go",
        ]));
        assert_eq!(
            architecture.patterns,
            vec![
                "Layered service architecture",
                "Monorepo partitioning",
                "Command-line orchestration",
                "Event-driven processing",
            ]
        );
    }

    #[test]
    fn test_deployment_signals() {
        let mut snapshot = snapshot_with(&["Dockerfile", ".github/workflows/release.yml"]);
        snapshot.config_contents.insert("go.mod".to_string(), "module example.com/x".to_string());
        snapshot.config_contents.insert("Cargo.toml".to_string(), String::new());

        let architecture = extract_architecture(&snapshot);
        assert_eq!(
            architecture.deployment,
            vec!["Containerized deployment", "Automated CI/CD workflows", "Go module packaging"]
        );

        let nested = extract_architecture(&snapshot_with(&["deploy/Dockerfile"]));
        assert_eq!(nested.deployment, vec!["Source-based deployment with environment configuration"]);
    }
}
