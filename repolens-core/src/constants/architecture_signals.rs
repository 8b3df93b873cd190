//! Architecture inference catalogues
//!
//! All rules run against lower-cased file-tree paths.

use super::path_rules::PathRule;

/// `(rule, component name, role)` in output order
pub const COMPONENT_SIGNALS: &[(PathRule, &str, &str)] = &[
    (
        PathRule::AnyPrefix(&["src/", "app/"]),
        "Application Core",
        "Primary business logic and runtime modules",
    ),
    (
        PathRule::AnyContains(&["api", "routes", "controller"]),
        "API Layer",
        "Exposes application capabilities to clients and integrations",
    ),
    (
        PathRule::AnyContains(&["web", "frontend", "ui", "pages"]),
        "Client Interface",
        "User-facing experience and interaction workflows",
    ),
    (
        PathRule::AnyContains(&["db", "model", "migration"]),
        "Data Layer",
        "Persistence, schema evolution, and query operations",
    ),
    (
        PathRule::AnyContains(&["worker", "queue", "job"]),
        "Background Processing",
        "Async processing for workloads and automation tasks",
    ),
    (
        PathRule::AnyContains(&["test", "spec"]),
        "Quality Gate",
        "Automated tests and behavior validation coverage",
    ),
    (
        PathRule::AnyContains(&[".github/workflows"]),
        "CI Pipeline",
        "Automated build, test, and release checks",
    ),
    (
        PathRule::AnyOf(&[PathRule::AnyContains(&["docs"]), PathRule::AnySuffix(&[".md"])]),
        "Documentation",
        "Developer onboarding and operational guidance",
    ),
];

/// Appended when too few components were detected
pub const CORE_MODULES_COMPONENT: (&str, &str) =
    ("Core Modules", "Main logic organized around focused feature modules");

/// Component count at or below which `CORE_MODULES_COMPONENT` is appended
pub const SPARSE_COMPONENT_COUNT: usize = 2;

/// `(rule, pattern)` in output order
pub const PATTERN_SIGNALS: &[(PathRule, &str)] = &[
    (PathRule::AllContains(&["controller", "service"]), "Layered service architecture"),
    (PathRule::AnyContains(&["packages/", "apps/"]), "Monorepo partitioning"),
    (PathRule::AnyContains(&["cli", "command"]), "Command-line orchestration"),
    (PathRule::AnyContains(&["event", "queue", "kafka"]), "Event-driven processing"),
    (PathRule::AnyContains(&["plugin", "extension"]), "Extensible plugin architecture"),
];

pub const FALLBACK_PATTERN: &str = "Modular project composition";

/// `(rule, deployment trait)` checked against the file tree
pub const DEPLOYMENT_PATH_SIGNALS: &[(PathRule, &str)] = &[
    (PathRule::Exact(&["dockerfile", "docker-compose.yml"]), "Containerized deployment"),
    (PathRule::AnyContains(&[".github/workflows"]), "Automated CI/CD workflows"),
];

/// `(config file, deployment trait)` present when the file has content
pub const DEPLOYMENT_MANIFEST_SIGNALS: &[(&str, &str)] = &[
    ("go.mod", "Go module packaging"),
    ("Cargo.toml", "Rust cargo build chain"),
];

pub const FALLBACK_DEPLOYMENT: &str = "Source-based deployment with environment configuration";
