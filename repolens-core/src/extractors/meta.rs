//! Repository metadata normalization

use crate::models::{RawSnapshot, RepoMeta};

pub const DEFAULT_LICENSE: &str = "Not specified";
pub const DEFAULT_BRANCH: &str = "main";

/// Generated description for repositories that publish none
pub fn infer_description(name: &str, owner: &str) -> String {
    format!("{name} is an open-source project maintained by {owner}.")
}

pub fn extract_meta(snapshot: &RawSnapshot) -> RepoMeta {
    let meta = snapshot.meta();
    let owner = snapshot.owner.clone();
    let repo = snapshot.repo.clone();
    let name = meta.text_or("name", &repo);

    RepoMeta {
        full_name: meta.text("full_name").map_or_else(|| format!("{owner}/{repo}"), str::to_string),
        description: meta
            .text("description")
            .map_or_else(|| infer_description(&name, &owner), str::to_string),
        stars: meta.count("stargazers_count"),
        forks: meta.count("forks_count"),
        watchers: meta.count("watchers_count"),
        open_issues: meta.count("open_issues_count"),
        primary_language: meta.text_or("language", ""),
        topics: meta.strings("topics"),
        license: meta.nested_text("license", "name").unwrap_or(DEFAULT_LICENSE).to_string(),
        homepage: meta.text_or("homepage", ""),
        created_at: meta.text_or("created_at", ""),
        updated_at: meta.text_or("updated_at", ""),
        repo_url: meta
            .text("html_url")
            .map_or_else(|| format!("https://github.com/{owner}/{repo}"), str::to_string),
        is_archived: meta.flag("archived"),
        default_branch: meta.text_or("default_branch", DEFAULT_BRANCH),
        name,
        owner,
        repo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(meta: serde_json::Value) -> RawSnapshot {
        RawSnapshot {
            owner: "acme".to_string(),
            repo: "lens".to_string(),
            meta,
            ..RawSnapshot::default()
        }
    }

    #[test]
    fn test_fallbacks_without_meta() {
        let meta = extract_meta(&snapshot(serde_json::Value::Null));

        assert_eq!(meta.name, "lens");
        assert_eq!(meta.full_name, "acme/lens");
        assert_eq!(meta.description, "lens is an open-source project maintained by acme.");
        assert_eq!(meta.license, "Not specified");
        assert_eq!(meta.repo_url, "https://github.com/acme/lens");
        assert_eq!(meta.default_branch, "main");
        assert_eq!(meta.stars, 0);
        assert!(meta.topics.is_empty());
        assert!(!meta.is_archived);
    }

    #[test]
    fn test_reads_host_fields() {
        let meta = extract_meta(&snapshot(json!({
            "name": "RepoLens",
            "full_name": "acme/RepoLens",
            "description": "Turns repositories into briefs",
            "stargazers_count": 1500,
            "watchers_count": 1500,
            "language": "Rust",
            "topics": ["cli", "docs"],
            "license": {"name": "Apache License 2.0"},
            "html_url": "https://example.com/acme/RepoLens",
            "archived": true,
            "default_branch": "trunk"
        })));

        assert_eq!(meta.name, "RepoLens");
        assert_eq!(meta.description, "Turns repositories into briefs");
        assert_eq!(meta.stars, 1500);
        assert_eq!(meta.primary_language, "Rust");
        assert_eq!(meta.topics, vec!["cli", "docs"]);
        assert_eq!(meta.license, "Apache License 2.0");
        assert_eq!(meta.repo_url, "https://example.com/acme/RepoLens");
        assert!(meta.is_archived);
        assert_eq!(meta.default_branch, "trunk");
    }

    #[test]
    fn test_generated_description_uses_meta_name() {
        let meta = extract_meta(&snapshot(json!({"name": "Lens Pro", "description": null})));
        assert_eq!(meta.description, "Lens Pro is an open-source project maintained by acme.");
    }
}
