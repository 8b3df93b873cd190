//! Feature extraction
//!
//! README bullets first, topic-derived entries when the README yields too
//! few, and a fixed generic set when nothing else is available.

use repolens_utils::{clean_sentence, to_title};

use super::readme::{bullet_lines, extract_section};
use super::{char_prefix, FallbackChain};
use crate::constants::limits::{
    FEATURE_BULLET_SCAN, FEATURE_MIN_CHARS, FEATURE_NAME_CHARS, FEATURE_TOPIC_SCAN, MAX_FEATURES, MIN_FEATURES,
};
use crate::constants::section_keywords::FEATURE_SECTION;
use crate::models::Feature;

pub const GENERIC_FEATURES: &[(&str, &str)] = &[
    ("Open Source Delivery", "Designed for transparent collaboration and community contribution."),
    ("Configurable Workflows", "Includes configuration patterns for real-world setup and customization."),
    ("Developer Friendly", "Prioritizes practical setup and clear project structure for contributors."),
    ("Reusable Components", "Core modules are structured to be adaptable across multiple use cases."),
];

pub fn extract_features(readme: &str, topics: &[String]) -> Vec<Feature> {
    let mut features = FallbackChain::new()
        .then(|| readme_features(readme))
        .top_up(MIN_FEATURES, || topic_features(topics))
        .then(generic_features)
        .resolve();
    features.truncate(MAX_FEATURES);
    features
}

/// Bullets from a features section, or from the whole README when there is none
fn readme_features(readme: &str) -> Vec<Feature> {
    let section = extract_section(readme, FEATURE_SECTION);
    let source = if section.is_empty() { readme } else { section.as_str() };

    bullet_lines(source)
        .iter()
        .take(FEATURE_BULLET_SCAN)
        .map(|line| clean_sentence(line))
        .filter(|cleaned| cleaned.chars().count() > FEATURE_MIN_CHARS)
        .map(|cleaned| Feature {
            name: to_title(char_prefix(&cleaned, FEATURE_NAME_CHARS)),
            description: cleaned,
        })
        .collect()
}

fn topic_features(topics: &[String]) -> Vec<Feature> {
    topics
        .iter()
        .take(FEATURE_TOPIC_SCAN)
        .map(|topic| {
            let spaced = topic.replace('-', " ");
            Feature {
                name: to_title(&spaced),
                description: format!("Supports {spaced} workflows through focused project components."),
            }
        })
        .collect()
}

fn generic_features() -> Vec<Feature> {
    GENERIC_FEATURES
        .iter()
        .map(|(name, description)| Feature { name: name.to_string(), description: description.to_string() })
        .collect()
}
