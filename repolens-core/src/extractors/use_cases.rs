//! Use-case extraction

use repolens_utils::{clean_sentence, dedupe};

use super::readme::{bullet_lines, extract_section};
use crate::constants::limits::{MAX_USE_CASES, USE_CASE_BULLET_SCAN};
use crate::constants::section_keywords::USE_CASE_SECTION;
use crate::models::UserContext;

/// Templated statements appended after user and README items
pub fn inferred_use_cases(language: &str) -> [String; 3] {
    let language = if language.is_empty() { "software" } else { language };
    [
        format!("Accelerate {language} project delivery with reusable foundations."),
        "Standardize team workflows with a documented, shareable implementation pattern.".to_string(),
        "Use as a reference implementation for onboarding and architecture alignment.".to_string(),
    ]
}

/// User-supplied items, then README bullets, then inferred statements
pub fn extract_use_cases(readme: &str, language: &str, context: &UserContext) -> Vec<String> {
    let section = extract_section(readme, USE_CASE_SECTION);

    let candidates = context
        .use_case_list()
        .into_iter()
        .chain(
            bullet_lines(&section)
                .into_iter()
                .take(USE_CASE_BULLET_SCAN)
                .map(|line| clean_sentence(&line)),
        )
        .chain(inferred_use_cases(language));

    dedupe(candidates)
        .into_iter()
        .filter(|item| !item.is_empty())
        .take(MAX_USE_CASES)
        .collect()
}
