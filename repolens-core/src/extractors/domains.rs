//! Domain inference

use super::char_prefix;
use crate::constants::domain_keywords::{DEFAULT_DOMAINS, DOMAIN_KEYWORDS, README_SCAN_CHARS};
use crate::constants::limits::MAX_DOMAINS;
use crate::models::{Confidence, Domain, UserContext};

fn contains_name(domains: &[Domain], name: &str) -> bool {
    domains.iter().any(|domain| domain.name == name)
}

/// Explicit industry, then keyword matches, then the default labels
///
/// Explicit and inferred entries are trimmed first so the default labels
/// always fit under the cap.
pub fn infer_domains(topics: &[String], description: Option<&str>, readme: &str, context: &UserContext) -> Vec<Domain> {
    let mut domains: Vec<Domain> = context
        .industry()
        .map(|industry| Domain::new(industry, Confidence::Explicit))
        .into_iter()
        .collect();

    let text = format!(
        "{} {} {}",
        topics.join(" "),
        description.unwrap_or(""),
        char_prefix(readme, README_SCAN_CHARS)
    )
    .to_lowercase();

    for (token, label) in DOMAIN_KEYWORDS {
        if text.contains(token) && !contains_name(&domains, label) {
            domains.push(Domain::new(*label, Confidence::Inferred));
        }
    }

    let missing_defaults: Vec<&str> = DEFAULT_DOMAINS
        .iter()
        .copied()
        .filter(|label| !contains_name(&domains, label))
        .collect();
    domains.truncate(MAX_DOMAINS - missing_defaults.len());
    domains.extend(missing_defaults.into_iter().map(|label| Domain::new(label, Confidence::Default)));

    tracing::debug!("inferred {} domains", domains.len());
    domains
}
