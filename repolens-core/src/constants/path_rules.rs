//! Path matching rules
//!
//! Small declarative predicates over a single file-tree path. Catalogues
//! pair a rule with the label it produces.

/// Predicate over one (already case-normalized) path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// Path equals one of the values
    Exact(&'static [&'static str]),
    /// Path starts with one of the prefixes
    AnyPrefix(&'static [&'static str]),
    /// Path ends with one of the suffixes
    AnySuffix(&'static [&'static str]),
    /// Path contains at least one of the fragments
    AnyContains(&'static [&'static str]),
    /// Path contains every fragment
    AllContains(&'static [&'static str]),
    /// Any of the nested rules matches
    AnyOf(&'static [PathRule]),
}

impl PathRule {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathRule::Exact(values) => values.iter().any(|value| path == *value),
            PathRule::AnyPrefix(prefixes) => prefixes.iter().any(|prefix| path.starts_with(prefix)),
            PathRule::AnySuffix(suffixes) => suffixes.iter().any(|suffix| path.ends_with(suffix)),
            PathRule::AnyContains(fragments) => fragments.iter().any(|fragment| path.contains(fragment)),
            PathRule::AllContains(fragments) => fragments.iter().all(|fragment| path.contains(fragment)),
            PathRule::AnyOf(rules) => rules.iter().any(|rule| rule.matches(path)),
        }
    }

    /// Whether any path in the listing matches
    pub fn matches_any<S: AsRef<str>>(&self, paths: &[S]) -> bool {
        paths.iter().any(|path| self.matches(path.as_ref()))
    }
}
