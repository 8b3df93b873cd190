//! Heuristic extractors
//!
//! One module per analysis field. Every extractor is a pure, infallible
//! function over borrowed snapshot data; absent inputs resolve through
//! fallbacks so each field always has a usable value.

pub mod readme;
pub mod manifest;
pub mod meta;
pub mod tech_stack;
pub mod architecture;
pub mod features;
pub mod use_cases;
pub mod personas;
pub mod metrics;
pub mod narrative;
pub mod domains;
pub mod maturity;
pub mod getting_started;
pub mod design_decisions;

type Strategy<'a, T> = Box<dyn FnOnce() -> Vec<T> + 'a>;

enum Tier<'a, T> {
    /// Runs only while nothing has been produced
    Fallback(Strategy<'a, T>),
    /// Runs while fewer than `minimum` items exist and appends
    TopUp { minimum: usize, strategy: Strategy<'a, T> },
}

/// Ordered candidate-producing strategies
///
/// Strategies run lazily in order. A fallback tier fires only when every
/// earlier tier produced nothing; a top-up tier appends when the running
/// total is below its minimum.
pub struct FallbackChain<'a, T> {
    tiers: Vec<Tier<'a, T>>,
}

impl<'a, T> FallbackChain<'a, T> {
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    pub fn then(mut self, strategy: impl FnOnce() -> Vec<T> + 'a) -> Self {
        self.tiers.push(Tier::Fallback(Box::new(strategy)));
        self
    }

    pub fn top_up(mut self, minimum: usize, strategy: impl FnOnce() -> Vec<T> + 'a) -> Self {
        self.tiers.push(Tier::TopUp { minimum, strategy: Box::new(strategy) });
        self
    }

    pub fn resolve(self) -> Vec<T> {
        let mut items = Vec::new();
        for tier in self.tiers {
            match tier {
                Tier::Fallback(strategy) if items.is_empty() => items = strategy(),
                Tier::TopUp { minimum, strategy } if items.len() < minimum => items.extend(strategy()),
                _ => {}
            }
        }
        items
    }
}

impl<T> Default for FallbackChain<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `item` unless an entry with the same key is present
pub(crate) fn push_unique_by<T, K, F>(items: &mut Vec<T>, item: T, key: F)
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let candidate = key(&item);
    if !items.iter().any(|existing| key(existing) == candidate) {
        items.push(item);
    }
}

/// First `n` characters of `text`
pub(crate) fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_first_non_empty_tier_wins() {
        let later_ran = Cell::new(false);
        let items = FallbackChain::new()
            .then(Vec::<u8>::new)
            .then(|| vec![1, 2])
            .then(|| {
                later_ran.set(true);
                vec![3]
            })
            .resolve();

        assert_eq!(items, vec![1, 2]);
        assert!(!later_ran.get());
    }

    #[test]
    fn test_top_up_appends_below_minimum() {
        let items = FallbackChain::new()
            .then(|| vec!["a"])
            .top_up(3, || vec!["b", "c"])
            .top_up(3, || vec!["d"])
            .then(|| vec!["generic"])
            .resolve();

        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_char_prefix_respects_boundaries() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("abc", 10), "abc");
    }

    #[test]
    fn test_push_unique_by() {
        let mut names = vec!["React".to_string()];
        push_unique_by(&mut names, "React".to_string(), |name| name.clone());
        push_unique_by(&mut names, "Vue.js".to_string(), |name| name.clone());
        assert_eq!(names, vec!["React", "Vue.js"]);
    }
}
