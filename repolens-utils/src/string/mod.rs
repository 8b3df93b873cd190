//! String processing utilities
//!
//! Cleaning and splitting helpers for the loosely-structured text that
//! arrives in README files and user-supplied context fields.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref MARKDOWN_MARKERS: Regex = Regex::new(r"[`*_>#]").unwrap();
    static ref LIST_SEPARATOR: Regex = Regex::new(r"\r?\n|,|;").unwrap();
}

/// Truncate to at most `max_len` graphemes, ending with `...` when shortened
pub fn safe_truncate(text: &str, max_len: usize) -> String {
    truncate_with_suffix(text, max_len, "...")
}

/// Truncate to at most `max_len` graphemes, replacing the tail with `suffix`
///
/// The suffix counts towards `max_len`. Text that already fits is returned
/// unchanged.
pub fn truncate_with_suffix(text: &str, max_len: usize, suffix: &str) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_len {
        return text.to_string();
    }

    let suffix_len = suffix.graphemes(true).count();
    let keep = max_len.saturating_sub(suffix_len);
    let mut truncated: String = graphemes[..keep].concat();
    truncated.push_str(suffix);
    truncated
}

/// Normalize whitespace: NFC, collapse runs to a single space, trim
pub fn normalize_whitespace(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    WHITESPACE_RUN.replace_all(&normalized, " ").trim().to_string()
}

/// Strip inline markdown markers (backticks, emphasis, quotes, heading
/// hashes) and collapse whitespace
pub fn clean_sentence(text: &str) -> String {
    let stripped = MARKDOWN_MARKERS.replace_all(text, "");
    normalize_whitespace(&stripped)
}

/// Upper-case the first character of every space-separated word
pub fn to_title(text: &str) -> String {
    text.split(' ')
        .map(capitalize_first_letter)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Capitalize first letter of a string
pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a free-text list on newlines, commas and semicolons
///
/// Items are trimmed and blanks removed; order is preserved.
pub fn split_user_list(value: &str) -> Vec<String> {
    LIST_SEPARATOR
        .split(value)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim every item and drop later duplicates, keeping first-seen order
pub fn dedupe<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
