//! HTML text helpers
//!
//! Escaping and the small formatting rules shared by every document.

use repolens_core::{parse_timestamp, TechCategory, TechItem};
use repolens_utils::{safe_truncate, truncate_with_suffix};

const SUMMARY_CHARS: usize = 68;

/// Escape text for element content and quoted attribute values
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Integer with en-US thousands separators (`12,345`)
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `YYYY-MM-DD` in UTC, `Unknown` when absent or unparseable
pub fn format_date(value: &str) -> String {
    parse_timestamp(value).map_or_else(|| "Unknown".to_string(), |timestamp| timestamp.format("%Y-%m-%d").to_string())
}

/// Shorten to `max` characters, marking the cut with a trailing period
pub fn trim_label(text: &str, max: usize) -> String {
    truncate_with_suffix(text, max, ".")
}

/// Summary line for a collapsible block (at most 68 characters)
pub fn short_summary(text: &str) -> String {
    safe_truncate(text.trim(), SUMMARY_CHARS)
}

/// Stack items grouped by category, groups in first-seen order
pub fn group_by_category(items: &[TechItem]) -> Vec<(TechCategory, Vec<&TechItem>)> {
    let mut groups: Vec<(TechCategory, Vec<&TechItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }
    groups
}

/// `<span class="chip ...">` row for a list of labels
pub fn chips<'a>(labels: impl IntoIterator<Item = &'a str>, class: &str) -> String {
    let mut html = String::new();
    for label in labels {
        html.push_str(&format!("<span class=\"{}\">{}</span>", class, escape(label)));
    }
    html
}

/// `<li>` items
pub fn list_items<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut html = String::new();
    for item in items {
        html.push_str(&format!("<li>{}</li>", escape(item)));
    }
    html
}

/// Primary call-to-action link to an external page
pub fn primary_link(href: &str, label: &str) -> String {
    format!(
        "<a class=\"primary-btn\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
        escape(href),
        escape(label)
    )
}
