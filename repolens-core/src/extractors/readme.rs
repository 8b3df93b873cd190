//! README section and bullet extraction

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::limits::MAX_SECTION_LINES;

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"^(#{1,3})\s+(.+)").unwrap();
    static ref BULLET: Regex = Regex::new(r"^[-*+]\s+").unwrap();
}

/// Body of the first section whose heading mentions a keyword
///
/// Capture starts after a level 1-3 heading whose lower-cased text contains
/// any keyword and stops at the next heading of the same or shallower depth,
/// or once more than [`MAX_SECTION_LINES`] lines are captured. Returns the
/// trimmed body, empty when nothing matched.
pub fn extract_section(readme: &str, keywords: &[&str]) -> String {
    let mut capturing = false;
    let mut depth = 0;
    let mut output: Vec<&str> = Vec::new();

    for line in readme.lines() {
        if let Some(heading) = HEADING.captures(line) {
            let current_depth = heading[1].len();
            let label = heading[2].to_lowercase();
            if keywords.iter().any(|keyword| label.contains(keyword)) {
                capturing = true;
                depth = current_depth;
                continue;
            }
            if capturing && current_depth <= depth {
                break;
            }
        }
        if capturing {
            output.push(line);
            if output.len() > MAX_SECTION_LINES {
                break;
            }
        }
    }

    output.join("\n").trim().to_string()
}

/// Trimmed list items (`-`, `*`, `+`) with their markers removed
pub fn bullet_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| BULLET.is_match(line))
        .map(|line| BULLET.replace(line, "").trim().to_string())
        .collect()
}
