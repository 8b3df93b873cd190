//! One module per perspective document
//!
//! Each `render` builds the hero and body for its document and hands them
//! to [`crate::layout::render_page`].

pub mod hub;
pub mod engineering;
pub mod product;
pub mod capability;
pub mod executive;

use crate::html::{escape, primary_link};

/// `<section class="card">` with a heading
pub(crate) fn card_section(title: &str, inner: &str) -> String {
    format!(
        "\n    <section class=\"card\">\n      <h3>{}</h3>\n      {}\n    </section>\n",
        escape(title),
        inner
    )
}

/// Call-to-action row linking to the repository
pub(crate) fn repository_action(repo_url: &str, label: &str) -> String {
    format!("<div class=\"section-actions\">{}</div>", primary_link(repo_url, label))
}

#[cfg(test)]
pub(crate) mod test_support {
    use repolens_core::{parse_timestamp, AnalysisResult, Analyzer, RawSnapshot, UserContext};

    const FIXTURE: &str = include_str!("../../../repolens-core/tests/fixtures/snapshot.json");

    /// Analysis of the bundled fixture, pinned to 2024-06-15
    pub fn sample_analysis() -> AnalysisResult {
        let snapshot = RawSnapshot::from_json_str(FIXTURE).expect("fixture parses");
        let now = parse_timestamp("2024-06-15").expect("valid date");
        Analyzer::at(now).analyze(&snapshot, &UserContext::new())
    }

    /// Analysis of an empty snapshot
    pub fn empty_analysis() -> AnalysisResult {
        let now = parse_timestamp("2024-06-15").expect("valid date");
        Analyzer::at(now).analyze(&RawSnapshot::default(), &UserContext::new())
    }
}
