//! Hub document: headline stats and links to every perspective

use repolens_core::AnalysisResult;

use super::{card_section, repository_action};
use crate::html::{chips, escape, format_number};
use crate::layout::render_page;
use crate::{DocumentRenderer, PageKey};

const STACK_CHIPS: usize = 14;

pub fn render(renderer: &DocumentRenderer, analysis: &AnalysisResult) -> String {
    let meta = &analysis.meta;
    let maturity = &analysis.maturity;

    let hero = format!(
        "\n    <section class=\"hero hero-gradient\">\n      <div>\n        <p class=\"eyebrow\">Hub Perspective</p>\n        <h1>{}</h1>\n        <p class=\"lead\">{}</p>\n      </div>\n      <div class=\"badge badge-{}\">{}</div>\n    </section>\n",
        escape(&meta.full_name),
        escape(&meta.description),
        maturity.badge.as_str(),
        escape(maturity.level.as_str())
    );

    let stats = [
        ("Stars", meta.stars),
        ("Forks", meta.forks),
        ("Contributors", analysis.metrics.contributors),
        ("Releases", analysis.metrics.releases),
    ];

    let mut body = String::from("\n    <section class=\"stats-grid\">");
    for (label, value) in stats {
        body.push_str(&format!(
            "\n      <article class=\"card stat-card\">\n        <p class=\"mono muted\">{}</p>\n        <h2>{}</h2>\n      </article>",
            label,
            format_number(value)
        ));
    }
    body.push_str("\n    </section>\n");

    body.push_str("\n    <section class=\"split-grid\">");
    for key in PageKey::all().into_iter().filter(|key| *key != PageKey::Index) {
        body.push_str(&format!(
            "\n      <article class=\"card perspective-card audience-{}\">\n        <p class=\"mono muted\">{}</p>\n        <h3>{}</h3>\n        <p>{}</p>\n        <a class=\"ghost-btn\" href=\"./{}\">Open -&gt;</a>\n      </article>",
            key.as_str(),
            key.audience(),
            key.label(),
            key.summary(),
            key.file_name()
        ));
    }
    body.push_str("\n    </section>\n");

    let stack = chips(
        analysis.tech_stack.iter().take(STACK_CHIPS).map(|item| item.name.as_str()),
        "chip",
    );
    body.push_str(&card_section("Tech Stack", &format!("<div class=\"chip-row\">{stack}</div>")));

    let topics = if meta.topics.is_empty() {
        "<span class=\"muted\">No topics published for this repository.</span>".to_string()
    } else {
        chips(meta.topics.iter().map(String::as_str), "chip subtle")
    };
    body.push_str(&card_section(
        "Topics",
        &format!(
            "<div class=\"chip-row\">{}</div>\n      {}",
            topics,
            repository_action(&meta.repo_url, "View on GitHub")
        ),
    ));

    render_page(renderer, PageKey::Index, analysis, &hero, &body, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::{empty_analysis, sample_analysis};

    #[test]
    fn test_hub_headline() {
        let html = render(&DocumentRenderer::new(), &sample_analysis());

        assert!(html.contains("Hub Perspective"));
        assert!(html.contains("<h1>acme/shipyard</h1>"));
        assert!(html.contains("<div class=\"badge badge-green\">Production-Ready</div>"));
        assert!(html.contains("<h2>2,400</h2>"));
        assert!(html.contains("<span class=\"chip subtle\">devops</span>"));
    }

    #[test]
    fn test_hub_links_every_perspective() {
        let html = render(&DocumentRenderer::new(), &sample_analysis());
        for key in ["engineering", "product", "capability", "executive"] {
            assert!(html.contains(&format!("audience-{key}")));
            assert!(html.contains(&format!("href=\"./{key}.html\">Open -&gt;</a>")));
        }
    }

    #[test]
    fn test_hub_without_topics() {
        let html = render(&DocumentRenderer::new(), &empty_analysis());
        assert!(html.contains("No topics published for this repository."));
        assert!(html.contains("badge-blue"));
    }

    #[test]
    fn test_hub_caps_stack_chips() {
        let mut analysis = sample_analysis();
        analysis.tech_stack = (0..20)
            .map(|index| repolens_core::TechItem::new(format!("Tool{index}"), repolens_core::TechCategory::Data))
            .collect();
        let html = render(&DocumentRenderer::new(), &analysis);

        assert!(html.contains("Tool13"));
        assert!(!html.contains("Tool14"));
    }
}
