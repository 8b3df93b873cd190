//! Capability document: domain map, building blocks and reuse plays

use repolens_core::AnalysisResult;

use super::{card_section, repository_action};
use crate::html::{chips, escape, list_items};
use crate::layout::render_page;
use crate::radial::domain_radial;
use crate::{DocumentRenderer, PageKey};

const MAX_DOMAINS: usize = 6;
const BUILDING_BLOCKS: usize = 16;
const OPPORTUNITY_TOPICS: usize = 3;

pub fn capability_thesis(analysis: &AnalysisResult) -> String {
    let domain = analysis
        .domains
        .first()
        .map_or("Software Engineering", |domain| domain.name.as_str());
    format!(
        "{} can be extended beyond its immediate use case into {} and adjacent domains by reusing its architecture patterns and tooling choices.",
        analysis.meta.name, domain
    )
}

/// One reuse play per domain; the wording depends on whether the stack exposes an API surface
pub fn combination_plays(analysis: &AnalysisResult) -> Vec<String> {
    let name = &analysis.meta.name;
    let api_first = analysis.stack_mentions("GraphQL") || analysis.stack_mentions("API");
    analysis
        .domains
        .iter()
        .take(MAX_DOMAINS)
        .map(|domain| {
            if api_first {
                format!(
                    "Integrate {name} API-first components into {} platforms to unlock interoperability opportunities.",
                    domain.name
                )
            } else {
                format!(
                    "Extend {name} core modules into {} workflows without rebuilding project foundations.",
                    domain.name
                )
            }
        })
        .collect()
}

pub fn emerging_opportunity(analysis: &AnalysisResult) -> String {
    let topics = analysis.meta.topics.iter().take(OPPORTUNITY_TOPICS).cloned().collect::<Vec<_>>().join(", ");
    let subject = if topics.is_empty() { "modular software systems" } else { topics.as_str() };
    format!(
        "As adoption of {} continues, {} is positioned as a reusable foundation for teams seeking faster delivery with strong maintainability.",
        subject, analysis.meta.name
    )
}

pub fn render(renderer: &DocumentRenderer, analysis: &AnalysisResult) -> String {
    let meta = &analysis.meta;
    let domains = &analysis.domains[..analysis.domains.len().min(MAX_DOMAINS)];

    let hero = format!(
        "\n    <section class=\"hero\">\n      <p class=\"eyebrow\">Capability Perspective</p>\n      <h1>Not just {}. A platform for reusable capability.</h1>\n      <p class=\"lead\">{}</p>\n    </section>\n",
        escape(&meta.name),
        escape(&capability_thesis(analysis))
    );

    let mut body = card_section(
        "Capability Map",
        &format!("<div class=\"radial-wrap\">{}</div>", domain_radial(&meta.name, domains)),
    );

    body.push_str("\n    <section class=\"split-grid\">");
    for domain in domains {
        body.push_str(&format!(
            "\n      <article class=\"card\">\n        <h4>{}</h4>\n        <p><strong>Problem:</strong> Teams need dependable execution patterns under delivery pressure.</p>\n        <p><strong>Fit:</strong> {} contributes modular building blocks and implementation guidance.</p>\n        <p><strong>Impact:</strong> Faster time-to-value with lower architecture rework.</p>\n      </article>",
            escape(&domain.name),
            escape(&meta.name)
        ));
    }
    body.push_str("\n    </section>\n");

    let blocks = chips(
        analysis.tech_stack.iter().take(BUILDING_BLOCKS).map(|item| item.name.as_str()),
        "chip",
    );
    body.push_str(&card_section("Building Blocks", &format!("<div class=\"chip-row\">{blocks}</div>")));

    let plays = combination_plays(analysis);
    body.push_str(&card_section(
        "Combination Plays",
        &format!("<ul class=\"plain-list\">{}</ul>", list_items(plays.iter().map(String::as_str))),
    ));

    body.push_str(&card_section(
        "Emerging Opportunity",
        &format!(
            "<p>{}</p>\n      {}",
            escape(&emerging_opportunity(analysis)),
            repository_action(&meta.repo_url, "Connect with the Maintainer")
        ),
    ));

    render_page(renderer, PageKey::Capability, analysis, &hero, &body, "")
}
