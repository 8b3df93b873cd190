//! Executive document: strategic summary and evidence snapshot

use repolens_core::AnalysisResult;

use super::card_section;
use crate::html::{escape, format_date, format_number, primary_link};
use crate::layout::render_page;
use crate::{DocumentRenderer, PageKey};

const STRATEGIC_VALUE: [&str; 3] = [
    "Defensibility: proven public footprint and contributor participation.",
    "Extensibility: modular stack components support adjacent scenarios.",
    "Community: open-source delivery strengthens transparency and adoption confidence.",
];

pub fn executive_statement(analysis: &AnalysisResult) -> String {
    format!(
        "{} exists to turn a recurring engineering problem into a repeatable, scalable operating advantage.",
        analysis.meta.name
    )
}

/// Opportunity paragraph, quoting the user metric line when one was supplied
pub fn executive_opportunity(analysis: &AnalysisResult) -> String {
    let metric_line = analysis.metrics.user_provided.metrics.trim();
    if metric_line.is_empty() {
        return "This repository addresses a high-frequency execution challenge and provides a reusable implementation baseline. Community signals suggest it can reduce delivery risk while accelerating roadmap execution.".to_string();
    }
    format!(
        "This repository addresses an operational bottleneck with measurable impact potential: {metric_line}. Public traction and contributor activity indicate strong relevance and continued momentum."
    )
}

pub fn what_we_built(analysis: &AnalysisResult) -> String {
    let audience = analysis
        .personas
        .first()
        .map_or("faster, maintainable software delivery", |persona| persona.role.as_str());
    let names: Vec<&str> = analysis.tech_stack.iter().take(3).map(|item| item.name.as_str()).collect();
    let capabilities = if names.is_empty() {
        "core engineering patterns".to_string()
    } else {
        names.join(", ")
    };
    format!(
        "{} serves teams that need {}. It combines {}. The result is a reusable asset for faster, lower-risk delivery.",
        analysis.meta.name, audience, capabilities
    )
}

pub fn render(renderer: &DocumentRenderer, analysis: &AnalysisResult) -> String {
    let meta = &analysis.meta;
    let metrics = &analysis.metrics;

    let hero = format!(
        "\n    <section class=\"hero hero-minimal\">\n      <p class=\"eyebrow\">Executive Perspective</p>\n      <h1>{}</h1>\n    </section>\n",
        escape(&executive_statement(analysis))
    );

    let mut body = card_section("The Opportunity", &format!("<p>{}</p>", escape(&executive_opportunity(analysis))));
    body.push_str(&card_section("What We Built", &format!("<p>{}</p>", escape(&what_we_built(analysis)))));

    let stats = [
        ("Stars", format_number(metrics.stars)),
        ("Contributors", format_number(metrics.contributors)),
        ("Releases", format_number(metrics.releases)),
        ("Last Updated", format_date(&metrics.last_updated)),
    ];
    body.push_str("\n    <section class=\"metric-strip\">");
    for (label, value) in stats {
        body.push_str(&format!(
            "\n      <article class=\"card\"><p class=\"mono muted\">{}</p><h3>{}</h3></article>",
            label,
            escape(&value)
        ));
    }
    body.push_str("\n    </section>\n");

    let values: String = STRATEGIC_VALUE.iter().map(|line| format!("\n        <li>{line}</li>")).collect();
    body.push_str(&card_section("Strategic Value", &format!("<ul class=\"plain-list\">{values}\n      </ul>")));

    body.push_str(&format!(
        "\n    <section class=\"section-actions\">\n      {}\n    </section>\n",
        primary_link(&meta.repo_url, "Review the Repository ->")
    ));
    body.push_str(&format!(
        "\n    <section class=\"card quote\"><blockquote>{}</blockquote></section>\n",
        escape(&analysis.narrative)
    ));

    render_page(renderer, PageKey::Executive, analysis, &hero, &body, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::{empty_analysis, sample_analysis};

    #[test]
    fn test_opportunity_quotes_user_metric() {
        let mut analysis = sample_analysis();
        assert!(executive_opportunity(&analysis).starts_with("This repository addresses a high-frequency"));

        analysis.metrics.user_provided.metrics = "30% fewer failed deploys".to_string();
        assert!(executive_opportunity(&analysis)
            .contains("measurable impact potential: 30% fewer failed deploys. Public traction"));
    }

    #[test]
    fn test_what_we_built_fallbacks() {
        let mut analysis = empty_analysis();
        analysis.personas.clear();
        analysis.tech_stack.clear();
        let text = what_we_built(&analysis);

        assert!(text.contains("serves teams that need faster, maintainable software delivery."));
        assert!(text.contains("It combines core engineering patterns."));
    }

    #[test]
    fn test_what_we_built_names_first_three_stack_items() {
        let analysis = sample_analysis();
        assert!(what_we_built(&analysis).contains("It combines TypeScript, Shell, Express.js."));
    }

    #[test]
    fn test_executive_sections() {
        let analysis = sample_analysis();
        let html = render(&DocumentRenderer::new(), &analysis);

        assert!(html.contains("Executive Perspective"));
        assert!(html.contains("<section class=\"hero hero-minimal\">"));
        assert!(html.contains("<p class=\"mono muted\">Last Updated</p><h3>2024-06-05</h3>"));
        assert!(html.contains("Review the Repository -&gt;"));
        assert!(html.contains(&format!("<blockquote>{}</blockquote>", escape(&analysis.narrative))));
    }
}
