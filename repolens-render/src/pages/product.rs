//! Product document: user value, features, personas and use cases

use repolens_core::AnalysisResult;

use super::{card_section, repository_action};
use crate::html::{chips, escape, list_items};
use crate::layout::render_page;
use crate::{DocumentRenderer, PageKey};

const FEATURE_ICONS: [&str; 8] = ["⚡", "🧩", "🔒", "📈", "🛠️", "🚀", "🔍", "🤝"];
const MAX_FEATURE_CARDS: usize = 8;
const MAX_PERSONA_CARDS: usize = 6;
const MAX_USE_CASES: usize = 6;
const JOURNEY: [&str; 4] = ["Discover", "Install", "Configure", "Value"];
const BEFORE_AFTER: [(&str, &str); 3] = [
    ("Fragmented implementation patterns", "Reusable structured workflow with clear entry points"),
    ("Slow team onboarding", "Faster adoption through documented setup and examples"),
    ("Inconsistent quality baseline", "Predictable process anchored in tested project components"),
];

pub fn feature_icon(index: usize) -> &'static str {
    FEATURE_ICONS[index % FEATURE_ICONS.len()]
}

pub fn value_line(analysis: &AnalysisResult) -> String {
    format!(
        "{} converts implementation complexity into predictable value by packaging workflows, documentation, and reusable components for faster outcomes.",
        analysis.meta.name
    )
}

pub fn problem_narrative(analysis: &AnalysisResult) -> String {
    format!(
        "{} often face fragmented tooling, inconsistent setup quality, and long onboarding cycles. {} addresses this by reducing ambiguity and giving teams a concrete path from idea to execution.",
        analysis.context.industry().unwrap_or("software teams"),
        analysis.meta.name
    )
}

pub fn solution_narrative(analysis: &AnalysisResult) -> String {
    let first_feature = analysis
        .features
        .first()
        .map_or("structured delivery", |feature| feature.name.as_str());
    format!(
        "The repository aligns around {first_feature} and complementary capabilities, creating a focused workflow that is easier to adopt, adapt, and scale across teams."
    )
}

pub fn render(renderer: &DocumentRenderer, analysis: &AnalysisResult) -> String {
    let meta = &analysis.meta;

    let hero = format!(
        "\n    <section class=\"hero\">\n      <p class=\"eyebrow\">Product Perspective</p>\n      <h1>{} as User Value</h1>\n      <p class=\"lead\">{}</p>\n    </section>\n",
        escape(&meta.name),
        escape(&value_line(analysis))
    );

    let mut body = card_section("Problem", &format!("<p>{}</p>", escape(&problem_narrative(analysis))));
    body.push_str(&card_section("Solution", &format!("<p>{}</p>", escape(&solution_narrative(analysis)))));

    let journey: Vec<String> = JOURNEY
        .iter()
        .enumerate()
        .map(|(index, step)| format!("<div class=\"journey-step\"><span>{}</span><p>{}</p></div>", index + 1, step))
        .collect();
    body.push_str(&card_section(
        "User Journey",
        &format!(
            "<div class=\"journey\">\n        {}\n      </div>",
            journey.join("<div class=\"journey-link\">-&gt;</div>\n        ")
        ),
    ));

    body.push_str("\n    <section class=\"split-grid\">");
    for (index, feature) in analysis.features.iter().take(MAX_FEATURE_CARDS).enumerate() {
        body.push_str(&format!(
            "\n      <article class=\"card feature-card\">\n        <h4>{} {}</h4>\n        <p>{}</p>\n      </article>",
            feature_icon(index),
            escape(&feature.name),
            escape(&feature.description)
        ));
    }
    body.push_str("\n    </section>\n");

    body.push_str("\n    <section class=\"split-grid\">");
    for persona in analysis.personas.iter().take(MAX_PERSONA_CARDS) {
        body.push_str(&format!(
            "\n      <article class=\"card\">\n        <h4>{}</h4>\n        <p><strong>Pain:</strong> {}</p>\n        <p><strong>Benefit:</strong> {}</p>\n      </article>",
            escape(&persona.role),
            escape(&persona.pain),
            escape(&persona.benefit)
        ));
    }
    body.push_str("\n    </section>\n");

    let rows: String = BEFORE_AFTER
        .iter()
        .map(|(before, after)| format!("\n          <tr><td>{before}</td><td>{after}</td></tr>"))
        .collect();
    body.push_str(&card_section(
        "Before / After",
        &format!(
            "<table class=\"compare\">\n        <thead><tr><th>Before</th><th>After</th></tr></thead>\n        <tbody>{rows}\n        </tbody>\n      </table>"
        ),
    ));

    body.push_str(&card_section(
        "Use Cases",
        &format!(
            "<ul class=\"plain-list\">{}</ul>\n      <div class=\"chip-row\">{}</div>\n      {}",
            list_items(analysis.use_cases.iter().take(MAX_USE_CASES).map(String::as_str)),
            chips(meta.topics.iter().map(String::as_str), "chip subtle"),
            repository_action(&meta.repo_url, "Explore on GitHub")
        ),
    ));

    render_page(renderer, PageKey::Product, analysis, &hero, &body, "")
}
