//! Engineering document: architecture, stack layers, setup and rationale

use repolens_core::AnalysisResult;

use super::card_section;
use crate::html::{escape, format_date, format_number, group_by_category, list_items, primary_link, short_summary};
use crate::layout::render_page;
use crate::{DocumentRenderer, PageKey};

const ARCHITECTURE_NODES: usize = 6;
const NO_DECISIONS: &str = "No explicit design rationale was detected in the repository docs.";

const CLIPBOARD_SCRIPT: &str = r"
    document.querySelectorAll('.copy-btn').forEach(button => {
      button.addEventListener('click', async () => {
        const id = button.getAttribute('data-copy-id')
        const node = document.getElementById(id)
        if (!node) return
        try {
          await navigator.clipboard.writeText(node.textContent || '')
          const prev = button.textContent
          button.textContent = 'Copied'
          setTimeout(() => button.textContent = prev, 1200)
        } catch (_err) {
          button.textContent = 'Copy failed'
          setTimeout(() => button.textContent = 'Copy', 1200)
        }
      })
    })
  ";

/// One-paragraph summary of how the project is built
pub fn technical_thesis(analysis: &AnalysisResult) -> String {
    let language = match analysis.meta.primary_language.as_str() {
        "" => "multi-language",
        language => language,
    };
    format!(
        "{} uses a {} built primarily with {}. The project emphasizes reusable modules, maintainable boundaries, and practical operational fit.",
        analysis.meta.name,
        analysis.architecture.primary_pattern(),
        language
    )
}

/// Four-step walkthrough naming the first three components
pub fn how_it_works(analysis: &AnalysisResult) -> [String; 4] {
    let runtime = match analysis.meta.primary_language.as_str() {
        "" => "the primary stack",
        language => language,
    };
    let modules: Vec<&str> = analysis
        .architecture
        .components
        .iter()
        .take(3)
        .map(|component| component.name.as_str())
        .collect();

    [
        "Clone the repository and install dependencies based on the project package manager.".to_string(),
        format!("Initialize the runtime environment for {runtime} components."),
        format!("Activate key modules: {}.", modules.join(", ")),
        "Run the documented command path and validate behavior through existing test and workflow checks.".to_string(),
    ]
}

pub fn render(renderer: &DocumentRenderer, analysis: &AnalysisResult) -> String {
    let meta = &analysis.meta;
    let architecture = &analysis.architecture;

    let hero = format!(
        "\n    <section class=\"hero\">\n      <p class=\"eyebrow\">Engineering Perspective</p>\n      <h1>{} Technical Thesis</h1>\n      <p class=\"lead\">{}</p>\n      <p class=\"mono muted\">Patterns: {}</p>\n    </section>\n",
        escape(&meta.name),
        escape(&technical_thesis(analysis)),
        escape(&architecture.patterns.join(" | "))
    );

    let mut nodes = String::new();
    for component in architecture.components.iter().take(ARCHITECTURE_NODES) {
        nodes.push_str(&format!(
            "\n        <div class=\"arch-node\">\n          <h4>{}</h4>\n          <p>{}</p>\n        </div>",
            escape(&component.name),
            escape(&component.role)
        ));
    }
    let mut body = card_section("Architecture Visualization", &format!("<div class=\"arch-map\">{nodes}\n      </div>"));

    let mut layers = String::new();
    for (category, items) in group_by_category(&analysis.tech_stack) {
        layers.push_str(&format!("\n        <article class=\"stack-column\">\n          <h4>{}</h4>", category.label()));
        for item in items {
            let share = match item.percentage {
                Some(percentage) if percentage > 0 => format!(" <span class=\"muted\">({percentage}%)</span>"),
                _ => String::new(),
            };
            layers.push_str(&format!("<p class=\"mono\">{}{}</p>", escape(&item.name), share));
        }
        layers.push_str("\n        </article>");
    }
    body.push_str(&card_section("Tech Stack by Layer", &format!("<div class=\"stack-groups\">{layers}\n      </div>")));

    let steps = how_it_works(analysis);
    body.push_str(&card_section(
        "How It Works",
        &format!("<ol class=\"steps\">{}</ol>", list_items(steps.iter().map(String::as_str))),
    ));

    let mut commands = String::new();
    for (index, command) in analysis.getting_started.commands.iter().enumerate() {
        commands.push_str("\n      <div class=\"code-wrap\">\n        ");
        if renderer.copy_buttons {
            commands.push_str(&format!(
                "<button class=\"ghost-btn copy-btn\" data-copy-id=\"cmd-{index}\">Copy</button>\n        "
            ));
        }
        commands.push_str(&format!("<pre><code id=\"cmd-{}\">{}</code></pre>\n      </div>", index, escape(command)));
    }
    body.push_str(&card_section("Install and Run", &commands));

    let decisions = if analysis.design_decisions.is_empty() {
        format!("<p class=\"muted\">{NO_DECISIONS}</p>")
    } else {
        analysis
            .design_decisions
            .iter()
            .map(|decision| {
                format!(
                    "\n      <details class=\"decision\">\n        <summary>{}</summary>\n        <p>{}</p>\n      </details>",
                    escape(&short_summary(decision)),
                    escape(decision)
                )
            })
            .collect()
    };
    body.push_str(&card_section("Design Decisions", &decisions));

    body.push_str(&format!(
        "\n    <section class=\"card metric-strip\">\n      <article><p class=\"muted mono\">Maturity</p><h4>{}</h4></article>\n      <article><p class=\"muted mono\">Open Issues</p><h4>{}</h4></article>\n      <article><p class=\"muted mono\">Updated</p><h4>{}</h4></article>\n      <article><p class=\"muted mono\">Contributors</p><h4>{}</h4></article>\n    </section>\n",
        escape(analysis.maturity.level.as_str()),
        format_number(meta.open_issues),
        escape(&format_date(&meta.updated_at)),
        format_number(analysis.metrics.contributors)
    ));

    body.push_str(&format!(
        "\n    <section class=\"section-actions\">\n      {}\n    </section>\n",
        primary_link(&meta.repo_url, "Open Repository")
    ));

    let script = if renderer.copy_buttons { CLIPBOARD_SCRIPT } else { "" };
    render_page(renderer, PageKey::Engineering, analysis, &hero, &body, script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::{empty_analysis, sample_analysis};

    #[test]
    fn test_thesis_uses_language_and_pattern() {
        let analysis = sample_analysis();
        let thesis = technical_thesis(&analysis);
        assert!(thesis.starts_with("shipyard uses a "));
        assert!(thesis.contains("built primarily with TypeScript."));

        let empty = empty_analysis();
        assert!(technical_thesis(&empty).contains("built primarily with multi-language."));
    }

    #[test]
    fn test_how_it_works_names_first_components() {
        let analysis = sample_analysis();
        let steps = how_it_works(&analysis);
        let names: Vec<&str> = analysis.architecture.components.iter().take(3).map(|c| c.name.as_str()).collect();

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[2], format!("Activate key modules: {}.", names.join(", ")));
        assert_eq!(steps[1], "Initialize the runtime environment for TypeScript components.");
    }

    #[test]
    fn test_stack_layers_show_percentages() {
        let html = render(&DocumentRenderer::new(), &sample_analysis());
        assert!(html.contains("<h4>Language</h4><p class=\"mono\">TypeScript <span class=\"muted\">(90%)</span></p>"));
        assert!(html.contains("<p class=\"mono\">Express.js</p>"));
    }

    #[test]
    fn test_command_blocks_are_copyable() {
        let html = render(&DocumentRenderer::new(), &sample_analysis());
        assert!(html.contains("data-copy-id=\"cmd-0\""));
        assert!(html.contains("<code id=\"cmd-0\">"));
        assert!(html.contains("navigator.clipboard"));
    }

    #[test]
    fn test_copy_buttons_can_be_disabled() {
        let renderer = DocumentRenderer::new().with_copy_buttons(false);
        let html = render(&renderer, &sample_analysis());
        assert!(!html.contains("data-copy-id"));
        assert!(!html.contains("navigator.clipboard"));
        assert!(html.contains("<code id=\"cmd-0\">"));
    }

    #[test]
    fn test_design_decisions_fallback() {
        let mut analysis = sample_analysis();
        assert!(html_has_details(&render(&DocumentRenderer::new(), &analysis)));

        analysis.design_decisions.clear();
        let html = render(&DocumentRenderer::new(), &analysis);
        assert!(html.contains(NO_DECISIONS));
        assert!(!html_has_details(&html));
    }

    #[test]
    fn test_metric_strip() {
        let html = render(&DocumentRenderer::new(), &sample_analysis());
        assert!(html.contains("<p class=\"muted mono\">Updated</p><h4>2024-06-05</h4>"));
        assert!(html.contains("<p class=\"muted mono\">Open Issues</p><h4>37</h4>"));
    }

    #[test]
    fn test_metric_strip_groups_thousands() {
        let mut analysis = sample_analysis();
        analysis.meta.open_issues = 12345;
        analysis.metrics.contributors = 1200;
        let html = render(&DocumentRenderer::new(), &analysis);

        assert!(html.contains("<p class=\"muted mono\">Open Issues</p><h4>12,345</h4>"));
        assert!(html.contains("<p class=\"muted mono\">Contributors</p><h4>1,200</h4>"));
        assert!(!html.contains("12345"));
    }

    fn html_has_details(html: &str) -> bool {
        html.contains("<details class=\"decision\">")
    }
}
