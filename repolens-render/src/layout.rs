//! Document shell shared by every perspective
//!
//! Head (title, fonts, palette stylesheet), top navigation, footer and the
//! trailing script block.

use repolens_core::{AnalysisResult, RepoMeta};

use crate::html::escape;
use crate::theme::{palette_for, stylesheet, FONT_LINKS};
use crate::{DocumentRenderer, PageKey};

/// Wrap a hero and body in the full document shell
pub fn render_page(
    renderer: &DocumentRenderer,
    key: PageKey,
    analysis: &AnalysisResult,
    hero: &str,
    body: &str,
    script: &str,
) -> String {
    let meta = &analysis.meta;
    let palette = palette_for(&meta.primary_language);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "  <title>{} - {} | RepoLens</title>\n",
        escape(key.label()),
        escape(&meta.name)
    ));
    if renderer.web_fonts {
        html.push_str(&format!("  {FONT_LINKS}\n"));
    }
    html.push_str(&format!("  {}\n", stylesheet(palette)));
    html.push_str("</head>\n<body>\n");
    html.push_str(&render_nav(key, meta));
    html.push_str(&format!("  <main>{hero}{body}</main>\n"));
    html.push_str(&render_footer(meta));
    html.push_str(&format!("  <script>{script}</script>\n"));
    html.push_str("</body>\n</html>");
    html
}

/// Top navigation with the current document marked active
pub fn render_nav(current: PageKey, meta: &RepoMeta) -> String {
    let mut links = String::new();
    for key in PageKey::all() {
        let class = if key == current { "nav-link active" } else { "nav-link" };
        links.push_str(&format!(
            "<a class=\"{}\" href=\"./{}\">{}</a>",
            class,
            key.file_name(),
            key.label()
        ));
    }

    format!(
        "  <nav class=\"top-nav\">\n    <div class=\"nav-links\">{}</div>\n    <a class=\"repo-link mono\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">GitHub -&gt;</a>\n  </nav>\n",
        links,
        escape(&meta.repo_url)
    )
}

pub fn render_footer(meta: &RepoMeta) -> String {
    format!(
        "  <footer class=\"footer\">\n    <div class=\"mono\">RepoLens | Generated by RepoLens</div>\n    <div class=\"mono\">{}</div>\n    <a class=\"ghost-btn\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">View on GitHub</a>\n  </footer>\n",
        escape(&meta.full_name),
        escape(&meta.repo_url)
    )
}
