//! SVG capability map: the project at the centre, one spoke per domain

use repolens_core::Domain;
use std::f64::consts::PI;

use crate::html::{escape, trim_label};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 340;
const CENTER_X: f64 = 320.0;
const CENTER_Y: f64 = 170.0;
const RADIUS: f64 = 120.0;
const LABEL_CHARS: usize = 15;

/// Rounded spoke end point for domain `index` of `count`
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn spoke_point(index: usize, count: usize) -> (i64, i64) {
    let angle = (PI * 2.0 * index as f64) / count.max(1) as f64;
    (
        (CENTER_X + angle.cos() * RADIUS).round() as i64,
        (CENTER_Y + angle.sin() * RADIUS).round() as i64,
    )
}

pub fn domain_radial(project_name: &str, domains: &[Domain]) -> String {
    let points: Vec<(i64, i64, &str)> = domains
        .iter()
        .enumerate()
        .map(|(index, domain)| {
            let (x, y) = spoke_point(index, domains.len());
            (x, y, domain.name.as_str())
        })
        .collect();

    let mut svg = format!(
        "\n    <svg width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" role=\"img\" aria-label=\"Capability map\">\n      "
    );
    for (x, y, _) in &points {
        svg.push_str(&format!(
            "<line x1=\"{CENTER_X}\" y1=\"{CENTER_Y}\" x2=\"{x}\" y2=\"{y}\" stroke=\"#30363d\" stroke-dasharray=\"4 5\"/>"
        ));
    }
    svg.push_str(&format!(
        "\n      <circle cx=\"{CENTER_X}\" cy=\"{CENTER_Y}\" r=\"54\" fill=\"#161b22\" stroke=\"#58a6ff\" stroke-width=\"2\"></circle>\n      <text x=\"{CENTER_X}\" y=\"{CENTER_Y}\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"#e6edf3\" font-size=\"13\" font-family=\"JetBrains Mono\">{}</text>",
        escape(project_name)
    ));
    for (x, y, label) in &points {
        svg.push_str(&format!(
            "\n      <circle cx=\"{x}\" cy=\"{y}\" r=\"38\" fill=\"#0d1117\" stroke=\"#30363d\" stroke-width=\"1.5\"></circle>\n      <text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"#8b949e\" font-size=\"11\" font-family=\"JetBrains Mono\">{}</text>",
            escape(&trim_label(label, LABEL_CHARS))
        ));
    }
    svg.push_str("\n    </svg>\n  ");
    svg
}
