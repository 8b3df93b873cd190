//! Palette selection and the shared stylesheet

/// Accent colours derived from the primary language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: &'static str,
    pub accent_soft: &'static str,
}

pub const DEFAULT_PALETTE: Palette = Palette { accent: "#58a6ff", accent_soft: "rgba(88, 166, 255, 0.2)" };

/// `(language fragment, palette)`; matched as substrings of the lower-cased language
const LANGUAGE_PALETTES: &[(&str, Palette)] = &[
    ("javascript", Palette { accent: "#f7df1e", accent_soft: "rgba(247, 223, 30, 0.2)" }),
    ("typescript", Palette { accent: "#f7df1e", accent_soft: "rgba(247, 223, 30, 0.2)" }),
    ("python", Palette { accent: "#3572A5", accent_soft: "rgba(53, 114, 165, 0.2)" }),
    ("rust", Palette { accent: "#DEA584", accent_soft: "rgba(222, 165, 132, 0.2)" }),
];

/// Go only matches exactly; the fragment would hit too many other names
const GO_PALETTE: Palette = Palette { accent: "#00ACD7", accent_soft: "rgba(0, 172, 215, 0.2)" };

pub fn palette_for(language: &str) -> Palette {
    let language = language.to_lowercase();
    LANGUAGE_PALETTES
        .iter()
        .find(|(fragment, _)| language.contains(fragment))
        .map(|(_, palette)| *palette)
        .or_else(|| (language == "go").then_some(GO_PALETTE))
        .unwrap_or(DEFAULT_PALETTE)
}

/// Hosted font stylesheet links
pub const FONT_LINKS: &str = r#"<link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=DM+Sans:wght@400;500;700&family=JetBrains+Mono:wght@400;600&family=Syne:wght@600;700;800&display=swap" rel="stylesheet">"#;

/// Inline `<style>` block for a palette
pub fn stylesheet(palette: Palette) -> String {
    format!(
        "<style>\n    :root {{\n      --bg: #0d1117;\n      --surface: #161b22;\n      --border: #30363d;\n      --text: #e6edf3;\n      --muted: #8b949e;\n      --accent: {};\n      --accent-soft: {};\n    }}\n{}  </style>",
        palette.accent, palette.accent_soft, BASE_CSS
    )
}

const BASE_CSS: &str = r#"    * { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
      margin: 0;
      font-family: 'DM Sans', sans-serif;
      background: radial-gradient(circle at 20% -10%, rgba(88, 166, 255, 0.14), transparent 45%), var(--bg);
      color: var(--text);
      padding-top: 56px;
      min-height: 100vh;
    }
    .mono { font-family: 'JetBrains Mono', monospace; }
    .muted { color: var(--muted); }
    .top-nav {
      position: fixed;
      top: 0;
      left: 0;
      right: 0;
      height: 48px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      background: rgba(13, 17, 23, 0.96);
      border-bottom: 1px solid var(--border);
      padding: 0 18px;
      z-index: 20;
      backdrop-filter: blur(8px);
    }
    .nav-links { display: flex; gap: 8px; flex-wrap: wrap; }
    .nav-link, .repo-link {
      color: var(--text);
      text-decoration: none;
      font-size: 12px;
      border: 1px solid transparent;
      padding: 6px 10px;
      border-radius: 8px;
      transition: all .2s ease;
    }
    .nav-link:hover, .repo-link:hover {
      border-color: var(--border);
      background: rgba(255, 255, 255, 0.04);
    }
    .nav-link.active {
      border-color: var(--accent);
      background: var(--accent-soft);
      color: var(--accent);
    }
    main {
      width: min(1100px, 92%);
      margin: 28px auto 28px;
      display: grid;
      gap: 18px;
      animation: enter .5s ease both;
    }
    .hero {
      background: linear-gradient(135deg, var(--accent-soft), rgba(88, 166, 255, 0.03));
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 28px;
      display: grid;
      gap: 12px;
    }
    .hero-gradient { position: relative; overflow: hidden; }
    .hero-gradient::before {
      content: '';
      position: absolute;
      inset: -30%;
      background: linear-gradient(120deg, transparent, rgba(255, 255, 255, 0.08), transparent);
      animation: sweep 7s linear infinite;
    }
    .hero > * { position: relative; z-index: 1; }
    .hero h1 {
      margin: 0;
      font-family: 'Syne', sans-serif;
      font-size: clamp(32px, 5vw, 52px);
      line-height: 1.05;
    }
    .hero .lead { margin: 0; color: var(--text); max-width: 80ch; }
    .eyebrow {
      margin: 0;
      color: var(--accent);
      text-transform: uppercase;
      letter-spacing: 0.08em;
      font-size: 12px;
      font-family: 'JetBrains Mono', monospace;
    }
    .badge {
      display: inline-flex;
      width: fit-content;
      padding: 7px 12px;
      border-radius: 999px;
      font-size: 13px;
      border: 1px solid var(--border);
      background: rgba(255, 255, 255, 0.03);
    }
    .badge-green { color: #3fb950; border-color: #3fb95066; }
    .badge-yellow { color: #d29922; border-color: #d2992266; }
    .badge-orange { color: #f0883e; border-color: #f0883e66; }
    .badge-blue { color: #58a6ff; border-color: #58a6ff66; }
    .card {
      background: var(--surface);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 18px;
      animation: rise .45s ease both;
    }
    .stats-grid, .split-grid, .metric-strip {
      display: grid;
      gap: 12px;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    }
    .stat-card h2 { margin: 8px 0 0; font-size: 30px; }
    .chip-row { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 10px; }
    .chip {
      font-size: 12px;
      padding: 6px 10px;
      border-radius: 999px;
      border: 1px solid var(--border);
      background: rgba(255, 255, 255, 0.04);
      font-family: 'JetBrains Mono', monospace;
    }
    .chip.subtle { color: var(--muted); }
    .primary-btn, .ghost-btn {
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
      border-radius: 10px;
      text-decoration: none;
      font-weight: 600;
      cursor: pointer;
      font-family: 'JetBrains Mono', monospace;
      font-size: 12px;
      padding: 9px 12px;
      border: 1px solid transparent;
      transition: all .2s ease;
      color: var(--text);
      background: transparent;
    }
    .primary-btn { background: var(--accent); color: #0d1117; }
    .primary-btn:hover { filter: brightness(1.08); }
    .ghost-btn { border-color: var(--border); background: rgba(255, 255, 255, 0.02); }
    .ghost-btn:hover { border-color: var(--accent); color: var(--accent); }
    .section-actions { margin-top: 14px; display: flex; gap: 8px; flex-wrap: wrap; }
    .plain-list { margin: 8px 0 0; padding-left: 18px; display: grid; gap: 8px; }
    .compare { width: 100%; border-collapse: collapse; margin-top: 8px; font-size: 14px; }
    .compare th, .compare td {
      text-align: left;
      border: 1px solid var(--border);
      padding: 10px;
      vertical-align: top;
    }
    .compare th { background: rgba(255, 255, 255, 0.03); }
    .journey { display: flex; flex-wrap: wrap; align-items: center; gap: 8px; margin-top: 8px; }
    .journey-step {
      min-width: 120px;
      flex: 1;
      background: rgba(255, 255, 255, 0.03);
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 12px;
      text-align: center;
    }
    .journey-step span {
      display: inline-flex;
      width: 26px;
      height: 26px;
      border-radius: 50%;
      align-items: center;
      justify-content: center;
      background: var(--accent);
      color: #0d1117;
      font-weight: 700;
      margin-bottom: 6px;
    }
    .journey-link { color: var(--accent); font-family: 'JetBrains Mono', monospace; }
    .stack-groups { display: grid; gap: 10px; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); }
    .stack-column {
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 12px;
      background: rgba(255, 255, 255, 0.02);
    }
    .stack-column h4 { margin: 0 0 8px; }
    .steps { margin: 8px 0 0; display: grid; gap: 8px; padding-left: 18px; }
    .arch-map {
      display: grid;
      gap: 14px;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      margin-top: 8px;
    }
    .arch-node {
      border: 1px solid var(--border);
      border-radius: 12px;
      padding: 12px;
      background: rgba(255, 255, 255, 0.03);
      position: relative;
    }
    .arch-node::after {
      content: '';
      position: absolute;
      right: -9px;
      top: 50%;
      width: 8px;
      border-top: 1px dashed var(--border);
    }
    .arch-node h4 { margin: 0 0 8px; }
    .arch-node p { margin: 0; color: var(--muted); font-size: 14px; }
    .code-wrap { position: relative; margin-top: 10px; }
    pre {
      margin: 0;
      background: #0b0f14;
      border: 1px solid #27313b;
      border-radius: 12px;
      padding: 14px;
      overflow: auto;
      color: #c9d1d9;
    }
    .copy-btn { position: absolute; top: 8px; right: 8px; }
    details.decision {
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 10px;
      margin-top: 8px;
      background: rgba(255, 255, 255, 0.02);
    }
    details.decision summary { cursor: pointer; font-weight: 600; }
    .perspective-card { border-left: 3px solid var(--accent); }
    .audience-engineering { border-left-color: #3fb950; }
    .audience-product { border-left-color: #58a6ff; }
    .audience-capability { border-left-color: #d29922; }
    .audience-executive { border-left-color: #f0883e; }
    .feature-card h4 { margin: 0 0 8px; }
    .quote blockquote {
      margin: 0;
      border-left: 4px solid var(--accent);
      padding: 12px 14px;
      font-style: italic;
      font-size: clamp(18px, 3vw, 24px);
      line-height: 1.4;
      background: rgba(255, 255, 255, 0.02);
    }
    .radial-wrap {
      background: radial-gradient(circle, var(--accent-soft), transparent 65%);
      border-radius: 14px;
      min-height: 340px;
      display: grid;
      place-items: center;
      overflow: auto;
    }
    .footer {
      width: min(1100px, 92%);
      margin: 16px auto 24px;
      padding: 12px 14px;
      border: 1px solid var(--border);
      border-radius: 12px;
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      justify-content: space-between;
      align-items: center;
      background: var(--surface);
      font-size: 12px;
    }
    @keyframes enter {
      from { opacity: 0; transform: translateY(8px); }
      to { opacity: 1; transform: translateY(0); }
    }
    @keyframes rise {
      from { opacity: 0; transform: translateY(12px); }
      to { opacity: 1; transform: translateY(0); }
    }
    @keyframes sweep {
      from { transform: translateX(-35%); }
      to { transform: translateX(40%); }
    }
    @media (max-width: 760px) {
      body { padding-top: 70px; }
      .top-nav { height: auto; min-height: 56px; padding: 8px 12px; flex-direction: column; align-items: flex-start; gap: 8px; }
      .journey-link { display: none; }
      .footer { flex-direction: column; align-items: flex-start; }
      .arch-node::after { display: none; }
    }
"#;
