//! Domain inference keywords
//!
//! `(token, domain label)` pairs matched as substrings of the lower-cased
//! topics, description and README opening. Several tokens may share a label.

pub const DOMAIN_KEYWORDS: &[(&str, &str)] = &[
    ("healthcare", "Healthcare & Life Sciences"),
    ("finance", "Financial Services"),
    ("fintech", "Financial Technology"),
    ("education", "Education & EdTech"),
    ("devops", "DevOps & Platform Engineering"),
    ("security", "Cybersecurity"),
    ("ecommerce", "E-commerce & Retail"),
    ("retail", "E-commerce & Retail"),
    ("analytics", "Data & Analytics"),
    ("data", "Data & Analytics"),
    ("ml", "Artificial Intelligence & ML"),
    ("ai", "Artificial Intelligence & ML"),
    ("api", "API & Integration"),
    ("cli", "Developer Tooling"),
    ("cloud", "Cloud Infrastructure"),
    ("automation", "Workflow Automation"),
];

/// Always present unless already listed
pub const DEFAULT_DOMAINS: &[&str] = &["Software Engineering", "Developer Productivity"];

/// README characters scanned for domain tokens
pub const README_SCAN_CHARS: usize = 3000;
