//! README heading keywords per extracted section
//!
//! A heading whose lower-cased text contains any keyword opens the section.

pub const FEATURE_SECTION: &[&str] = &["features", "capabilities", "what it does", "highlights"];

pub const USE_CASE_SECTION: &[&str] = &["use case", "who is this for", "examples", "scenarios"];

pub const GETTING_STARTED_SECTION: &[&str] =
    &["getting started", "installation", "quick start", "setup", "install"];

pub const DESIGN_SECTION: &[&str] = &["design", "rationale", "why", "philosophy", "approach"];
