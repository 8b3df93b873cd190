//! Analysis record
//!
//! The typed output of the extraction pipeline. Every list is already
//! capped and deduplicated and every text field already resolved through
//! its fallback, so renderers can consume it without further checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::context::UserContext;

/// Complete analysis of one repository snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub meta: RepoMeta,
    pub tech_stack: Vec<TechItem>,
    pub architecture: Architecture,
    pub features: Vec<Feature>,
    pub use_cases: Vec<String>,
    pub personas: Vec<Persona>,
    pub metrics: RepoMetrics,
    pub narrative: String,
    pub domains: Vec<Domain>,
    pub maturity: Maturity,
    pub getting_started: GettingStarted,
    pub design_decisions: Vec<String>,
    pub context: UserContext,
}

impl AnalysisResult {
    /// First detected tech item of a category
    pub fn first_of(&self, category: TechCategory) -> Option<&TechItem> {
        self.tech_stack.iter().find(|item| item.category == category)
    }

    /// Whether any tech item name contains `needle` (case-sensitive)
    pub fn stack_mentions(&self, needle: &str) -> bool {
        self.tech_stack.iter().any(|item| item.name.contains(needle))
    }
}

/// Normalized repository metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoMeta {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub repo: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    /// Host-reported primary language, empty when unknown
    pub primary_language: String,
    pub topics: Vec<String>,
    pub license: String,
    pub homepage: String,
    pub created_at: String,
    pub updated_at: String,
    pub repo_url: String,
    pub is_archived: bool,
    pub default_branch: String,
}

/// Category of a detected technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Language,
    Runtime,
    Framework,
    Database,
    Api,
    Testing,
    Styling,
    Infrastructure,
    Ci,
    Data,
    Ai,
}

impl TechCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::Language => "language",
            TechCategory::Runtime => "runtime",
            TechCategory::Framework => "framework",
            TechCategory::Database => "database",
            TechCategory::Api => "api",
            TechCategory::Testing => "testing",
            TechCategory::Styling => "styling",
            TechCategory::Infrastructure => "infrastructure",
            TechCategory::Ci => "ci",
            TechCategory::Data => "data",
            TechCategory::Ai => "ai",
        }
    }

    /// Heading used when the stack is grouped by category
    pub fn label(&self) -> &'static str {
        match self {
            TechCategory::Language => "Language",
            TechCategory::Runtime => "Runtime",
            TechCategory::Framework => "Framework",
            TechCategory::Database => "Database",
            TechCategory::Api => "API",
            TechCategory::Testing => "Testing",
            TechCategory::Styling => "Styling",
            TechCategory::Infrastructure => "Infrastructure",
            TechCategory::Ci => "CI",
            TechCategory::Data => "Data",
            TechCategory::Ai => "AI",
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected technology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    #[serde(rename = "type")]
    pub category: TechCategory,
    /// Share of the language byte histogram (languages only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
}

impl TechItem {
    pub fn new(name: impl Into<String>, category: TechCategory) -> Self {
        Self { name: name.into(), category, percentage: None }
    }

    pub fn language(name: impl Into<String>, percentage: u8) -> Self {
        Self { name: name.into(), category: TechCategory::Language, percentage: Some(percentage) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    pub components: Vec<Component>,
    pub patterns: Vec<String>,
    pub deployment: Vec<String>,
}

impl Architecture {
    pub fn primary_pattern(&self) -> &str {
        self.patterns.first().map_or("modular architecture", String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub role: String,
    pub pain: String,
    pub benefit: String,
}

/// Values echoed from the user context into the metrics block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProvidedMetrics {
    pub metrics: String,
    pub use_cases: Vec<String>,
    pub industry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoMetrics {
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    pub contributors: u64,
    pub releases: u64,
    pub last_updated: String,
    pub days_since_update: u64,
    pub user_provided: UserProvidedMetrics,
}

/// How a domain label was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Explicit,
    Inferred,
    Default,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Explicit => "explicit",
            Confidence::Inferred => "inferred",
            Confidence::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub confidence: Confidence,
}

impl Domain {
    pub fn new(name: impl Into<String>, confidence: Confidence) -> Self {
        Self { name: name.into(), confidence }
    }
}

/// Maturity bands, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityLevel {
    Experimental,
    #[serde(rename = "Early Stage")]
    EarlyStage,
    #[serde(rename = "Active Development")]
    ActiveDevelopment,
    #[serde(rename = "Production-Ready")]
    ProductionReady,
}

impl MaturityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityLevel::Experimental => "Experimental",
            MaturityLevel::EarlyStage => "Early Stage",
            MaturityLevel::ActiveDevelopment => "Active Development",
            MaturityLevel::ProductionReady => "Production-Ready",
        }
    }

    pub fn badge(&self) -> BadgeColor {
        match self {
            MaturityLevel::Experimental => BadgeColor::Blue,
            MaturityLevel::EarlyStage => BadgeColor::Orange,
            MaturityLevel::ActiveDevelopment => BadgeColor::Yellow,
            MaturityLevel::ProductionReady => BadgeColor::Green,
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Yellow,
    Orange,
    Blue,
}

impl BadgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Orange => "orange",
            BadgeColor::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maturity {
    pub level: MaturityLevel,
    pub badge: BadgeColor,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GettingStarted {
    pub steps: String,
    pub commands: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maturity_levels_order_and_badges() {
        assert!(MaturityLevel::ProductionReady > MaturityLevel::ActiveDevelopment);
        assert!(MaturityLevel::EarlyStage > MaturityLevel::Experimental);
        assert_eq!(MaturityLevel::ProductionReady.badge(), BadgeColor::Green);
        assert_eq!(MaturityLevel::Experimental.badge(), BadgeColor::Blue);
    }

    #[test]
    fn test_serialized_field_names() {
        let item = TechItem::language("Rust", 87);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "language");
        assert_eq!(json["percentage"], 87);

        let framework = serde_json::to_value(TechItem::new("React", TechCategory::Framework)).unwrap();
        assert!(framework.get("percentage").is_none());

        let level = serde_json::to_value(MaturityLevel::ProductionReady).unwrap();
        assert_eq!(level, "Production-Ready");
    }
}
