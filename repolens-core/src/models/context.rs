//! User-supplied context
//!
//! Four optional free-text fields that steer use cases, personas, domains
//! and the narrative. List-like fields accept newline, comma or semicolon
//! separated items.

use repolens_utils::split_user_list;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserContext {
    pub industry: String,
    #[serde(alias = "use_cases")]
    pub use_cases: String,
    pub metrics: String,
    pub personas: String,
}

impl UserContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    pub fn with_use_cases(mut self, use_cases: impl Into<String>) -> Self {
        self.use_cases = use_cases.into();
        self
    }

    pub fn with_metrics(mut self, metrics: impl Into<String>) -> Self {
        self.metrics = metrics.into();
        self
    }

    pub fn with_personas(mut self, personas: impl Into<String>) -> Self {
        self.personas = personas.into();
        self
    }

    /// Load a context file (TOML, JSON or YAML by extension)
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        Ok(repolens_utils::load_config(path)?)
    }

    /// Copy with every field trimmed
    pub fn normalized(&self) -> Self {
        Self {
            industry: self.industry.trim().to_string(),
            use_cases: self.use_cases.trim().to_string(),
            metrics: self.metrics.trim().to_string(),
            personas: self.personas.trim().to_string(),
        }
    }

    /// Fill blank fields from `defaults`
    pub fn or_defaults(mut self, defaults: &UserContext) -> Self {
        for (field, fallback) in [
            (&mut self.industry, &defaults.industry),
            (&mut self.use_cases, &defaults.use_cases),
            (&mut self.metrics, &defaults.metrics),
            (&mut self.personas, &defaults.personas),
        ] {
            if field.trim().is_empty() {
                field.clone_from(fallback);
            }
        }
        self
    }

    pub fn use_case_list(&self) -> Vec<String> {
        split_user_list(&self.use_cases)
    }

    pub fn persona_list(&self) -> Vec<String> {
        split_user_list(&self.personas)
    }

    pub fn industry(&self) -> Option<&str> {
        Some(self.industry.trim()).filter(|industry| !industry.is_empty())
    }

    pub fn metrics(&self) -> Option<&str> {
        Some(self.metrics.trim()).filter(|metrics| !metrics.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.industry().is_none()
            && self.metrics().is_none()
            && self.use_case_list().is_empty()
            && self.persona_list().is_empty()
    }
}
