//! RepoLens Render - Five-perspective HTML documents
//!
//! Turns an [`AnalysisResult`] into five self-contained HTML documents, one
//! per audience:
//! - `index`: hub with headline stats and links to every perspective
//! - `engineering`: architecture, stack, setup commands, design decisions
//! - `product`: value, features, personas, use cases
//! - `capability`: domain map and reuse opportunities
//! - `executive`: strategic summary and evidence
//!
//! Rendering is pure and deterministic. Only [`DocumentSet::write_to_dir`]
//! touches the file system.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use repolens_core::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub mod html;
pub mod theme;
pub mod layout;
pub mod radial;
pub mod pages;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while writing documents
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] repolens_utils::UtilError),
}

/// One of the five generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PageKey {
    #[cfg_attr(feature = "clap", value(name = "index", alias = "hub"))]
    Index,
    Engineering,
    Product,
    Capability,
    Executive,
}

impl PageKey {
    /// All documents in navigation order
    pub fn all() -> [PageKey; 5] {
        [
            PageKey::Index,
            PageKey::Engineering,
            PageKey::Product,
            PageKey::Capability,
            PageKey::Executive,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Index => "index",
            PageKey::Engineering => "engineering",
            PageKey::Product => "product",
            PageKey::Capability => "capability",
            PageKey::Executive => "executive",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            PageKey::Index => "Hub",
            PageKey::Engineering => "Engineering",
            PageKey::Product => "Product",
            PageKey::Capability => "Capability",
            PageKey::Executive => "Executive",
        }
    }

    /// Intended readers
    pub fn audience(&self) -> &'static str {
        match self {
            PageKey::Index => "Everyone",
            PageKey::Engineering => "Developers",
            PageKey::Product => "End Users",
            PageKey::Capability => "Business Strategy",
            PageKey::Executive => "Leadership",
        }
    }

    /// One-line description used on hub cards
    pub fn summary(&self) -> &'static str {
        match self {
            PageKey::Index => "Entry point linking every perspective.",
            PageKey::Engineering => "Architecture, stack, and implementation depth.",
            PageKey::Product => "Value proposition, features, and user outcomes.",
            PageKey::Capability => "Cross-domain leverage and platform potential.",
            PageKey::Executive => "Strategic summary and evidence snapshot.",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.html", self.as_str())
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PageKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "index" | "hub" => Ok(PageKey::Index),
            "engineering" => Ok(PageKey::Engineering),
            "product" => Ok(PageKey::Product),
            "capability" => Ok(PageKey::Capability),
            "executive" => Ok(PageKey::Executive),
            _ => Err(format!(
                "Invalid page: '{s}'. Valid options: index, engineering, product, capability, executive"
            )),
        }
    }
}

/// The five rendered documents, in navigation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<(PageKey, String)>,
}

impl DocumentSet {
    pub fn get(&self, key: PageKey) -> Option<&str> {
        self.documents
            .iter()
            .find(|(page, _)| *page == key)
            .map(|(_, html)| html.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageKey, &str)> {
        self.documents.iter().map(|(page, html)| (*page, html.as_str()))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Bundle file name for a document (`<key>.html`)
    pub fn file_name(key: PageKey) -> String {
        key.file_name()
    }

    /// Write every document into `dir`, creating it if needed
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.documents.len());
        for (page, html) in &self.documents {
            written.push(repolens_utils::write_text_file(dir, &page.file_name(), html)?);
        }
        tracing::info!("wrote {} documents to {}", written.len(), dir.display());
        Ok(written)
    }
}

/// Stateless HTML renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentRenderer {
    /// Link the hosted web fonts; off by default so documents stay self-contained
    pub web_fonts: bool,
    /// Emit the clipboard script on the engineering document
    pub copy_buttons: bool,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self {
            web_fonts: false,
            copy_buttons: true,
        }
    }

    /// Builder pattern: enable/disable hosted web fonts
    pub fn with_web_fonts(mut self, enabled: bool) -> Self {
        self.web_fonts = enabled;
        self
    }

    /// Builder pattern: enable/disable copy-to-clipboard buttons
    pub fn with_copy_buttons(mut self, enabled: bool) -> Self {
        self.copy_buttons = enabled;
        self
    }

    /// Render a single document
    pub fn generate(&self, key: PageKey, analysis: &AnalysisResult) -> String {
        tracing::debug!("rendering {} document for {}", key, analysis.meta.full_name);
        match key {
            PageKey::Index => pages::hub::render(self, analysis),
            PageKey::Engineering => pages::engineering::render(self, analysis),
            PageKey::Product => pages::product::render(self, analysis),
            PageKey::Capability => pages::capability::render(self, analysis),
            PageKey::Executive => pages::executive::render(self, analysis),
        }
    }

    /// Render all five documents
    pub fn generate_all(&self, analysis: &AnalysisResult) -> DocumentSet {
        DocumentSet {
            documents: PageKey::all()
                .into_iter()
                .map(|key| (key, self.generate(key, analysis)))
                .collect(),
        }
    }
}

/// Render all five documents with default options
pub fn generate_all(analysis: &AnalysisResult) -> DocumentSet {
    DocumentRenderer::new().generate_all(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_parsing() {
        assert_eq!("hub".parse::<PageKey>(), Ok(PageKey::Index));
        assert_eq!("Executive".parse::<PageKey>(), Ok(PageKey::Executive));
        assert!("roadmap".parse::<PageKey>().is_err());
    }

    #[test]
    fn test_file_names() {
        let names: Vec<String> = PageKey::all().iter().map(PageKey::file_name).collect();
        assert_eq!(
            names,
            vec!["index.html", "engineering.html", "product.html", "capability.html", "executive.html"]
        );
    }
}
