//! CLI configuration file
//!
//! Optional TOML / JSON / YAML file supplying defaults for the output
//! directory, log level, renderer options and user context. Command-line
//! flags override whatever the file sets.

use repolens_core::UserContext;
use repolens_utils::logging::LogLevel;
use repolens_utils::ConfigBuilder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepolensConfig {
    /// Directory the documents are written to
    pub output_dir: PathBuf,
    /// Also write `analysis.json` next to the documents
    pub write_analysis: bool,
    pub log_level: LogLevel,
    pub web_fonts: bool,
    pub copy_buttons: bool,
    /// Context used when neither flags nor a context file provide a field
    pub context: UserContext,
}

impl Default for RepolensConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("repolens-out"),
            write_analysis: false,
            log_level: LogLevel::Warn,
            web_fonts: false,
            copy_buttons: true,
            context: UserContext::default(),
        }
    }
}

impl RepolensConfig {
    /// Defaults layered with an optional config file
    pub fn load(path: Option<&Path>) -> repolens_utils::Result<Self> {
        ConfigBuilder::new().load_optional_file(path)?.build()
    }
}
