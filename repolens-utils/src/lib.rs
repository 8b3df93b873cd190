//! RepoLens Utilities
//!
//! Small, dependency-light helpers shared by the extractor, the renderer
//! and the command-line adapter:
//! - sentence cleaning, title casing and list splitting for free text
//! - TOML / JSON / YAML configuration loading
//! - tracing subscriber setup
//! - guarded path joins for writing document bundles

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod file;
pub mod string;
pub mod config;
pub mod logging;

/// Re-export commonly used utilities
pub use file::{safe_path_join, normalize_path, ensure_dir, write_text_file};
pub use string::{
    safe_truncate, truncate_with_suffix, normalize_whitespace, clean_sentence, to_title,
    split_user_list, dedupe,
};
pub use config::{load_config, merge_configs, validate_config, ConfigBuilder};

/// Result type used throughout RepoLens utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path operation error
    #[error("Path operation error: {0}")]
    PathOperation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}
