//! RepoLens Core - Snapshot Model and Heuristic Extraction Engine
//!
//! This crate turns a raw repository snapshot (metadata, README text, file
//! listing, manifests) plus optional user context into a typed
//! [`AnalysisResult`]:
//! - data models for the snapshot, the user context and the analysis record
//! - immutable keyword / threshold catalogues
//! - one extractor per analysis field
//! - the [`Analyzer`] pipeline that sequences them
//!
//! Extraction never fails: every absent or malformed input resolves through
//! a fallback. Only loading a snapshot or context from disk can error.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
)]
#![allow(
    clippy::module_name_repetitions,  // Often necessary for clarity
)]

pub mod constants;
pub mod models;
pub mod extractors;
pub mod analysis;

pub use analysis::Analyzer;
pub use models::{
    snapshot::{RawSnapshot, TreeEntry, EntryKind, MetaReader},
    context::UserContext,
    analysis_result::{
        AnalysisResult, RepoMeta, TechItem, TechCategory, Architecture, Component,
        Feature, Persona, RepoMetrics, UserProvidedMetrics, Domain, Confidence,
        Maturity, MaturityLevel, BadgeColor, GettingStarted,
    },
};
pub use extractors::metrics::parse_timestamp;

/// Result type used throughout RepoLens core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for RepoLens core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] repolens_utils::UtilError),
}

/// Analyze a snapshot against the wall clock
///
/// Shorthand for `Analyzer::new().analyze(snapshot, context)`.
pub fn analyze(snapshot: &RawSnapshot, context: &UserContext) -> AnalysisResult {
    Analyzer::new().analyze(snapshot, context)
}
