//! Data models for RepoLens
//!
//! The raw snapshot consumed by the extractors, the user context that
//! steers them, and the analysis record they produce.

pub mod snapshot;
pub mod context;
pub mod analysis_result;

pub use snapshot::{RawSnapshot, TreeEntry, EntryKind, MetaReader};
pub use context::UserContext;
pub use analysis_result::*;
