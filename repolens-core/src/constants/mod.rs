//! Constants module for RepoLens core
//!
//! Keyword catalogues, path rules, scoring thresholds and list caps used by
//! the extractors. Everything here is immutable data; ordering inside each
//! table is significant because detection order is output order.

pub mod path_rules;
pub mod tech_signals;
pub mod architecture_signals;
pub mod domain_keywords;
pub mod maturity_thresholds;
pub mod section_keywords;
pub mod limits;

pub use path_rules::PathRule;
pub use tech_signals::{TechSignal, NODE_DEPENDENCY_SIGNALS, PYTHON_DEPENDENCY_SIGNALS, CARGO_DEPENDENCY_SIGNALS};
pub use maturity_thresholds::MaturityThresholds;
