//! Analysis pipeline

pub mod pipeline;

pub use pipeline::Analyzer;
