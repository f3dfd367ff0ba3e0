//! Social Stats - social-media usage analysis
//!
//! Reads a comma-delimited usage table and derives profession segments,
//! per-platform engagement, age/income similarity and an effect size.

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use pipeline::{analyze, run, run_outcome, AnalysisReport};
