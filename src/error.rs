//! Errors raised by the analyzers.
//!
//! Row-level invalidity is never an error: bad rows are skipped. These
//! variants signal a violated precondition for a whole analysis call.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("column not found: '{0}'")]
    ColumnNotFound(String),
    #[error("lists must be of the same length (ages: {ages}, incomes: {incomes})")]
    LengthMismatch { ages: usize, incomes: usize },
    #[error("sample variance needs at least 2 values per group (got {first} and {second})")]
    InsufficientSamples { first: usize, second: usize },
}
