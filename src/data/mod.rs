//! Data module - delimited text loading and field validation

mod loader;
mod validator;

pub use loader::{DataLoader, LoadOutcome, LoaderError, Table};
pub use validator::{normalize_key, parse_count, parse_decimal, parse_positive_count, FieldError};
