//! Row Validator Module
//! Field-level coercion of raw strings into typed values.
//!
//! Every parser trims the field first and returns either the value or the
//! reason it was rejected. Rejections are expected and the caller skips the row.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("field is empty")]
    Empty,
    #[error("field contains characters other than digits")]
    NotDigits,
    #[error("field is not a plain decimal number")]
    NotDecimal,
    #[error("field does not fit the integer type")]
    OutOfRange,
    #[error("field must be strictly positive")]
    NotPositive,
}

/// A plain non-negative integer: ASCII digits only, no sign, no point.
pub fn parse_count(raw: &str) -> Result<u32, FieldError> {
    let field = raw.trim();
    if field.is_empty() {
        return Err(FieldError::Empty);
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::NotDigits);
    }
    field.parse::<u32>().map_err(|_| FieldError::OutOfRange)
}

/// Like [`parse_count`] but zero is rejected too.
pub fn parse_positive_count(raw: &str) -> Result<u32, FieldError> {
    match parse_count(raw)? {
        0 => Err(FieldError::NotPositive),
        n => Ok(n),
    }
}

/// Digits with at most one decimal point anywhere: `5`, `5.25`, `.5`, `5.`.
/// Signs, exponents, a lone `.` and empty strings are rejected.
pub fn parse_decimal(raw: &str) -> Result<f64, FieldError> {
    let field = raw.trim();
    if field.is_empty() {
        return Err(FieldError::Empty);
    }

    let mut points = 0;
    let mut digits = 0;
    for b in field.bytes() {
        match b {
            b'.' => points += 1,
            b'0'..=b'9' => digits += 1,
            _ => return Err(FieldError::NotDecimal),
        }
    }
    if points > 1 || digits == 0 {
        return Err(FieldError::NotDecimal);
    }

    field.parse::<f64>().map_err(|_| FieldError::NotDecimal)
}

/// Grouping keys (id, profession, platform) compare trimmed and lowercased.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
