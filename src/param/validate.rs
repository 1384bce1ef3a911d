//! Form-time validation of definition fields.
//!
//! Validation results are returned, not raised: a bad filter is reported to
//! the configuring user and never blocks saving the definition.

use regex::Regex;
use serde::Serialize;

/// Outcome of validating one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum ValidationResult {
    Ok,
    Error(String),
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationResult::Ok)
    }
}

/// Check that a candidate item filter is a compilable regex.
///
/// Blank input is fine (it means "offer everything"). Side-effect free; the
/// compiled pattern is discarded.
pub fn check_filter_syntax(candidate: &str) -> ValidationResult {
    if candidate.trim().is_empty() {
        return ValidationResult::Ok;
    }

    match Regex::new(candidate) {
        Ok(_) => ValidationResult::Ok,
        Err(e) => ValidationResult::Error(e.to_string()),
    }
}
