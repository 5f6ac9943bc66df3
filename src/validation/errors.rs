//! Validation error types
//!
//! A validation error names the offending field, the condition it had to
//! satisfy, and what was actually found.

use thiserror::Error;

/// A payload field violated a rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field}: expected {expected}, found {actual}")]
pub struct ValidationError {
    /// Wire name of the field (e.g. "crewSize")
    pub field: &'static str,
    /// Condition the field must satisfy
    pub expected: String,
    /// What the payload carried
    pub actual: String,
}

impl ValidationError {
    pub fn new(
        field: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Required field omitted on create
    pub fn missing_field(field: &'static str) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    /// Field explicitly set to null
    pub fn null_value(field: &'static str) -> Self {
        Self::new(field, "non-null value", "null")
    }

    pub fn out_of_range(
        field: &'static str,
        expected: impl Into<String>,
        actual: impl ToString,
    ) -> Self {
        Self::new(field, expected, actual.to_string())
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field_and_rule() {
        let err = ValidationError::out_of_range("speed", "value in [0.01, 0.99]", 1.5);
        let display = err.to_string();
        assert!(display.contains("speed"));
        assert!(display.contains("[0.01, 0.99]"));
        assert!(display.contains("1.5"));
    }

    #[test]
    fn test_missing_field() {
        let err = ValidationError::missing_field("name");
        assert_eq!(err.field, "name");
        assert_eq!(err.actual, "missing");
    }
}
