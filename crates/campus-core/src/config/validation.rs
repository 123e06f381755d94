//! Configuration validation rules

use crate::CampusError;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Value is required but empty
    #[error("Field '{field}' is required but empty")]
    Required {
        /// Offending field
        field: String,
    },
    /// Value is not one of the accepted choices
    #[error("Field '{field}' must be one of [{}] (got '{actual}')", .allowed.join(", "))]
    NotOneOf {
        /// Offending field
        field: String,
        /// Accepted values
        allowed: Vec<String>,
        /// Value found
        actual: String,
    },
}

impl From<ValidationError> for CampusError {
    fn from(err: ValidationError) -> Self {
        CampusError::config(err.to_string())
    }
}

/// Validator that accumulates failures and reports them together
#[derive(Debug, Default)]
pub struct ConfigValidator {
    errors: Vec<ValidationError>,
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-blank string
    pub fn non_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::Required {
                field: field.to_string(),
            });
        }
        self
    }

    /// Require a case-insensitive match against a fixed set of choices
    pub fn one_of(&mut self, field: &str, value: &str, allowed: &[&str]) -> &mut Self {
        if !allowed.iter().any(|choice| choice.eq_ignore_ascii_case(value)) {
            self.errors.push(ValidationError::NotOneOf {
                field: field.to_string(),
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
                actual: value.to_string(),
            });
        }
        self
    }

    /// Collected failures
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Finish validation, joining every failure into one config error
    pub fn finish(&self) -> Result<(), CampusError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let message = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(CampusError::config(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_accumulates() {
        let mut validator = ConfigValidator::new();
        validator
            .non_empty("log_level", " ")
            .one_of("output", "yaml", &["text", "json"]);
        assert_eq!(validator.errors().len(), 2);

        let err = validator.finish().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'log_level' is required"));
        assert!(message.contains("must be one of [text, json] (got 'yaml')"));
    }

    #[test]
    fn test_validator_passes() {
        let mut validator = ConfigValidator::new();
        validator
            .non_empty("log_level", "info")
            .one_of("output", "JSON", &["text", "json"]);
        assert!(validator.finish().is_ok());
    }
}
