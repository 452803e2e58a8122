//! Validation error vocabulary and form-level results.

use thiserror::Error;

/// Classification of a field validation failure.
///
/// Only the message crosses the public composite surface; the kind is kept
/// for tests and future localization. `InvalidType` and `Mismatch` are
/// reserved: no built-in rule currently produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The field is empty but a value is required.
    Required,
    /// The value has the wrong type for the field.
    InvalidType,
    /// The value fails a format or comparison constraint.
    InvalidValue,
    /// The value is too short or too long.
    InvalidLength,
    /// The value does not match another field's value.
    Mismatch,
}

/// Error information for a single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// The field that failed validation.
    pub field: String,
    /// Failure classification.
    pub kind: FieldErrorKind,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Result of validating every field known to a composite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, first-appearance order,
    /// at most one error per field.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Get the error reported for a specific field (if any).
    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display_is_the_message() {
        let error = FieldError::new("email", FieldErrorKind::InvalidValue, "email is invalid");
        assert_eq!(error.to_string(), "email is invalid");
    }

    #[test]
    fn test_valid_result_has_no_errors() {
        let result = ValidationResult::Valid;
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.first_error().is_none());
    }

    #[test]
    fn test_error_for_finds_by_field() {
        let result = ValidationResult::Invalid(vec![
            FieldError::new("name", FieldErrorKind::Required, "name is required"),
            FieldError::new("email", FieldErrorKind::InvalidValue, "email is invalid"),
        ]);
        assert!(result.is_invalid());
        assert_eq!(result.error_for("email").unwrap().kind, FieldErrorKind::InvalidValue);
        assert!(result.error_for("password").is_none());
    }
}
