//! Composite evaluation over all fields' validation chains.

use log::trace;

use crate::result::{FieldError, ValidationResult};
use crate::rules::FieldValidation;
use crate::values::ValueBag;

/// The validation surface consumed by a presentation layer.
///
/// Callers hold this as an injected `&dyn Validator` (or boxed), never a
/// process-wide singleton.
pub trait Validator: Send + Sync {
    /// Validate one field against the current values.
    ///
    /// Returns an empty string when the field is valid and a human-readable
    /// error message otherwise.
    fn validate(&self, field: &str, values: &ValueBag) -> String;
}

/// Aggregate of every field's validation chain for one form.
///
/// Immutable once built and stateless between calls, so a single instance
/// is safe to reuse across keystroke-driven re-validation without
/// synchronization.
pub struct ValidationComposite {
    validations: Vec<Box<dyn FieldValidation>>,
}

impl ValidationComposite {
    /// Build a composite from the flattened per-field chains.
    ///
    /// Building from an empty list yields a composite that reports every
    /// field valid.
    pub fn build(validations: Vec<Box<dyn FieldValidation>>) -> Self {
        Self { validations }
    }

    /// Evaluate every bound field once, in first-appearance order,
    /// collecting the first error per field.
    pub fn validate_all(&self, values: &ValueBag) -> ValidationResult {
        let mut errors = Vec::new();
        let mut seen: Vec<&str> = Vec::new();

        for validation in &self.validations {
            let field = validation.field();
            if seen.contains(&field) {
                continue;
            }
            seen.push(field);
            if let Some(error) = self.first_error_for(field, values) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// First failing rule for a field, in insertion order.
    fn first_error_for(&self, field: &str, values: &ValueBag) -> Option<FieldError> {
        self.validations
            .iter()
            .filter(|validation| validation.field() == field)
            .find_map(|validation| validation.validate(values))
    }
}

impl Validator for ValidationComposite {
    /// Rules bound to other fields are skipped; a field with no registered
    /// rules is vacuously valid.
    fn validate(&self, field: &str, values: &ValueBag) -> String {
        match self.first_error_for(field, values) {
            Some(error) => {
                trace!("validation failed for {field}: {error}");
                error.message
            }
            None => String::new(),
        }
    }
}
