use crate::result::{FieldError, FieldErrorKind};
use crate::rules::FieldValidation;
use crate::values::ValueBag;

/// Requires the field to equal another field's value, byte-exact and
/// case-sensitive. A target field absent from the bag reads as the empty
/// string rather than being an error.
#[derive(Debug)]
pub struct CompareFields {
    field: String,
    other: String,
}

impl CompareFields {
    pub fn new(field: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            other: other.into(),
        }
    }
}

impl FieldValidation for CompareFields {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, values: &ValueBag) -> Option<FieldError> {
        if values.get(&self.field) == values.get(&self.other) {
            None
        } else {
            Some(FieldError::new(
                &self.field,
                FieldErrorKind::InvalidValue,
                format!("{} must match {}", self.field, self.other),
            ))
        }
    }
}
