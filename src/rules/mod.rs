//! Atomic field validation rules.
//!
//! Each rule is bound to one field name at construction and implements a
//! single contract: inspect the current value bag and report either nothing
//! (valid) or a [`FieldError`]. Rules are pure: no I/O, no shared mutable
//! state, identical inputs give identical results.

mod compare;
mod email;
mod length;
mod pattern;
mod required;

pub use compare::CompareFields;
pub use email::EmailFormat;
pub use length::{MaxLength, MinLength};
pub use pattern::Pattern;
pub use required::RequiredField;

use crate::result::FieldError;
use crate::values::ValueBag;

/// A single validation rule bound to one field.
///
/// An invalid input is an ordinary return value, never a panic; panics are
/// reserved for programmer errors at construction time (e.g. an invalid
/// [`Pattern`] regex).
pub trait FieldValidation: Send + Sync {
    /// The field name this rule is bound to.
    fn field(&self) -> &str;

    /// Check the rule against the current field values.
    ///
    /// Returns `None` when the rule passes.
    fn validate(&self, values: &ValueBag) -> Option<FieldError>;
}
