//! Field validation engine for form-driven UIs.
//!
//! This crate provides a fluent API for assembling per-field validation
//! chains and a composite that evaluates them, independent of any UI
//! framework or transport.
//!
//! # Example
//!
//! ```
//! use formcheck::{ValidationBuilder, ValidationComposite, Validator, ValueBag};
//!
//! let composite = ValidationComposite::build(
//!     ValidationBuilder::field("name").required().min(5).build()
//!         .into_iter()
//!         .chain(ValidationBuilder::field("email").required().email().build())
//!         .collect(),
//! );
//!
//! let values = ValueBag::new()
//!     .with("name", "ab")
//!     .with("email", "user@example.com");
//!
//! assert!(!composite.validate("name", &values).is_empty());
//! assert!(composite.validate("email", &values).is_empty());
//! ```
//!
//! Chains are evaluated in insertion order and stop at the first failing
//! rule, so `required().min(5)` reports the required error for an empty
//! value rather than the length error.

pub mod builder;
pub mod composite;
pub mod result;
pub mod rules;
pub mod values;

pub use builder::ValidationBuilder;
pub use composite::{ValidationComposite, Validator};
pub use result::{FieldError, FieldErrorKind, ValidationResult};
pub use rules::FieldValidation;
pub use values::ValueBag;
