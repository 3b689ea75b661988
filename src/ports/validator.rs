// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validator trait definitions.
//!
//! This module defines the `Validator` trait, the interface every validation
//! rule implements, and the `FieldRule` trait for the common case of a rule that
//! inspects a single field of a map.

use crate::domain::{ValidationError, Value};

/// A pure function from an input to a list of validation errors.
///
/// Validators capture their configuration (field names, thresholds) at
/// construction time and have no other state: the same input always produces
/// the same errors, and validation never fails or panics. An empty list means
/// the input is valid.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a composed rule set can be built
/// once and shared.
///
/// # Examples
///
/// ```rust
/// use formbind::ports::Validator;
/// use formbind::domain::{ValidationError, Value};
///
/// struct NotEmpty;
///
/// impl Validator<Value> for NotEmpty {
///     fn validate(&self, input: &Value) -> Vec<ValidationError> {
///         match input.as_map() {
///             Some(map) if !map.is_empty() => vec![],
///             _ => vec![ValidationError::new("EMPTY", "")],
///         }
///     }
/// }
///
/// assert_eq!(NotEmpty.validate(&Value::map()).len(), 1);
/// ```
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Validates `input`, returning every error found.
    fn validate(&self, input: &T) -> Vec<ValidationError>;

    /// Returns `true` if `input` produces no errors.
    fn is_valid(&self, input: &T) -> bool {
        self.validate(input).is_empty()
    }
}

/// A type-erased validator, as stored by [`rules`](crate::rules::rules).
pub type BoxedValidator<T> = Box<dyn Validator<T>>;

/// A rule over one field of a map.
///
/// Implementing `FieldRule` provides [`Validator`] for both `Value` and
/// `Option<Value>` input. The field is looked up as a single key of the input
/// map; when the input is not a map, or is missing, the field is treated as
/// missing and [`check`](FieldRule::check) receives `None`.
///
/// # Examples
///
/// ```rust
/// use formbind::ports::{FieldRule, Validator};
/// use formbind::domain::{ValidationError, Value};
///
/// struct Positive(&'static str);
///
/// impl FieldRule for Positive {
///     fn field(&self) -> &str {
///         self.0
///     }
///
///     fn check(&self, value: Option<&Value>) -> bool {
///         value.and_then(Value::as_f64).is_some_and(|n| n > 0.0)
///     }
///
///     fn error(&self) -> ValidationError {
///         ValidationError::new("POSITIVE", self.0)
///     }
/// }
///
/// let tree = Value::from_iter([("qty", Value::from(-1))]);
/// assert_eq!(Positive("qty").validate(&tree), vec![ValidationError::new("POSITIVE", "qty")]);
/// assert!(Positive("qty").validate(&None).len() == 1);
/// ```
pub trait FieldRule: Send + Sync {
    /// The map key this rule inspects.
    fn field(&self) -> &str;

    /// Returns `true` if the field's value passes.
    fn check(&self, value: Option<&Value>) -> bool;

    /// The error reported when the check fails.
    fn error(&self) -> ValidationError;

    /// Runs the check against a field value, producing at most one error.
    fn run(&self, value: Option<&Value>) -> Vec<ValidationError> {
        if self.check(value) {
            Vec::new()
        } else {
            let error = self.error();
            tracing::trace!("Field rule failed: {}", error);
            vec![error]
        }
    }
}

impl<R: FieldRule> Validator<Value> for R {
    fn validate(&self, input: &Value) -> Vec<ValidationError> {
        self.run(input.child(self.field()))
    }
}

impl<R: FieldRule> Validator<Option<Value>> for R {
    fn validate(&self, input: &Option<Value>) -> Vec<ValidationError> {
        self.run(input.as_ref().and_then(|v| v.child(self.field())))
    }
}
