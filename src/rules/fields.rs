// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in field validators.
//!
//! Each constructor captures a field name (and any parameters) and returns a
//! small rule struct. Every rule inspects one key of its input map, reports at
//! most one error naming that field, and treats a missing field, a value of
//! the wrong type, or a non-map input as a failure.
//!
//! | Constructor | Passes when | Error kind |
//! |---|---|---|
//! | [`is_required`] | truthy, or the number zero | `REQUIRED` |
//! | [`length_gt`] | a string longer than `n` characters | `LENGTH_GT` |
//! | [`length_lt`] | a string shorter than `n` characters | `LENGTH_LT` |
//! | [`is_truthy`] | truthy | `TRUTHY` |
//! | [`matches`] | two fields are strictly the same | `MATCH` |
//! | [`is_phone`] | a phone number string | `PHONE` |
//! | [`is_postal_code`] | a postal code string | `POSTCODE` |
//! | [`is_email`] | an email address string | `EMAIL` |
//! | [`is_numeric`] | a finite number or numeric string | `NUMERIC` |
//! | [`is_address`] | a string not starting with a digit | `ADDRESS` |
//! | [`is_text`] | a string without digits | `TEXT` |

use crate::domain::{ErrorKind, ValidationError, Value};
use crate::ports::{FieldRule, Validator};
use crate::rules::patterns;

/// Requires a present value. Created by [`is_required`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    field: String,
}

impl FieldRule for Required {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: Option<&Value>) -> bool {
        // zero counts as an entered value even though it is falsy
        value.is_some_and(|v| v.is_truthy() || v.as_f64() == Some(0.0))
    }

    fn error(&self) -> ValidationError {
        ValidationError::new(ErrorKind::Required, self.field.as_str())
    }
}

/// Fails unless `field` holds a truthy value or the number zero.
///
/// # Examples
///
/// ```
/// use formbind::domain::{ErrorKind, ValidationError, Value};
/// use formbind::ports::Validator;
/// use formbind::rules::is_required;
///
/// assert_eq!(
///     is_required("foo").validate(&Value::map()),
///     vec![ValidationError::new(ErrorKind::Required, "foo")]
/// );
/// let zero = Value::from_iter([("foo", Value::from(0))]);
/// assert!(is_required("foo").validate(&zero).is_empty());
/// ```
pub fn is_required(field: impl Into<String>) -> Required {
    Required {
        field: field.into(),
    }
}

/// Requires a string longer than a threshold. Created by [`length_gt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthGt {
    field: String,
    length: usize,
}

impl FieldRule for LengthGt {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: Option<&Value>) -> bool {
        value
            .and_then(Value::as_str)
            .is_some_and(|s| s.chars().count() > self.length)
    }

    fn error(&self) -> ValidationError {
        ValidationError::new(ErrorKind::LengthGt, self.field.as_str()).with_length_gt(self.length)
    }
}

/// Fails unless `field` is a string of more than `length` characters.
///
/// The error carries the threshold as `lengthGt`.
pub fn length_gt(field: impl Into<String>, length: usize) -> LengthGt {
    LengthGt {
        field: field.into(),
        length,
    }
}

/// Requires a string shorter than a threshold. Created by [`length_lt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthLt {
    field: String,
    length: usize,
}

impl FieldRule for LengthLt {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: Option<&Value>) -> bool {
        value
            .and_then(Value::as_str)
            .is_some_and(|s| s.chars().count() < self.length)
    }

    fn error(&self) -> ValidationError {
        ValidationError::new(ErrorKind::LengthLt, self.field.as_str()).with_length_lt(self.length)
    }
}

/// Fails unless `field` is a string of fewer than `length` characters.
///
/// The error carries the threshold as `lengthLt`.
pub fn length_lt(field: impl Into<String>, length: usize) -> LengthLt {
    LengthLt {
        field: field.into(),
        length,
    }
}

/// Requires a truthy value. Created by [`is_truthy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truthy {
    field: String,
}

impl FieldRule for Truthy {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: Option<&Value>) -> bool {
        value.is_some_and(Value::is_truthy)
    }

    fn error(&self) -> ValidationError {
        ValidationError::new(ErrorKind::Truthy, self.field.as_str())
    }
}

/// Fails unless `field` is truthy. Useful for "accept the terms" checkboxes.
pub fn is_truthy(field: impl Into<String>) -> Truthy {
    Truthy {
        field: field.into(),
    }
}

/// Requires two fields to hold the same value. Created by [`matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    field: String,
    other: String,
}

impl Match {
    fn run(&self, input: Option<&Value>) -> Vec<ValidationError> {
        let first = input.and_then(|v| v.child(&self.field));
        let second = input.and_then(|v| v.child(&self.other));
        if Value::same_opt(first, second) {
            Vec::new()
        } else {
            vec![ValidationError::new(ErrorKind::Match, self.other.as_str()).with_match(self.other.as_str())]
        }
    }
}

impl Validator<Value> for Match {
    fn validate(&self, input: &Value) -> Vec<ValidationError> {
        self.run(Some(input))
    }
}

impl Validator<Option<Value>> for Match {
    fn validate(&self, input: &Option<Value>) -> Vec<ValidationError> {
        self.run(input.as_ref())
    }
}

/// Fails unless `field` and `other` are strictly the same.
///
/// Two missing fields count as matching. The error names `other`, the field
/// the user is expected to correct, and carries it as `match`.
///
/// # Examples
///
/// ```
/// use formbind::domain::{ErrorKind, ValidationError, Value};
/// use formbind::ports::Validator;
/// use formbind::rules::matches;
///
/// let form = Value::from_iter([("a", Value::from("x")), ("b", Value::from("y"))]);
/// assert_eq!(
///     matches("a", "b").validate(&form),
///     vec![ValidationError::new(ErrorKind::Match, "b").with_match("b")]
/// );
/// ```
pub fn matches(field: impl Into<String>, other: impl Into<String>) -> Match {
    Match {
        field: field.into(),
        other: other.into(),
    }
}

/// Requires a string field that satisfies a format check.
///
/// Shared by the phone, postal code, email, address and text rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    field: String,
    kind: FormatKind,
}

/// The formats understood by [`Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Phone number.
    Phone,
    /// Postal code.
    PostalCode,
    /// Email address.
    Email,
    /// Street address.
    Address,
    /// Text without digits.
    Text,
}

impl FormatKind {
    fn accepts(self, s: &str) -> bool {
        match self {
            FormatKind::Phone => patterns::is_phone(s),
            FormatKind::PostalCode => patterns::is_postal_code(s),
            FormatKind::Email => patterns::EMAIL.is_match(s),
            FormatKind::Address => patterns::ADDRESS.is_match(s),
            FormatKind::Text => patterns::TEXT.is_match(s),
        }
    }

    fn error_kind(self) -> ErrorKind {
        match self {
            FormatKind::Phone => ErrorKind::Phone,
            FormatKind::PostalCode => ErrorKind::Postcode,
            FormatKind::Email => ErrorKind::Email,
            FormatKind::Address => ErrorKind::Address,
            FormatKind::Text => ErrorKind::Text,
        }
    }
}

impl Format {
    /// The format this rule checks.
    pub fn kind(&self) -> FormatKind {
        self.kind
    }
}

impl FieldRule for Format {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: Option<&Value>) -> bool {
        value
            .and_then(Value::as_str)
            .is_some_and(|s| self.kind.accepts(s))
    }

    fn error(&self) -> ValidationError {
        ValidationError::new(self.kind.error_kind(), self.field.as_str())
    }
}

fn format(field: impl Into<String>, kind: FormatKind) -> Format {
    Format {
        field: field.into(),
        kind,
    }
}

/// Fails unless `field` is a phone number.
///
/// Accepted strings consist only of digits, whitespace, `+`, `-`, `(` and
/// `)`, and contain at least two consecutive digits.
pub fn is_phone(field: impl Into<String>) -> Format {
    format(field, FormatKind::Phone)
}

/// Fails unless `field` is a five digit postal code above 10000.
///
/// A single space is allowed after the third digit, as in `123 45`.
pub fn is_postal_code(field: impl Into<String>) -> Format {
    format(field, FormatKind::PostalCode)
}

/// Fails unless `field` is an email address.
///
/// See [`patterns::EMAIL`](crate::rules::patterns::EMAIL) for the accepted
/// shape.
pub fn is_email(field: impl Into<String>) -> Format {
    format(field, FormatKind::Email)
}

/// Fails unless `field` is a string that does not start with a digit.
pub fn is_address(field: impl Into<String>) -> Format {
    format(field, FormatKind::Address)
}

/// Fails unless `field` is a non-empty string without digits.
pub fn is_text(field: impl Into<String>) -> Format {
    format(field, FormatKind::Text)
}

/// Requires a numeric value. Created by [`is_numeric`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeric {
    field: String,
}

impl FieldRule for Numeric {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: Option<&Value>) -> bool {
        value.is_some_and(patterns::is_numeric)
    }

    fn error(&self) -> ValidationError {
        ValidationError::new(ErrorKind::Numeric, self.field.as_str())
    }
}

/// Fails unless `field` is a finite number or a string holding one.
pub fn is_numeric(field: impl Into<String>) -> Numeric {
    Numeric {
        field: field.into(),
    }
}
