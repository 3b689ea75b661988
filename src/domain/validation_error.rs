// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation error records produced by validators.
//!
//! A failed validation is plain data, never a fault: validators return a list
//! of `ValidationError` values, each naming the kind of failure and the
//! dot-path of the field it concerns.

use crate::domain::path::join;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a validation failure.
///
/// Serialized as its string tag, e.g. `"REQUIRED"`. Tags that are not one of
/// the built-in kinds round-trip through [`ErrorKind::Custom`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorKind {
    /// `REQUIRED`
    Required,
    /// `LENGTH_GT`
    LengthGt,
    /// `LENGTH_LT`
    LengthLt,
    /// `TRUTHY`
    Truthy,
    /// `MATCH`
    Match,
    /// `PHONE`
    Phone,
    /// `POSTCODE`
    Postcode,
    /// `EMAIL`
    Email,
    /// `NUMERIC`
    Numeric,
    /// `ADDRESS`
    Address,
    /// `TEXT`
    Text,
    /// Any other tag, typically from a user-defined validator.
    Custom(String),
}

impl ErrorKind {
    /// Returns the string tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::Required => "REQUIRED",
            ErrorKind::LengthGt => "LENGTH_GT",
            ErrorKind::LengthLt => "LENGTH_LT",
            ErrorKind::Truthy => "TRUTHY",
            ErrorKind::Match => "MATCH",
            ErrorKind::Phone => "PHONE",
            ErrorKind::Postcode => "POSTCODE",
            ErrorKind::Email => "EMAIL",
            ErrorKind::Numeric => "NUMERIC",
            ErrorKind::Address => "ADDRESS",
            ErrorKind::Text => "TEXT",
            ErrorKind::Custom(tag) => tag,
        }
    }
}

impl From<&str> for ErrorKind {
    fn from(tag: &str) -> Self {
        match tag {
            "REQUIRED" => ErrorKind::Required,
            "LENGTH_GT" => ErrorKind::LengthGt,
            "LENGTH_LT" => ErrorKind::LengthLt,
            "TRUTHY" => ErrorKind::Truthy,
            "MATCH" => ErrorKind::Match,
            "PHONE" => ErrorKind::Phone,
            "POSTCODE" => ErrorKind::Postcode,
            "EMAIL" => ErrorKind::Email,
            "NUMERIC" => ErrorKind::Numeric,
            "ADDRESS" => ErrorKind::Address,
            "TEXT" => ErrorKind::Text,
            other => ErrorKind::Custom(other.to_string()),
        }
    }
}

impl From<String> for ErrorKind {
    fn from(tag: String) -> Self {
        ErrorKind::from(tag.as_str())
    }
}

impl From<ErrorKind> for String {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field-level validation failure.
///
/// `field` is a dot-path in the same syntax used by the accessors, so a host
/// can match errors to fields by comparing it with the field's name. The
/// optional members carry kind-specific data and are omitted from serialized
/// output when absent.
///
/// # Examples
///
/// ```
/// use formbind::domain::{ErrorKind, ValidationError};
///
/// let err = ValidationError::new(ErrorKind::LengthGt, "password").with_length_gt(8);
/// assert_eq!(err.error, ErrorKind::LengthGt);
/// assert_eq!(err.field, "password");
/// assert_eq!(err.length_gt, Some(8));
/// assert_eq!(err.to_string(), "LENGTH_GT at password");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// The kind of failure.
    pub error: ErrorKind,
    /// Dot-path of the field that failed.
    pub field: String,
    /// Threshold of a failed `LENGTH_GT` check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_gt: Option<usize>,
    /// Threshold of a failed `LENGTH_LT` check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_lt: Option<usize>,
    /// The field a failed `MATCH` check compared against.
    #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
    pub matches: Option<String>,
}

impl ValidationError {
    /// Creates an error of `kind` for `field` with no kind-specific data.
    pub fn new(kind: impl Into<ErrorKind>, field: impl Into<String>) -> Self {
        ValidationError {
            error: kind.into(),
            field: field.into(),
            length_gt: None,
            length_lt: None,
            matches: None,
        }
    }

    /// Attaches a `lengthGt` threshold.
    pub fn with_length_gt(mut self, n: usize) -> Self {
        self.length_gt = Some(n);
        self
    }

    /// Attaches a `lengthLt` threshold.
    pub fn with_length_lt(mut self, n: usize) -> Self {
        self.length_lt = Some(n);
        self
    }

    /// Attaches the name of the field a match was checked against.
    pub fn with_match(mut self, field: impl Into<String>) -> Self {
        self.matches = Some(field.into());
        self
    }

    /// Returns this error with `prefix` prepended to its field path.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.field = join(prefix, &self.field);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.error, self.field)
    }
}
