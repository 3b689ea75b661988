// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the form binding crate.
//!
//! Accessors and validators never fail; validation failures are reported as
//! [`ValidationError`](crate::domain::ValidationError) data. The faults here
//! cover misuse of the binding layer and loading value trees from outside
//! sources. All errors use `thiserror`.

use thiserror::Error;

/// The main error type for form binding operations.
///
/// # Examples
///
/// ```
/// use formbind::domain::errors::FormError;
///
/// let error = FormError::OutsideForm { field: "email".to_string() };
/// assert!(error.to_string().contains("inside a form"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormError {
    /// A field binding was used without a form context.
    #[error("field binding for '{field}' can only be used inside a form")]
    OutsideForm {
        /// The name of the field that was bound
        field: String,
    },

    /// Failed to parse form data.
    #[error("Failed to parse form data: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred while reading form data from a source.
    #[error("Form data source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading form data.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for form binding operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_form_error() {
        let error = FormError::OutsideForm {
            field: "foo".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "field binding for 'foo' can only be used inside a form"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = FormError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(error.to_string(), "Failed to parse form data: Invalid YAML");
    }

    #[test]
    fn test_source_error() {
        let error = FormError::SourceError {
            source_name: "yaml-file".to_string(),
            message: "File too large".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Form data source 'yaml-file' error: File too large"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = FormError::from(io_error);
        assert!(matches!(error, FormError::IoError(_)));
    }
}
