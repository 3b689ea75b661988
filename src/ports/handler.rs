// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form event handler definitions.
//!
//! A form reports three kinds of events back to its owner: an edited value
//! tree, a submit attempt that was rejected because of validation errors, and
//! a successful submit. Handlers are shared callbacks so that form context
//! snapshots can carry them to any thread.

use crate::domain::{ValidationError, Value};
use std::sync::Arc;

/// Type alias for change notification callbacks.
///
/// Invoked with the new value tree after an edit that actually changed it.
pub type ChangeHandler = Arc<dyn Fn(&Value) + Send + Sync>;

/// Type alias for rejected-submit callbacks.
///
/// Invoked with the outstanding errors and the current value tree.
pub type ErrorHandler = Arc<dyn Fn(&[ValidationError], &Value) + Send + Sync>;

/// Type alias for submit callbacks.
///
/// Invoked with the current value tree when a submit is accepted.
pub type SubmitHandler = Arc<dyn Fn(&Value) + Send + Sync>;

/// Returns a change handler that ignores every change.
pub fn ignore_change() -> ChangeHandler {
    Arc::new(|_| {})
}

/// Returns an error handler that ignores every rejected submit.
pub fn ignore_error() -> ErrorHandler {
    Arc::new(|_, _| {})
}

/// Returns a submit handler that ignores every submit.
pub fn ignore_submit() -> SubmitHandler {
    Arc::new(|_| {})
}
