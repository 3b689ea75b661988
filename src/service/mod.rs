// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the form state binder.
//!
//! A [`Form`] holds the value tree and errors for a form; [`FieldBinding`]s
//! read individual fields out of its [`FormContext`] and route edits back.

pub mod field;
pub mod form;

// Re-export commonly used types
pub use field::{ChangeEvent, FieldBinding, FieldState};
pub use form::{Form, FormBuilder, FormContext, SubmitOutcome};
