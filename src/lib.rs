// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for structured form state.
//!
//! This crate provides the data layer of a form: immutable value trees
//! addressed by dot-paths, composable validation rules that report errors as
//! plain data, and field bindings that connect individual inputs to a form's
//! state.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and pure operations (`Value`, `get`/`set`,
//!   `ValidationError`, errors)
//! - **Ports**: Trait definitions that define interfaces (`Validator`,
//!   `FieldRule`, `FormDataParser`, handlers)
//! - **Rules**: The built-in field validators and the combinators that compose
//!   them
//! - **Adapters**: Loaders for value trees (YAML)
//! - **Service**: The form state binder (`Form`, `FieldBinding`)
//!
//! # Features
//!
//! - **Structural Sharing**: Updates rebuild only the path they touch, and
//!   return the input tree itself when nothing changed
//! - **Validation as Data**: Validators never fail; they return lists of
//!   `ValidationError` records naming the offending field
//! - **Composable Rules**: Rule sets, nested rules and conditional rules
//! - **Thread Safety**: Value trees and validators are `Send + Sync`
//!
//! # Feature Flags
//!
//! - `yaml`: Enable loading value trees from YAML (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use formbind::prelude::*;
//! use formbind::rules::{is_email, is_required, nested_rule, rules};
//!
//! let tree = Value::map()
//!     .set("email", "ada@example.com")
//!     .set("address.city", "Lund");
//!
//! assert_eq!(tree.get("address.city", None), Some(&Value::from("Lund")));
//!
//! let validator = rules::<Value>(vec![
//!     Box::new(is_required("email")),
//!     Box::new(is_email("email")),
//!     Box::new(nested_rule("address", is_required("zip"))),
//! ]);
//!
//! assert_eq!(
//!     validator.validate(&tree),
//!     vec![ValidationError::new(ErrorKind::Required, "address.zip")]
//! );
//! ```
//!
//! # Binding Fields
//!
//! ```rust
//! use formbind::prelude::*;
//!
//! let mut form = Form::builder()
//!     .name("signup")
//!     .errors(vec![ValidationError::new(ErrorKind::Email, "email")])
//!     .build();
//!
//! let email = FieldBinding::new("email");
//! let state = email.read(Some(&form.context()))?;
//! assert_eq!(state.id, "signup.email");
//! assert_eq!(state.errors.len(), 1);
//!
//! assert_eq!(form.submit(), SubmitOutcome::Rejected);
//! # Ok::<(), FormError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod rules;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        get, lookup, set, ErrorKind, FieldPath, FormError, Result, ValidationError, Value,
    };
    pub use crate::ports::{FieldRule, FormDataParser, Validator};
    pub use crate::service::{
        ChangeEvent, FieldBinding, FieldState, Form, FormBuilder, FormContext, SubmitOutcome,
    };

    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
