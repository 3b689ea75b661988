// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interfaces the rest of the crate is written
//! against: validators, the handlers a form reports events through, and
//! parsers that turn documents into value trees. The rules and adapters
//! layers implement them.

pub mod handler;
pub mod parser;
pub mod validator;

// Re-export commonly used types
pub use handler::{ChangeHandler, ErrorHandler, SubmitHandler};
pub use parser::FormDataParser;
pub use validator::{BoxedValidator, FieldRule, Validator};
