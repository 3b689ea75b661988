// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the value model, accessors and error types.
//!
//! This module holds the core types of the crate: value trees, the dot-paths
//! that address into them, the pure accessors that read and update them, and
//! the validation error records. Nothing here depends on the ports or the
//! binding service.

pub mod accessor;
pub mod errors;
pub mod path;
pub mod validation_error;
pub mod value;

// Re-export commonly used types
pub use accessor::{get, lookup, set};
pub use errors::{FormError, Result};
pub use path::FieldPath;
pub use validation_error::{ErrorKind, ValidationError};
pub use value::{Map, Value};
