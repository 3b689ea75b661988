// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing form data source implementations.
//!
//! This module contains concrete implementations of the parser trait defined
//! in the ports layer, along with adapters that load value trees from files.

#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
