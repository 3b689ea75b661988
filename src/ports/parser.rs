// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form data parser trait definition.
//!
//! This module defines the `FormDataParser` trait, which provides an interface
//! for reading value trees out of serialized documents (YAML, and any other
//! format an adapter supports).

use crate::domain::{Result, Value};

/// A trait for parsing serialized documents into value trees.
///
/// # Tree Shape
///
/// Parsers produce a map at the root. Nested mappings become nested maps;
/// formats that have sequences should turn them into maps keyed by index
/// (`"0"`, `"1"`, ...) since value trees have no arrays. A null entry is
/// represented by leaving its key out. For example, this YAML document:
///
/// ```yaml
/// address:
///   city: Lund
///   zip: "223 50"
/// newsletter: true
/// ```
///
/// parses into a tree where `address.city` is `"Lund"` and `newsletter` is
/// `true`.
///
/// # Examples
///
/// ```rust
/// use formbind::ports::FormDataParser;
/// use formbind::domain::{Result, Value};
///
/// struct KeyValueParser;
///
/// impl FormDataParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<Value> {
///         let mut tree = Value::map();
///         for line in content.lines() {
///             if let Some((path, value)) = line.split_once('=') {
///                 tree = tree.set(path.trim(), value.trim());
///             }
///         }
///         Ok(tree)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let tree = KeyValueParser.parse("user.name = Ada").unwrap();
/// assert_eq!(tree.lookup("user.name"), Some(&Value::from("Ada")));
/// ```
pub trait FormDataParser {
    /// Parses document content into a value tree.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed tree, always a map
    /// * `Err(FormError)` - The content could not be parsed
    fn parse(&self, content: &str) -> Result<Value>;

    /// Returns the file extensions supported by this parser, without the
    /// leading dot.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds a fixed tree regardless of input
    struct FixedParser;

    impl FormDataParser for FixedParser {
        fn parse(&self, _content: &str) -> Result<Value> {
            Ok(Value::map()
                .set("customer.name", "Ada")
                .set("customer.age", 36))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let parser = FixedParser;
        let tree = parser.parse("dummy content").unwrap();
        assert_eq!(tree.lookup("customer.name"), Some(&Value::from("Ada")));
        assert_eq!(tree.lookup("customer.age"), Some(&Value::from(36)));
    }

    #[test]
    fn test_parser_supported_extensions() {
        let parser = FixedParser;
        let extensions = parser.supported_extensions();
        assert_eq!(extensions, &["test", "tst"]);
    }
}
