// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field path newtype for dot-separated addressing into value trees.
//!
//! This module provides the `FieldPath` type, a newtype wrapper around `String`
//! that names a location in a [`Value`](crate::domain::Value) tree, such as
//! `"address.city"`.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A dot-separated path into a value tree.
///
/// Each segment is a map key. Segments are produced by splitting on `.`; no
/// escaping is supported. The empty string is the zero-length path, which
/// addresses the tree itself.
///
/// # Examples
///
/// ```
/// use formbind::domain::path::FieldPath;
///
/// let path = FieldPath::from("address.city");
/// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["address", "city"]);
///
/// let root = FieldPath::from("");
/// assert!(root.is_root());
/// assert_eq!(root.segments().count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    /// Creates a new `FieldPath` from a `String`.
    pub fn new(path: String) -> Self {
        FieldPath(path)
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `FieldPath` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` for the zero-length path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the segments of the path, left to right.
    ///
    /// The zero-length path yields no segments.
    pub fn segments(&self) -> Segments<'_> {
        segments(&self.0)
    }

    /// Returns a new path with `prefix` prepended as its first segment.
    ///
    /// This is how nested validation rules rewrite the fields reported by
    /// their inner rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use formbind::domain::path::FieldPath;
    ///
    /// let path = FieldPath::from("city").prefixed("address");
    /// assert_eq!(path.as_str(), "address.city");
    /// ```
    pub fn prefixed(&self, prefix: &str) -> Self {
        FieldPath(join(prefix, &self.0))
    }
}

/// Iterator over the segments of a dot-path.
pub type Segments<'a> = std::str::Split<'a, char>;

/// Splits a raw dot-path into its segments.
///
/// Only the empty path is special-cased: it has zero segments. Any other
/// string is split on every `.`.
pub fn segments(path: &str) -> Segments<'_> {
    let mut split = path.split('.');
    if path.is_empty() {
        // "" splits into a single empty segment; the root path has none.
        split.next();
    }
    split
}

/// Joins a prefix and a path with a dot.
pub(crate) fn join(prefix: &str, path: &str) -> String {
    format!("{}.{}", prefix, path)
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        FieldPath(s)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        FieldPath(s.to_string())
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for FieldPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_field_path_segments() {
        let path = FieldPath::from("a.b.c");
        let segments: Vec<&str> = path.segments().collect();
        assert_eq!(segments, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_segment() {
        let path = FieldPath::from("foo");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["foo"]);
        assert!(!path.is_root());
    }

    #[test]
    fn test_empty_path_is_root() {
        let path = FieldPath::from("");
        assert!(path.is_root());
        assert_eq!(path.segments().count(), 0);
    }

    #[test]
    fn test_doubled_dot_keeps_empty_segment() {
        let segments: Vec<&str> = segments("a..b").collect();
        assert_eq!(segments, vec!["a", "", "b"]);
    }

    #[test]
    fn test_prefixed() {
        let path = FieldPath::from("city").prefixed("addr");
        assert_eq!(path.as_str(), "addr.city");

        let deeper = path.prefixed("customer");
        assert_eq!(deeper.as_str(), "customer.addr.city");
    }

    #[test]
    fn test_display_and_into_string() {
        let path = FieldPath::from("user.email");
        assert_eq!(format!("{}", path), "user.email");
        let s: String = path.into();
        assert_eq!(s, "user.email");
    }

    #[test]
    fn test_hash_and_equality() {
        let mut map = HashMap::new();
        map.insert(FieldPath::from("a.b"), 1);

        assert_eq!(map.get(&FieldPath::from("a.b")), Some(&1));
        assert_eq!(map.get(&FieldPath::from("a.c")), None);
    }
}
