// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form value type with truthiness and strict-sameness semantics.
//!
//! This module provides the `Value` sum type that makes up a form's value tree.
//! Maps are held behind an [`Arc`] so that immutable updates can share every
//! subtree they do not touch.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The mapping type at every interior node of a value tree.
pub type Map = BTreeMap<String, Value>;

/// A single value in a form's value tree.
///
/// There is no null and no array variant: a missing value is represented by
/// the absence of its key.
///
/// Two notions of equality are available:
///
/// - [`PartialEq`] compares structurally, descending into maps.
/// - [`Value::same`] is strict sameness: scalars compare by value, maps by
///   identity. This is what change detection uses.
///
/// # Examples
///
/// ```
/// use formbind::domain::Value;
///
/// let tree = Value::from_iter([("name", Value::from("Ada")), ("age", Value::from(36))]);
/// assert!(tree.is_map());
/// assert_eq!(tree.lookup("name"), Some(&Value::from("Ada")));
///
/// let copy = tree.clone();
/// assert!(copy.same(&tree));
///
/// let rebuilt = Value::from_iter([("name", Value::from("Ada")), ("age", Value::from(36))]);
/// assert_eq!(rebuilt, tree);
/// assert!(!rebuilt.same(&tree));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value, typically from a checkbox.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value, typically from a text input.
    String(String),
    /// Nested mapping.
    Map(Arc<Map>),
}

impl Value {
    /// Creates an empty map value.
    pub fn map() -> Self {
        Value::Map(Arc::new(Map::new()))
    }

    /// Returns `true` if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns the inner map, if this value is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the inner string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner number, if this value is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the inner boolean, if this value is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value stored directly under `key`, if this is a map.
    ///
    /// Unlike [`Value::lookup`], `key` is a single map key and is not split on
    /// dots.
    pub fn child(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Returns `true` unless the value is `false`, `0`, `NaN` or `""`.
    ///
    /// Every map is truthy, including an empty one.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Map(_) => true,
        }
    }

    /// Strict sameness.
    ///
    /// Booleans, numbers and strings are the same when their values are equal
    /// (`NaN` is never the same as anything). Maps are the same only when they
    /// are the same allocation.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Strict sameness over possibly missing values.
    ///
    /// Two missing values are the same; a missing value is never the same as a
    /// present one.
    pub fn same_opt(a: Option<&Value>, b: Option<&Value>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a.same(b),
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::map()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(Arc::new(map))
    }
}

impl From<Arc<Map>> for Value {
    fn from(map: Arc<Map>) -> Self {
        Value::Map(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let map: Map = iter.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::from(map)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
