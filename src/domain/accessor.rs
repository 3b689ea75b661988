// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deep get/set over value trees using dot-paths.
//!
//! Reads walk the tree without failing. Writes never modify their input: they
//! return a new tree that shares every subtree not on the written path, and
//! they return the input itself (the same allocation) when the write changes
//! nothing. Callers use [`Value::same`] on the result to decide whether a
//! change needs to be propagated.

use crate::domain::path::segments;
use crate::domain::value::{Map, Value};

/// Walks `path` into `tree` and returns the value found there.
///
/// At each segment the current node must be a map containing that key,
/// otherwise the result is `None`. The zero-length path returns `tree`.
///
/// # Examples
///
/// ```
/// use formbind::domain::accessor::lookup;
/// use formbind::domain::Value;
///
/// let tree = Value::from_iter([("a", Value::from_iter([("b", Value::from(0))]))]);
/// assert_eq!(lookup(&tree, "a.b"), Some(&Value::from(0)));
/// assert_eq!(lookup(&tree, "a.b.c"), None);
/// assert_eq!(lookup(&tree, "x"), None);
/// ```
pub fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    segments(path).try_fold(tree, |node, segment| node.child(segment))
}

/// Reads the value at `path`, substituting `default` for falsy values.
///
/// Any falsy result (missing, `false`, `0`, `NaN`, `""`) is replaced by
/// `default`. With no default, a falsy value reads as `None`. Use [`lookup`]
/// when falsy values have to be told apart from missing ones.
///
/// # Examples
///
/// ```
/// use formbind::domain::accessor::get;
/// use formbind::domain::Value;
///
/// let tree = Value::from_iter([("foo", Value::from(0)), ("bar", Value::from("x"))]);
/// let fallback = Value::from(99);
///
/// assert_eq!(get(&tree, "foo", Some(&fallback)), Some(&fallback));
/// assert_eq!(get(&tree, "foo", None), None);
/// assert_eq!(get(&tree, "bar", Some(&fallback)), Some(&Value::from("x")));
/// ```
pub fn get<'a>(tree: &'a Value, path: &str, default: Option<&'a Value>) -> Option<&'a Value> {
    match lookup(tree, path) {
        Some(value) if value.is_truthy() => Some(value),
        _ => default,
    }
}

/// Returns a copy of `tree` with `value` stored at `path`.
///
/// Missing or non-map nodes along the path are replaced by maps. Siblings of
/// every node on the path are shared with `tree`, and if the value at `path`
/// is already the [same](Value::same) as `value`, the returned tree is the
/// same as `tree`.
///
/// Setting the zero-length path returns `value` itself.
///
/// # Examples
///
/// ```
/// use formbind::domain::accessor::{get, set};
/// use formbind::domain::Value;
///
/// let tree = set(&Value::map(), "a.b.c", Value::from(1));
/// assert_eq!(get(&tree, "a.b.c", None), Some(&Value::from(1)));
///
/// let again = set(&tree, "a.b.c", Value::from(1));
/// assert!(again.same(&tree));
/// ```
pub fn set(tree: &Value, path: &str, value: Value) -> Value {
    let segments: Vec<&str> = segments(path).collect();
    set_in(Some(tree), &segments, value)
}

fn set_in(node: Option<&Value>, segments: &[&str], value: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value;
    };

    let original = node.and_then(|n| n.child(head));
    let updated = set_in(original, rest, value);

    if let (Some(node), Some(original)) = (node, original) {
        if original.same(&updated) {
            return node.clone();
        }
    }

    let mut map: Map = node.and_then(Value::as_map).cloned().unwrap_or_default();
    map.insert((*head).to_string(), updated);
    Value::from(map)
}

impl Value {
    /// Walks a dot-path into this tree. See [`lookup`].
    pub fn lookup(&self, path: impl AsRef<str>) -> Option<&Value> {
        lookup(self, path.as_ref())
    }

    /// Reads a dot-path with the falsy-default rule. See [`get`].
    pub fn get<'a>(&'a self, path: impl AsRef<str>, default: Option<&'a Value>) -> Option<&'a Value> {
        get(self, path.as_ref(), default)
    }

    /// Returns a copy of this tree with `value` stored at a dot-path. See [`set`].
    pub fn set(&self, path: impl AsRef<str>, value: impl Into<Value>) -> Value {
        set(self, path.as_ref(), value.into())
    }
}
