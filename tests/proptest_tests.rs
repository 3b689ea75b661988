// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that the accessors and
//! validators handle arbitrary trees, paths and inputs correctly.

use formbind::domain::{get, set, Value};
use formbind::ports::Validator;
use formbind::rules::{
    is_address, is_email, is_numeric, is_phone, is_postal_code, is_required, is_text, length_gt,
    rules,
};
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c]{1,2}", 1..4).prop_map(|segments| segments.join("."))
}

fn truthy_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Value::from),
        (1i32..1000).prop_map(Value::from),
        Just(Value::from(true)),
    ]
}

fn any_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        "\\PC{0,8}".prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

fn tree_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec((path_strategy(), any_scalar()), 0..6).prop_map(|entries| {
        entries
            .into_iter()
            .fold(Value::map(), |tree, (path, value)| set(&tree, &path, value))
    })
}

// Test that a set value reads back through get
proptest! {
    #[test]
    fn test_set_then_get_roundtrip(
        tree in tree_strategy(),
        path in path_strategy(),
        value in truthy_scalar()
    ) {
        let updated = tree.set(&path, value.clone());
        let read = get(&updated, &path, None);
        prop_assert!(read.is_some_and(|r| r.same(&value)));
    }
}

// Test that setting the value already present returns the same tree
proptest! {
    #[test]
    fn test_set_existing_value_is_identity(
        tree in tree_strategy(),
        path in path_strategy(),
        value in any_scalar()
    ) {
        let updated = tree.set(&path, value.clone());
        let again = updated.set(&path, value);
        prop_assert!(again.same(&updated));
    }
}

// Test that setting a different value always produces a new tree
proptest! {
    #[test]
    fn test_set_new_value_changes_identity(
        tree in tree_strategy(),
        path in path_strategy(),
        value in any_scalar()
    ) {
        prop_assume!(!Value::same_opt(tree.lookup(&path), Some(&value)));
        let updated = tree.set(&path, value);
        prop_assert!(!updated.same(&tree));
    }
}

// Test that siblings off the path are shared with the input tree
proptest! {
    #[test]
    fn test_set_shares_siblings(
        tree in tree_strategy(),
        path in path_strategy(),
        value in any_scalar()
    ) {
        let updated = tree.set(&path, value);
        let head = path.split('.').next().unwrap_or_default();
        for (key, child) in tree.as_map().into_iter().flatten() {
            if key != head {
                prop_assert!(updated.child(key).is_some_and(|c| c.same(child)));
            }
        }
    }
}

// Test that set never mutates its input
proptest! {
    #[test]
    fn test_set_leaves_input_untouched(
        tree in tree_strategy(),
        path in path_strategy(),
        value in any_scalar()
    ) {
        let snapshot = tree.clone();
        let _ = tree.set(&path, value);
        prop_assert_eq!(tree, snapshot);
    }
}

// Test that rule sets report each validator's errors in order
proptest! {
    #[test]
    fn test_rules_concatenate_in_order(value in any_scalar()) {
        let input = Value::from_iter([("f", value)]);
        let combined = rules::<Value>(vec![
            Box::new(is_required("f")),
            Box::new(length_gt("f", 3)),
            Box::new(is_email("f")),
        ]);

        let mut expected = is_required("f").validate(&input);
        expected.extend(length_gt("f", 3).validate(&input));
        expected.extend(is_email("f").validate(&input));
        prop_assert_eq!(combined.validate(&input), expected);
    }
}

// Test that format validators accept any string without panicking
proptest! {
    #[test]
    fn test_field_validators_are_total(s in "\\PC*") {
        let input = Value::from_iter([("f", Value::from(s))]);
        prop_assert!(is_phone("f").validate(&input).len() <= 1);
        prop_assert!(is_postal_code("f").validate(&input).len() <= 1);
        prop_assert!(is_email("f").validate(&input).len() <= 1);
        prop_assert!(is_numeric("f").validate(&input).len() <= 1);
        prop_assert!(is_address("f").validate(&input).len() <= 1);
        prop_assert!(is_text("f").validate(&input).len() <= 1);
    }
}

// Test that every finite number is numeric, as a number and as a string
proptest! {
    #[test]
    fn test_finite_numbers_are_numeric(n in prop::num::f64::NORMAL) {
        let as_number = Value::from_iter([("f", Value::from(n))]);
        let as_string = Value::from_iter([("f", Value::from(n.to_string()))]);
        prop_assert!(is_numeric("f").is_valid(&as_number));
        prop_assert!(is_numeric("f").is_valid(&as_string));
    }
}
