// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validator combinators.
//!
//! These build larger validators out of smaller ones:
//!
//! - [`rules`] runs a list of validators and concatenates their errors.
//! - [`nested_rule`] applies a validator to one key of a map and prefixes the
//!   reported fields with that key.
//! - [`conditional`] runs a validator only when a predicate holds.
//! - [`validator_fn`] turns a closure into a validator.

use crate::domain::{ValidationError, Value};
use crate::ports::{BoxedValidator, Validator};
use std::fmt;

/// Runs every validator in order and concatenates their errors.
///
/// Created by [`rules`] or built up with [`Rules::with`].
pub struct Rules<T: ?Sized> {
    validators: Vec<BoxedValidator<T>>,
}

impl<T: ?Sized> Rules<T> {
    /// Creates an empty rule list, which accepts every input.
    pub fn new() -> Self {
        Rules {
            validators: Vec::new(),
        }
    }

    /// Appends a validator.
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validator<T> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Appends an already boxed validator.
    pub fn push(&mut self, validator: BoxedValidator<T>) {
        self.validators.push(validator);
    }

    /// Returns the number of validators in the list.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if the list holds no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<T: ?Sized> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Rules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<T: ?Sized> FromIterator<BoxedValidator<T>> for Rules<T> {
    fn from_iter<I: IntoIterator<Item = BoxedValidator<T>>>(iter: I) -> Self {
        Rules {
            validators: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Validator<T> for Rules<T> {
    fn validate(&self, input: &T) -> Vec<ValidationError> {
        let errors: Vec<ValidationError> = self
            .validators
            .iter()
            .flat_map(|validator| validator.validate(input))
            .collect();
        if !errors.is_empty() {
            tracing::trace!(
                "{} rules reported {} errors",
                self.validators.len(),
                errors.len()
            );
        }
        errors
    }
}

/// Combines validators into one that runs all of them, in order.
///
/// No validator is skipped, even after an earlier one reported errors. The
/// result is the concatenation of each validator's errors in list order.
///
/// # Examples
///
/// ```
/// use formbind::domain::{ErrorKind, Value};
/// use formbind::ports::{BoxedValidator, Validator};
/// use formbind::rules::{is_required, length_gt, rules};
///
/// let validators: Vec<BoxedValidator<Value>> = vec![
///     Box::new(is_required("name")),
///     Box::new(length_gt("name", 2)),
/// ];
/// let validator = rules(validators);
///
/// let errors = validator.validate(&Value::map());
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].error, ErrorKind::Required);
/// assert_eq!(errors[1].error, ErrorKind::LengthGt);
/// ```
pub fn rules<T: ?Sized>(validators: Vec<BoxedValidator<T>>) -> Rules<T> {
    Rules { validators }
}

/// Applies a validator to the value under one key of a map.
///
/// Created by [`nested_rule`].
#[derive(Debug, Clone)]
pub struct NestedRule<V> {
    key: String,
    inner: V,
}

impl<V> NestedRule<V> {
    /// The key whose value the inner validator receives.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<V> Validator<Value> for NestedRule<V>
where
    V: Validator<Option<Value>>,
{
    fn validate(&self, input: &Value) -> Vec<ValidationError> {
        let Some(map) = input.as_map() else {
            return Vec::new();
        };
        let child = map.get(&self.key).cloned();
        self.inner
            .validate(&child)
            .into_iter()
            .map(|error| error.prefixed(&self.key))
            .collect()
    }
}

impl<V> Validator<Option<Value>> for NestedRule<V>
where
    V: Validator<Option<Value>>,
{
    fn validate(&self, input: &Option<Value>) -> Vec<ValidationError> {
        match input {
            Some(value) => <Self as Validator<Value>>::validate(self, value),
            None => Vec::new(),
        }
    }
}

/// Validates the value under `key` with `inner`, prefixing reported fields.
///
/// When the input is a map, `inner` receives the value stored under `key`, or
/// `None` if the key is missing, and every error it reports has its field
/// rewritten from `f` to `key.f`. Any other input produces no errors and
/// `inner` is not called. Nested rules compose to any depth.
///
/// # Examples
///
/// ```
/// use formbind::domain::{ErrorKind, ValidationError, Value};
/// use formbind::ports::Validator;
/// use formbind::rules::{is_required, nested_rule};
///
/// let validator = nested_rule("addr", is_required("city"));
/// let input = Value::from_iter([("addr", Value::map())]);
///
/// assert_eq!(
///     validator.validate(&input),
///     vec![ValidationError::new(ErrorKind::Required, "addr.city")]
/// );
/// ```
pub fn nested_rule<V>(key: impl Into<String>, inner: V) -> NestedRule<V>
where
    V: Validator<Option<Value>>,
{
    NestedRule {
        key: key.into(),
        inner,
    }
}

/// Runs a validator only when a predicate accepts the input.
///
/// Created by [`conditional`].
#[derive(Clone)]
pub struct Conditional<P, V> {
    predicate: P,
    validator: V,
}

impl<P, V: fmt::Debug> fmt::Debug for Conditional<P, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conditional")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl<T, P, V> Validator<T> for Conditional<P, V>
where
    T: ?Sized,
    P: Fn(&T) -> bool + Send + Sync,
    V: Validator<T>,
{
    fn validate(&self, input: &T) -> Vec<ValidationError> {
        if (self.predicate)(input) {
            self.validator.validate(input)
        } else {
            Vec::new()
        }
    }
}

/// Runs `validator` only when `predicate` returns `true` for the input.
///
/// When the predicate returns `false`, the result is empty and the validator
/// is not called.
///
/// # Examples
///
/// ```
/// use formbind::domain::Value;
/// use formbind::ports::Validator;
/// use formbind::rules::{conditional, is_required};
///
/// let validator = conditional(
///     |form: &Value| form.lookup("ship").is_some_and(Value::is_truthy),
///     is_required("address"),
/// );
///
/// assert!(validator.validate(&Value::map()).is_empty());
///
/// let shipping = Value::from_iter([("ship", Value::from(true))]);
/// assert_eq!(validator.validate(&shipping).len(), 1);
/// ```
pub fn conditional<T, P, V>(predicate: P, validator: V) -> Conditional<P, V>
where
    T: ?Sized,
    P: Fn(&T) -> bool + Send + Sync,
    V: Validator<T>,
{
    Conditional {
        predicate,
        validator,
    }
}

/// A validator backed by a closure.
///
/// Created by [`validator_fn`].
#[derive(Clone)]
pub struct FnValidator<F> {
    f: F,
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<T, F> Validator<T> for FnValidator<F>
where
    T: ?Sized,
    F: Fn(&T) -> Vec<ValidationError> + Send + Sync,
{
    fn validate(&self, input: &T) -> Vec<ValidationError> {
        (self.f)(input)
    }
}

/// Wraps a closure as a validator.
///
/// # Examples
///
/// ```
/// use formbind::domain::{ValidationError, Value};
/// use formbind::ports::Validator;
/// use formbind::rules::validator_fn;
///
/// let no_admin = validator_fn(|form: &Value| {
///     if form.lookup("user") == Some(&Value::from("admin")) {
///         vec![ValidationError::new("RESERVED", "user")]
///     } else {
///         vec![]
///     }
/// });
///
/// let input = Value::from_iter([("user", Value::from("admin"))]);
/// assert_eq!(no_admin.validate(&input).len(), 1);
/// ```
pub fn validator_fn<T, F>(f: F) -> FnValidator<F>
where
    T: ?Sized,
    F: Fn(&T) -> Vec<ValidationError> + Send + Sync,
{
    FnValidator { f }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::rules::fields::{is_required, length_lt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixed(errors: Vec<ValidationError>) -> FnValidator<impl Fn(&Value) -> Vec<ValidationError>> {
        validator_fn(move |_: &Value| errors.clone())
    }

    #[test]
    fn test_empty_rules() {
        let validator: Rules<Value> = rules(vec![]);
        assert!(validator.is_empty());
        assert!(validator.validate(&Value::map()).is_empty());
    }

    #[test]
    fn test_rules_concatenate_in_order() {
        let validator: Rules<Value> = Rules::new()
            .with(fixed(vec![ValidationError::new("a-error", "thefield")]))
            .with(fixed(vec![
                ValidationError::new("b-error-1", "a-field"),
                ValidationError::new("b-error-2", "bar"),
            ]));

        assert_eq!(
            validator.validate(&Value::from("foo")),
            vec![
                ValidationError::new("a-error", "thefield"),
                ValidationError::new("b-error-1", "a-field"),
                ValidationError::new("b-error-2", "bar"),
            ]
        );
    }

    #[test]
    fn test_rules_from_iterator() {
        let validator: Rules<Value> = vec![
            Box::new(is_required("a")) as BoxedValidator<Value>,
            Box::new(is_required("b")),
        ]
        .into_iter()
        .collect();
        assert_eq!(validator.len(), 2);
        assert_eq!(validator.validate(&Value::map()).len(), 2);
    }

    #[test]
    fn test_nested_rule_skips_non_map() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let inner = validator_fn(move |_: &Option<Value>| {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![]
        });

        let validator = nested_rule("foo", inner);
        assert!(validator.validate(&Value::from("foo")).is_empty());
        assert!(Validator::<Option<Value>>::validate(&validator, &None).is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_nested_rule_passes_missing_as_none() {
        let validator = nested_rule(
            "foo",
            validator_fn(|input: &Option<Value>| {
                assert!(input.is_none());
                vec![ValidationError::new("foo", "thefield")]
            }),
        );
        assert_eq!(
            validator.validate(&Value::map()),
            vec![ValidationError::new("foo", "foo.thefield")]
        );
    }

    #[test]
    fn test_nested_rule_passes_child_value() {
        let validator = nested_rule(
            "foo",
            validator_fn(|input: &Option<Value>| {
                assert_eq!(input, &Some(Value::from("bar")));
                vec![]
            }),
        );
        let input = Value::from_iter([("foo", Value::from("bar"))]);
        assert!(validator.validate(&input).is_empty());
    }

    #[test]
    fn test_nested_rule_deep() {
        let validator = nested_rule("customer", nested_rule("addr", is_required("city")));
        let input = Value::map().set("customer.addr.street", "Storgatan");
        assert_eq!(
            validator.validate(&input),
            vec![ValidationError::new(ErrorKind::Required, "customer.addr.city")]
        );
    }

    #[test]
    fn test_nested_rule_keeps_kind_data() {
        let validator = nested_rule("a", length_lt("b", 2));
        let input = Value::map().set("a.b", "long");
        assert_eq!(
            validator.validate(&input),
            vec![ValidationError::new(ErrorKind::LengthLt, "a.b").with_length_lt(2)]
        );
    }

    #[test]
    fn test_conditional_false_skips_validator() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let inner = validator_fn(move |_: &Value| {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![ValidationError::new("error", "foo")]
        });

        let validator = conditional(|_: &Value| false, inner);
        assert!(validator.validate(&Value::from("bar")).is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_conditional_true_delegates() {
        let validator = conditional(
            |input: &Value| input.as_str() == Some("bar"),
            fixed(vec![ValidationError::new("error", "foo")]),
        );
        assert_eq!(
            validator.validate(&Value::from("bar")),
            vec![ValidationError::new("error", "foo")]
        );
        assert!(validator.validate(&Value::from("baz")).is_empty());
    }
}
