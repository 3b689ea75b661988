// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form state holder.
//!
//! A [`Form`] owns the value tree being edited, the errors supplied by the
//! host, and the handlers it reports events through. Fields read the form
//! through a [`FormContext`] snapshot, which is only rebuilt when the name,
//! the errors or the value actually change.

use crate::domain::{set, ValidationError, Value};
use crate::ports::handler::{ignore_change, ignore_error, ignore_submit};
use crate::ports::{ChangeHandler, ErrorHandler, SubmitHandler};
use std::fmt;
use std::sync::Arc;

/// The result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No errors were outstanding; the submit handler was called.
    Accepted,
    /// Errors were outstanding; the error handler was called.
    Rejected,
}

impl SubmitOutcome {
    /// Returns `true` if the submit was accepted.
    pub fn is_accepted(self) -> bool {
        self == SubmitOutcome::Accepted
    }
}

struct ContextData {
    data: Value,
    errors: Arc<[ValidationError]>,
    id_prefix: String,
    submitted: bool,
    on_change: ChangeHandler,
}

/// A snapshot of a form, as seen by its fields.
///
/// Cloning is cheap. Two snapshots are [`same`](FormContext::same) only if
/// they come from the same rebuild of the form's state.
#[derive(Clone)]
pub struct FormContext {
    inner: Arc<ContextData>,
}

impl FormContext {
    /// The value tree being edited.
    pub fn data(&self) -> &Value {
        &self.inner.data
    }

    /// The errors supplied to the form.
    pub fn errors(&self) -> &[ValidationError] {
        &self.inner.errors
    }

    /// The prefix for field ids, empty if the form is unnamed.
    pub fn id_prefix(&self) -> &str {
        &self.inner.id_prefix
    }

    /// Whether a submit has been attempted.
    pub fn submitted(&self) -> bool {
        self.inner.submitted
    }

    /// Proposes a new value for the field at `name`.
    ///
    /// The change handler is called with the updated tree unless the value
    /// at `name` is already the same as `value`. The snapshot itself is not
    /// modified; the host is expected to feed the new tree back through
    /// [`Form::set_value`].
    pub fn update(&self, name: &str, value: Value) {
        let data = &self.inner.data;
        let updated = set(data, name, value);

        if updated.same(data) {
            tracing::trace!("Field '{}' unchanged, suppressing change", name);
            return;
        }

        tracing::debug!("Field '{}' changed, notifying form owner", name);
        (self.inner.on_change)(&updated);
    }

    /// Returns `true` if both snapshots are the same snapshot.
    pub fn same(&self, other: &FormContext) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for FormContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormContext")
            .field("data", &self.inner.data)
            .field("errors", &self.inner.errors)
            .field("id_prefix", &self.inner.id_prefix)
            .field("submitted", &self.inner.submitted)
            .finish_non_exhaustive()
    }
}

/// A form bound to a value tree.
///
/// # Examples
///
/// ```rust
/// use formbind::domain::Value;
/// use formbind::service::{FieldBinding, ChangeEvent, Form};
/// use std::sync::{Arc, Mutex};
///
/// let changes = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&changes);
///
/// let form = Form::builder()
///     .value(Value::from_iter([("foo", Value::from("bar"))]))
///     .on_change(move |tree| sink.lock().unwrap().push(tree.clone()))
///     .build();
///
/// let field = FieldBinding::new("foo");
/// let context = form.context();
/// assert_eq!(field.read(Some(&context)).unwrap().text(), "bar");
///
/// field.change(Some(&context), ChangeEvent::Text("baz".into())).unwrap();
/// assert_eq!(changes.lock().unwrap()[0].lookup("foo"), Some(&Value::from("baz")));
/// ```
pub struct Form {
    name: String,
    value: Value,
    errors: Arc<[ValidationError]>,
    submitted: bool,
    on_change: ChangeHandler,
    on_error: ErrorHandler,
    on_submit: SubmitHandler,
    context: FormContext,
}

impl Form {
    /// Creates a new form builder.
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// Returns the current snapshot for fields to read.
    pub fn context(&self) -> FormContext {
        self.context.clone()
    }

    /// The form's name, empty if unnamed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value tree.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The current errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether a submit has been attempted.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Replaces the value tree.
    ///
    /// The snapshot is only rebuilt if `value` is not the same tree.
    pub fn set_value(&mut self, value: Value) {
        if value.same(&self.value) {
            return;
        }
        self.value = value;
        self.refresh();
    }

    /// Replaces the errors.
    pub fn set_errors(&mut self, errors: Vec<ValidationError>) {
        if *self.errors == *errors {
            return;
        }
        self.errors = errors.into();
        self.refresh();
    }

    /// Renames the form, changing the prefix of every field id.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name == self.name {
            return;
        }
        self.name = name;
        self.refresh();
    }

    /// Attempts to submit the form.
    ///
    /// Marks the form as submitted. If any errors are outstanding the error
    /// handler is called with them and the current tree, otherwise the
    /// submit handler is called with the tree.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.submitted {
            self.submitted = true;
            self.refresh();
        }

        if self.errors.is_empty() {
            tracing::debug!("Form '{}' submitted", self.name);
            (self.on_submit)(&self.value);
            SubmitOutcome::Accepted
        } else {
            tracing::debug!(
                "Form '{}' submit rejected with {} errors",
                self.name,
                self.errors.len()
            );
            (self.on_error)(&self.errors, &self.value);
            SubmitOutcome::Rejected
        }
    }

    fn refresh(&mut self) {
        self.context = build_context(
            &self.name,
            &self.value,
            &self.errors,
            self.submitted,
            &self.on_change,
        );
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("errors", &self.errors)
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}

fn build_context(
    name: &str,
    value: &Value,
    errors: &Arc<[ValidationError]>,
    submitted: bool,
    on_change: &ChangeHandler,
) -> FormContext {
    FormContext {
        inner: Arc::new(ContextData {
            data: value.clone(),
            errors: Arc::clone(errors),
            id_prefix: name.to_string(),
            submitted,
            on_change: Arc::clone(on_change),
        }),
    }
}

/// Builder for constructing a [`Form`].
///
/// Unset handlers ignore their events; an unset value is an empty map.
///
/// # Examples
///
/// ```rust
/// use formbind::domain::{ErrorKind, ValidationError};
/// use formbind::service::{FormBuilder, SubmitOutcome};
///
/// let mut form = FormBuilder::new()
///     .name("signup")
///     .errors(vec![ValidationError::new(ErrorKind::Required, "email")])
///     .build();
///
/// assert_eq!(form.submit(), SubmitOutcome::Rejected);
/// assert!(form.is_submitted());
/// ```
pub struct FormBuilder {
    name: String,
    value: Value,
    errors: Vec<ValidationError>,
    on_change: ChangeHandler,
    on_error: ErrorHandler,
    on_submit: SubmitHandler,
}

impl FormBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            value: Value::map(),
            errors: Vec::new(),
            on_change: ignore_change(),
            on_error: ignore_error(),
            on_submit: ignore_submit(),
        }
    }

    /// Sets the form name, used to prefix field ids.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the initial value tree.
    pub fn value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Sets the initial errors.
    pub fn errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.errors = errors;
        self
    }

    /// Sets the handler called with the updated tree after an edit.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.on_change = Arc::new(handler);
        self
    }

    /// Sets the handler called when a submit is rejected.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[ValidationError], &Value) + Send + Sync + 'static,
    {
        self.on_error = Arc::new(handler);
        self
    }

    /// Sets the handler called when a submit is accepted.
    pub fn on_submit<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.on_submit = Arc::new(handler);
        self
    }

    /// Builds the form.
    pub fn build(self) -> Form {
        let errors: Arc<[ValidationError]> = self.errors.into();
        let context = build_context(&self.name, &self.value, &errors, false, &self.on_change);

        Form {
            name: self.name,
            value: self.value,
            errors,
            submitted: false,
            on_change: self.on_change,
            on_error: self.on_error,
            on_submit: self.on_submit,
            context,
        }
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        (Arc::clone(&count), count)
    }

    #[test]
    fn test_builder_defaults() {
        let form = Form::builder().build();
        assert_eq!(form.name(), "");
        assert_eq!(form.value(), &Value::map());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitted());
        assert_eq!(form.context().id_prefix(), "");
    }

    #[test]
    fn test_update_calls_change_handler_with_new_tree() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let form = Form::builder()
            .value(Value::from_iter([("foo", Value::from("bar"))]))
            .on_change(move |tree| sink.lock().unwrap().push(tree.clone()))
            .build();

        form.context().update("foo", Value::from("baz"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], Value::from_iter([("foo", Value::from("baz"))]));
        // the form does not adopt the tree until the host sets it
        assert_eq!(form.value().lookup("foo"), Some(&Value::from("bar")));
    }

    #[test]
    fn test_update_with_same_value_is_suppressed() {
        let (count, handle) = counter();
        let form = Form::builder()
            .value(Value::from_iter([("foo", Value::from("bar"))]))
            .on_change(move |_| {
                handle.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        form.context().update("foo", Value::from("bar"));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_context_identity() {
        let tree = Value::from_iter([("foo", Value::from("bar"))]);
        let mut form = Form::builder().value(tree.clone()).build();
        let first = form.context();

        form.set_value(tree.clone());
        form.set_errors(Vec::new());
        form.set_name("");
        assert!(first.same(&form.context()));

        form.set_value(tree.set("foo", "baz"));
        let second = form.context();
        assert!(!first.same(&second));

        form.set_errors(vec![ValidationError::new(ErrorKind::Required, "foo")]);
        assert!(!second.same(&form.context()));
        assert_eq!(form.context().errors().len(), 1);

        let third = form.context();
        form.set_name("signup");
        assert!(!third.same(&form.context()));
        assert_eq!(form.context().id_prefix(), "signup");
    }

    #[test]
    fn test_submit_without_errors() {
        let (submits, on_submit) = counter();
        let (rejects, on_error) = counter();
        let mut form = Form::builder()
            .on_submit(move |_| {
                on_submit.fetch_add(1, Ordering::SeqCst);
            })
            .on_error(move |_, _| {
                on_error.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        assert!(!form.context().submitted());
        assert!(form.submit().is_accepted());
        assert!(form.context().submitted());
        assert_eq!(submits.load(Ordering::SeqCst), 1);
        assert_eq!(rejects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_submit_with_errors() {
        let (submits, on_submit) = counter();
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        let errors = vec![ValidationError::new(ErrorKind::Required, "foo")];
        let mut form = Form::builder()
            .errors(errors.clone())
            .on_submit(move |_| {
                on_submit.fetch_add(1, Ordering::SeqCst);
            })
            .on_error(move |errs, _| sink.lock().unwrap().extend_from_slice(errs))
            .build();

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert!(form.is_submitted());
        assert_eq!(submits.load(Ordering::SeqCst), 0);
        assert_eq!(*received.lock().unwrap(), errors);
    }

    #[test]
    fn test_repeat_submit_keeps_context() {
        let mut form = Form::builder().build();
        form.submit();
        let context = form.context();
        form.submit();
        assert!(context.same(&form.context()));
    }
}
