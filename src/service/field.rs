// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-field bindings.
//!
//! A [`FieldBinding`] reads one field out of a [`FormContext`] and routes
//! edits back to it. Each rendered field instance should own its own
//! binding: the first value a binding reads is remembered as the field's
//! original value and used to decide whether it is dirty.

use crate::domain::{get, FormError, Result, ValidationError, Value};
use crate::service::form::FormContext;
use once_cell::sync::OnceCell;

/// An edit coming from an input control.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// New text from a text-like input.
    Text(String),
    /// New state of a checkbox.
    Checked(bool),
}

impl ChangeEvent {
    /// Converts the event into the value stored in the tree.
    pub fn into_value(self) -> Value {
        match self {
            ChangeEvent::Text(s) => Value::String(s),
            ChangeEvent::Checked(b) => Value::Bool(b),
        }
    }
}

/// Everything a field needs to render itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    /// Element id: the field name, prefixed by the form name if it has one.
    pub id: String,
    /// The field's dot-path.
    pub name: String,
    /// The current value, `None` if absent.
    pub value: Option<Value>,
    /// Whether the value differs from the first value read.
    pub dirty: bool,
    /// The form errors for this field.
    pub errors: Vec<ValidationError>,
    /// Whether the form has been submitted.
    pub submitted: bool,
}

impl FieldState {
    /// The value as text input content, empty if absent.
    pub fn text(&self) -> String {
        self.value.as_ref().map(Value::to_string).unwrap_or_default()
    }

    /// The value as checkbox state.
    pub fn checked(&self) -> bool {
        self.value.as_ref().is_some_and(Value::is_truthy)
    }

    /// Returns `true` if the form reported errors for this field.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Binds one field of a form by its dot-path.
///
/// # Examples
///
/// ```rust
/// use formbind::domain::{FormError, Value};
/// use formbind::service::{FieldBinding, Form};
///
/// let field = FieldBinding::new("foo");
/// assert!(matches!(field.read(None), Err(FormError::OutsideForm { .. })));
///
/// let form = Form::builder().name("signup").build();
/// let state = field.read(Some(&form.context())).unwrap();
/// assert_eq!(state.id, "signup.foo");
/// assert_eq!(state.text(), "");
/// ```
#[derive(Debug)]
pub struct FieldBinding {
    name: String,
    default: Option<Value>,
    original: OnceCell<Option<Value>>,
}

impl FieldBinding {
    /// Creates a binding for the field at `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            original: OnceCell::new(),
        }
    }

    /// Creates a binding that reads `default` when the field is falsy.
    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
            original: OnceCell::new(),
        }
    }

    /// The field's dot-path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the field's state from `context`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::OutsideForm`] if there is no context.
    pub fn read(&self, context: Option<&FormContext>) -> Result<FieldState> {
        let context = self.require(context)?;

        let value = get(context.data(), &self.name, self.default.as_ref()).cloned();
        let original = self.original.get_or_init(|| value.clone());
        let dirty = !Value::same_opt(value.as_ref(), original.as_ref());

        let errors = context
            .errors()
            .iter()
            .filter(|e| e.field == self.name)
            .cloned()
            .collect();

        let id = if context.id_prefix().is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", context.id_prefix(), self.name)
        };

        Ok(FieldState {
            id,
            name: self.name.clone(),
            value,
            dirty,
            errors,
            submitted: context.submitted(),
        })
    }

    /// Routes an edit to `context`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::OutsideForm`] if there is no context.
    pub fn change(&self, context: Option<&FormContext>, event: ChangeEvent) -> Result<()> {
        let context = self.require(context)?;
        context.update(&self.name, event.into_value());
        Ok(())
    }

    fn require<'a>(&self, context: Option<&'a FormContext>) -> Result<&'a FormContext> {
        context.ok_or_else(|| FormError::OutsideForm {
            field: self.name.clone(),
        })
    }
}
