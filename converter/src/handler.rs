// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! The form handler: reacts to `calculate` by reading the kilometer field,
//! converting it and writing the outcome into the result label.

use crate::conversion;
use crate::layout;
use slint_interpreter::{
    ComponentHandle, ComponentInstance, GetPropertyError, SetCallbackError, SetPropertyError,
    SharedString, Value, Weak,
};

/// Error returned when the handler cannot talk to the window
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Error, derive_more::Display, derive_more::From,
)]
#[non_exhaustive]
pub enum BindingError {
    #[display("reading the input failed: {_0}")]
    Get(GetPropertyError),
    #[display("writing the result failed: {_0}")]
    Set(SetPropertyError),
    #[display("property `{_0}` does not hold a string")]
    #[from(skip)]
    NotAString(#[error(not(source))] &'static str),
}

/// The two widgets the handler touches.
pub trait FormView {
    /// Current text of the kilometer input field.
    fn input_text(&self) -> Result<SharedString, BindingError>;
    /// Puts `outcome` into the result label.
    fn show_outcome(&self, outcome: &Outcome) -> Result<(), BindingError>;
}

impl FormView for ComponentInstance {
    fn input_text(&self) -> Result<SharedString, BindingError> {
        match self.get_property(layout::KILOMETERS)? {
            Value::String(text) => Ok(text),
            _ => Err(BindingError::NotAString(layout::KILOMETERS)),
        }
    }

    fn show_outcome(&self, outcome: &Outcome) -> Result<(), BindingError> {
        self.set_property(layout::RESULT, Value::String(outcome.text.clone()))?;
        self.set_property(layout::INVALID, Value::Bool(outcome.invalid))?;
        Ok(())
    }
}

/// What the result label shows after one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: SharedString,
    /// Set when the input was rejected and `text` is an error message.
    pub invalid: bool,
}

impl Outcome {
    pub fn for_input(input: &str) -> Self {
        match conversion::convert(input) {
            Ok(miles) => Self { text: miles.into(), invalid: false },
            Err(err) => {
                tracing::warn!("{err}");
                Self { text: format!("Invalid number: {input:?}").into(), invalid: true }
            }
        }
    }
}

/// Runs one conversion against `view`.
pub fn calculate(view: &impl FormView) -> Result<Outcome, BindingError> {
    let input = view.input_text()?;
    let outcome = Outcome::for_input(&input);
    view.show_outcome(&outcome)?;
    Ok(outcome)
}

/// Controller attached to the `calculate` callback of a converter window.
///
/// Only a weak reference to the window is kept: the window owns the
/// callback, which owns the handler.
pub struct FormHandler {
    window: Weak<ComponentInstance>,
}

impl FormHandler {
    pub fn new(window: &ComponentInstance) -> Self {
        Self { window: window.as_weak() }
    }

    /// Installs the handler as the window's `calculate` callback.
    pub fn install(self, window: &ComponentInstance) -> Result<(), SetCallbackError> {
        window.set_callback(layout::CALCULATE, move |_| {
            self.activate();
            Value::Void
        })
    }

    /// Handles one activate event. Does nothing once the window is gone.
    pub fn activate(&self) {
        let Some(window) = self.window.upgrade() else { return };
        match calculate(&window) {
            Ok(outcome) => tracing::debug!(text = %outcome.text, "result updated"),
            Err(err) => tracing::error!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryView {
        input: RefCell<SharedString>,
        shown: RefCell<Vec<Outcome>>,
    }

    impl MemoryView {
        fn with_input(text: &str) -> Self {
            Self { input: RefCell::new(text.into()), ..Default::default() }
        }
    }

    impl FormView for MemoryView {
        fn input_text(&self) -> Result<SharedString, BindingError> {
            Ok(self.input.borrow().clone())
        }

        fn show_outcome(&self, outcome: &Outcome) -> Result<(), BindingError> {
            self.shown.borrow_mut().push(outcome.clone());
            Ok(())
        }
    }

    #[test]
    fn shows_converted_value() {
        let view = MemoryView::with_input("2000");
        let outcome = calculate(&view).unwrap();
        assert_eq!(outcome, Outcome { text: "1,242.80 miles".into(), invalid: false });
        assert_eq!(*view.shown.borrow(), [outcome]);
    }

    #[test]
    fn shows_message_for_invalid_input() {
        let view = MemoryView::with_input("abc");
        let outcome = calculate(&view).unwrap();
        assert_eq!(outcome.text, r#"Invalid number: "abc""#);
        assert!(outcome.invalid);

        *view.input.borrow_mut() = "".into();
        assert_eq!(calculate(&view).unwrap().text, r#"Invalid number: """#);
    }

    #[test]
    fn repeated_activation_is_stable() {
        let view = MemoryView::with_input("1");
        let first = calculate(&view).unwrap();
        let second = calculate(&view).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.text, "0.62 miles");

        *view.input.borrow_mut() = "0".into();
        assert_eq!(calculate(&view).unwrap().text, "0.00 miles");
        assert_eq!(view.shown.borrow().len(), 3);
    }

    #[test]
    fn input_errors_are_propagated() {
        struct Unbound;
        impl FormView for Unbound {
            fn input_text(&self) -> Result<SharedString, BindingError> {
                Err(BindingError::NotAString(layout::KILOMETERS))
            }
            fn show_outcome(&self, _: &Outcome) -> Result<(), BindingError> {
                unreachable!()
            }
        }
        assert_eq!(calculate(&Unbound), Err(BindingError::NotAString(layout::KILOMETERS)));
    }
}
