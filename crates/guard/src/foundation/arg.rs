//! Per-call guard invocation: the argument plus how to report it.

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use crate::config::GuardConfig;
use crate::foundation::{GuardError, finalize_message};

/// Default message for absent arguments.
pub const NULL_MESSAGE: &str = "Value cannot be null.";

/// An argument handed to a guard.
///
/// Bundles the value with its parameter name and an optional custom message.
/// The [`arg!`](crate::arg) macro captures the name from the call-site
/// expression; [`Arg::new`] takes it explicitly and [`Arg::anonymous`] uses
/// the configured default.
///
/// ```rust
/// use bulwark_guard::prelude::*;
///
/// let retries = 3_u32;
/// let a = arg!(retries).with_message("retries must be positive");
/// assert_eq!(a.name(), "retries");
/// assert_eq!(a.message(), Some("retries must be positive"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Arg<T> {
    value: T,
    name: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
}

impl<T> Arg<T> {
    /// Wraps `value` under the parameter name `name`.
    pub fn new(value: T, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            name: name.into(),
            message: None,
        }
    }

    /// Wraps `value` under the configured default parameter name.
    pub fn anonymous(value: T) -> Self {
        let name = GuardConfig::current().default_argument_name.clone();
        Self::new(value, name)
    }

    /// Replaces the guard's default failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The custom message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Unwraps the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Separates the value from its name and message.
    pub fn split(self) -> (T, Arg<()>) {
        let header = Arg {
            value: (),
            name: self.name,
            message: self.message,
        };
        (self.value, header)
    }

    /// Swaps the value while keeping the name and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Arg<U> {
        Arg {
            value: f(self.value),
            name: self.name,
            message: self.message,
        }
    }

    /// Builds the constraint error for this argument.
    ///
    /// `default` is only evaluated when no usable custom message was given.
    pub fn reject(&self, default: impl FnOnce(&T) -> String) -> GuardError {
        let message = finalize_message(self.message(), || default(&self.value));
        tracing::trace!(argument = %self.name, code = "constraint", %message, "guard rejected argument");
        GuardError::constraint(self.name.clone(), message)
    }

    /// Builds the absence error for this argument.
    pub fn absent(&self) -> GuardError {
        let message = finalize_message(self.message(), || NULL_MESSAGE.to_owned());
        tracing::trace!(argument = %self.name, code = "absent", %message, "guard rejected argument");
        GuardError::absent(self.name.clone(), message)
    }

    /// Builds the error for a check on this argument that ran past `limit`.
    pub fn timed_out(&self, limit: Duration, default: impl FnOnce(&T) -> String) -> GuardError {
        let message = finalize_message(self.message(), || default(&self.value));
        tracing::trace!(argument = %self.name, code = "match_timeout", %message, "guard rejected argument");
        GuardError::match_timeout(self.name.clone(), message, limit)
    }
}

impl<T: fmt::Debug> fmt::Debug for Arg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arg")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("message", &self.message)
            .finish()
    }
}
