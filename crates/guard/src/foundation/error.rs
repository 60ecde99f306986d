//! Error type raised by failing guards.
//!
//! A guard either returns its argument or one of these. The rendered message
//! always reads `{message} (Parameter '{name}')`, where `message` is a
//! complete sentence ending in a period.

use std::borrow::Cow;
use std::time::Duration;

use thiserror::Error;

/// Result returned by every guard: the validated argument or the failure.
pub type GuardResult<T> = Result<T, GuardError>;

/// Which of the recognized failure kinds a [`GuardError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardErrorKind {
    /// The argument was null/absent where a value was required.
    Absent,
    /// The argument was present but violated a rule.
    Constraint,
    /// Pattern matching ran past the caller-supplied timeout.
    MatchTimeout,
}

/// A failed guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The argument was absent.
    #[error("{message} (Parameter '{name}')")]
    Absent {
        /// Name of the offending parameter.
        name: Cow<'static, str>,
        /// Finalized message.
        message: String,
    },

    /// The argument violated the guard's rule.
    #[error("{message} (Parameter '{name}')")]
    Constraint {
        /// Name of the offending parameter.
        name: Cow<'static, str>,
        /// Finalized message.
        message: String,
    },

    /// Matching a pattern took longer than the caller allowed.
    #[error("{message} (Parameter '{name}')")]
    MatchTimeout {
        /// Name of the offending parameter.
        name: Cow<'static, str>,
        /// Finalized message.
        message: String,
        /// The timeout that was exceeded.
        timeout: Duration,
    },
}

impl GuardError {
    /// Creates an absence error.
    pub fn absent(name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Absent {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a constraint error.
    pub fn constraint(name: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Constraint {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a match-timeout error.
    pub fn match_timeout(
        name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self::MatchTimeout {
            name: name.into(),
            message: message.into(),
            timeout,
        }
    }

    /// The failure kind.
    #[must_use]
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            Self::Absent { .. } => GuardErrorKind::Absent,
            Self::Constraint { .. } => GuardErrorKind::Constraint,
            Self::MatchTimeout { .. } => GuardErrorKind::MatchTimeout,
        }
    }

    /// Stable machine-readable code for the failure kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Absent { .. } => "absent",
            Self::Constraint { .. } => "constraint",
            Self::MatchTimeout { .. } => "match_timeout",
        }
    }

    /// The finalized message, without the parameter suffix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Absent { message, .. }
            | Self::Constraint { message, .. }
            | Self::MatchTimeout { message, .. } => message,
        }
    }

    /// Name of the parameter that failed.
    #[must_use]
    pub fn param_name(&self) -> &str {
        match self {
            Self::Absent { name, .. }
            | Self::Constraint { name, .. }
            | Self::MatchTimeout { name, .. } => name,
        }
    }

    /// Returns true for [`GuardErrorKind::Absent`].
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent { .. })
    }

    /// Returns true for [`GuardErrorKind::Constraint`].
    #[must_use]
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }
}
