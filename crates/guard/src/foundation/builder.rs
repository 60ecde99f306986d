//! Entry point and capability marker for guard clauses.
//!
//! Every guard in this crate (and every guard written outside it) is an
//! extension-trait method blanket-implemented for [`GuardBuilder`]. The
//! marker has no members, so adding a guard never touches this module:
//!
//! ```rust
//! use bulwark_guard::prelude::*;
//!
//! pub trait PortGuards: GuardBuilder {
//!     fn is_privileged_port(&self, argument: Arg<u16>) -> GuardResult<u16> {
//!         ensure(argument, |port| *port >= 1024, |port| {
//!             format!("Value was '{port}', but must not be a privileged port.")
//!         })
//!     }
//! }
//!
//! impl<B: GuardBuilder + ?Sized> PortGuards for B {}
//!
//! let port = 8080_u16;
//! assert_eq!(Guard::argument().is_privileged_port(arg!(port)).unwrap(), 8080);
//! ```

// ============================================================================
// CAPABILITY MARKER
// ============================================================================

/// Empty capability tag that every guard family extends.
///
/// Guard families are traits with `GuardBuilder` as a supertrait and a
/// blanket impl for `B: GuardBuilder + ?Sized`, so they are callable on the
/// entry point (and on `dyn GuardBuilder`) as soon as they are in scope.
pub trait GuardBuilder {}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// The stateless receiver for all guard calls.
///
/// There is exactly one value of this type, reachable through
/// [`Guard::argument`]. It carries no data and never validates anything
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guard {
    _private: (),
}

static ARGUMENT: Guard = Guard { _private: () };

impl Guard {
    /// Returns the process-wide entry point.
    #[inline]
    #[must_use]
    pub fn argument() -> &'static Self {
        &ARGUMENT
    }
}

impl GuardBuilder for Guard {}
