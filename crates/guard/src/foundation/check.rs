//! The one predicate-and-message step every guard is built from.

use crate::foundation::{Arg, GuardResult, Nullable};

/// Returns the argument when `permits` holds for it, otherwise the
/// constraint error built from the argument's custom message or `default`.
///
/// `permits` describes the *allowed* state; the guard's name describes the
/// forbidden one.
///
/// ```rust
/// use bulwark_guard::prelude::*;
///
/// let even = 4;
/// assert_eq!(ensure(arg!(even), |n| n % 2 == 0, |n| format!("{n} is odd.")).unwrap(), 4);
///
/// let odd = 3;
/// let err = ensure(arg!(odd), |n| n % 2 == 0, |n| format!("{n} is odd.")).unwrap_err();
/// assert_eq!(err.to_string(), "3 is odd. (Parameter 'odd')");
/// ```
pub fn ensure<T>(
    argument: Arg<T>,
    permits: impl FnOnce(&T) -> bool,
    default: impl FnOnce(&T) -> String,
) -> GuardResult<T> {
    if permits(argument.value()) {
        Ok(argument.into_value())
    } else {
        Err(argument.reject(default))
    }
}

/// Unwraps a nullable argument, failing with the absence error when it is
/// absent. The custom message, if any, is carried over.
pub fn present<N: Nullable>(argument: Arg<N>) -> GuardResult<Arg<N::Present>> {
    let (value, header) = argument.split();
    match value.into_present() {
        Some(value) => Ok(header.map(|()| value)),
        None => Err(header.absent()),
    }
}
