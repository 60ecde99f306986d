//! Tolerance-aware equality guards for `f32` and `f64`.
//!
//! Two floats are considered equal when
//! `comparison - tolerance <= argument <= comparison + tolerance`; the band
//! is inclusive at both ends. The tolerance is always chosen explicitly at
//! the call site: either a fixed value, or [`Tolerance::Configured`] to read
//! the process-wide default from [`GuardConfig`].

use std::fmt::Display;

use num_traits::{Float, NumCast};

use crate::config::GuardConfig;
use crate::foundation::{Arg, GuardBuilder, GuardResult, ensure};
use crate::guards::NumericGuards;

// ============================================================================
// TOLERANCE
// ============================================================================

/// The absolute tolerance band for a float comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance<F> {
    /// Use [`GuardConfig::float_tolerance`] (default `0.00001`).
    Configured,
    /// Use this tolerance.
    Fixed(F),
}

impl<F> From<F> for Tolerance<F> {
    fn from(tolerance: F) -> Self {
        Self::Fixed(tolerance)
    }
}

impl<F: Float + Display> Tolerance<F> {
    /// Resolves the band width, rejecting negative or NaN tolerances with a
    /// constraint error on the `tolerance` parameter.
    ///
    /// A configured tolerance that does not fit `F` as a finite value (an
    /// `f64` beyond `f32::MAX` read by an `f32` guard) is rejected the same
    /// way.
    pub fn resolve(self) -> GuardResult<F> {
        let tolerance = match self {
            Self::Fixed(tolerance) => tolerance,
            Self::Configured => {
                let configured = GuardConfig::current().float_tolerance;
                match <F as NumCast>::from(configured) {
                    Some(tolerance) if tolerance.is_finite() => tolerance,
                    _ => {
                        return Err(Arg::new(configured, "tolerance").reject(|t| {
                            format!(
                                "Value was '{t}', but must be representable as {}.",
                                std::any::type_name::<F>()
                            )
                        }));
                    }
                }
            }
        };

        crate::foundation::Guard::argument()
            .is_less_than(Arg::new(tolerance, "tolerance"), F::zero())
    }
}

/// Returns true when `argument` lies within `tolerance` of `comparison`.
#[inline]
pub fn within_tolerance<F: Float>(argument: F, comparison: F, tolerance: F) -> bool {
    argument >= comparison - tolerance && argument <= comparison + tolerance
}

// ============================================================================
// GUARDS
// ============================================================================

/// Equality and zero guards for floating-point values.
pub trait FloatGuards: GuardBuilder {
    /// Fails when the argument is within `tolerance` of `comparison`.
    ///
    /// ```rust
    /// use bulwark_guard::prelude::*;
    ///
    /// let ratio = 0.5_f64;
    /// let err = Guard::argument().is_equal_within(arg!(ratio), 0.75, 0.25).unwrap_err();
    /// assert_eq!(
    ///     err.message(),
    ///     "Value was '0.5', but must not be equal to '0.75' within tolerance of '0.25'."
    /// );
    /// ```
    fn is_equal_within<F>(
        &self,
        argument: Arg<F>,
        comparison: F,
        tolerance: impl Into<Tolerance<F>>,
    ) -> GuardResult<F>
    where
        F: Float + Display,
    {
        let tolerance = tolerance.into().resolve()?;

        ensure(
            argument,
            |value| !within_tolerance(*value, comparison, tolerance),
            |value| {
                format!(
                    "Value was '{value}', but must not be equal to '{comparison}' within tolerance of '{tolerance}'."
                )
            },
        )
    }

    /// Fails when the argument is farther than `tolerance` from `comparison`.
    fn is_not_equal_within<F>(
        &self,
        argument: Arg<F>,
        comparison: F,
        tolerance: impl Into<Tolerance<F>>,
    ) -> GuardResult<F>
    where
        F: Float + Display,
    {
        let tolerance = tolerance.into().resolve()?;

        ensure(
            argument,
            |value| within_tolerance(*value, comparison, tolerance),
            |value| {
                format!(
                    "Value was '{value}', but must be equal to '{comparison}' within tolerance of '{tolerance}'."
                )
            },
        )
    }

    /// Fails when the argument is within `tolerance` of zero.
    fn is_zero_within<F>(&self, argument: Arg<F>, tolerance: impl Into<Tolerance<F>>) -> GuardResult<F>
    where
        F: Float + Display,
    {
        self.is_equal_within(argument, F::zero(), tolerance)
    }
}

impl<B: GuardBuilder + ?Sized> FloatGuards for B {}
