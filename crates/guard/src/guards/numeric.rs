//! Relational and zero guards for ordered values.
//!
//! Each guard is named after the condition it *forbids*:
//! `is_less_than(a, c)` fails when `a < c` and lets `a == c` through, while
//! `is_less_than_or_equal_to(a, c)` also rejects the boundary.
//!
//! The guards work for any `PartialOrd + Display` type, which covers every
//! integer width, `f32`/`f64` and `rust_decimal::Decimal`. A guard passes
//! only when the *permitting* relation holds, so unordered values such as
//! NaN always fail.

use std::fmt::{self, Display};

use num_traits::Zero;
use serde::Serialize;

use crate::foundation::{Arg, GuardBuilder, GuardResult, Nullable, ensure};
use crate::guards::GenericGuards;

// ============================================================================
// RELATION
// ============================================================================

/// A forbidden ordering between an argument and its comparison value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `argument < comparison` is forbidden.
    LessThan,
    /// `argument <= comparison` is forbidden.
    LessThanOrEqualTo,
    /// `argument > comparison` is forbidden.
    GreaterThan,
    /// `argument >= comparison` is forbidden.
    GreaterThanOrEqualTo,
}

impl Relation {
    /// Every relation, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::LessThan,
        Self::LessThanOrEqualTo,
        Self::GreaterThan,
        Self::GreaterThanOrEqualTo,
    ];

    /// Returns true when `argument` stands in the *permitted* (complementary)
    /// relation to `comparison`.
    #[inline]
    pub fn permits<T: PartialOrd + ?Sized>(self, argument: &T, comparison: &T) -> bool {
        match self {
            Self::LessThan => argument >= comparison,
            Self::LessThanOrEqualTo => argument > comparison,
            Self::GreaterThan => argument <= comparison,
            Self::GreaterThanOrEqualTo => argument < comparison,
        }
    }

    /// The phrase used in failure messages.
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::LessThan => "less than",
            Self::LessThanOrEqualTo => "less than or equal to",
            Self::GreaterThan => "greater than",
            Self::GreaterThanOrEqualTo => "greater than or equal to",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

// ============================================================================
// GUARDS
// ============================================================================

/// Relational guards over ordered values, plus `is_zero` for exact types.
pub trait NumericGuards: GuardBuilder {
    /// Fails when `argument` stands in `relation` to `comparison`.
    ///
    /// ```rust
    /// use bulwark_guard::prelude::*;
    ///
    /// let attempts = 3;
    /// let err = Guard::argument()
    ///     .compare(arg!(attempts), Relation::LessThan, 5)
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "Value was '3', but must not be less than '5'.");
    /// ```
    fn compare<T>(&self, argument: Arg<T>, relation: Relation, comparison: T) -> GuardResult<T>
    where
        T: PartialOrd + Display,
    {
        ensure(
            argument,
            |value| relation.permits(value, &comparison),
            |value| format!("Value was '{value}', but must not be {relation} '{comparison}'."),
        )
    }

    crate::macros::relation_guards! {
        /// Fails when the argument is less than `comparison`.
        fn is_less_than => LessThan;
        /// Fails when the argument is less than or equal to `comparison`.
        fn is_less_than_or_equal_to => LessThanOrEqualTo;
        /// Fails when the argument is greater than `comparison`.
        fn is_greater_than => GreaterThan;
        /// Fails when the argument is greater than or equal to `comparison`.
        fn is_greater_than_or_equal_to => GreaterThanOrEqualTo;
    }

    /// Fails when the argument equals zero.
    ///
    /// This is [`is_equal_to`](GenericGuards::is_equal_to) against the
    /// type's zero, so it only applies to exactly comparable types. Floats
    /// use [`is_zero_within`](crate::guards::FloatGuards::is_zero_within).
    fn is_zero<T>(&self, argument: Arg<T>) -> GuardResult<T>
    where
        T: Zero + Nullable<Present = T> + PartialEq + Serialize,
    {
        self.is_equal_to(argument, T::zero())
    }
}

impl<B: GuardBuilder + ?Sized> NumericGuards for B {}
