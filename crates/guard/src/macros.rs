//! Macros for building guard invocations and guard families.
//!
//! # Available Macros
//!
//! - [`arg!`]: wrap a value in an [`Arg`](crate::foundation::Arg), capturing
//!   the call-site expression as the parameter name
//!
//! # Examples
//!
//! ```rust
//! use bulwark_guard::prelude::*;
//!
//! let user_id = 0_u64;
//! let err = Guard::argument().is_zero(arg!(user_id)).unwrap_err();
//! assert_eq!(err.param_name(), "user_id");
//!
//! // Explicit names win over the captured expression.
//! let err = Guard::argument().is_zero(arg!(user_id, "id")).unwrap_err();
//! assert_eq!(err.param_name(), "id");
//! ```

// ============================================================================
// ARG MACRO
// ============================================================================

/// Wraps a value in an [`Arg`](crate::foundation::Arg).
///
/// `arg!(expr)` names the argument after the source text of `expr`;
/// `arg!(expr, name)` uses `name` instead.
#[macro_export]
macro_rules! arg {
    ($value:expr, $name:expr $(,)?) => {
        $crate::foundation::Arg::new($value, $name)
    };
    ($value:expr $(,)?) => {
        $crate::foundation::Arg::new($value, ::core::stringify!($value))
    };
}

// ============================================================================
// CHARACTER GUARD MACRO
// ============================================================================

/// Declares a pair of character-class guards on a guard trait.
///
/// Both methods delegate to `is_char_class` / `is_not_char_class`.
macro_rules! char_class_guards {
    ($(
        $(#[$meta:meta])*
        $class:ident => $is:ident, $is_not:ident;
    )+) => {
        $(
            $(#[$meta])*
            fn $is<C: $crate::guards::CodeUnit>(&self, argument: $crate::foundation::Arg<C>) -> $crate::foundation::GuardResult<C> {
                self.is_char_class(argument, $crate::guards::CharClass::$class)
            }

            #[doc = concat!("Inverse of [`", stringify!($is), "`](Self::", stringify!($is), ").")]
            fn $is_not<C: $crate::guards::CodeUnit>(&self, argument: $crate::foundation::Arg<C>) -> $crate::foundation::GuardResult<C> {
                self.is_not_char_class(argument, $crate::guards::CharClass::$class)
            }
        )+
    };
}

pub(crate) use char_class_guards;

// ============================================================================
// RELATION GUARD MACRO
// ============================================================================

/// Declares named relational guards that forward to `compare`.
macro_rules! relation_guards {
    ($(
        $(#[$meta:meta])*
        fn $name:ident => $relation:ident;
    )+) => {
        $(
            $(#[$meta])*
            fn $name<T>(&self, argument: $crate::foundation::Arg<T>, comparison: T) -> $crate::foundation::GuardResult<T>
            where
                T: PartialOrd + ::std::fmt::Display,
            {
                self.compare(argument, $crate::guards::Relation::$relation, comparison)
            }
        )+
    };
}

pub(crate) use relation_guards;
