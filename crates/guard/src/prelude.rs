//! Prelude module for convenient imports.
//!
//! `use bulwark_guard::prelude::*;` brings in the entry point, the [`arg!`]
//! macro, the error types and every built-in guard trait.
//!
//! # Examples
//!
//! ```rust
//! use bulwark_guard::prelude::*;
//!
//! let port = 8080_u16;
//! let port = Guard::argument().is_less_than(arg!(port), 1024).unwrap();
//! assert_eq!(port, 8080);
//! ```

// ============================================================================
// FOUNDATION: Entry point, invocation, errors
// ============================================================================

pub use crate::arg;
pub use crate::foundation::{
    Arg, Guard, GuardBuilder, GuardError, GuardErrorKind, GuardResult, Nullable, ensure, present,
};

// ============================================================================
// GUARDS: Every built-in family and its parameter types
// ============================================================================

pub use crate::guards::{
    BooleanGuards, CharClass, CharGuards, CodeUnit, CollectionGuards, FloatGuards, GenericGuards,
    NumericGuards, PatternOptions, Relation, Sequence, StringGuards, Tolerance,
};

// ============================================================================
// CONFIG
// ============================================================================

pub use crate::config::{ConfigError, GuardConfig};
