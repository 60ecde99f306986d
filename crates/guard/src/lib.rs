//! # bulwark-guard
//!
//! Fluent, extensible guard clauses for argument validation.
//!
//! ## Quick Start
//!
//! ```rust
//! use bulwark_guard::prelude::*;
//!
//! fn open_account(owner: Option<&str>, deposit: u32) -> GuardResult<(String, u32)> {
//!     let owner = Guard::argument().is_null_or_white_space(arg!(owner))?;
//!     let deposit = Guard::argument().is_less_than(arg!(deposit).with_message("deposit too small"), 100)?;
//!     Ok((owner.to_owned(), deposit))
//! }
//!
//! assert!(open_account(Some("ada"), 250).is_ok());
//!
//! let err = open_account(Some("ada"), 20).unwrap_err();
//! assert_eq!(err.to_string(), "deposit too small. (Parameter 'deposit')");
//! ```
//!
//! Every guard takes an [`Arg`](foundation::Arg), built with [`arg!`] so the
//! parameter name is taken from the call site, and returns the validated
//! value or a [`GuardError`](foundation::GuardError).
//!
//! ## Writing Guards
//!
//! Guard families are extension traits over
//! [`GuardBuilder`](foundation::GuardBuilder). Declare your own trait with a
//! blanket impl and build its methods from [`ensure`](foundation::ensure) and
//! [`present`](foundation::present); see [`foundation`].
//!
//! ## Built-in Guards
//!
//! - **Generic**: `is_null`, `is_equal_to`, `is_not_equal_to`, `is_against_expression`
//! - **Boolean**: `is_true`, `is_false`
//! - **Numeric**: `is_less_than`, `is_less_than_or_equal_to`, `is_greater_than`,
//!   `is_greater_than_or_equal_to`, `is_zero`
//! - **Float**: `is_equal_within`, `is_not_equal_within`, `is_zero_within`
//! - **Character**: `is_char_class` and a named pair per [`CharClass`](guards::CharClass)
//! - **String**: `is_null_or_empty`, `is_null_or_white_space`, `is_regex_match`,
//!   `is_not_regex_match`
//! - **Collection**: `is_empty`, `any`, `all`, `contains`, `does_not_contain`

mod macros;

pub mod config;
pub mod foundation;
pub mod guards;
pub mod prelude;
