//! Core guard types and the shared guard contract
//!
//! - **Entry point**: [`Guard`], [`GuardBuilder`]
//! - **Invocation**: [`Arg`]
//! - **Errors**: [`GuardError`], [`GuardErrorKind`], [`GuardResult`]
//! - **Contract**: [`ensure`], [`present`], [`finalize_message`]
//! - **Absence**: [`Nullable`]
//!
//! # Writing a guard
//!
//! A guard is a method on a trait that extends [`GuardBuilder`]. It takes an
//! [`Arg`], decides whether the value is allowed, and returns either the
//! value or the error built by [`Arg::reject`] / [`Arg::absent`]:
//!
//! ```rust,ignore
//! pub trait SlugGuards: GuardBuilder {
//!     fn is_not_slug<'a>(&self, argument: Arg<&'a str>) -> GuardResult<&'a str> {
//!         ensure(argument, |s| s.chars().all(|c| c.is_ascii_lowercase() || c == '-'), |s| {
//!             format!("Value was '{s}', but must be a slug.")
//!         })
//!     }
//! }
//!
//! impl<B: GuardBuilder + ?Sized> SlugGuards for B {}
//! ```

pub mod arg;
pub mod builder;
pub mod check;
pub mod error;
pub mod message;
pub mod nullable;

pub use arg::{Arg, NULL_MESSAGE};
pub use builder::{Guard, GuardBuilder};
pub use check::{ensure, present};
pub use error::{GuardError, GuardErrorKind, GuardResult};
pub use message::{add_period, finalize_message, render};
pub use nullable::Nullable;
