//! Built-in guard families.
//!
//! Each family is an extension trait over [`GuardBuilder`](crate::foundation::GuardBuilder)
//! with a blanket impl, so bringing the trait into scope is all it takes to
//! call its guards on `Guard::argument()`.
//!
//! | Family | Arguments |
//! |--------|-----------|
//! | [`GenericGuards`] | anything [`Nullable`](crate::foundation::Nullable) |
//! | [`BooleanGuards`] | `bool` |
//! | [`NumericGuards`] | `PartialOrd + Display` values, zero for exact types |
//! | [`FloatGuards`] | `f32` / `f64` with a [`Tolerance`] |
//! | [`CharGuards`] | any [`CodeUnit`] |
//! | [`StringGuards`] | nullable strings |
//! | [`CollectionGuards`] | nullable [`Sequence`]s |

pub mod boolean;
pub mod character;
pub mod collection;
pub mod float;
pub mod generic;
pub mod numeric;
pub mod string;

pub use boolean::BooleanGuards;
pub use character::{CharClass, CharGuards, CodeUnit};
pub use collection::{CollectionGuards, Sequence};
pub use float::{FloatGuards, Tolerance, within_tolerance};
pub use generic::GenericGuards;
pub use numeric::{NumericGuards, Relation};
pub use string::{PatternOptions, StringGuards};
