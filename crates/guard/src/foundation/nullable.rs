//! Values that may be absent.
//!
//! Rust has no null, so "null" is modelled by [`Nullable`]: `Option<T>` is
//! absent when `None`, `serde_json::Value` is absent when `Value::Null`, and
//! plain values are always present. Guards that null-check their argument
//! accept any `Nullable` and hand back the present value.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use rust_decimal::Decimal;

/// A value that may be absent.
///
/// Implement this for your own types to make them usable with the null-aware
/// guards.
pub trait Nullable {
    /// The value once it is known to be present.
    type Present;

    /// Returns the present value, or `None` when absent.
    fn into_present(self) -> Option<Self::Present>;
}

impl<T> Nullable for Option<T> {
    type Present = T;

    #[inline]
    fn into_present(self) -> Option<T> {
        self
    }
}

impl Nullable for serde_json::Value {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        match self {
            Self::Null => None,
            other => Some(other),
        }
    }
}

/// Implements [`Nullable`] for types that can never be absent.
macro_rules! always_present {
    ($(<$($gen:ident),+> $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen),+> Nullable for $ty {
                type Present = Self;

                #[inline]
                fn into_present(self) -> Option<Self> {
                    Some(self)
                }
            }
        )+
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Nullable for $ty {
                type Present = Self;

                #[inline]
                fn into_present(self) -> Option<Self> {
                    Some(self)
                }
            }
        )+
    };
}

// No f32/f64: floats compare through the tolerance-aware float guards.
always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, Decimal, String,
    &str,
);

always_present!(
    <T> Vec<T>,
    <T> VecDeque<T>,
    <T> Box<T>,
    <T> Rc<T>,
    <T> Arc<T>,
    <T> BTreeSet<T>,
    <K, V> BTreeMap<K, V>,
    <T, S> HashSet<T, S>,
    <K, V, S> HashMap<K, V, S>,
);

impl<T> Nullable for &[T] {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T> Nullable for &Vec<T> {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T, const N: usize> Nullable for &[T; N] {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T> Nullable for Box<[T]> {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

impl Nullable for Cow<'_, str> {
    type Present = Self;

    #[inline]
    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}
