//! Sequence guards: emptiness, membership and item predicates.
//!
//! Every guard null-checks first, so `Option<Vec<T>>` and friends report an
//! absence error (with the caller's custom message) before any item is
//! looked at.

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::Serialize;

use crate::foundation::{Arg, GuardBuilder, GuardResult, Nullable, ensure, present, render};

// ============================================================================
// SEQUENCE
// ============================================================================

/// A finite collection whose items can be visited in order.
pub trait Sequence {
    /// The element type.
    type Item;

    /// Iterates over the items.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for &[T] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for &Vec<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Sequence for &[T; N] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> Sequence for HashSet<T, S> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for BTreeSet<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

// ============================================================================
// GUARDS
// ============================================================================

/// Guards over nullable sequences.
///
/// ```rust
/// use bulwark_guard::prelude::*;
///
/// let ids = vec![1, 2, 3];
/// let err = Guard::argument().contains(arg!(&ids, "ids"), 2).unwrap_err();
/// assert_eq!(err.message(), "Cannot contain an item equal to '2'.");
///
/// assert_eq!(Guard::argument().contains(arg!(&ids, "ids"), 9).unwrap(), &ids);
/// ```
pub trait CollectionGuards: GuardBuilder {
    /// Fails when the sequence has no items.
    fn is_empty<N>(&self, argument: Arg<N>) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: Sequence,
    {
        ensure(
            present(argument)?,
            |sequence| sequence.items().next().is_some(),
            |_| "Cannot be empty.".to_owned(),
        )
    }

    /// Fails when any item satisfies `predicate`.
    fn any<N, P>(&self, argument: Arg<N>, mut predicate: P) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: Sequence,
        P: FnMut(&<N::Present as Sequence>::Item) -> bool,
    {
        ensure(
            present(argument)?,
            |sequence| !sequence.items().any(|item| predicate(item)),
            |_| "Cannot have anything matching your predicate.".to_owned(),
        )
    }

    /// Fails when every item satisfies `predicate`.
    ///
    /// An empty sequence fails: all of its (zero) items match.
    fn all<N, P>(&self, argument: Arg<N>, mut predicate: P) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: Sequence,
        P: FnMut(&<N::Present as Sequence>::Item) -> bool,
    {
        ensure(
            present(argument)?,
            |sequence| !sequence.items().all(|item| predicate(item)),
            |_| "Cannot have all items match your predicate.".to_owned(),
        )
    }

    /// Fails when an item equal to `item` is present.
    fn contains<N>(&self, argument: Arg<N>, item: <N::Present as Sequence>::Item) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: Sequence,
        <N::Present as Sequence>::Item: PartialEq + Serialize,
    {
        ensure(
            present(argument)?,
            |sequence| !sequence.items().any(|candidate| *candidate == item),
            |_| format!("Cannot contain an item equal to '{}'.", render(&item)),
        )
    }

    /// Fails when no item equal to `item` is present.
    fn does_not_contain<N>(
        &self,
        argument: Arg<N>,
        item: <N::Present as Sequence>::Item,
    ) -> GuardResult<N::Present>
    where
        N: Nullable,
        N::Present: Sequence,
        <N::Present as Sequence>::Item: PartialEq + Serialize,
    {
        ensure(
            present(argument)?,
            |sequence| sequence.items().any(|candidate| *candidate == item),
            |_| format!("Must contain an item that is equal to '{}'.", render(&item)),
        )
    }
}

impl<B: GuardBuilder + ?Sized> CollectionGuards for B {}
