//! Sorted view with chained tie-breakers.
//!
//! An [`OrderedEnumerable`] is built by `order_by` (or one of its
//! variants) and refined by `then_by`. Iterating it drains the upstream,
//! sorts the buffer with a stable sort over the comparer chain, and yields
//! the result. Nothing is cached: every traversal sorts the upstream as it
//! is at that moment.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let people = List::from(vec![("ann", 31), ("bob", 25), ("cid", 31), ("dee", 25)]);
//! let sorted = people
//!     .order_by_descending(|person| person.1)
//!     .then_by(|person| person.0)
//!     .select(|person| person.0)
//!     .to_vec();
//! assert_eq!(sorted, vec!["ann", "cid", "bob", "dee"]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use super::{Enumerable, IntoEnumerable, Queryable, Source};
use crate::comparer::{Comparer, SortDirection, compare_chained, create_comparer, create_comparer_with};
use crate::cursor::Cursor;

/// Comparer chains rarely exceed a handful of levels.
type ComparerChain<T> = SmallVec<[Comparer<T>; 4]>;

/// A sequence sorted by one or more keys.
pub struct OrderedEnumerable<T> {
    upstream: Enumerable<T>,
    comparers: ComparerChain<T>,
}

impl<T: Clone + 'static> OrderedEnumerable<T> {
    /// Creates an ordered view of `upstream` using `comparer` as the primary order.
    pub fn new(upstream: Enumerable<T>, comparer: Comparer<T>) -> Self {
        let mut comparers = ComparerChain::new();
        comparers.push(comparer);
        Self {
            upstream,
            comparers,
        }
    }

    /// Starts a new traversal, sorting the upstream on the first pull.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(OrderedIterator {
            pending: Some((self.upstream.clone(), self.comparers.clone())),
            sorted: Vec::new().into_iter(),
        })
    }

    /// Returns the number of comparers in the chain.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.comparers.len()
    }

    /// Appends `comparer` as the next tie-breaker.
    #[must_use]
    pub fn then_by_comparer(&self, comparer: Comparer<T>) -> Self {
        let mut comparers = self.comparers.clone();
        comparers.push(comparer);
        Self {
            upstream: self.upstream.clone(),
            comparers,
        }
    }

    /// Breaks remaining ties by the natural order of a key, ascending.
    #[must_use]
    pub fn then_by<K, S>(&self, key_selector: S) -> Self
    where
        K: Ord,
        S: Fn(&T) -> K + 'static,
    {
        self.then_by_comparer(create_comparer(key_selector, SortDirection::Ascending))
    }

    /// Breaks remaining ties by a key compared with `key_comparer`, ascending.
    #[must_use]
    pub fn then_by_with<K, S, C>(&self, key_selector: S, key_comparer: C) -> Self
    where
        S: Fn(&T) -> K + 'static,
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        self.then_by_comparer(create_comparer_with(
            key_selector,
            SortDirection::Ascending,
            key_comparer,
        ))
    }

    /// Breaks remaining ties by the natural order of a key, descending.
    #[must_use]
    pub fn then_by_descending<K, S>(&self, key_selector: S) -> Self
    where
        K: Ord,
        S: Fn(&T) -> K + 'static,
    {
        self.then_by_comparer(create_comparer(key_selector, SortDirection::Descending))
    }

    /// Breaks remaining ties by a key compared with `key_comparer`, descending.
    #[must_use]
    pub fn then_by_descending_with<K, S, C>(&self, key_selector: S, key_comparer: C) -> Self
    where
        S: Fn(&T) -> K + 'static,
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        self.then_by_comparer(create_comparer_with(
            key_selector,
            SortDirection::Descending,
            key_comparer,
        ))
    }
}

struct OrderedIterator<T> {
    pending: Option<(Enumerable<T>, ComparerChain<T>)>,
    sorted: std::vec::IntoIter<T>,
}

impl<T: 'static> Iterator for OrderedIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((upstream, comparers)) = self.pending.take() {
            let mut buffer: Vec<T> = upstream.cursor().collect();
            // `sort_by` is stable: full ties keep their upstream order.
            buffer.sort_by(|left, right| compare_chained(&comparers, left, right));
            tracing::trace!(
                buffered = buffer.len(),
                levels = comparers.len(),
                "order_by: sorted upstream"
            );
            self.sorted = buffer.into_iter();
        }
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.pending.is_some() {
            (0, None)
        } else {
            self.sorted.size_hint()
        }
    }
}

impl<T: Clone + 'static> Source<T> for OrderedEnumerable<T> {
    fn cursor(&self) -> Cursor<T> {
        Self::cursor(self)
    }
}

impl<T: Clone + 'static> Queryable<T> for OrderedEnumerable<T> {
    fn as_enumerable(&self) -> Enumerable<T> {
        Enumerable::from_source(self.clone())
    }
}

impl<T> Clone for OrderedEnumerable<T> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            comparers: self.comparers.clone(),
        }
    }
}

impl<T> fmt::Debug for OrderedEnumerable<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrderedEnumerable")
            .field("depth", &self.comparers.len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> IntoIterator for &OrderedEnumerable<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T: Clone + 'static> IntoEnumerable<T> for OrderedEnumerable<T> {
    fn into_enumerable(self) -> Enumerable<T> {
        Enumerable::from_source(self)
    }
}

impl<T: Clone + 'static> IntoEnumerable<T> for &OrderedEnumerable<T> {
    fn into_enumerable(self) -> Enumerable<T> {
        self.as_enumerable()
    }
}
