//! Lazy sequences and their adapters.
//!
//! This module provides the enumeration engine:
//!
//! - [`Source`]: the object-safe contract "produce a fresh [`Cursor`]"
//! - [`Enumerable`]: a cheap, shareable handle to any [`Source`]
//! - [`OrderedEnumerable`]: a sorted view supporting `then_by` refinement
//! - [`Queryable`]: the operator and terminal-operation surface shared by
//!   every sequence and by [`List`](crate::list::List)
//! - [`IntoEnumerable`]: conversions accepted wherever a second sequence
//!   is expected (`concat`, `union`, `except`, `select_many`)
//!
//! # Laziness
//!
//! Operators only build descriptions. Each adapter holds its upstream
//! [`Enumerable`] and the operator's parameters; nothing is pulled until a
//! terminal operation asks for a cursor.
//!
//! ```rust
//! use enumerable::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let evens = List::from(vec![1, 2, 3, 4]).filter(move |value| {
//!     counter.set(counter.get() + 1);
//!     value % 2 == 0
//! });
//!
//! assert_eq!(calls.get(), 0); // Nothing evaluated yet
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//! assert_eq!(calls.get(), 4);
//! ```
//!
//! # Restartability
//!
//! Every call to [`Enumerable::cursor`] builds new upstream cursors, so the
//! same sequence can be traversed any number of times. Over a
//! [`List`](crate::list::List) each traversal observes the list as it is
//! while that traversal runs.

use std::fmt;
use std::rc::Rc;

use crate::cursor::Cursor;

mod array;
mod concat;
mod except;
mod filter;
mod flatten;
mod generate;
mod ordered;
mod queryable;
mod range;
mod reverse;
mod transform;
mod unique;

pub(crate) use array::{ArraySource, SharedBuffer};
pub use ordered::OrderedEnumerable;
pub use queryable::Queryable;

pub(crate) use concat::ConcatSource;
pub(crate) use except::ExceptSource;
pub(crate) use filter::FilterSource;
pub(crate) use flatten::FlattenSource;
pub(crate) use range::RangeSource;
pub(crate) use reverse::ReverseSource;
pub(crate) use transform::TransformSource;
pub(crate) use unique::UniqueSource;

/// A predicate over an element and its position in the upstream sequence.
pub type IndexedPredicate<T> = Rc<dyn Fn(&T, usize) -> bool>;

/// A projection of an element and its position in the upstream sequence.
pub type IndexedSelector<T, U> = Rc<dyn Fn(&T, usize) -> U>;

/// A projection of an element to a key or value.
pub type Selector<T, U> = Rc<dyn Fn(&T) -> U>;

/// The capability every sequence implements: produce a fresh cursor.
///
/// Implementations must not share cursor state between calls. Two cursors
/// obtained from the same source advance independently.
pub trait Source<T> {
    /// Starts a new traversal.
    fn cursor(&self) -> Cursor<T>;
}

/// A lazy, restartable sequence of `T`.
///
/// `Enumerable` is a reference-counted handle, so cloning it is O(1) and
/// the clone describes the same sequence.
pub struct Enumerable<T> {
    source: Rc<dyn Source<T>>,
}

impl<T: 'static> Enumerable<T> {
    /// Wraps any [`Source`] implementation as an `Enumerable`.
    pub fn from_source<S>(source: S) -> Self
    where
        S: Source<T> + 'static,
    {
        Self {
            source: Rc::new(source),
        }
    }

    /// Starts a new traversal of this sequence.
    #[inline]
    pub fn cursor(&self) -> Cursor<T> {
        self.source.cursor()
    }
}

impl<T: Clone + 'static> Enumerable<T> {
    /// Creates a sequence that yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let empty: Enumerable<i32> = Enumerable::empty();
    /// assert!(!empty.any());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::from_iterator_fn(std::iter::empty)
    }

    /// Creates a sequence over an owned vector.
    ///
    /// The vector is moved into storage that only this sequence can reach,
    /// which makes the sequence immutable.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_source(ArraySource::new(elements))
    }

    /// Creates a sequence that calls `factory` for a new iterator on each traversal.
    ///
    /// This is the entry point for generative and unbounded sequences.
    /// Operators that drain their upstream (`reverse`, `order_by`, `last`,
    /// `count`, ...) never terminate on an unbounded sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let naturals = Enumerable::from_iterator_fn(|| 0_u64..);
    /// assert_eq!(naturals.skip(5).take(3).to_vec(), vec![5, 6, 7]);
    /// ```
    pub fn from_iterator_fn<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = T> + 'static,
    {
        Self::from_source(generate::IteratorSource::new(factory))
    }

    /// Creates a sequence that yields `element` exactly `count` times.
    #[must_use]
    pub fn repeat(element: T, count: usize) -> Self {
        Self::from_iterator_fn(move || std::iter::repeat_n(element.clone(), count))
    }
}

impl Enumerable<i64> {
    /// Creates a sequence of `count` consecutive integers starting at `start`.
    ///
    /// The sequence stops early rather than overflowing past `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// assert_eq!(Enumerable::range(3, 4).to_vec(), vec![3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn range(start: i64, count: usize) -> Self {
        Self::from_iterator_fn(move || (start..=i64::MAX).take(count))
    }
}

impl<T> Clone for Enumerable<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
        }
    }
}

impl<T> fmt::Debug for Enumerable<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Enumerable").finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Default for Enumerable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Enumerable<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Enumerable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: 'static> IntoIterator for Enumerable<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T: 'static> IntoIterator for &Enumerable<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T: Clone + 'static> Queryable<T> for Enumerable<T> {
    fn as_enumerable(&self) -> Self {
        self.clone()
    }
}

// Enumerable shares `Rc` handles, so it must stay on one thread.
static_assertions::assert_not_impl_any!(Enumerable<i32>: Send, Sync);

// =============================================================================
// IntoEnumerable
// =============================================================================

/// Conversion into an [`Enumerable`].
///
/// Owned vectors, arrays and slices are copied into fresh immutable storage.
/// Sequences and lists are shared by reference, so the result stays live.
pub trait IntoEnumerable<T> {
    /// Performs the conversion.
    fn into_enumerable(self) -> Enumerable<T>;
}

impl<T: Clone + 'static> IntoEnumerable<T> for Vec<T> {
    fn into_enumerable(self) -> Enumerable<T> {
        Enumerable::from_vec(self)
    }
}

impl<T: Clone + 'static, const N: usize> IntoEnumerable<T> for [T; N] {
    fn into_enumerable(self) -> Enumerable<T> {
        Enumerable::from_vec(Vec::from(self))
    }
}

impl<T: Clone + 'static> IntoEnumerable<T> for &[T] {
    fn into_enumerable(self) -> Enumerable<T> {
        Enumerable::from_vec(self.to_vec())
    }
}

impl<T> IntoEnumerable<T> for Enumerable<T> {
    fn into_enumerable(self) -> Enumerable<T> {
        self
    }
}

impl<T> IntoEnumerable<T> for &Enumerable<T> {
    fn into_enumerable(self) -> Enumerable<T> {
        self.clone()
    }
}
