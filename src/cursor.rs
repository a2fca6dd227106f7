//! Pull-based iterator protocol.
//!
//! This module provides [`Cursor`], the single-traversal state object that
//! every sequence hands out. A cursor can be asked whether another element
//! is available ([`Cursor::has_next`]) any number of times, and advanced
//! with [`Cursor::next_element`]. It is also a plain [`Iterator`], so the
//! standard adapters and `for` loops work on it directly.
//!
//! Cursors are never shared: each request for a traversal builds a new one
//! from fresh upstream cursors.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let list = List::from(vec![1, 2]);
//! let mut cursor = list.cursor();
//!
//! assert!(cursor.has_next());
//! assert!(cursor.has_next()); // Asking again does not advance
//! assert_eq!(cursor.next_element(), Ok(1));
//! assert_eq!(cursor.next_element(), Ok(2));
//! assert!(!cursor.has_next());
//! assert_eq!(cursor.next_element(), Err(QueryError::EmptySequence));
//! ```

use std::fmt;
use std::iter::{Fuse, FusedIterator};

use crate::error::{QueryError, QueryResult};

/// A single-owner cursor over the elements of one traversal.
///
/// Internally a cursor wraps the adapter-specific iterator and a one
/// element look-ahead slot used by [`Cursor::has_next`].
pub struct Cursor<T> {
    inner: Fuse<Box<dyn Iterator<Item = T>>>,
    /// `Some(None)` records that the look-ahead found the end.
    peeked: Option<Option<T>>,
}

impl<T> Cursor<T> {
    /// Wraps an adapter iterator as a cursor.
    pub fn new<I>(iterator: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        let boxed: Box<dyn Iterator<Item = T>> = Box::new(iterator);
        Self {
            inner: boxed.fuse(),
            peeked: None,
        }
    }

    /// Creates a cursor that yields nothing.
    #[must_use]
    pub fn empty() -> Self
    where
        T: 'static,
    {
        Self::new(std::iter::empty())
    }

    /// Returns `true` if another element is available.
    ///
    /// Repeated calls without an intervening advance return the same answer
    /// and pull at most one element from upstream.
    pub fn has_next(&mut self) -> bool {
        let inner = &mut self.inner;
        self.peeked.get_or_insert_with(|| inner.next()).is_some()
    }

    /// Advances the cursor and returns the element it moved past.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if the cursor is exhausted.
    pub fn next_element(&mut self) -> QueryResult<T> {
        self.next().ok_or(QueryError::EmptySequence)
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match &self.peeked {
            None => (lower, upper),
            Some(None) => (0, Some(0)),
            Some(Some(_)) => (
                lower.saturating_add(1),
                upper.and_then(|upper| upper.checked_add(1)),
            ),
        }
    }
}

impl<T> FusedIterator for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("peeked", &self.peeked.as_ref().map(Option::is_some))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn test_empty_cursor_has_no_next() {
        let mut cursor: Cursor<i32> = Cursor::empty();
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_element(), Err(QueryError::EmptySequence));
    }

    #[rstest]
    fn test_has_next_is_repeatable() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let mut cursor = Cursor::new((1..=3).inspect(move |_| counter.set(counter.get() + 1)));

        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(pulls.get(), 1);
        assert_eq!(cursor.next_element(), Ok(1));
        assert_eq!(pulls.get(), 1);
    }

    #[rstest]
    fn test_iterator_drains_in_order() {
        let cursor = Cursor::new(vec![3, 1, 2].into_iter());
        assert_eq!(cursor.collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_exhausted_cursor_stays_exhausted() {
        let mut cursor = Cursor::new(std::iter::once(1));
        assert_eq!(cursor.next(), Some(1));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[rstest]
    fn test_size_hint_accounts_for_peeked_element() {
        let mut cursor = Cursor::new(vec![1, 2, 3].into_iter());
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.has_next();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.next();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
    }

    #[rstest]
    fn test_debug_does_not_require_debug_elements() {
        struct Opaque;
        let cursor = Cursor::new(std::iter::once(Opaque));
        assert!(format!("{cursor:?}").contains("Cursor"));
    }
}
