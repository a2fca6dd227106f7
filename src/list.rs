//! Eager, index-addressable, mutable list.
//!
//! This module provides [`List`], the primary data source and sink of the
//! crate. A `List` owns its backing buffer and mutates it in place. It
//! also implements [`Queryable`], and every sequence built from it reads
//! that same buffer.
//!
//! # Live Views
//!
//! Sequences derived from a list are live. Each pull reads the buffer as it
//! is at that moment, so mutations made between pulls are observed, even in
//! the middle of a traversal:
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let list = List::from(vec![1, 2, 3]);
//! let doubled = list.select(|value| value * 2);
//!
//! list.push(4);
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6, 8]);
//!
//! let mut cursor = doubled.cursor();
//! assert_eq!(cursor.next(), Some(2));
//! list.remove_at(1).unwrap(); // Shifts 3 and 4 down by one
//! assert_eq!(cursor.next(), Some(6));
//! ```
//!
//! Call [`Queryable::to_list`] or [`Queryable::to_vec`] to take an
//! independent snapshot instead.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity     |
//! |--------------|----------------|
//! | `get`        | O(1)           |
//! | `set`        | O(1)           |
//! | `push`       | O(1) amortized |
//! | `pop`        | O(1)           |
//! | `push_front` | O(n)           |
//! | `pop_front`  | O(n)           |
//! | `insert`     | O(n)           |
//! | `remove_at`  | O(n)           |
//! | `remove`     | O(n)           |
//! | `copy`       | O(n)           |

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::enumerable::{ArraySource, Enumerable, IntoEnumerable, Queryable, SharedBuffer};
use crate::error::{QueryError, QueryResult};

/// A mutable, ordered sequence of elements with stable indices.
///
/// Mutating methods take `&self`: the buffer is shared with the sequences
/// built over the list, and those sequences must be able to read it while
/// the list is being changed between pulls.
///
/// `Clone` is a deep copy, identical to [`List::copy`].
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let list = List::from(vec![1, 2, 3]);
/// let copy = list.copy();
/// copy.push(4);
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// assert_eq!(copy.to_vec(), vec![1, 2, 3, 4]);
/// ```
pub struct List<T> {
    buffer: SharedBuffer<T>,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    fn from_vec(elements: Vec<T>) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(elements)),
        }
    }

    /// Borrows the live backing buffer.
    ///
    /// Mutating the list while the returned guard is alive panics, as with
    /// any `RefCell` borrow.
    pub fn as_array(&self) -> Ref<'_, [T]> {
        Ref::map(self.buffer.borrow(), Vec::as_slice)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.borrow().len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }

    /// Appends `element` and returns the new length.
    pub fn push(&self, element: T) -> usize {
        let mut buffer = self.buffer.borrow_mut();
        buffer.push(element);
        buffer.len()
    }

    /// Prepends `element` and returns the new length.
    pub fn push_front(&self, element: T) -> usize {
        let mut buffer = self.buffer.borrow_mut();
        buffer.insert(0, element);
        buffer.len()
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&self) -> Option<T> {
        self.buffer.borrow_mut().pop()
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&self) -> Option<T> {
        let mut buffer = self.buffer.borrow_mut();
        if buffer.is_empty() {
            None
        } else {
            Some(buffer.remove(0))
        }
    }

    /// Inserts `element` so that it ends up at `index`.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::OutOfBounds`] if `index > len`.
    pub fn insert(&self, index: usize, element: T) -> QueryResult<()> {
        let mut buffer = self.buffer.borrow_mut();
        if index > buffer.len() {
            return Err(QueryError::out_of_bounds(index, buffer.len()));
        }
        buffer.insert(index, element);
        Ok(())
    }

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::OutOfBounds`] if `index >= len`.
    pub fn set(&self, index: usize, element: T) -> QueryResult<()> {
        let mut buffer = self.buffer.borrow_mut();
        let length = buffer.len();
        let slot = buffer
            .get_mut(index)
            .ok_or_else(|| QueryError::out_of_bounds(index, length))?;
        *slot = element;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements down.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::OutOfBounds`] if `index >= len`.
    pub fn remove_at(&self, index: usize) -> QueryResult<T> {
        let mut buffer = self.buffer.borrow_mut();
        if index >= buffer.len() {
            return Err(QueryError::out_of_bounds(index, buffer.len()));
        }
        Ok(buffer.remove(index))
    }
}

impl<T: Clone> List<T> {
    /// Returns a clone of the element at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.buffer.borrow().get(index).cloned()
    }

    /// Returns a new list with its own buffer holding clones of the elements.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self::from_vec(self.buffer.borrow().clone())
    }
}

impl<T: Clone + 'static> List<T> {
    /// Appends every element of `elements` and returns the new length.
    ///
    /// `elements` is fully collected before the list changes, so a list can
    /// append a sequence derived from itself.
    pub fn push_range(&self, elements: impl IntoEnumerable<T>) -> usize {
        let pending: Vec<T> = elements.into_enumerable().cursor().collect();
        let mut buffer = self.buffer.borrow_mut();
        buffer.extend(pending);
        buffer.len()
    }
}

impl<T: PartialEq> List<T> {
    /// Removes every element equal to `element`.
    pub fn remove(&self, element: &T) {
        self.buffer.borrow_mut().retain(|candidate| candidate != element);
    }

    /// Returns the position of the first element equal to `element`.
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.buffer
            .borrow()
            .iter()
            .position(|candidate| candidate == element)
    }
}

impl<T: Clone + 'static> Queryable<T> for List<T> {
    fn as_enumerable(&self) -> Enumerable<T> {
        Enumerable::from_source(ArraySource::shared(Rc::clone(&self.buffer)))
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn to_vec(&self) -> Vec<T> {
        self.buffer.borrow().clone()
    }

    fn to_list(&self) -> Self {
        self.copy()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // `iter` may read this list's own buffer; drain it before borrowing mutably.
        let pending: Vec<T> = iter.into_iter().collect();
        self.buffer.borrow_mut().extend(pending);
    }
}

impl<T: Clone + 'static> IntoIterator for &List<T> {
    type Item = T;
    type IntoIter = crate::cursor::Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer) || *self.buffer.borrow() == *other.buffer.borrow()
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.buffer.borrow().iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.buffer.borrow().iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: Clone + 'static> IntoEnumerable<T> for List<T> {
    fn into_enumerable(self) -> Enumerable<T> {
        self.as_enumerable()
    }
}

impl<T: Clone + 'static> IntoEnumerable<T> for &List<T> {
    fn into_enumerable(self) -> Enumerable<T> {
        self.as_enumerable()
    }
}

// The buffer is an `Rc<RefCell<_>>`; a list never crosses threads.
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let buffer = self.buffer.borrow();
        let mut seq = serializer.serialize_seq(Some(buffer.len()))?;
        for element in buffer.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let list: List<i32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[rstest]
    fn test_push_returns_new_length() {
        let list = List::new();
        assert_eq!(list.push(1), 1);
        assert_eq!(list.push(2), 2);
        assert_eq!(list.push_front(0), 3);
        assert_eq!(list.to_vec(), vec![0, 1, 2]);
    }

    #[rstest]
    fn test_pop_and_pop_front() {
        let list = List::from(vec![1, 2, 3]);
        assert_eq!(list.pop(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop(), Some(2));
        assert_eq!(list.pop(), None);
        assert_eq!(list.pop_front(), None);
    }

    #[rstest]
    #[case(0, vec![9, 1, 2])]
    #[case(1, vec![1, 9, 2])]
    #[case(2, vec![1, 2, 9])]
    fn test_insert_valid_positions(#[case] index: usize, #[case] expected: Vec<i32>) {
        let list = List::from(vec![1, 2]);
        assert_eq!(list.insert(index, 9), Ok(()));
        assert_eq!(list.to_vec(), expected);
    }

    #[rstest]
    fn test_insert_past_end_fails() {
        let list = List::from(vec![1, 2]);
        assert_eq!(
            list.insert(3, 9),
            Err(QueryError::OutOfBounds { index: 3, length: 2 })
        );
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_set() {
        let list = List::from(vec!['a', 'b']);
        assert_eq!(list.set(1, 'z'), Ok(()));
        assert_eq!(list.to_vec(), vec!['a', 'z']);
        assert_eq!(
            list.set(2, 'x'),
            Err(QueryError::OutOfBounds { index: 2, length: 2 })
        );
    }

    #[rstest]
    fn test_remove_at() {
        let list = List::from(vec![10, 20, 30]);
        assert_eq!(list.remove_at(1), Ok(20));
        assert_eq!(list.to_vec(), vec![10, 30]);
        assert_eq!(
            list.remove_at(2),
            Err(QueryError::OutOfBounds { index: 2, length: 2 })
        );
    }

    #[rstest]
    fn test_remove_removes_all_matches() {
        let list = List::from(vec![1, 2, 1, 3, 1]);
        list.remove(&1);
        assert_eq!(list.to_vec(), vec![2, 3]);
    }

    #[rstest]
    fn test_remove_missing_is_noop() {
        let list = List::from(vec![1, 2]);
        list.remove(&5);
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_clear() {
        let list = List::from(vec![1, 2]);
        list.clear();
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_get_and_index_of() {
        let list = List::from(vec!["x", "y", "x"]);
        assert_eq!(list.get(1), Some("y"));
        assert_eq!(list.get(3), None);
        assert_eq!(list.index_of(&"x"), Some(0));
        assert_eq!(list.index_of(&"q"), None);
    }

    #[rstest]
    fn test_push_range_from_self() {
        let list = List::from(vec![1, 2]);
        assert_eq!(list.push_range(&list), 4);
        assert_eq!(list.to_vec(), vec![1, 2, 1, 2]);
    }

    #[rstest]
    fn test_extend_from_own_view() {
        let mut list = List::from(vec![1, 2]);
        let view = list.as_enumerable();
        list.extend(view.take(2));
        assert_eq!(list.to_vec(), vec![1, 2, 1, 2]);
    }

    #[rstest]
    fn test_extend_from_filtered_self() {
        let mut list = List::from(vec![1, 2, 3, 4]);
        let evens = list.filter(|value| value % 2 == 0);
        list.extend(&evens);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 2, 4]);
    }

    #[rstest]
    fn test_push_range_from_vec() {
        let list = List::from(vec![1]);
        assert_eq!(list.push_range(vec![2, 3]), 3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_clone_is_deep() {
        let list = List::from(vec![1, 2, 3]);
        let clone = list.clone();
        clone.push(4);
        assert_eq!(list.len(), 3);
        assert_eq!(clone.len(), 4);
    }

    #[rstest]
    fn test_as_array_borrows_live_buffer() {
        let list = List::from(vec![1, 2]);
        list.push(3);
        assert_eq!(&*list.as_array(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_count_override_matches_len() {
        let list = List::from(vec![5, 6, 7]);
        assert_eq!(list.count(), 3);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", List::from(vec![1, 2, 3])), "[1, 2, 3]");
        assert_eq!(format!("{}", List::<i32>::new()), "[]");
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", List::from(vec!["a"])), "[\"a\"]");
    }

    #[rstest]
    fn test_extend_and_collect() {
        let mut list: List<i32> = (1..=2).collect();
        list.extend([3, 4]);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_eq_compares_contents() {
        assert_eq!(List::from(vec![1, 2]), List::from(vec![1, 2]));
        assert_ne!(List::from(vec![1, 2]), List::from(vec![2, 1]));
    }
}
