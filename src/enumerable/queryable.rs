//! The operator and terminal-operation surface.
//!
//! [`Queryable`] has one required method, [`Queryable::as_enumerable`].
//! Every other method is provided on top of it, so any type that can
//! describe itself as an [`Enumerable`] gains the whole query surface.
//!
//! Operators (`filter`, `select`, `concat`, `order_by`, ...) return new
//! sequences and never pull from upstream. Terminal operations (`count`,
//! `first`, `aggregate`, `to_vec`, ...) start a traversal and return a value.
//!
//! Where an operation has an optional predicate or selector, each arity is
//! a separate method: `first` / `first_by`, `count` / `count_by`,
//! `min` / `min_of` / `min_by`.

use std::cmp::Ordering;
use std::hash::Hash;
use std::iter::Sum;
use std::rc::Rc;

use super::{
    ConcatSource, Enumerable, ExceptSource, FilterSource, FlattenSource, IntoEnumerable,
    OrderedEnumerable, RangeSource, ReverseSource, Selector, TransformSource, UniqueSource,
};
use crate::comparer::{SortDirection, create_comparer, create_comparer_with};
use crate::cursor::Cursor;
use crate::error::{QueryError, QueryResult};
use crate::list::List;

/// A type that exposes a lazy sequence of `T` and the standard query operators over it.
///
/// # Required Methods
///
/// - `as_enumerable`: describe `self` as an [`Enumerable`]
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let words = List::from(vec!["pear", "fig", "apple", "kiwi", "fig"]);
/// let short: Vec<String> = words
///     .filter(|word| word.len() <= 4)
///     .distinct()
///     .select(|word| word.to_uppercase())
///     .to_vec();
/// assert_eq!(short, vec!["PEAR", "FIG", "KIWI"]);
/// ```
pub trait Queryable<T: Clone + 'static> {
    /// Returns a sequence describing the elements of `self`.
    ///
    /// The result shares `self`'s storage where `self` has any; it is not
    /// a copy.
    fn as_enumerable(&self) -> Enumerable<T>;

    /// Starts a new traversal.
    fn cursor(&self) -> Cursor<T> {
        self.as_enumerable().cursor()
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// Keeps the elements for which `predicate` returns `true`.
    ///
    /// The predicate runs once per upstream element per traversal, when the
    /// element is pulled.
    #[doc(alias = "where")]
    fn filter<P>(&self, predicate: P) -> Enumerable<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter_indexed(move |element, _| predicate(element))
    }

    /// Keeps the elements for which `predicate(element, index)` returns `true`.
    ///
    /// `index` is the element's position in the upstream sequence.
    fn filter_indexed<P>(&self, predicate: P) -> Enumerable<T>
    where
        P: Fn(&T, usize) -> bool + 'static,
    {
        Enumerable::from_source(FilterSource::new(self.as_enumerable(), Rc::new(predicate)))
    }

    /// Projects each element 1:1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let lengths = List::from(vec!["a", "bbb"]).select(|word| word.len());
    /// assert_eq!(lengths.to_vec(), vec![1, 3]);
    /// ```
    fn select<U, F>(&self, selector: F) -> Enumerable<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.select_indexed(move |element, _| selector(element))
    }

    /// Projects each element together with its position.
    fn select_indexed<U, F>(&self, selector: F) -> Enumerable<U>
    where
        U: Clone + 'static,
        F: Fn(&T, usize) -> U + 'static,
    {
        Enumerable::from_source(TransformSource::new(self.as_enumerable(), Rc::new(selector)))
    }

    /// Expands each element into a sub-sequence and chains the results in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let pairs = List::from(vec![1, 2]).select_many(|value| vec![*value, *value * 10]);
    /// assert_eq!(pairs.to_vec(), vec![1, 10, 2, 20]);
    /// ```
    fn select_many<U, I, F>(&self, selector: F) -> Enumerable<U>
    where
        U: Clone + 'static,
        I: IntoEnumerable<U>,
        F: Fn(&T) -> I + 'static,
    {
        let selector: Selector<T, Enumerable<U>> =
            Rc::new(move |element: &T| selector(element).into_enumerable());
        Enumerable::from_source(FlattenSource::new(self.as_enumerable(), selector))
    }

    /// Appends `other` after the elements of `self`.
    fn concat(&self, other: impl IntoEnumerable<T>) -> Enumerable<T> {
        Enumerable::from_source(ConcatSource::new(vec![
            self.as_enumerable(),
            other.into_enumerable(),
        ]))
    }

    /// Appends every sequence in `others`, in order, after the elements of `self`.
    fn concat_all<I, E>(&self, others: I) -> Enumerable<T>
    where
        I: IntoIterator<Item = E>,
        E: IntoEnumerable<T>,
    {
        let parts = std::iter::once(self.as_enumerable())
            .chain(others.into_iter().map(IntoEnumerable::into_enumerable))
            .collect();
        Enumerable::from_source(ConcatSource::new(parts))
    }

    /// Removes repeated elements, keeping the first occurrence of each.
    fn distinct(&self) -> Enumerable<T>
    where
        T: Eq + Hash,
    {
        self.distinct_by(T::clone)
    }

    /// Removes elements whose key was already produced, keeping the first per key.
    fn distinct_by<K, F>(&self, key_selector: F) -> Enumerable<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        Enumerable::from_source(UniqueSource::new(self.as_enumerable(), Rc::new(key_selector)))
    }

    /// Concatenates `other` and removes duplicates across both; first occurrence wins.
    fn union(&self, other: impl IntoEnumerable<T>) -> Enumerable<T>
    where
        T: Eq + Hash,
    {
        self.concat(other).distinct()
    }

    /// Like [`Queryable::union`], comparing elements by key.
    fn union_by<K, F>(&self, other: impl IntoEnumerable<T>, key_selector: F) -> Enumerable<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        self.concat(other).distinct_by(key_selector)
    }

    /// Keeps the elements of `self` that do not appear anywhere in `other`.
    ///
    /// Duplicates within `self` that survive are all kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let remaining = List::from(vec![1, 2, 3, 2]).except(vec![3, 1]);
    /// assert_eq!(remaining.to_vec(), vec![2, 2]);
    /// ```
    fn except(&self, other: impl IntoEnumerable<T>) -> Enumerable<T>
    where
        T: Eq + Hash,
    {
        self.except_by(other, T::clone)
    }

    /// Like [`Queryable::except`], comparing elements by key.
    fn except_by<K, F>(&self, other: impl IntoEnumerable<T>, key_selector: F) -> Enumerable<T>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        Enumerable::from_source(ExceptSource::new(
            self.as_enumerable(),
            other.into_enumerable(),
            Rc::new(key_selector),
        ))
    }

    /// Yields the elements in reverse order.
    ///
    /// The whole upstream is buffered on the first pull.
    fn reverse(&self) -> Enumerable<T> {
        Enumerable::from_source(ReverseSource::new(self.as_enumerable()))
    }

    /// Skips the first `amount` elements. Skipping past the end yields nothing.
    fn skip(&self, amount: usize) -> Enumerable<T> {
        Enumerable::from_source(RangeSource::new(self.as_enumerable(), Some(amount), None))
    }

    /// Yields at most `amount` elements.
    fn take(&self, amount: usize) -> Enumerable<T> {
        Enumerable::from_source(RangeSource::new(self.as_enumerable(), None, Some(amount)))
    }

    /// Sorts by the natural order of a key, ascending. The sort is stable.
    fn order_by<K, S>(&self, key_selector: S) -> OrderedEnumerable<T>
    where
        K: Ord,
        S: Fn(&T) -> K + 'static,
    {
        OrderedEnumerable::new(
            self.as_enumerable(),
            create_comparer(key_selector, SortDirection::Ascending),
        )
    }

    /// Sorts by a key compared with `key_comparer`, ascending.
    fn order_by_with<K, S, C>(&self, key_selector: S, key_comparer: C) -> OrderedEnumerable<T>
    where
        S: Fn(&T) -> K + 'static,
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        OrderedEnumerable::new(
            self.as_enumerable(),
            create_comparer_with(key_selector, SortDirection::Ascending, key_comparer),
        )
    }

    /// Sorts by the natural order of a key, descending. The sort is stable.
    fn order_by_descending<K, S>(&self, key_selector: S) -> OrderedEnumerable<T>
    where
        K: Ord,
        S: Fn(&T) -> K + 'static,
    {
        OrderedEnumerable::new(
            self.as_enumerable(),
            create_comparer(key_selector, SortDirection::Descending),
        )
    }

    /// Sorts by a key compared with `key_comparer`, descending.
    fn order_by_descending_with<K, S, C>(
        &self,
        key_selector: S,
        key_comparer: C,
    ) -> OrderedEnumerable<T>
    where
        S: Fn(&T) -> K + 'static,
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        OrderedEnumerable::new(
            self.as_enumerable(),
            create_comparer_with(key_selector, SortDirection::Descending, key_comparer),
        )
    }

    // =========================================================================
    // Materialization
    // =========================================================================

    /// Collects the elements into a new, independent vector.
    fn to_vec(&self) -> Vec<T> {
        self.cursor().collect()
    }

    /// Collects the elements into a new, independent [`List`].
    fn to_list(&self) -> List<T> {
        List::from(self.to_vec())
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Left-folds the elements, using the first element as the seed.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn aggregate<F>(&self, aggregator: F) -> QueryResult<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.cursor()
            .reduce(aggregator)
            .ok_or(QueryError::EmptySequence)
    }

    /// Left-folds the elements starting from `seed`.
    fn aggregate_with_seed<A, F>(&self, seed: A, aggregator: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.cursor().fold(seed, aggregator)
    }

    /// Counts the elements.
    fn count(&self) -> usize {
        self.cursor().count()
    }

    /// Counts the elements that satisfy `predicate`.
    fn count_by<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.cursor().filter(|element| predicate(element)).count()
    }

    /// Returns `true` if there is at least one element. Pulls at most one.
    fn any(&self) -> bool {
        self.cursor().has_next()
    }

    /// Returns `true` if some element satisfies `predicate`, stopping at the first.
    fn any_by<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.cursor().any(|element| predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`; `true` when empty.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.cursor().all(|element| predicate(&element))
    }

    /// Returns `true` if some element equals `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.any_by(|candidate| candidate == element)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn first(&self) -> QueryResult<T> {
        self.first_or_default().ok_or(QueryError::EmptySequence)
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if no element matches.
    fn first_by<P>(&self, predicate: P) -> QueryResult<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.first_or_default_by(predicate)
            .ok_or(QueryError::EmptySequence)
    }

    /// Returns the first element, or `None`.
    fn first_or_default(&self) -> Option<T> {
        self.cursor().next()
    }

    /// Returns the first element satisfying `predicate`, or `None`.
    fn first_or_default_by<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.cursor().find(|element| predicate(element))
    }

    /// Returns the last element. Drains the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn last(&self) -> QueryResult<T> {
        self.last_or_default().ok_or(QueryError::EmptySequence)
    }

    /// Returns the last element satisfying `predicate`. Drains the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if no element matches.
    fn last_by<P>(&self, predicate: P) -> QueryResult<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.last_or_default_by(predicate)
            .ok_or(QueryError::EmptySequence)
    }

    /// Returns the last element, or `None`.
    fn last_or_default(&self) -> Option<T> {
        self.cursor().last()
    }

    /// Returns the last element satisfying `predicate`, or `None`.
    fn last_or_default_by<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.cursor().filter(|element| predicate(element)).last()
    }

    /// Returns the only element.
    ///
    /// Stops as soon as a second element is seen.
    ///
    /// # Errors
    ///
    /// - [`QueryError::EmptySequence`] if there are no elements
    /// - [`QueryError::AmbiguousMatch`] if there is more than one
    fn single(&self) -> QueryResult<T> {
        self.single_or_default()?.ok_or(QueryError::EmptySequence)
    }

    /// Returns the only element satisfying `predicate`.
    ///
    /// Stops as soon as a second match is seen.
    ///
    /// # Errors
    ///
    /// - [`QueryError::EmptySequence`] if no element matches
    /// - [`QueryError::AmbiguousMatch`] if more than one element matches
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let values = List::from(vec![1, 1, 2]);
    /// assert_eq!(values.single_by(|value| *value == 2), Ok(2));
    /// assert_eq!(values.single_by(|value| *value == 1), Err(QueryError::AmbiguousMatch));
    /// ```
    fn single_by<P>(&self, predicate: P) -> QueryResult<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.single_or_default_by(predicate)?
            .ok_or(QueryError::EmptySequence)
    }

    /// Returns the only element, or `None` if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::AmbiguousMatch`] if there is more than one element.
    fn single_or_default(&self) -> QueryResult<Option<T>> {
        single_match(self.cursor(), |_| true)
    }

    /// Returns the only element satisfying `predicate`, or `None` if none match.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::AmbiguousMatch`] if more than one element matches.
    fn single_or_default_by<P>(&self, predicate: P) -> QueryResult<Option<T>>
    where
        P: FnMut(&T) -> bool,
    {
        single_match(self.cursor(), predicate)
    }

    /// Returns the smallest element; the first one on ties.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn min(&self) -> QueryResult<T>
    where
        T: Ord,
    {
        self.cursor().min().ok_or(QueryError::EmptySequence)
    }

    /// Returns the smallest projected value.
    ///
    /// The projection is a `select` adapter; the elements are not copied.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn min_of<U, F>(&self, selector: F) -> QueryResult<U>
    where
        U: Ord + Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.select(selector).min()
    }

    /// Returns the smallest element according to `comparer`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn min_by<C>(&self, comparer: C) -> QueryResult<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.cursor()
            .min_by(comparer)
            .ok_or(QueryError::EmptySequence)
    }

    /// Returns the largest element; the last one on ties.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn max(&self) -> QueryResult<T>
    where
        T: Ord,
    {
        self.cursor().max().ok_or(QueryError::EmptySequence)
    }

    /// Returns the largest projected value.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn max_of<U, F>(&self, selector: F) -> QueryResult<U>
    where
        U: Ord + Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.select(selector).max()
    }

    /// Returns the largest element according to `comparer`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn max_by<C>(&self, comparer: C) -> QueryResult<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.cursor()
            .max_by(comparer)
            .ok_or(QueryError::EmptySequence)
    }

    /// Sums the elements. An empty sequence sums to the additive identity.
    fn sum(&self) -> T
    where
        T: Sum<T>,
    {
        self.cursor().sum()
    }

    /// Sums a numeric projection of the elements.
    fn sum_of<S, F>(&self, mut selector: F) -> S
    where
        S: Sum<S>,
        F: FnMut(&T) -> S,
    {
        self.cursor().map(|element| selector(&element)).sum()
    }

    /// Averages the elements.
    ///
    /// Only element types with a lossless `Into<f64>` qualify (`i32`, `u32`,
    /// `f32`, ...). For `i64`, `u64`, `isize` and `usize`, convert explicitly
    /// through [`Queryable::average_of`]:
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let average = Enumerable::range(1, 4).average_of(|value| *value as f64);
    /// assert_eq!(average, Ok(2.5));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    fn average(&self) -> QueryResult<f64>
    where
        T: Into<f64>,
    {
        self.average_of(|element| element.clone().into())
    }

    /// Averages a numeric projection of the elements.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySequence`] if there are no elements.
    #[allow(clippy::cast_precision_loss)]
    fn average_of<F>(&self, mut selector: F) -> QueryResult<f64>
    where
        F: FnMut(&T) -> f64,
    {
        let (total, count) = self
            .cursor()
            .fold((0.0, 0_usize), |(total, count), element| {
                (total + selector(&element), count + 1)
            });
        if count == 0 {
            Err(QueryError::EmptySequence)
        } else {
            Ok(total / count as f64)
        }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InvalidArgument`] if `index` is negative
    /// - [`QueryError::OutOfBounds`] if the sequence has `index` or fewer elements
    fn element_at(&self, index: isize) -> QueryResult<T> {
        locate(self.cursor(), index)?
            .map_err(|length| QueryError::OutOfBounds { index, length })
    }

    /// Returns the element at `index`, or `None` past the end.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] if `index` is negative.
    fn element_at_or_default(&self, index: isize) -> QueryResult<Option<T>> {
        locate(self.cursor(), index).map(Result::ok)
    }

    /// Calls `action` with every element and its position.
    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, element) in self.cursor().enumerate() {
            action(&element, index);
        }
    }
}

/// Finds the only element of `cursor` satisfying `predicate`, stopping at a second match.
fn single_match<T, P>(cursor: Cursor<T>, mut predicate: P) -> QueryResult<Option<T>>
where
    P: FnMut(&T) -> bool,
{
    let mut matches = cursor.filter(|element| predicate(element));
    let found = matches.next();
    if found.is_some() && matches.next().is_some() {
        return Err(QueryError::AmbiguousMatch);
    }
    Ok(found)
}

/// Walks `cursor` to position `index`.
///
/// The inner `Err` carries the sequence length when `index` is past the end.
fn locate<T>(cursor: Cursor<T>, index: isize) -> QueryResult<Result<T, usize>> {
    let target = usize::try_from(index).map_err(|_| QueryError::InvalidArgument {
        name: "index",
        reason: "must not be negative",
    })?;
    let mut length = 0;
    for element in cursor {
        if length == target {
            return Ok(Ok(element));
        }
        length += 1;
    }
    Ok(Err(length))
}
