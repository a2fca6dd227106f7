//! Comparer construction helpers.
//!
//! A [`Comparer`] is a shared three-way ordering function over elements.
//! The helpers here derive one from a key selector, a [`SortDirection`],
//! and optionally a custom key comparer which replaces natural ordering
//! for that key only.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::comparer::{create_comparer, SortDirection};
//! use std::cmp::Ordering;
//!
//! let by_length = create_comparer(|word: &&str| word.len(), SortDirection::Descending);
//! assert_eq!(by_length(&"abc", &"a"), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::rc::Rc;

/// A shared, stateless three-way comparison over `T`.
pub type Comparer<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Direction applied to a key comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ordering produced in ascending terms.
    #[inline]
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Creates a comparer that orders elements by the natural order of a key.
///
/// # Arguments
///
/// * `key_selector` - Extracts the key compared for each element
/// * `direction` - Whether smaller keys sort first or last
pub fn create_comparer<T, K, S>(key_selector: S, direction: SortDirection) -> Comparer<T>
where
    K: Ord,
    S: Fn(&T) -> K + 'static,
{
    Rc::new(move |left: &T, right: &T| {
        direction.apply(key_selector(left).cmp(&key_selector(right)))
    })
}

/// Creates a comparer that orders elements by a key using a custom key comparer.
///
/// The custom comparer fully replaces the natural ordering of `K`; the
/// direction is applied on top of its result.
///
/// # Examples
///
/// ```rust
/// use enumerable::comparer::{create_comparer_with, SortDirection};
/// use std::cmp::Ordering;
///
/// let by_weight = create_comparer_with(
///     |weight: &f64| *weight,
///     SortDirection::Ascending,
///     |left: &f64, right: &f64| left.total_cmp(right),
/// );
/// assert_eq!(by_weight(&1.5, &0.5), Ordering::Greater);
/// ```
pub fn create_comparer_with<T, K, S, C>(
    key_selector: S,
    direction: SortDirection,
    key_comparer: C,
) -> Comparer<T>
where
    S: Fn(&T) -> K + 'static,
    C: Fn(&K, &K) -> Ordering + 'static,
{
    Rc::new(move |left: &T, right: &T| {
        direction.apply(key_comparer(&key_selector(left), &key_selector(right)))
    })
}

/// Compares two elements with each comparer in turn until one breaks the tie.
///
/// Returns `Ordering::Equal` when every comparer ties (or the slice is empty),
/// which lets a stable sort keep the original relative order.
#[inline]
pub fn compare_chained<T>(comparers: &[Comparer<T>], left: &T, right: &T) -> Ordering {
    comparers
        .iter()
        .map(|comparer| comparer(left, right))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
