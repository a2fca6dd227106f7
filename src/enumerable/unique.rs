//! Deduplication sequence (`distinct`).
//!
//! Yields the first element seen for each key, in first-occurrence order.

use std::hash::Hash;

use super::{Enumerable, Selector, Source};
use crate::cursor::Cursor;
use crate::hashing::{KeySet, key_set};

pub(crate) struct UniqueSource<T, K> {
    upstream: Enumerable<T>,
    key_selector: Selector<T, K>,
}

impl<T, K> UniqueSource<T, K> {
    pub(crate) fn new(upstream: Enumerable<T>, key_selector: Selector<T, K>) -> Self {
        Self {
            upstream,
            key_selector,
        }
    }
}

impl<T: 'static, K: Eq + Hash + 'static> Source<T> for UniqueSource<T, K> {
    fn cursor(&self) -> Cursor<T> {
        Cursor::new(UniqueIterator {
            upstream: self.upstream.cursor(),
            key_selector: Selector::clone(&self.key_selector),
            seen: key_set(),
        })
    }
}

struct UniqueIterator<T, K> {
    upstream: Cursor<T>,
    key_selector: Selector<T, K>,
    seen: KeySet<K>,
}

impl<T, K: Eq + Hash> Iterator for UniqueIterator<T, K> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let element = self.upstream.next()?;
            if self.seen.insert((self.key_selector)(&element)) {
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    #[rstest]
    fn test_first_occurrence_order() {
        let source = UniqueSource::new(
            Enumerable::from_vec(vec![3, 1, 3, 2, 1]),
            Rc::new(|value: &i32| *value),
        );
        assert_eq!(source.cursor().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_keeps_first_element_per_key() {
        let source = UniqueSource::new(
            Enumerable::from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry"]),
            Rc::new(|word: &&str| word.chars().next()),
        );
        assert_eq!(
            source.cursor().collect::<Vec<_>>(),
            vec!["apple", "banana", "cherry"]
        );
    }

    #[rstest]
    fn test_each_traversal_starts_with_empty_seen_set() {
        let source = UniqueSource::new(
            Enumerable::from_vec(vec![1, 1, 2]),
            Rc::new(|value: &i32| *value),
        );
        assert_eq!(source.cursor().count(), 2);
        assert_eq!(source.cursor().count(), 2);
    }
}
