//! Filtering sequence (`filter` / `where`).

use super::{Enumerable, IndexedPredicate, Source};
use crate::cursor::Cursor;

pub(crate) struct FilterSource<T> {
    upstream: Enumerable<T>,
    predicate: IndexedPredicate<T>,
}

impl<T> FilterSource<T> {
    pub(crate) fn new(upstream: Enumerable<T>, predicate: IndexedPredicate<T>) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<T: 'static> Source<T> for FilterSource<T> {
    fn cursor(&self) -> Cursor<T> {
        Cursor::new(FilterIterator {
            upstream: self.upstream.cursor(),
            predicate: IndexedPredicate::clone(&self.predicate),
            index: 0,
        })
    }
}

struct FilterIterator<T> {
    upstream: Cursor<T>,
    predicate: IndexedPredicate<T>,
    /// Position of the next upstream element.
    index: usize,
}

impl<T> Iterator for FilterIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let element = self.upstream.next()?;
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&element, index) {
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

    fn filtered(elements: Vec<i32>, predicate: impl Fn(&i32, usize) -> bool + 'static) -> Vec<i32> {
        FilterSource::new(Enumerable::from_vec(elements), Rc::new(predicate))
            .cursor()
            .collect()
    }

    #[rstest]
    fn test_keeps_matching_elements() {
        assert_eq!(filtered(vec![1, 2, 3, 4], |value, _| value % 2 == 0), vec![2, 4]);
    }

    #[rstest]
    fn test_index_is_upstream_position() {
        assert_eq!(filtered(vec![10, 20, 30, 40], |_, index| index >= 2), vec![30, 40]);
    }

    #[rstest]
    fn test_nothing_matches() {
        assert!(filtered(vec![1, 3, 5], |value, _| value % 2 == 0).is_empty());
    }
}
