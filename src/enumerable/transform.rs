//! Transforming sequence (`select`).

use super::{Enumerable, IndexedSelector, Source};
use crate::cursor::Cursor;

pub(crate) struct TransformSource<T, U> {
    upstream: Enumerable<T>,
    selector: IndexedSelector<T, U>,
}

impl<T, U> TransformSource<T, U> {
    pub(crate) fn new(upstream: Enumerable<T>, selector: IndexedSelector<T, U>) -> Self {
        Self { upstream, selector }
    }
}

impl<T: 'static, U: 'static> Source<U> for TransformSource<T, U> {
    fn cursor(&self) -> Cursor<U> {
        Cursor::new(TransformIterator {
            upstream: self.upstream.cursor(),
            selector: IndexedSelector::clone(&self.selector),
            index: 0,
        })
    }
}

struct TransformIterator<T, U> {
    upstream: Cursor<T>,
    selector: IndexedSelector<T, U>,
    index: usize,
}

impl<T, U> Iterator for TransformIterator<T, U> {
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.upstream.next()?;
        let projected = (self.selector)(&element, self.index);
        self.index += 1;
        Some(projected)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    #[rstest]
    fn test_projects_every_element() {
        let source = TransformSource::new(
            Enumerable::from_vec(vec![1, 2, 3]),
            Rc::new(|value: &i32, _: usize| value.to_string()),
        );
        assert_eq!(source.cursor().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    }

    #[rstest]
    fn test_passes_position() {
        let source = TransformSource::new(
            Enumerable::from_vec(vec!['a', 'b']),
            Rc::new(|value: &char, index: usize| (index, *value)),
        );
        assert_eq!(source.cursor().collect::<Vec<_>>(), vec![(0, 'a'), (1, 'b')]);
    }
}
