//! Concatenation sequence (`concat`).

use std::rc::Rc;

use super::{Enumerable, Source};
use crate::cursor::Cursor;

pub(crate) struct ConcatSource<T> {
    parts: Rc<[Enumerable<T>]>,
}

impl<T> ConcatSource<T> {
    pub(crate) fn new(parts: Vec<Enumerable<T>>) -> Self {
        Self {
            parts: parts.into(),
        }
    }
}

impl<T: 'static> Source<T> for ConcatSource<T> {
    fn cursor(&self) -> Cursor<T> {
        Cursor::new(ConcatIterator {
            parts: Rc::clone(&self.parts),
            position: 0,
            current: None,
        })
    }
}

/// Walks the parts in order. A part's cursor is only created once every
/// earlier part has been exhausted.
struct ConcatIterator<T> {
    parts: Rc<[Enumerable<T>]>,
    position: usize,
    current: Option<Cursor<T>>,
}

impl<T: 'static> Iterator for ConcatIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.as_mut().and_then(Iterator::next) {
                return Some(element);
            }
            let part = self.parts.get(self.position)?;
            self.position += 1;
            self.current = Some(part.cursor());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![vec![1, 2], vec![3], vec![4, 5]], vec![1, 2, 3, 4, 5])]
    #[case(vec![vec![], vec![1], vec![]], vec![1])]
    #[case(vec![vec![], vec![]], vec![])]
    #[case(vec![], vec![])]
    fn test_chains_parts(#[case] parts: Vec<Vec<i32>>, #[case] expected: Vec<i32>) {
        let source = ConcatSource::new(parts.into_iter().map(Enumerable::from_vec).collect());
        assert_eq!(source.cursor().collect::<Vec<_>>(), expected);
    }
}
