//! Array-backed sequence.
//!
//! The buffer is shared with the [`List`](crate::list::List) that owns it
//! (if any). Each [`ArrayIterator::next`] borrows the buffer only for the
//! duration of one element clone, so the list can be mutated between
//! pulls and the traversal sees every mutation made so far.

use std::cell::RefCell;
use std::rc::Rc;

use super::Source;
use crate::cursor::Cursor;

/// Backing storage shared between a list and the sequences built over it.
pub(crate) type SharedBuffer<T> = Rc<RefCell<Vec<T>>>;

pub(crate) struct ArraySource<T> {
    buffer: SharedBuffer<T>,
}

impl<T> ArraySource<T> {
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(elements)),
        }
    }

    pub(crate) const fn shared(buffer: SharedBuffer<T>) -> Self {
        Self { buffer }
    }
}

impl<T: Clone + 'static> Source<T> for ArraySource<T> {
    fn cursor(&self) -> Cursor<T> {
        Cursor::new(ArrayIterator {
            buffer: Rc::clone(&self.buffer),
            index: 0,
        })
    }
}

/// Reads the element at the current position, as the buffer is right now.
struct ArrayIterator<T> {
    buffer: SharedBuffer<T>,
    index: usize,
}

impl<T: Clone> Iterator for ArrayIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.buffer.borrow().get(self.index).cloned()?;
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The buffer may grow or shrink between pulls.
        (0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_yields_each_element() {
        let source = ArraySource::new(vec![1, 2, 3]);
        assert_eq!(source.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_observes_growth_between_pulls() {
        let buffer: SharedBuffer<i32> = Rc::new(RefCell::new(vec![1]));
        let source = ArraySource::shared(Rc::clone(&buffer));
        let mut cursor = source.cursor();

        assert_eq!(cursor.next(), Some(1));
        buffer.borrow_mut().push(2);
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), None);
    }

    #[rstest]
    fn test_observes_shrink_between_pulls() {
        let buffer: SharedBuffer<i32> = Rc::new(RefCell::new(vec![1, 2, 3]));
        let source = ArraySource::shared(Rc::clone(&buffer));
        let mut cursor = source.cursor();

        assert_eq!(cursor.next(), Some(1));
        buffer.borrow_mut().truncate(1);
        assert_eq!(cursor.next(), None);
    }
}
