//! Sequences backed by an iterator factory.

use super::Source;
use crate::cursor::Cursor;

pub(crate) struct IteratorSource<F> {
    factory: F,
}

impl<F> IteratorSource<F> {
    pub(crate) const fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<T, F, I> Source<T> for IteratorSource<F>
where
    F: Fn() -> I,
    I: Iterator<Item = T> + 'static,
{
    fn cursor(&self) -> Cursor<T> {
        Cursor::new((self.factory)())
    }
}
