//! Flattening sequence (`select_many`).
//!
//! Each upstream element is expanded into its own sub-sequence. Only one
//! sub-sequence cursor is alive at a time and the next one is built when the
//! current one runs dry, so nothing is flattened ahead of demand.

use super::{Enumerable, Selector, Source};
use crate::cursor::Cursor;

pub(crate) struct FlattenSource<T, U> {
    upstream: Enumerable<T>,
    selector: Selector<T, Enumerable<U>>,
}

impl<T, U> FlattenSource<T, U> {
    pub(crate) fn new(upstream: Enumerable<T>, selector: Selector<T, Enumerable<U>>) -> Self {
        Self { upstream, selector }
    }
}

impl<T: 'static, U: 'static> Source<U> for FlattenSource<T, U> {
    fn cursor(&self) -> Cursor<U> {
        Cursor::new(FlattenIterator {
            outer: self.upstream.cursor(),
            selector: Selector::clone(&self.selector),
            inner: None,
        })
    }
}

struct FlattenIterator<T, U> {
    outer: Cursor<T>,
    selector: Selector<T, Enumerable<U>>,
    inner: Option<Cursor<U>>,
}

impl<T: 'static, U: 'static> Iterator for FlattenIterator<T, U> {
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.inner.as_mut().and_then(Iterator::next) {
                return Some(element);
            }
            let outer = self.outer.next()?;
            self.inner = Some((self.selector)(&outer).cursor());
        }
    }
}
