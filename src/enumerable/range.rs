//! Positional window (`skip` / `take`).

use super::{Enumerable, Source};
use crate::cursor::Cursor;

pub(crate) struct RangeSource<T> {
    upstream: Enumerable<T>,
    /// `None` skips nothing.
    skip: Option<usize>,
    /// `None` takes everything that remains.
    take: Option<usize>,
}

impl<T> RangeSource<T> {
    pub(crate) const fn new(upstream: Enumerable<T>, skip: Option<usize>, take: Option<usize>) -> Self {
        Self {
            upstream,
            skip,
            take,
        }
    }
}

impl<T: 'static> Source<T> for RangeSource<T> {
    fn cursor(&self) -> Cursor<T> {
        Cursor::new(RangeIterator {
            upstream: self.upstream.cursor(),
            to_skip: self.skip.unwrap_or(0),
            remaining: self.take,
        })
    }
}

struct RangeIterator<T> {
    upstream: Cursor<T>,
    to_skip: usize,
    remaining: Option<usize>,
}

impl<T> Iterator for RangeIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // Stop before touching upstream once the window is full.
        if self.remaining == Some(0) {
            return None;
        }
        while self.to_skip > 0 {
            self.to_skip -= 1;
            self.upstream.next()?;
        }
        let element = self.upstream.next()?;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(element)
    }
}
