//! Reversal sequence (`reverse`).
//!
//! Reversal needs the last element first, so the upstream is drained into
//! a buffer on the first pull of each traversal. Creating the cursor does
//! no work.

use super::{Enumerable, Source};
use crate::cursor::Cursor;

pub(crate) struct ReverseSource<T> {
    upstream: Enumerable<T>,
}

impl<T> ReverseSource<T> {
    pub(crate) const fn new(upstream: Enumerable<T>) -> Self {
        Self { upstream }
    }
}

impl<T: 'static> Source<T> for ReverseSource<T> {
    fn cursor(&self) -> Cursor<T> {
        Cursor::new(ReverseIterator {
            pending: Some(self.upstream.clone()),
            buffer: Vec::new(),
        })
    }
}

struct ReverseIterator<T> {
    pending: Option<Enumerable<T>>,
    buffer: Vec<T>,
}

impl<T: 'static> Iterator for ReverseIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            self.buffer = pending.cursor().collect();
            tracing::trace!(buffered = self.buffer.len(), "reverse: drained upstream");
        }
        self.buffer.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.pending.is_some() {
            (0, None)
        } else {
            (self.buffer.len(), Some(self.buffer.len()))
        }
    }
}
