//! Difference sequence (`except`).
//!
//! The excluded sequence is drained into a key set on the first pull of
//! each traversal, so every upstream element is checked against all of it.

use std::hash::Hash;

use super::{Enumerable, Selector, Source};
use crate::cursor::Cursor;
use crate::hashing::{KeySet, key_set};

pub(crate) struct ExceptSource<T, K> {
    upstream: Enumerable<T>,
    excluded: Enumerable<T>,
    key_selector: Selector<T, K>,
}

impl<T, K> ExceptSource<T, K> {
    pub(crate) fn new(
        upstream: Enumerable<T>,
        excluded: Enumerable<T>,
        key_selector: Selector<T, K>,
    ) -> Self {
        Self {
            upstream,
            excluded,
            key_selector,
        }
    }
}

impl<T: 'static, K: Eq + Hash + 'static> Source<T> for ExceptSource<T, K> {
    fn cursor(&self) -> Cursor<T> {
        Cursor::new(ExceptIterator {
            upstream: self.upstream.cursor(),
            pending: Some(self.excluded.clone()),
            key_selector: Selector::clone(&self.key_selector),
            excluded: key_set(),
        })
    }
}

struct ExceptIterator<T, K> {
    upstream: Cursor<T>,
    /// The excluded sequence, until it has been loaded into `excluded`.
    pending: Option<Enumerable<T>>,
    key_selector: Selector<T, K>,
    excluded: KeySet<K>,
}

impl<T: 'static, K: Eq + Hash> ExceptIterator<T, K> {
    fn load_excluded(&mut self) {
        if let Some(pending) = self.pending.take() {
            let key_selector = &self.key_selector;
            self.excluded
                .extend(pending.cursor().map(|element| key_selector(&element)));
            tracing::trace!(excluded = self.excluded.len(), "except: loaded exclusion set");
        }
    }
}

impl<T: 'static, K: Eq + Hash> Iterator for ExceptIterator<T, K> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.load_excluded();
        loop {
            let element = self.upstream.next()?;
            if !self.excluded.contains(&(self.key_selector)(&element)) {
                return Some(element);
            }
        }
    }
}
