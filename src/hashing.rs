//! Hash set used to remember keys that have already been seen.
//!
//! The hasher is chosen at compile time:
//!
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState` (only when `fxhash` is off)
//! - neither: the standard library's `RandomState`

use std::collections::HashSet;

#[cfg(feature = "fxhash")]
pub(crate) type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type KeyHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type KeyHasher = std::collections::hash_map::RandomState;

/// Set of keys with O(1) average membership checks.
pub(crate) type KeySet<K> = HashSet<K, KeyHasher>;

/// Creates an empty [`KeySet`].
pub(crate) fn key_set<K>() -> KeySet<K> {
    KeySet::with_hasher(KeyHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_insert_reports_first_sighting_only() {
        let mut seen = key_set();
        assert!(seen.insert("alpha"));
        assert!(!seen.insert("alpha"));
        assert!(seen.insert("beta"));
        assert_eq!(seen.len(), 2);
    }

    #[rstest]
    fn test_contains_after_extend() {
        let mut seen = key_set();
        seen.extend([1, 2, 3]);
        assert!(seen.contains(&2));
        assert!(!seen.contains(&4));
    }
}
