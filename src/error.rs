//! Error types for query operations.
//!
//! Every fallible operation in this crate returns [`QueryResult`]. The
//! `*_or_default` family is the only recovery path: it turns "not found"
//! into `None` instead of an error.

use thiserror::Error;

/// Represents the ways a query operation can violate its contract.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let empty: List<i32> = List::new();
/// assert_eq!(empty.first(), Err(QueryError::EmptySequence));
/// assert_eq!(
///     format!("{}", QueryError::EmptySequence),
///     "Sequence contains no elements"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The operation needs at least one element and the sequence had none.
    #[error("Sequence contains no elements")]
    EmptySequence,

    /// A positional access or mutation addressed an index outside the valid range.
    #[error("Index {index} is out of bounds (length {length})")]
    OutOfBounds {
        /// The index that was requested.
        index: isize,
        /// The number of elements available when the access failed.
        length: usize,
    },

    /// An argument was structurally invalid, such as a negative index.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The name of the offending argument.
        name: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },

    /// More than one element satisfied a `single` query.
    #[error("Sequence contains more than one matching element")]
    AmbiguousMatch,
}

impl QueryError {
    /// Builds an [`QueryError::OutOfBounds`] from an unsigned index.
    pub(crate) fn out_of_bounds(index: usize, length: usize) -> Self {
        Self::OutOfBounds {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            length,
        }
    }
}

/// Result alias used throughout the crate.
pub type QueryResult<T> = Result<T, QueryError>;
