//! # enumerable
//!
//! Lazy, composable query operators over in-memory sequences.
//!
//! ## Overview
//!
//! - **Sequences**: [`Enumerable`](enumerable::Enumerable) describes how to
//!   produce elements; operators such as `filter`, `select`, `concat`,
//!   `distinct`, `order_by`, `reverse`, `skip` and `take` wrap it without
//!   evaluating anything
//! - **Cursors**: [`Cursor`](cursor::Cursor) is the single-traversal,
//!   pull-based state each traversal gets
//! - **Terminal operations**: `count`, `first`, `single`, `aggregate`,
//!   `min`, `sum`, `element_at`, `to_vec` and friends pull values out
//! - **List**: [`List`](list::List) is a mutable, index-addressable buffer
//!   that is both a source and a sink; sequences over it are live views
//! - **Comparers**: [`comparer`] builds three-way orderings from key selectors
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash` for the key sets behind `distinct`/`except`
//! - `ahash`: use `ahash` for those key sets
//! - `serde`: `Serialize`/`Deserialize` for `List`
//! - `full`: `serde` and `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let scores = List::from(vec![("ann", 72), ("bob", 91), ("cid", 72), ("dee", 55)]);
//!
//! let passing: Vec<&str> = scores
//!     .filter(|entry| entry.1 >= 60)
//!     .order_by_descending(|entry| entry.1)
//!     .then_by(|entry| entry.0)
//!     .select(|entry| entry.0)
//!     .to_vec();
//! assert_eq!(passing, vec!["bob", "ann", "cid"]);
//!
//! assert_eq!(scores.single_by(|entry| entry.1 > 90), Ok(("bob", 91)));
//! assert_eq!(scores.average_of(|entry| f64::from(entry.1)), Ok(72.5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use enumerable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparer::{Comparer, SortDirection};
    pub use crate::cursor::Cursor;
    pub use crate::enumerable::{Enumerable, IntoEnumerable, OrderedEnumerable, Queryable, Source};
    pub use crate::error::{QueryError, QueryResult};
    pub use crate::list::List;
}

pub mod comparer;
pub mod cursor;
pub mod enumerable;
pub mod error;
pub mod list;

mod hashing;
