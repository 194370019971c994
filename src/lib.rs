//! # redblack
//!
//! An in-memory ordered container built on a red-black tree, with an
//! external bidirectional cursor.
//!
//! ## Overview
//!
//! - **Tree**: [`RedBlackTree`](tree::RedBlackTree), an ordered set of unique
//!   elements with O(log N) search, insertion, deletion, min/max and
//!   lower/upper bound queries. Rebalancing is top-down and single pass.
//! - **Cursor**: [`Cursor`](tree::Cursor), which walks the tree forward and
//!   backward using an explicit ancestor stack instead of parent pointers.
//! - **Comparators**: ordering is supplied by a
//!   [`Comparator`](comparator::Comparator), so elements can be opaque values
//!   or composite keys.
//!
//! ## Feature Flags
//!
//! - `invariant-checks`: validate the red-black invariants after every
//!   insertion and removal in debug builds
//!
//! ## Example
//!
//! ```rust
//! use redblack::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! for value in [7, 1, 5, 3] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&7));
//! assert_eq!(tree.lower_bound(&4).current(), Some(&5));
//! assert_eq!(tree.upper_bound(&5).current(), Some(&7));
//! assert_eq!(tree.lower_bound(&8).current(), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::error::*;
    pub use crate::tree::*;
}

pub mod comparator;
pub mod error;
pub mod tree;
