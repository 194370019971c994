//! Error types reported by the red-black invariant checker.
//!
//! No tree operation fails at runtime: duplicates, absent values and empty
//! trees are reported through `bool` and `Option`. The only error in this
//! crate is [`InvariantViolation`], produced by
//! [`RedBlackTree::validate`](crate::tree::RedBlackTree::validate).

use std::fmt;

/// A broken structural invariant found by
/// [`RedBlackTree::validate`](crate::tree::RedBlackTree::validate).
///
/// # Examples
///
/// ```rust
/// use redblack::error::InvariantViolation;
///
/// let error = InvariantViolation::BlackHeightMismatch { left: 2, right: 1 };
/// assert_eq!(
///     format!("{error}"),
///     "black height mismatch: left subtree has 2, right subtree has 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    RedChildOfRed,
    /// Two sibling subtrees carry a different number of black nodes.
    BlackHeightMismatch {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// In-order traversal is not strictly increasing under the comparator.
    OutOfOrder,
    /// The recorded element count differs from the reachable node count.
    SizeMismatch {
        /// The count maintained by the tree.
        recorded: usize,
        /// The number of nodes reachable from the root.
        counted: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root node is red"),
            Self::RedChildOfRed => write!(formatter, "red node has a red child"),
            Self::BlackHeightMismatch { left, right } => write!(
                formatter,
                "black height mismatch: left subtree has {left}, right subtree has {right}"
            ),
            Self::OutOfOrder => write!(formatter, "in-order sequence is not strictly increasing"),
            Self::SizeMismatch { recorded, counted } => write!(
                formatter,
                "size mismatch: recorded {recorded}, reachable {counted}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
