//! Total-order comparators for [`RedBlackTree`](crate::tree::RedBlackTree).
//!
//! The tree never relies on `Ord` directly. Ordering is supplied by a
//! [`Comparator`], which may be:
//!
//! - [`NaturalOrder`], delegating to the element's `Ord` implementation
//! - any closure or function of shape `Fn(&T, &T) -> Ordering`
//! - [`Reversed`], inverting another comparator
//!
//! # Caller Obligation
//!
//! A comparator must be a consistent total order (antisymmetric and
//! transitive) for the whole lifetime of the tree that uses it. A comparator
//! that violates this is a logic error: the tree stays memory safe, but the
//! results of every operation are unspecified.
//!
//! # Examples
//!
//! ```rust
//! use redblack::comparator::{Comparator, NaturalOrder, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"ab", &"c"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over values of type `T`.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` against `right`.
    ///
    /// `Less` means `left` sorts before `right`, `Equal` means the two are the
    /// same element as far as the tree is concerned.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Orders elements by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Inverts the order of the wrapped comparator.
///
/// # Examples
///
/// ```rust
/// use redblack::comparator::{NaturalOrder, Reversed};
/// use redblack::tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::with_comparator(Reversed(NaturalOrder));
/// tree.extend([1, 3, 2]);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}
