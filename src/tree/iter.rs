//! Standard iterators over a [`RedBlackTree`].
//!
//! [`Iter`] and [`Range`] are thin wrappers around [`Cursor`]s, so they
//! inherit its stack-based traversal. [`IntoIter`] moves the elements out in
//! ascending order.

use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use super::node::{Direction, NodeId};
use super::{Cursor, RedBlackTree};
use crate::comparator::{Comparator, NaturalOrder};

// =============================================================================
// Iter
// =============================================================================

/// An iterator over the elements of a [`RedBlackTree`] in ascending order.
///
/// Created by [`RedBlackTree::iter`].
pub struct Iter<'a, T, C = NaturalOrder> {
    front: Cursor<'a, T, C>,
    back: Cursor<'a, T, C>,
    remaining: usize,
}

impl<'a, T, C> Iter<'a, T, C> {
    pub(super) fn new(tree: &'a RedBlackTree<T, C>) -> Self {
        Self {
            front: tree.cursor(),
            back: tree.cursor(),
            remaining: tree.len(),
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.front.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> DoubleEndedIterator for Iter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.back.prev()
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Range
// =============================================================================

/// An iterator over the elements of a [`RedBlackTree`] that fall inside a
/// range, in ascending order.
///
/// Created by [`RedBlackTree::range`].
pub struct Range<'a, T, C = NaturalOrder> {
    cursor: Cursor<'a, T, C>,
    /// First position past the range; `None` means the end of the tree.
    end: Option<NodeId>,
    exhausted: bool,
}

impl<'a, T, C: Comparator<T>> Range<'a, T, C> {
    pub(super) fn new<R: RangeBounds<T>>(tree: &'a RedBlackTree<T, C>, range: &R) -> Self {
        let cursor = match range.start_bound() {
            Bound::Included(start) => tree.lower_bound(start),
            Bound::Excluded(start) => tree.upper_bound(start),
            Bound::Unbounded => {
                let mut cursor = tree.cursor();
                cursor.next();
                cursor
            }
        };
        let end = match range.end_bound() {
            Bound::Included(end) => tree.upper_bound(end),
            Bound::Excluded(end) => tree.lower_bound(end),
            Bound::Unbounded => tree.cursor(),
        };

        let exhausted = match (cursor.current(), end.current()) {
            (None, _) => true,
            (Some(first), Some(past_last)) => !tree.comparator.compare(first, past_last).is_lt(),
            (Some(_), None) => false,
        };

        Self {
            cursor,
            end: end.position,
            exhausted,
        }
    }
}

impl<'a, T, C> Iterator for Range<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.cursor.position.is_none() || self.cursor.position == self.end {
            self.exhausted = true;
            return None;
        }
        let value = self.cursor.current();
        self.cursor.step(Direction::Right);
        value
    }
}

impl<T, C> FusedIterator for Range<'_, T, C> {}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator over the elements of a [`RedBlackTree`] in ascending
/// order.
///
/// Created by [`RedBlackTree::into_iter`](IntoIterator::into_iter).
pub struct IntoIter<T> {
    values: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new<C>(mut tree: RedBlackTree<T, C>) -> Self {
        let mut order = Vec::with_capacity(tree.len());
        let mut cursor = tree.cursor();
        while let Some(id) = cursor.step(Direction::Right) {
            order.push(id);
        }

        let values: Vec<T> = order.into_iter().map(|id| tree.nodes.release(id)).collect();
        tree.root = None;
        tree.length = 0;
        Self {
            values: values.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.values.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.values.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
