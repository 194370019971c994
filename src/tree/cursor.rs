//! Bidirectional cursor over a [`RedBlackTree`].
//!
//! Nodes keep no parent links, so a [`Cursor`] carries the path from the root
//! down to its position as an explicit ancestor stack. Stepping to the in-order
//! successor either descends into the right subtree (pushing as it goes) or
//! pops ancestors until it climbs out of a left subtree. The predecessor is
//! the mirror image.

use smallvec::SmallVec;
use std::fmt;

use super::RedBlackTree;
use super::node::{Direction, NodeId};
use crate::comparator::NaturalOrder;

/// Inline capacity of the ancestor stack. Paths longer than this spill to the
/// heap; a red-black tree needs more than 65 535 elements to reach it.
const ANCESTOR_INLINE_CAPACITY: usize = 32;

/// An external cursor over the elements of a [`RedBlackTree`].
///
/// A cursor is either positioned at an element or unpositioned. Unpositioned
/// means "before the first" when moving forward and "after the last" when
/// moving backward: [`next`](Self::next) from an unpositioned cursor moves to
/// the smallest element and [`prev`](Self::prev) to the largest. Stepping past
/// either end leaves the cursor unpositioned again, and the following step
/// restarts from an end in the same way.
///
/// The cursor borrows the tree, so the tree cannot be mutated while a cursor
/// is alive.
///
/// # Examples
///
/// ```rust
/// use redblack::tree::RedBlackTree;
///
/// let tree: RedBlackTree<i32> = [2, 4, 6].into_iter().collect();
/// let mut cursor = tree.cursor();
///
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.next(), Some(&4));
/// assert_eq!(cursor.prev(), Some(&2));
/// assert_eq!(cursor.prev(), None);
/// assert_eq!(cursor.prev(), Some(&6));
/// ```
pub struct Cursor<'a, T, C = NaturalOrder> {
    tree: &'a RedBlackTree<T, C>,
    /// Path from the root down to, but excluding, `position`.
    pub(super) ancestors: SmallVec<[NodeId; ANCESTOR_INLINE_CAPACITY]>,
    pub(super) position: Option<NodeId>,
}

impl<'a, T, C> Cursor<'a, T, C> {
    pub(super) fn new(tree: &'a RedBlackTree<T, C>) -> Self {
        Self {
            tree,
            ancestors: SmallVec::new(),
            position: None,
        }
    }

    /// Returns the element under the cursor, or `None` if unpositioned.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.position.map(|id| &tree.nodes[id].value)
    }

    /// Returns `true` if the cursor points at an element.
    #[inline]
    #[must_use]
    pub const fn is_positioned(&self) -> bool {
        self.position.is_some()
    }

    /// Makes the cursor unpositioned, as if freshly created.
    pub fn reset(&mut self) {
        self.ancestors.clear();
        self.position = None;
    }

    /// Moves to the in-order successor and returns its element.
    ///
    /// From an unpositioned cursor this moves to the smallest element.
    /// Returns `None` after stepping past the largest element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a T> {
        self.step(Direction::Right);
        self.current()
    }

    /// Moves to the in-order predecessor and returns its element.
    ///
    /// From an unpositioned cursor this moves to the largest element.
    /// Returns `None` after stepping past the smallest element.
    pub fn prev(&mut self) -> Option<&'a T> {
        self.step(Direction::Left);
        self.current()
    }

    /// Moves one element toward `direction` and returns the new position.
    pub(super) fn step(&mut self, direction: Direction) -> Option<NodeId> {
        let tree = self.tree;
        let nodes = &tree.nodes;
        match self.position {
            None => {
                if let Some(root) = tree.root {
                    self.descend(root, direction.opposite());
                }
            }
            Some(current) => {
                if let Some(child) = nodes[current].child(direction) {
                    self.ancestors.push(current);
                    self.descend(child, direction.opposite());
                } else {
                    // Climb until we leave a subtree hanging on the other side.
                    loop {
                        let left_behind = self.position;
                        self.position = self.ancestors.pop();
                        match self.position {
                            Some(ancestor) if nodes[ancestor].child(direction) == left_behind => {}
                            _ => break,
                        }
                    }
                }
            }
        }
        self.position
    }

    /// Walks from `from` toward `direction` until a missing child, pushing
    /// every node passed.
    fn descend(&mut self, from: NodeId, direction: Direction) {
        let tree = self.tree;
        let nodes = &tree.nodes;
        let mut node = from;
        while let Some(child) = nodes[node].child(direction) {
            self.ancestors.push(node);
            node = child;
        }
        self.position = Some(node);
    }
}

impl<T, C> Clone for Cursor<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            ancestors: self.ancestors.clone(),
            position: self.position,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Cursor<'_, T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("current", &self.current())
            .field("depth", &self.ancestors.len())
            .finish()
    }
}
