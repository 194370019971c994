//! Mutable ordered set based on a Red-Black Tree.
//!
//! This module provides [`RedBlackTree`], an in-memory ordered container of
//! unique elements, together with [`Cursor`], an external bidirectional cursor
//! over it.
//!
//! # Overview
//!
//! Ordering is defined solely by a [`Comparator`] supplied at construction,
//! so elements may be opaque or composite keys. Rebalancing is performed
//! top-down in a single pass on both insertion and deletion.
//!
//! - O(log N) `find`, `insert`, `remove`
//! - O(log N) `lower_bound`, `upper_bound`
//! - O(log N) `min`/`max` (no cached extremes)
//! - O(1) `len` and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use redblack::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! assert!(tree.insert(5));
//! assert!(tree.insert(1));
//! assert!(tree.insert(3));
//! assert!(!tree.insert(3)); // duplicates are rejected
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
//! assert_eq!(tree.lower_bound(&2).current(), Some(&3));
//! ```
//!
//! # Internal Structure
//!
//! Between public operations the tree maintains:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. Missing children count as black
//! 4. Red nodes have only black children
//! 5. Every path from a node to a missing child has the same number of black nodes
//!
//! Nodes hold no parent links. Traversal state lives in the ancestor stack of
//! a [`Cursor`]; insertion and deletion track their ancestors in locals.

mod cursor;
mod insert;
mod iter;
mod node;
mod remove;
mod rotate;

pub use cursor::Cursor;
pub use iter::{IntoIter, Iter, Range};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::RangeBounds;

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::InvariantViolation;
use node::{Arena, Color, Direction, NodeId};

// =============================================================================
// Virtual Head
// =============================================================================

/// A position that owns a child link.
///
/// `Head` stands in for the sentinel parent of the root: its right child is
/// the root and it has no left child. Rotations that replace the root go
/// through the same reattachment path as any other subtree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Parent {
    Head,
    Node(NodeId),
}

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// An ordered set of unique elements backed by a Red-Black Tree.
///
/// Two elements are duplicates when the comparator returns
/// [`Ordering::Equal`](std::cmp::Ordering::Equal) for them. Insertion of a
/// duplicate is rejected and the stored element is left untouched.
///
/// The comparator must be a consistent total order for the lifetime of the
/// tree. An inconsistent comparator never causes undefined behavior, but the
/// results of every operation are then unspecified.
///
/// # Time Complexity
///
/// | Operation                    | Complexity |
/// |------------------------------|------------|
/// | `new`                        | O(1)       |
/// | `find` / `contains`          | O(log N)   |
/// | `insert`                     | O(log N)   |
/// | `remove` / `take`            | O(log N)   |
/// | `lower_bound`/`upper_bound`  | O(log N)   |
/// | `min`/`max`                  | O(log N)   |
/// | `len`/`is_empty`             | O(1)       |
/// | `clear`                      | O(N)       |
///
/// # Examples
///
/// ```rust
/// use redblack::tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::with_comparator(|left: &(u32, &str), right: &(u32, &str)| {
///     left.0.cmp(&right.0)
/// });
/// tree.insert((2, "two"));
/// tree.insert((1, "one"));
///
/// assert_eq!(tree.find(&(2, "")), Some(&(2, "two")));
/// assert_eq!(tree.min(), Some(&(1, "one")));
/// ```
pub struct RedBlackTree<T, C = NaturalOrder> {
    nodes: Arena<T>,
    root: Option<NodeId>,
    comparator: C,
    length: usize,
}

impl<T: Ord> RedBlackTree<T> {
    /// Creates an empty tree ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> RedBlackTree<T, C> {
    /// Creates an empty tree ordered by `comparator`.
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            comparator,
            length: 0,
        }
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the comparator that orders this tree.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        log::trace!("clearing red-black tree of {} elements", self.length);
        self.nodes.clear();
        self.root = None;
        self.length = 0;
    }

    /// Returns the smallest element, or `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.extreme(Direction::Left)
    }

    /// Returns the largest element, or `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.extreme(Direction::Right)
    }

    fn extreme(&self, direction: Direction) -> Option<&T> {
        let mut current = self.root?;
        while let Some(next) = self.nodes[current].child(direction) {
            current = next;
        }
        Some(&self.nodes[current].value)
    }

    /// Returns an unpositioned cursor over this tree.
    ///
    /// The first call to [`Cursor::next`] moves it to the smallest element,
    /// the first call to [`Cursor::prev`] to the largest.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T, C> {
        Cursor::new(self)
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// A red-black tree of `N` elements never exceeds `2 * log2(N + 1)`.
    #[must_use]
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, link: Option<NodeId>) -> usize {
        link.map_or(0, |id| {
            let node = &self.nodes[id];
            1 + self
                .subtree_height(node.left)
                .max(self.subtree_height(node.right))
        })
    }

    fn child_of(&self, parent: Parent, direction: Direction) -> Option<NodeId> {
        match (parent, direction) {
            (Parent::Head, Direction::Right) => self.root,
            (Parent::Head, Direction::Left) => None,
            (Parent::Node(id), _) => self.nodes[id].child(direction),
        }
    }

    fn set_child_of(&mut self, parent: Parent, direction: Direction, link: Option<NodeId>) {
        match parent {
            Parent::Head => {
                debug_assert_eq!(direction, Direction::Right, "head has no left child");
                self.root = link;
            }
            Parent::Node(id) => self.nodes[id].set_child(direction, link),
        }
    }

    /// Which side of `parent` holds `child`.
    fn side_of(&self, parent: Parent, child: NodeId) -> Direction {
        Direction::toward(self.child_of(parent, Direction::Right) == Some(child))
    }

    fn paint_root_black(&mut self) {
        self.nodes.paint(self.root, Color::Black);
    }
}

impl<T, C: Comparator<T>> RedBlackTree<T, C> {
    /// Returns the stored element equal to `value`, or `None`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for value in [10, 20, 5, 15, 3] {
    ///     tree.insert(value);
    /// }
    /// tree.remove(&20);
    ///
    /// assert_eq!(tree.find(&20), None);
    /// assert_eq!(tree.find(&15), Some(&15));
    /// assert_eq!(tree.len(), 4);
    /// ```
    #[must_use]
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            match self.comparator.compare(value, &node.value) {
                std::cmp::Ordering::Equal => return Some(&node.value),
                ordering => current = node.child(Direction::toward(ordering.is_gt())),
            }
        }
        None
    }

    /// Returns `true` if an element equal to `value` is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns a cursor positioned at the element equal to `value`, or `None`.
    ///
    /// The cursor's ancestor stack holds the search path, so it can move in
    /// either direction straight away.
    #[must_use]
    pub fn find_cursor(&self, value: &T) -> Option<Cursor<'_, T, C>> {
        let mut cursor = Cursor::new(self);
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            match self.comparator.compare(value, &node.value) {
                std::cmp::Ordering::Equal => {
                    cursor.position = Some(id);
                    return Some(cursor);
                }
                ordering => {
                    cursor.ancestors.push(id);
                    current = node.child(Direction::toward(ordering.is_gt()));
                }
            }
        }
        None
    }

    /// Returns a cursor at the first element not less than `value`.
    ///
    /// The cursor is unpositioned ("end") when every element is less than
    /// `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [1, 3, 5, 7].into_iter().collect();
    /// assert_eq!(tree.lower_bound(&4).current(), Some(&5));
    /// assert_eq!(tree.lower_bound(&5).current(), Some(&5));
    /// assert_eq!(tree.lower_bound(&8).current(), None);
    /// ```
    #[must_use]
    pub fn lower_bound(&self, value: &T) -> Cursor<'_, T, C> {
        let mut cursor = Cursor::new(self);
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            let ordering = self.comparator.compare(value, &node.value);
            if ordering.is_eq() {
                cursor.position = Some(id);
                return cursor;
            }
            cursor.ancestors.push(id);
            current = node.child(Direction::toward(ordering.is_gt()));
        }

        // The nearest ancestor greater than `value` is its successor.
        let successor = cursor
            .ancestors
            .iter()
            .rposition(|&id| self.comparator.compare(value, &self.nodes[id].value).is_lt());
        match successor {
            Some(index) => {
                cursor.position = Some(cursor.ancestors[index]);
                cursor.ancestors.truncate(index);
            }
            None => cursor.ancestors.clear(),
        }
        cursor
    }

    /// Returns a cursor at the first element strictly greater than `value`,
    /// or an unpositioned cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [1, 3, 5, 7].into_iter().collect();
    /// assert_eq!(tree.upper_bound(&5).current(), Some(&7));
    /// assert_eq!(tree.upper_bound(&7).current(), None);
    /// ```
    #[must_use]
    pub fn upper_bound(&self, value: &T) -> Cursor<'_, T, C> {
        let mut cursor = self.lower_bound(value);
        while cursor
            .current()
            .is_some_and(|current| self.comparator.compare(current, value).is_eq())
        {
            cursor.next();
        }
        cursor
    }

    /// Returns an iterator over the elements inside `range`, ascending.
    ///
    /// A range whose start lies after its end yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=9).collect();
    /// assert_eq!(tree.range(3..6).copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// assert_eq!(tree.range(7..).copied().collect::<Vec<_>>(), vec![7, 8, 9]);
    /// ```
    pub fn range<R: RangeBounds<T>>(&self, range: R) -> Range<'_, T, C> {
        Range::new(self, &range)
    }

    /// Checks every structural invariant and returns the black height.
    ///
    /// The black height counts black nodes on any path from the root to a
    /// missing child, excluding the missing child itself. An empty tree has
    /// black height zero.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..100).collect();
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let result = self.check_structure();
        if let Err(violation) = &result {
            log::debug!("red-black tree failed validation: {violation}");
        }
        result
    }

    fn check_structure(&self) -> Result<usize, InvariantViolation> {
        if self.nodes.is_red(self.root) {
            return Err(InvariantViolation::RedRoot);
        }
        let black_height = self.check_subtree(self.root)?;

        let mut counted = 0;
        let mut previous: Option<&T> = None;
        let mut cursor = Cursor::new(self);
        while let Some(value) = cursor.next() {
            if previous.is_some_and(|previous| !self.comparator.compare(previous, value).is_lt()) {
                return Err(InvariantViolation::OutOfOrder);
            }
            previous = Some(value);
            counted += 1;
        }
        if counted != self.length {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.length,
                counted,
            });
        }
        Ok(black_height)
    }

    fn check_subtree(&self, link: Option<NodeId>) -> Result<usize, InvariantViolation> {
        let Some(id) = link else {
            return Ok(0);
        };
        let node = &self.nodes[id];
        if node.is_red() && (self.nodes.is_red(node.left) || self.nodes.is_red(node.right)) {
            return Err(InvariantViolation::RedChildOfRed);
        }
        let left = self.check_subtree(node.left)?;
        let right = self.check_subtree(node.right)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { left, right });
        }
        Ok(left + usize::from(!node.is_red()))
    }

    /// Asserts structural invariants after a mutation when
    /// `invariant-checks` is enabled.
    #[inline]
    fn debug_check_invariants(&self) {
        if cfg!(feature = "invariant-checks") {
            debug_assert_eq!(self.check_structure().err(), None);
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, C: Default> Default for RedBlackTree<T, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for RedBlackTree<T, C> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            comparator: self.comparator.clone(),
            length: self.length,
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for RedBlackTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for RedBlackTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for RedBlackTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: PartialEq, C> PartialEq for RedBlackTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for RedBlackTree<T, C> {}

/// Hashes the length followed by every element in ascending order, so equal
/// trees hash equally regardless of their internal shape.
impl<T: Hash, C> Hash for RedBlackTree<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RedBlackTree<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for RedBlackTree<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Cursor<'static, i32>: Send, Sync, Clone);
