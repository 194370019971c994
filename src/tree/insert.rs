//! Top-down single-pass insertion.
//!
//! On the way down every node with two red children is color flipped, and
//! any red-red pair this creates with the parent is fixed immediately by one
//! single or double rotation at the grandparent. By the time the new red leaf
//! is attached the only possible violation is directly above it, and it is
//! fixed in the same way. No bottom-up pass follows.

use super::node::{Color, Direction, NodeId};
use super::{Parent, RedBlackTree};
use crate::comparator::Comparator;

impl<T, C: Comparator<T>> RedBlackTree<T, C> {
    /// Adds `value` unless an equal element is already stored.
    ///
    /// Returns `true` if the element was added. On `false` the tree is left
    /// unchanged and `value` is dropped.
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
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let Some(root) = self.root else {
            let id = self.nodes.allocate(value);
            self.nodes[id].color = Color::Black;
            self.root = Some(id);
            self.length = 1;
            log::trace!("created red-black tree root");
            return true;
        };

        let mut direction = Direction::Left;
        let mut last_direction = direction;
        let mut great_grandparent = Parent::Head;
        let mut grandparent: Option<NodeId> = None;
        let mut parent: Option<NodeId> = None;
        let mut node = Some(root);

        let inserted = loop {
            let Some(current) = node else {
                let created = self.nodes.allocate(value);
                if let Some(parent) = parent {
                    self.nodes[parent].set_child(direction, Some(created));
                }
                self.fix_red_violation(
                    created,
                    parent,
                    grandparent,
                    great_grandparent,
                    last_direction,
                );
                self.length += 1;
                break true;
            };

            let (left, right) = (self.nodes[current].left, self.nodes[current].right);
            if self.nodes.is_red(left) && self.nodes.is_red(right) {
                self.nodes[current].color = Color::Red;
                self.nodes.paint(left, Color::Black);
                self.nodes.paint(right, Color::Black);
            }
            self.fix_red_violation(
                current,
                parent,
                grandparent,
                great_grandparent,
                last_direction,
            );

            let ordering = self.comparator.compare(&self.nodes[current].value, &value);
            if ordering.is_eq() {
                break false;
            }

            last_direction = direction;
            direction = Direction::toward(ordering.is_lt());

            if let Some(grandparent) = grandparent {
                great_grandparent = Parent::Node(grandparent);
            }
            grandparent = parent;
            parent = Some(current);
            node = self.nodes[current].child(direction);
        };

        self.paint_root_black();
        self.debug_check_invariants();
        inserted
    }

    /// Rotates at `grandparent` when both `node` and `parent` are red.
    ///
    /// `last_direction` is the side `parent` hangs off `grandparent`. The
    /// rotated subtree is reattached under `great_grandparent`.
    fn fix_red_violation(
        &mut self,
        node: NodeId,
        parent: Option<NodeId>,
        grandparent: Option<NodeId>,
        great_grandparent: Parent,
        last_direction: Direction,
    ) {
        let (Some(parent), Some(grandparent)) = (parent, grandparent) else {
            return;
        };
        if !(self.nodes[node].is_red() && self.nodes[parent].is_red()) {
            return;
        }

        let slot = self.side_of(great_grandparent, grandparent);
        let rotated = if self.nodes[parent].child(last_direction) == Some(node) {
            self.nodes.single_rotate(grandparent, last_direction.opposite())
        } else {
            self.nodes.double_rotate(grandparent, last_direction.opposite())
        };
        self.set_child_of(great_grandparent, slot, Some(rotated));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(tree: &RedBlackTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[rstest]
    fn test_insert_into_empty_creates_black_root() {
        let mut tree = RedBlackTree::new();
        assert!(tree.insert(1));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.validate(), Ok(1));
    }

    #[rstest]
    fn test_insert_duplicate_is_rejected() {
        let mut tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
        assert!(!tree.insert(2));
        assert_eq!(tree.len(), 3);
        assert_eq!(values(&tree), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_insert_duplicate_keeps_stored_element() {
        let mut tree = RedBlackTree::with_comparator(|left: &(i32, &str), right: &(i32, &str)| {
            left.0.cmp(&right.0)
        });
        assert!(tree.insert((1, "first")));
        assert!(!tree.insert((1, "second")));
        assert_eq!(tree.find(&(1, "")), Some(&(1, "first")));
    }

    #[rstest]
    fn test_insert_ascending_rotates_at_root() {
        let mut tree = RedBlackTree::new();
        for value in 1..=3 {
            tree.insert(value);
        }
        let Some(root) = tree.root else {
            panic!("tree is not empty");
        };
        assert_eq!(tree.nodes[root].value, 2);
        assert_eq!(tree.validate(), Ok(1));
    }

    #[rstest]
    fn test_insert_zig_zag_double_rotates() {
        let mut tree = RedBlackTree::new();
        for value in [3, 1, 2] {
            tree.insert(value);
        }
        let Some(root) = tree.root else {
            panic!("tree is not empty");
        };
        assert_eq!(tree.nodes[root].value, 2);
        assert_eq!(values(&tree), vec![1, 2, 3]);
        assert_eq!(tree.validate(), Ok(1));
    }

    #[rstest]
    #[case::ascending((0..500).collect())]
    #[case::descending((0..500).rev().collect())]
    #[case::interleaved((0..250).flat_map(|value| [value, 499 - value]).collect())]
    fn test_insert_keeps_invariants(#[case] order: Vec<i32>) {
        let mut tree = RedBlackTree::new();
        for value in order {
            assert!(tree.insert(value));
            assert!(tree.validate().is_ok());
        }
        assert_eq!(tree.len(), 500);
        assert_eq!(values(&tree), (0..500).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_insert_reuses_released_slots() {
        let mut tree: RedBlackTree<i32> = (0..10).collect();
        for value in 0..5 {
            tree.remove(&value);
        }
        for value in 10..15 {
            tree.insert(value);
        }
        assert_eq!(values(&tree), (5..15).collect::<Vec<_>>());
        assert!(tree.validate().is_ok());
    }
}
