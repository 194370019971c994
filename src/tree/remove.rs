//! Top-down single-pass deletion.
//!
//! The descent always pushes a red node into the path before stepping into a
//! black child, either by rotating a red child upward, by color flipping with
//! the sibling, or by rotating red from the sibling's subtree. When the
//! bottom is reached the terminal node is red (or is the lone root), so it
//! can be unlinked without a fixup pass. A match found higher
//! up is overwritten with the terminal node's element (its in-order
//! neighbour), and the terminal node is spliced out instead.

use super::node::{Color, Direction};
use super::{Parent, RedBlackTree};
use crate::comparator::Comparator;

impl<T, C: Comparator<T>> RedBlackTree<T, C> {
    /// Removes the element equal to `value`.
    ///
    /// Returns `true` if an element was removed, `false` if none was stored.
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
    /// let mut tree: RedBlackTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes the element equal to `value` and returns it.
    ///
    /// The returned element is the one that was stored, which may differ from
    /// `value` in fields the comparator ignores.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::with_comparator(|left: &(u8, char), right: &(u8, char)| {
    ///     left.0.cmp(&right.0)
    /// });
    /// tree.insert((1, 'a'));
    /// assert_eq!(tree.take(&(1, '?')), Some((1, 'a')));
    /// assert!(tree.is_empty());
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        if self.root.is_none() {
            return None;
        }

        let mut node = Parent::Head;
        let mut parent = Parent::Head;
        let mut grandparent = Parent::Head;
        let mut found = None;
        let mut direction = Direction::Right;

        while let Some(current) = self.child_of(node, direction) {
            let last_direction = direction;

            grandparent = parent;
            parent = node;
            node = Parent::Node(current);

            let ordering = self.comparator.compare(value, &self.nodes[current].value);
            direction = Direction::toward(ordering.is_gt());
            if ordering.is_eq() {
                found = Some(current);
            }

            let next = self.nodes[current].child(direction);
            if self.nodes[current].is_red() || self.nodes.is_red(next) {
                continue;
            }

            if self.nodes.is_red(self.nodes[current].child(direction.opposite())) {
                let rotated = self.nodes.single_rotate(current, direction);
                self.set_child_of(parent, last_direction, Some(rotated));
                parent = Parent::Node(rotated);
                continue;
            }

            let Parent::Node(parent_id) = parent else {
                continue;
            };
            let Some(sibling) = self.nodes[parent_id].child(last_direction.opposite()) else {
                continue;
            };

            let (near, far) = (
                self.nodes[sibling].child(last_direction),
                self.nodes[sibling].child(last_direction.opposite()),
            );
            if !self.nodes.is_red(near) && !self.nodes.is_red(far) {
                self.nodes[parent_id].color = Color::Black;
                self.nodes[sibling].color = Color::Red;
                self.nodes[current].color = Color::Red;
            } else {
                let slot = self.side_of(grandparent, parent_id);
                let rotated = if self.nodes.is_red(near) {
                    self.nodes.double_rotate(parent_id, last_direction)
                } else {
                    self.nodes.single_rotate(parent_id, last_direction)
                };
                self.set_child_of(grandparent, slot, Some(rotated));

                let (left, right) = (self.nodes[rotated].left, self.nodes[rotated].right);
                self.nodes[rotated].color = Color::Red;
                self.nodes[current].color = Color::Red;
                self.nodes.paint(left, Color::Black);
                self.nodes.paint(right, Color::Black);
            }
        }

        let removed = match (found, node) {
            (Some(found), Parent::Node(terminal)) => {
                let terminal_node = &self.nodes[terminal];
                let replacement = terminal_node.left.or(terminal_node.right);
                let slot = self.side_of(parent, terminal);
                self.set_child_of(parent, slot, replacement);

                let mut removed = self.nodes.release(terminal);
                if found != terminal {
                    removed = std::mem::replace(&mut self.nodes[found].value, removed);
                }
                self.length -= 1;
                log::trace!("unlinked red-black tree node, {} elements left", self.length);
                Some(removed)
            }
            _ => None,
        };

        self.paint_root_black();
        self.debug_check_invariants();
        removed
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
    fn test_remove_from_empty() {
        let mut tree: RedBlackTree<i32> = RedBlackTree::new();
        assert!(!tree.remove(&1));
        assert!(tree.is_empty());
    }

    #[rstest]
    fn test_remove_single_node_collapses_tree() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        assert!(tree.remove(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.root, None);
        assert_eq!(tree.validate(), Ok(0));
    }

    #[rstest]
    fn test_remove_absent_keeps_elements() {
        let mut tree: RedBlackTree<i32> = (0..50).map(|value| value * 2).collect();
        assert!(!tree.remove(&51));
        assert_eq!(tree.len(), 50);
        assert_eq!(values(&tree), (0..50).map(|value| value * 2).collect::<Vec<_>>());
        assert!(tree.validate().is_ok());
    }

    #[rstest]
    fn test_remove_root_with_two_children() {
        let mut tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
        assert!(tree.remove(&2));
        assert_eq!(values(&tree), vec![1, 3]);
        assert!(tree.validate().is_ok());
    }

    #[rstest]
    fn test_find_after_mixed_operations() {
        let mut tree = RedBlackTree::new();
        for value in [10, 20, 5, 15, 3] {
            tree.insert(value);
        }
        assert!(tree.remove(&20));
        assert_eq!(tree.find(&20), None);
        assert_eq!(tree.find(&15), Some(&15));
        assert_eq!(tree.len(), 4);
    }

    #[rstest]
    fn test_take_returns_stored_element() {
        let mut tree = RedBlackTree::with_comparator(|left: &(i32, i32), right: &(i32, i32)| {
            left.0.cmp(&right.0)
        });
        for key in 0..20 {
            tree.insert((key, key * 10));
        }
        assert_eq!(tree.take(&(7, 0)), Some((7, 70)));
        assert_eq!(tree.take(&(7, 0)), None);
        assert_eq!(tree.len(), 19);
    }

    #[rstest]
    fn test_take_interior_node_keeps_neighbours() {
        let mut tree: RedBlackTree<String> = ["b", "d", "a", "c", "e"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tree.take(&"b".to_string()), Some("b".to_string()));
        let remaining: Vec<&str> = tree.iter().map(String::as_str).collect();
        assert_eq!(remaining, vec!["a", "c", "d", "e"]);
    }

    #[rstest]
    #[case::ascending((0..300).collect())]
    #[case::descending((0..300).rev().collect())]
    #[case::evens_then_odds(
        (0..300)
            .filter(|value| value % 2 == 0)
            .chain((0..300).filter(|value| value % 2 == 1))
            .collect()
    )]
    fn test_remove_keeps_invariants(#[case] order: Vec<i32>) {
        let mut tree: RedBlackTree<i32> = (0..300).collect();
        let mut expected_len = 300;
        for value in order {
            assert!(tree.remove(&value));
            expected_len -= 1;
            assert_eq!(tree.len(), expected_len);
            assert!(tree.validate().is_ok(), "after removing {value}");
            assert_eq!(tree.find(&value), None);
        }
        assert!(tree.is_empty());
    }

    #[rstest]
    fn test_remove_then_reinsert_restores_sequence() {
        let mut tree: RedBlackTree<i32> = (0..64).collect();
        let before = values(&tree);
        assert!(tree.remove(&31));
        assert!(tree.insert(31));
        assert_eq!(values(&tree), before);
    }

    #[rstest]
    fn test_remove_absent_from_small_trees() {
        for size in 0_usize..16 {
            let mut tree: RedBlackTree<usize> = (0..size).map(|value| value * 2 + 1).collect();
            for probe in (0..=size).map(|value| value * 2) {
                assert!(!tree.remove(&probe));
                assert!(tree.validate().is_ok(), "size {size}, probe {probe}");
            }
            assert_eq!(tree.len(), size);
        }
    }
}
