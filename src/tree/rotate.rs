//! Rotations shared by insertion and deletion.
//!
//! Both rotations recolor as part of their contract: the node that moves down
//! becomes red and the node that moves up becomes black. Callers that need a
//! different coloring repaint afterwards.

use super::node::{Arena, Color, Direction, NodeId};

impl<T> Arena<T> {
    /// Rotates the subtree rooted at `root` in `direction` and returns the new
    /// subtree root.
    ///
    /// The child on the opposite side of `direction` is lifted into `root`'s
    /// place. If that child is missing, nothing changes and `root` is returned.
    pub(crate) fn single_rotate(&mut self, root: NodeId, direction: Direction) -> NodeId {
        let Some(save) = self[root].child(direction.opposite()) else {
            return root;
        };

        let inner = self[save].child(direction);
        self[root].set_child(direction.opposite(), inner);
        self[save].set_child(direction, Some(root));

        self[root].color = Color::Red;
        self[save].color = Color::Black;

        save
    }

    /// Fixes a zig-zag below `root`: first rotates `root`'s child on the
    /// opposite side of `direction` away from it, then rotates `root` itself.
    pub(crate) fn double_rotate(&mut self, root: NodeId, direction: Direction) -> NodeId {
        let far = direction.opposite();
        if let Some(child) = self[root].child(far) {
            let lifted = self.single_rotate(child, far);
            self[root].set_child(far, Some(lifted));
        }
        self.single_rotate(root, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn in_order(arena: &Arena<i32>, link: Option<NodeId>, output: &mut Vec<i32>) {
        if let Some(id) = link {
            in_order(arena, arena[id].left, output);
            output.push(arena[id].value);
            in_order(arena, arena[id].right, output);
        }
    }

    #[rstest]
    fn test_single_rotate_right_lifts_left_child() {
        //     2          1
        //    /     ->     \
        //   1              2
        let mut arena = Arena::new();
        let two = arena.allocate(2);
        let one = arena.allocate(1);
        arena[two].left = Some(one);

        let root = arena.single_rotate(two, Direction::Right);

        assert_eq!(root, one);
        assert_eq!(arena[one].right, Some(two));
        assert_eq!(arena[two].left, None);
        assert_eq!(arena[one].color, Color::Black);
        assert_eq!(arena[two].color, Color::Red);
    }

    #[rstest]
    fn test_single_rotate_moves_inner_grandchild() {
        //     4              2
        //    / \            / \
        //   2   5   ->     1   4
        //  / \                / \
        // 1   3              3   5
        let mut arena = Arena::new();
        let ids: Vec<NodeId> = (1..=5).map(|value| arena.allocate(value)).collect();
        arena[ids[3]].left = Some(ids[1]);
        arena[ids[3]].right = Some(ids[4]);
        arena[ids[1]].left = Some(ids[0]);
        arena[ids[1]].right = Some(ids[2]);

        let root = arena.single_rotate(ids[3], Direction::Right);

        assert_eq!(root, ids[1]);
        assert_eq!(arena[ids[3]].left, Some(ids[2]));
        let mut values = Vec::new();
        in_order(&arena, Some(root), &mut values);
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_single_rotate_without_child_is_noop() {
        let mut arena = Arena::new();
        let only = arena.allocate(1);
        arena[only].color = Color::Black;

        assert_eq!(arena.single_rotate(only, Direction::Left), only);
        assert_eq!(arena[only].color, Color::Black);
    }

    #[rstest]
    fn test_double_rotate_straightens_zig_zag() {
        //   3            2
        //  /            / \
        // 1     ->     1   3
        //  \
        //   2
        let mut arena = Arena::new();
        let three = arena.allocate(3);
        let one = arena.allocate(1);
        let two = arena.allocate(2);
        arena[three].left = Some(one);
        arena[one].right = Some(two);

        let root = arena.double_rotate(three, Direction::Right);

        assert_eq!(root, two);
        assert_eq!(arena[two].left, Some(one));
        assert_eq!(arena[two].right, Some(three));
        assert_eq!(arena[two].color, Color::Black);
        assert_eq!(arena[three].color, Color::Red);
        let mut values = Vec::new();
        in_order(&arena, Some(root), &mut values);
        assert_eq!(values, vec![1, 2, 3]);
    }
}
