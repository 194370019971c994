//! Node storage for [`RedBlackTree`](super::RedBlackTree).
//!
//! Nodes never point at their parent. Children are linked through
//! [`NodeId`] indices into an [`Arena`] owned exclusively by the tree, so the
//! insertion and deletion passes can hold several positions in the structure
//! at once without aliasing mutable borrows. Released slots are recycled
//! through an intrusive free list.

use std::ops::{Index, IndexMut};

// =============================================================================
// Color and Direction
// =============================================================================

/// The color of a Red-Black Tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node a link refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// `Right` when `greater` holds, `Left` otherwise.
    #[inline]
    pub(crate) const fn toward(greater: bool) -> Self {
        if greater { Self::Right } else { Self::Left }
    }
}

// =============================================================================
// Node
// =============================================================================

/// Index of a live node inside an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) color: Color,
}

impl<T> Node<T> {
    /// Creates a new red node with no children.
    const fn new_red(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            color: Color::Red,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, direction: Direction, link: Option<NodeId>) {
        match direction {
            Direction::Left => self.left = link,
            Direction::Right => self.right = link,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

// =============================================================================
// Arena
// =============================================================================

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// Slot storage owning every node of one tree.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
        }
    }

    /// Stores `value` in a new red node, reusing a released slot if one exists.
    pub(crate) fn allocate(&mut self, value: T) -> NodeId {
        let node = Slot::Occupied(Node::new_red(value));
        match self.free_head {
            Some(id) => {
                let previous = std::mem::replace(&mut self.slots[id.0], node);
                if let Slot::Vacant { next_free } = previous {
                    self.free_head = next_free;
                }
                id
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot of `id` and hands its value back.
    ///
    /// The node must already be unlinked from the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(id);
                node.value
            }
            Slot::Vacant { .. } => unreachable!("released node {id:?} twice"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }

    /// Treats a missing node as black.
    #[inline]
    pub(crate) fn is_red(&self, link: Option<NodeId>) -> bool {
        link.is_some_and(|id| self[id].is_red())
    }

    /// Recolors `link` if it refers to a node.
    #[inline]
    pub(crate) fn paint(&mut self, link: Option<NodeId>, color: Color) {
        if let Some(id) = link {
            self[id].color = color;
        }
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to released node {id:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to released node {id:?}"),
        }
    }
}
