//! Integration tests for Cursor.
//!
//! Covers stepping in both directions, restarting from either end, and
//! cursors obtained from search and bound queries.

use redblack::tree::RedBlackTree;
use rstest::{fixture, rstest};

#[fixture]
fn evens() -> RedBlackTree<i32> {
    (0..20).map(|value| value * 2).collect()
}

// =============================================================================
// Walk Tests
// =============================================================================

#[rstest]
fn test_fresh_cursor_is_unpositioned(evens: RedBlackTree<i32>) {
    let cursor = evens.cursor();
    assert!(!cursor.is_positioned());
    assert_eq!(cursor.current(), None);
}

#[rstest]
fn test_next_walks_ascending(evens: RedBlackTree<i32>) {
    let mut cursor = evens.cursor();
    let mut seen = Vec::new();
    while let Some(&value) = cursor.next() {
        seen.push(value);
    }
    assert_eq!(seen, (0..20).map(|value| value * 2).collect::<Vec<_>>());
    assert!(!cursor.is_positioned());
}

#[rstest]
fn test_prev_walks_descending(evens: RedBlackTree<i32>) {
    let mut cursor = evens.cursor();
    let mut seen = Vec::new();
    while let Some(&value) = cursor.prev() {
        seen.push(value);
    }
    assert_eq!(seen, (0..20).rev().map(|value| value * 2).collect::<Vec<_>>());
}

#[rstest]
fn test_prev_past_start_then_wraps_to_max(evens: RedBlackTree<i32>) {
    let mut cursor = evens.cursor();
    assert_eq!(cursor.next(), Some(&0));
    assert_eq!(cursor.prev(), None);
    assert_eq!(cursor.prev(), Some(&38));
}

#[rstest]
fn test_zig_zag_steps(evens: RedBlackTree<i32>) {
    let mut cursor = evens.cursor();
    for _ in 0..10 {
        cursor.next();
    }
    assert_eq!(cursor.current(), Some(&18));
    for expected in [20, 18, 20, 22, 20, 18, 16] {
        let moved = if expected > *cursor.current().unwrap_or(&0) {
            cursor.next()
        } else {
            cursor.prev()
        };
        assert_eq!(moved, Some(&expected));
    }
}

// =============================================================================
// Query Cursor Tests
// =============================================================================

#[rstest]
fn test_find_cursor_continues_in_order(evens: RedBlackTree<i32>) {
    let Some(mut cursor) = evens.find_cursor(&14) else {
        panic!("14 is stored");
    };
    assert_eq!(cursor.next(), Some(&16));
    assert_eq!(cursor.next(), Some(&18));
}

#[rstest]
#[case(13, Some(14), Some(12))]
#[case(14, Some(14), Some(12))]
#[case(-5, Some(0), None)]
fn test_lower_bound_neighbors(
    evens: RedBlackTree<i32>,
    #[case] probe: i32,
    #[case] expected: Option<i32>,
    #[case] predecessor: Option<i32>,
) {
    let mut cursor = evens.lower_bound(&probe);
    assert_eq!(cursor.current().copied(), expected);
    assert_eq!(cursor.prev().copied(), predecessor);
}

#[rstest]
fn test_upper_bound_walks_to_end(evens: RedBlackTree<i32>) {
    let mut cursor = evens.upper_bound(&34);
    assert_eq!(cursor.current(), Some(&36));
    assert_eq!(cursor.next(), Some(&38));
    assert_eq!(cursor.next(), None);
}

#[rstest]
fn test_end_cursor_restarts_from_min(evens: RedBlackTree<i32>) {
    let mut cursor = evens.upper_bound(&38);
    assert!(!cursor.is_positioned());
    assert_eq!(cursor.next(), Some(&0));
}

#[rstest]
fn test_reset(evens: RedBlackTree<i32>) {
    let mut cursor = evens.lower_bound(&20);
    cursor.reset();
    assert_eq!(cursor.prev(), Some(&38));
}

#[rstest]
fn test_cursor_after_removals() {
    let mut tree: RedBlackTree<i32> = (0..50).collect();
    for value in (0..50).filter(|value| value % 3 != 0) {
        tree.remove(&value);
    }
    let mut cursor = tree.cursor();
    let mut seen = Vec::new();
    while let Some(&value) = cursor.next() {
        seen.push(value);
    }
    assert_eq!(seen, (0..50).step_by(3).collect::<Vec<_>>());
}

#[rstest]
fn test_single_element_tree() {
    let tree: RedBlackTree<i32> = std::iter::once(7).collect();
    let mut cursor = tree.cursor();
    assert_eq!(cursor.next(), Some(&7));
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.prev(), Some(&7));
    assert_eq!(cursor.prev(), None);
}
