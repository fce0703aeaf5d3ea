//! Value-sorted traversals
//!
//! Both strategies sort an index vector by the values it points at, never
//! the values themselves. The sort is stable, so equal-valued elements keep
//! their insertion order and traversals stay reproducible.

use super::TraversalOrder;

/// Positions sorted by ascending element value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ascending;

impl<T: Ord> TraversalOrder<T> for Ascending {
    fn permutation(items: &[T]) -> Vec<usize> {
        sorted_positions(items)
    }
}

/// Positions sorted by descending element value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descending;

impl<T: Ord> TraversalOrder<T> for Descending {
    fn permutation(items: &[T]) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..items.len()).collect();
        positions.sort_by(|&a, &b| items[b].cmp(&items[a]));
        positions
    }
}

/// Index vector `[0, 1, 2, ...]` stably sorted by ascending value
///
/// Shared with the side-cross strategy, which weaves this list from both
/// ends inward.
pub(crate) fn sorted_positions<T: Ord>(items: &[T]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..items.len()).collect();
    positions.sort_by(|&a, &b| items[a].cmp(&items[b]));
    positions
}
