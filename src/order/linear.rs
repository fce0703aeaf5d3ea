//! Insertion-order traversals
//!
//! The two strategies that read storage order directly: identity and
//! reversed identity. Neither looks at element values.

use super::TraversalOrder;

/// Original insertion order: positions `0, 1, .., n-1` unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T> TraversalOrder<T> for Natural {
    fn permutation(items: &[T]) -> Vec<usize> {
        (0..items.len()).collect()
    }
}

/// Insertion order reversed: last stored position first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reverse;

impl<T> TraversalOrder<T> for Reverse {
    fn permutation(items: &[T]) -> Vec<usize> {
        (0..items.len()).rev().collect()
    }
}
