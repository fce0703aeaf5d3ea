//! Permutation-construction strategies
//!
//! Each strategy is a pure function from a collection's current contents to
//! a visitation permutation: an index vector of length n containing every
//! position `0..n` exactly once. Strategies never touch the storage itself;
//! they only decide the order in which a [`Cursor`](crate::Cursor) visits it.
//!
//! The six strategies form a closed set, modeled as zero-sized marker types
//! implementing [`TraversalOrder`]. Bounds are per-strategy: [`Ascending`],
//! [`Descending`], and [`SideCross`] sort by value and need `T: Ord`;
//! [`Natural`], [`Reverse`], and [`MiddleOut`] use position arithmetic only.

mod linear;
mod sorted;
mod weave;

pub use linear::{Natural, Reverse};
pub use sorted::{Ascending, Descending};
pub use weave::{MiddleOut, SideCross};

/// Rule for computing a visitation permutation over a slice of elements
///
/// Implementations must return each position `0..items.len()` exactly once.
/// An empty slice yields an empty permutation.
pub trait TraversalOrder<T> {
    /// Compute the permutation for the given contents
    fn permutation(items: &[T]) -> Vec<usize>;
}

#[cfg(test)]
pub(crate) fn is_permutation(indices: &[usize], n: usize) -> bool {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.into_iter().eq(0..n)
}
