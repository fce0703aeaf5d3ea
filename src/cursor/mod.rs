//! Forward-only traversal cursors
//!
//! A cursor snapshots one strategy's permutation at construction time and
//! then walks it with a single offset. Dereference re-reads the *live*
//! collection through the frozen permutation; nothing is copied out of
//! storage. Because the cursor holds a shared borrow of its collection,
//! structural mutation between construction and consumption is rejected at
//! compile time rather than left undefined.
//!
//! Equality is offset-only by design: it exists to detect end-of-traversal
//! in a `begin != end` loop, not to compare permutation contents.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::collection::Collection;
use crate::order::TraversalOrder;

/// Single-pass walk over one permutation snapshot of a [`Collection`]
///
/// `O` is the strategy marker; cursors of different strategies are distinct
/// types and cannot be compared against each other.
pub struct Cursor<'a, T, O> {
    collection: &'a Collection<T>,
    permutation: Vec<usize>,
    offset: usize,
    _order: PhantomData<O>,
}

impl<'a, T, O: TraversalOrder<T>> Cursor<'a, T, O> {
    /// Cursor positioned at the first element of the traversal
    pub fn begin(collection: &'a Collection<T>) -> Self {
        let permutation = O::permutation(collection.as_slice());
        Self {
            collection,
            permutation,
            offset: 0,
            _order: PhantomData,
        }
    }

    /// Cursor in the exhausted state, for end-of-loop comparison
    ///
    /// Computed independently from the collection's size at the time of this
    /// call, matching a fresh begin-cursor walked to completion.
    pub fn end(collection: &'a Collection<T>) -> Self {
        let permutation = O::permutation(collection.as_slice());
        let offset = permutation.len();
        Self {
            collection,
            permutation,
            offset,
            _order: PhantomData,
        }
    }
}

impl<'a, T, O> Cursor<'a, T, O> {
    /// Element at the current traversal step, `None` once exhausted
    pub fn get(&self) -> Option<&'a T> {
        let position = *self.permutation.get(self.offset)?;
        self.collection.get(position)
    }

    /// Pre-advance: step forward, then return the advanced cursor
    ///
    /// No bounds check; advancing past the end is permitted and simply
    /// leaves the cursor un-dereferenceable.
    pub fn advance(&mut self) -> &mut Self {
        self.offset += 1;
        self
    }

    /// Post-advance: step forward, returning the state prior to the step
    pub fn advance_post(&mut self) -> Self {
        let prior = self.clone();
        self.offset += 1;
        prior
    }

    /// Current offset into the frozen permutation
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the walk has consumed its whole permutation
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.permutation.len()
    }
}

impl<T, O> Clone for Cursor<'_, T, O> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection,
            permutation: self.permutation.clone(),
            offset: self.offset,
            _order: PhantomData,
        }
    }
}

/// Offset-only equality, used to detect end-of-traversal
impl<T, O> PartialEq for Cursor<'_, T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl<T, O> Eq for Cursor<'_, T, O> {}

impl<T, O> fmt::Debug for Cursor<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("permutation", &self.permutation)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl<'a, T, O> Iterator for Cursor<'a, T, O> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let element = self.get()?;
        self.offset += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.permutation.len().saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl<T, O> ExactSizeIterator for Cursor<'_, T, O> {}

impl<T, O> FusedIterator for Cursor<'_, T, O> {}
