//! Insertion-ordered storage
//!
//! [`Collection`] owns a mutable sequence of elements in insertion order,
//! duplicates permitted. Storage itself is never reordered; only removal
//! compacts it (survivors keep their relative order). Traversal order is
//! imposed non-destructively by the strategies in [`crate::order`], walked
//! through the cursors in [`crate::cursor`].

use std::fmt;

use tracing::debug;

use crate::cursor::Cursor;
use crate::order::{Ascending, Descending, MiddleOut, Natural, Reverse, SideCross, TraversalOrder};
use crate::Error;

/// Generic, insertion-ordered value collection
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection<T> {
    data: Vec<T>,
}

impl<T> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Append an element at the logical end
    ///
    /// Amortized O(1), never fails.
    pub fn append(&mut self, element: T) {
        self.data.push(element);
    }

    /// Remove every element equal to `value`, preserving survivor order
    ///
    /// Returns how many elements were removed. All-or-nothing: either one or
    /// more elements matched and all of them are gone, or nothing matched
    /// and the call fails with [`Error::NotFound`] leaving the collection
    /// untouched.
    pub fn remove(&mut self, value: &T) -> Result<usize, Error>
    where
        T: PartialEq,
    {
        let before = self.data.len();
        self.data.retain(|element| element != value);
        let removed = before - self.data.len();

        if removed == 0 {
            debug!("remove matched no element");
            return Err(Error::NotFound);
        }

        debug!(removed, remaining = self.data.len(), "removed matching elements");
        Ok(removed)
    }

    /// Current element count
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Alias for [`size`](Self::size), matching Rust container convention
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the collection holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `position` in storage order
    ///
    /// The indexed-read capability cursors dereference through; stable
    /// positions are only guaranteed between structural mutations.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.data.get(position)
    }

    /// Contents as a slice in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Begin-cursor for an arbitrary strategy
    ///
    /// The named `begin_*`/`end_*` pairs below cover the six built-in
    /// strategies; this is the generic entry point behind all of them.
    pub fn traverse<O: TraversalOrder<T>>(&self) -> Cursor<'_, T, O> {
        Cursor::begin(self)
    }

    /// Begin-cursor over original insertion order
    pub fn begin_order(&self) -> Cursor<'_, T, Natural> {
        Cursor::begin(self)
    }

    /// End-cursor over original insertion order
    pub fn end_order(&self) -> Cursor<'_, T, Natural> {
        Cursor::end(self)
    }

    /// Begin-cursor over reversed insertion order
    pub fn begin_reverse_order(&self) -> Cursor<'_, T, Reverse> {
        Cursor::begin(self)
    }

    /// End-cursor over reversed insertion order
    pub fn end_reverse_order(&self) -> Cursor<'_, T, Reverse> {
        Cursor::end(self)
    }

    /// Begin-cursor over middle-out order
    pub fn begin_middle_out_order(&self) -> Cursor<'_, T, MiddleOut> {
        Cursor::begin(self)
    }

    /// End-cursor over middle-out order
    pub fn end_middle_out_order(&self) -> Cursor<'_, T, MiddleOut> {
        Cursor::end(self)
    }
}

impl<T: Ord> Collection<T> {
    /// Begin-cursor over ascending value order
    pub fn begin_ascending_order(&self) -> Cursor<'_, T, Ascending> {
        Cursor::begin(self)
    }

    /// End-cursor over ascending value order
    pub fn end_ascending_order(&self) -> Cursor<'_, T, Ascending> {
        Cursor::end(self)
    }

    /// Begin-cursor over descending value order
    pub fn begin_descending_order(&self) -> Cursor<'_, T, Descending> {
        Cursor::begin(self)
    }

    /// End-cursor over descending value order
    pub fn end_descending_order(&self) -> Cursor<'_, T, Descending> {
        Cursor::end(self)
    }

    /// Begin-cursor over side-cross order
    pub fn begin_side_cross_order(&self) -> Cursor<'_, T, SideCross> {
        Cursor::begin(self)
    }

    /// End-cursor over side-cross order
    pub fn end_side_cross_order(&self) -> Cursor<'_, T, SideCross> {
        Cursor::end(self)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// Canonical rendering: `[e1, e2, ..., en]`, `[]` when empty
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}
