//! # Insertion-Ordered Collection with Six Traversal Orders
//!
//! This library implements a generic, insertion-ordered collection that
//! supports removal-by-value and six lazy traversal strategies, each
//! realized as a cursor over a frozen index permutation:
//!
//! 1. **Order**: original insertion order
//! 2. **ReverseOrder**: insertion order reversed
//! 3. **AscendingOrder** / **DescendingOrder**: sorted by element value
//! 4. **SideCrossOrder**: smallest, largest, next-smallest, next-largest, ...
//! 5. **MiddleOutOrder**: middle element first, then alternating left/right
//!
//! A cursor computes its permutation once, at construction, from the
//! collection's contents at that instant; advancing only moves an offset,
//! and every dereference re-reads the live collection through the frozen
//! permutation. Cursors borrow the collection immutably, so structural
//! mutation during a traversal is rejected at compile time.
//!
//! ## Usage Example
//!
//! ```
//! use sixfold::Collection;
//!
//! let mut c = Collection::new();
//! c.append(7);
//! c.append(15);
//! c.append(6);
//!
//! let ascending: Vec<_> = c.begin_ascending_order().copied().collect();
//! assert_eq!(ascending, vec![6, 7, 15]);
//!
//! c.remove(&15)?;
//! assert_eq!(c.to_string(), "[7, 6]");
//! # Ok::<(), sixfold::Error>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one layer of the design
pub mod collection; // Insertion-ordered storage
pub mod cursor;     // Forward-only permutation cursors
pub mod order;      // The six permutation-construction strategies

// Re-exports for convenience
pub use collection::Collection;
pub use cursor::Cursor;
pub use order::{
    Ascending, Descending, MiddleOut, Natural, Reverse, SideCross, TraversalOrder,
};

use thiserror::Error;

/// Errors that can occur when operating on a [`Collection`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `remove` matched no element
    #[error("element not found")]
    NotFound,
}
