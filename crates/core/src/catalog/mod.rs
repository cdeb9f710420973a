//! The catalog engine: an unbalanced binary search tree of media entries
//! keyed by a unique integer id.
//!
//! Re-inserting an existing id merges vote statistics instead of creating
//! a node (see [`Entry::merge_votes`]). Persistence writes the pre-order
//! sequence as JSON so a reload reconstructs the same tree shape.

mod entry;
mod iter;
mod node;
mod store;
mod tree;

pub use entry::Entry;
pub use iter::{InOrder, PreOrder};
pub use store::{LoadOutcome, StoreError};
pub use tree::Catalog;
