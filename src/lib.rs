//! An ordered, single threaded collection of car records.
//!
//! The collection is backed by a doubly linked list and keeps a cached flag
//! recording whether the chain is sorted by ascending model year. It supports
//! unsorted appends, order-preserving sorted inserts, positional retrieval
//! and removal, an explicit bubble sort, deep cloning, display, and a fixed
//! little-endian binary file format.
//!
//! The car record itself is an external collaborator: anything implementing
//! [`CarInterface`] (a year key, `Clone`, `Display`, and a fixed binary
//! encoding) can be stored.

pub mod car;
pub mod collection;
pub mod error;
pub mod list;

pub use car::CarInterface;
pub use collection::Collection;
pub use error::{Error, Result};
