//! Error type shared by every adapter and view operation.
//!
//! All variants are plain data so callers can match on them and compare them
//! in tests. Nothing here is retried internally: each error surfaces from the
//! call that detected it, and the adapter is left sorted.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `front`, `back`, `remove_back` or `remove_any` on an empty adapter or view.
    #[error("container is empty")]
    EmptyContainer,

    /// An insert needed more room than a bounded store can offer.
    #[error("capacity exceeded: {requested} elements requested, store holds at most {capacity}")]
    CapacityExceeded { capacity: usize, requested: usize },

    /// An index or slice end past the live prefix.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// `store[index]` is ordered before `store[index - 1]`.
    ///
    /// Only produced by [`Sorted::check_invariant`](crate::Sorted::check_invariant);
    /// seeing it means the store was mutated behind the adapter's back.
    #[error("sort order violated at index {index}")]
    InvariantViolation { index: usize },
}
