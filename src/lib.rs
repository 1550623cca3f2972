//! Sorta - sorted containers over storage you already have
//!
//! # Overview
//!
//! Sorta wraps an existing random-access sequence and keeps it sorted,
//! without copying it into a tree or a second buffer. Common use cases:
//!
//! - Top-k and threshold queries over a `Vec` that keeps receiving values
//! - Sorted bookkeeping inside a fixed block of memory that must not allocate
//! - Handing a sorted `Vec` back to code that knows nothing about the adapter
//!
//! # Quick Start
//!
//! ```
//! use sorta::{Descending, Sorted};
//!
//! let mut scores: Sorted<Vec<u32>, Descending> =
//!     Sorted::from_unsorted(vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7]);
//!
//! // The five best scores.
//! let top = scores.slice(0..5).unwrap();
//! assert_eq!(top.as_slice(), &[16, 14, 10, 9, 8]);
//!
//! // Insertion keeps the order.
//! scores.insert(12).unwrap();
//! assert_eq!(scores.get(2), Ok(&12));
//!
//! // Everything ranked above 9, then hand the storage back.
//! assert_eq!(scores.lower_bound(&9).as_slice(), &[16, 14, 12, 10]);
//! let raw: Vec<u32> = scores.release();
//! assert_eq!(raw[0], 16);
//! ```
//!
//! # Storage Kinds
//!
//! Any [`Store`] works. Growable stores (`Vec` and `SmallVec`) grow on
//! insert; a [`FixedBuf`] over a borrowed block fails with
//! [`Error::CapacityExceeded`] once the block is full:
//!
//! ```
//! use sorta::{Error, FixedBuf, Sorted};
//!
//! let mut block = [0u8; 3];
//! let mut sorted: Sorted<FixedBuf<'_, u8>> = Sorted::from_sorted(FixedBuf::empty(&mut block));
//! sorted.insert_iter([3, 1, 2]).unwrap();
//! assert!(matches!(sorted.insert(4), Err(Error::CapacityExceeded { .. })));
//! assert_eq!(sorted.as_slice(), &[1, 2, 3]);
//! ```
//!
//! # Views Are Read-Only
//!
//! Queries return a [`SortedView`] that borrows the adapter. It has no write
//! path at all, so this does not compile:
//!
//! ```compile_fail
//! use sorta::Sorted;
//!
//! let sorted: Sorted<Vec<i32>> = Sorted::from_unsorted(vec![2, 1]);
//! let mut top = sorted.slice(0..1).unwrap();
//! top[0] = 5;
//! ```
//!
//! and neither does writing through the adapter's own index:
//!
//! ```compile_fail
//! use sorta::Sorted;
//!
//! let mut sorted: Sorted<Vec<i32>> = Sorted::from_unsorted(vec![2, 1]);
//! sorted[0] = 5;
//! ```

pub use sorta_core::{
    Ascending, ByKey, Compare, Descending, Error, Result, Reverse, Sorted, SortedView, Store, algo,
};
pub use sorta_fixed_buf::{ExceedsBlock, FixedBuf};
