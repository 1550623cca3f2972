#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Sorted adapters over existing storage.
//!
//! [`Sorted`] wraps a [`Store`] (a `Vec`, a `SmallVec`, or a
//! [`FixedBuf`](sorta_fixed_buf::FixedBuf) over a caller-supplied block),
//! takes ownership of it, and keeps its contents ordered by a [`Compare`]
//! without copying them anywhere else. Queries go through [`SortedView`],
//! which borrows the adapter and only allows reads.

extern crate alloc;

pub mod algo;
pub mod compare;
pub mod error;
pub mod sorted;
pub mod store;
pub mod view;

pub use compare::{Ascending, ByKey, Compare, Descending, Reverse};
pub use error::{Error, Result};
pub use sorted::Sorted;
pub use store::Store;
pub use view::SortedView;
