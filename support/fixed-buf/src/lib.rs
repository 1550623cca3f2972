//! FixedBuf: a length-tracking view over a caller-supplied block.
//!
//! A `FixedBuf<'a, T>` borrows an existing `&'a mut [T]` and treats a prefix
//! of it as the live contents. It never allocates:
//!
//! ```text
//! block:  [ live | live | live | stale | stale ]
//!           └── len = 3 ──────┘  └─ capacity = 5 ┘
//! ```
//!
//! - Pushing writes into the first stale slot, failing once the block is full
//! - Popping and truncating only move the length; the old values stay in the
//!   block until they are overwritten
//! - `set_len` can move the length forward again, re-exposing stale slots
//!
//! # Example
//!
//! ```
//! use sorta_fixed_buf::FixedBuf;
//!
//! let mut block = [0u32; 4];
//! let mut buf = FixedBuf::empty(&mut block);
//! buf.try_push(7).unwrap();
//! buf.try_push(3).unwrap();
//! assert_eq!(buf.as_slice(), &[7, 3]);
//! assert_eq!(buf.capacity(), 4);
//! ```

#![no_std]
#![deny(unsafe_code)]

use core::{
    error::Error,
    fmt,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity buffer backed by a borrowed block.
///
/// See [crate-level docs](crate) for the layout.
pub struct FixedBuf<'a, T> {
    block: &'a mut [T],
    len: usize,
}

static_assertions::assert_eq_size!(FixedBuf<'static, u64>, [usize; 3]);

/// Returned by [`FixedBuf::set_len`] when the requested length does not fit the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceedsBlock {
    pub requested: usize,
    pub capacity: usize,
}

impl fmt::Display for ExceedsBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length {} exceeds block of {} elements",
            self.requested, self.capacity
        )
    }
}

impl Error for ExceedsBlock {}

impl<'a, T> FixedBuf<'a, T> {
    /// Wraps `block` with every element live.
    pub fn new(block: &'a mut [T]) -> Self {
        let len = block.len();
        Self { block, len }
    }

    /// Wraps `block` with no live elements.
    pub fn empty(block: &'a mut [T]) -> Self {
        Self { block, len: 0 }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.block[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.block[..self.len]
    }

    /// Writes `value` into the next slot, handing it back if the block is full.
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.block[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Retires the last live element and returns a reference to it.
    ///
    /// The value stays in the block until a later push overwrites it.
    pub fn pop(&mut self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(&self.block[self.len])
    }

    /// Shortens the live prefix to `len`. No-op if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Moves the live length anywhere within the block.
    ///
    /// Growing re-exposes whatever the block holds past the old length.
    pub fn set_len(&mut self, len: usize) -> Result<(), ExceedsBlock> {
        if len > self.capacity() {
            return Err(ExceedsBlock {
                requested: len,
                capacity: self.capacity(),
            });
        }
        self.len = len;
        Ok(())
    }

    /// The whole block, live and stale slots alike.
    pub fn block(&self) -> &[T] {
        self.block
    }

    /// Gives the block back to the caller.
    pub fn into_block(self) -> &'a mut [T] {
        self.block
    }
}

impl<T> Default for FixedBuf<'_, T> {
    fn default() -> Self {
        Self::empty(Default::default())
    }
}

impl<T> Deref for FixedBuf<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for FixedBuf<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedBuf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut block = [0u8; 3];
        let mut buf = FixedBuf::empty(&mut block);
        assert_eq!(buf.try_push(1), Ok(()));
        assert_eq!(buf.try_push(2), Ok(()));
        assert_eq!(buf.try_push(3), Ok(()));
        assert!(buf.is_full());
        assert_eq!(buf.try_push(4), Err(4));
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_new_wraps_whole_block() {
        let mut block = [5, 6, 7];
        let buf = FixedBuf::new(&mut block);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn test_pop_leaves_value_in_block() {
        let mut block = [1, 2, 3];
        let mut buf = FixedBuf::new(&mut block);
        assert_eq!(buf.pop(), Some(&3));
        assert_eq!(buf.as_slice(), &[1, 2]);
        assert_eq!(buf.block(), &[1, 2, 3]);
    }

    #[test]
    fn test_pop_empty() {
        let mut block: [i32; 0] = [];
        let mut buf = FixedBuf::new(&mut block);
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_set_len_reexposes_stale_slots() {
        let mut block = [1, 2, 3, 4];
        let mut buf = FixedBuf::new(&mut block);
        buf.truncate(1);
        assert_eq!(buf.as_slice(), &[1]);
        buf.set_len(3).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
        assert_eq!(
            buf.set_len(5),
            Err(ExceedsBlock {
                requested: 5,
                capacity: 4
            })
        );
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_truncate_never_grows() {
        let mut block = [1, 2, 3];
        let mut buf = FixedBuf::empty(&mut block);
        buf.truncate(2);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_writes_reach_block() {
        let mut block = [0; 2];
        {
            let mut buf = FixedBuf::empty(&mut block);
            buf.try_push(9).unwrap();
            buf[0] += 1;
        }
        assert_eq!(block, [10, 0]);
    }

    #[test]
    fn test_default_has_no_room() {
        let mut buf = FixedBuf::<u32>::default();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.try_push(1), Err(1));
    }
}
