//! Backing storage the adapter sorts in place.
//!
//! A [`Store`] is any exclusively-owned, contiguous sequence with a length and
//! a capacity. Two kinds ship with the crate:
//!
//! - growable: [`Vec`] and `SmallVec`
//! - bounded: [`FixedBuf`](sorta_fixed_buf::FixedBuf), a view over a
//!   caller-supplied block that fails to push once the block is full
//!
//! The adapter only ever talks to the trait, so both kinds behave identically
//! apart from where `push` runs out of room.

mod fixed;
mod small_vec;
mod vec;

use core::ops::Range;

use crate::{
    algo,
    error::{Error, Result},
};

pub trait Store {
    type Elem;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[Self::Elem];

    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    /// Shortens the store to `len`. No-op if `len >= self.len()`.
    fn truncate(&mut self, len: usize);

    /// Moves the length to `len`.
    ///
    /// Shrinking always succeeds. Growable stores only grow by appending
    /// values, so the default fails with
    /// [`Error::CapacityExceeded`] for any `len` past the current length.
    /// Bounded stores that keep elements past their length override this to
    /// re-expose them, up to their capacity.
    fn set_len(&mut self, len: usize) -> Result<()> {
        if len > self.len() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
                requested: len,
            });
        }
        self.truncate(len);
        Ok(())
    }

    /// Appends one element, or fails with
    /// [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) on a full
    /// bounded store.
    fn push(&mut self, value: Self::Elem) -> Result<()>;

    /// Drops the last element. No-op on an empty store.
    fn remove_last(&mut self);

    /// Hint that `additional` pushes are coming.
    fn reserve(&mut self, _additional: usize) {}

    /// Appends every value, returning how many were appended.
    ///
    /// On failure the store keeps whatever was appended before the error; the
    /// caller decides whether to roll back.
    fn append<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = Self::Elem>,
    {
        let values = values.into_iter();
        self.reserve(values.size_hint().0);
        let mut count = 0;
        for value in values {
            self.push(value)?;
            count += 1;
        }
        Ok(count)
    }

    /// Removes `range`, closing the gap.
    ///
    /// The default swaps the range with the tail and truncates, so survivors
    /// may be reordered. Stores with a native range removal override this.
    fn remove_range(&mut self, range: Range<usize>) {
        let kept = algo::swap_out_range(self.as_mut_slice(), range);
        self.truncate(kept);
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
