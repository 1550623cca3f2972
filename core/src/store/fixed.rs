use sorta_fixed_buf::FixedBuf;

use super::Store;
use crate::error::{Error, Result};

// No native range removal: the trait's swap-and-truncate default applies.
impl<T> Store for FixedBuf<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        FixedBuf::len(self)
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        FixedBuf::capacity(self)
    }

    fn as_slice(&self) -> &[T] {
        FixedBuf::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        FixedBuf::as_mut_slice(self)
    }

    fn truncate(&mut self, len: usize) {
        FixedBuf::truncate(self, len);
    }

    fn push(&mut self, value: T) -> Result<()> {
        let capacity = FixedBuf::capacity(self);
        let requested = FixedBuf::len(self) + 1;
        self.try_push(value).map_err(|_| Error::CapacityExceeded {
            capacity,
            requested,
        })
    }

    fn set_len(&mut self, len: usize) -> Result<()> {
        FixedBuf::set_len(self, len).map_err(|err| Error::CapacityExceeded {
            capacity: err.capacity,
            requested: err.requested,
        })
    }

    fn remove_last(&mut self) {
        self.pop();
    }
}
