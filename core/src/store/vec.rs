use alloc::vec::Vec;
use core::ops::Range;

use super::Store;
use crate::error::Result;

impl<T> Store for Vec<T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn push(&mut self, value: T) -> Result<()> {
        Vec::push(self, value);
        Ok(())
    }

    fn remove_last(&mut self) {
        self.pop();
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn append<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let before = Vec::len(self);
        self.extend(values);
        Ok(Vec::len(self) - before)
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }
}
