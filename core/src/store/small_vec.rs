use core::ops::Range;

use smallvec::{Array, SmallVec};

use super::Store;
use crate::error::Result;

impl<A: Array> Store for SmallVec<A> {
    type Elem = A::Item;

    #[inline(always)]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        SmallVec::capacity(self)
    }

    fn as_slice(&self) -> &[A::Item] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        self
    }

    fn truncate(&mut self, len: usize) {
        SmallVec::truncate(self, len);
    }

    fn push(&mut self, value: A::Item) -> Result<()> {
        SmallVec::push(self, value);
        Ok(())
    }

    fn remove_last(&mut self) {
        self.pop();
    }

    fn reserve(&mut self, additional: usize) {
        SmallVec::reserve(self, additional);
    }

    fn append<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = A::Item>,
    {
        let before = SmallVec::len(self);
        self.extend(values);
        Ok(SmallVec::len(self) - before)
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }
}
