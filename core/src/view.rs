//! Read-only windows onto an adapter's sorted contents.
//!
//! A [`SortedView`] borrows the adapter, so the borrow checker rules out
//! mutating the adapter while a view is alive. The view itself only hands out
//! shared references and implements [`Index`] but not `IndexMut`, so writes
//! through it do not compile:
//!
//! ```compile_fail
//! use sorta_core::Sorted;
//!
//! let sorted: Sorted<Vec<i32>> = Sorted::from_unsorted(vec![3, 1, 2]);
//! let mut view = sorted.view();
//! view[0] = 10;
//! ```
//!
//! ```compile_fail
//! use sorta_core::Sorted;
//!
//! let sorted: Sorted<Vec<i32>> = Sorted::from_unsorted(vec![3, 1, 2]);
//! let view = sorted.view();
//! *view.front().unwrap() = 10;
//! ```
//!
//! ```compile_fail
//! use sorta_core::Sorted;
//!
//! let mut sorted: Sorted<Vec<i32>> = Sorted::from_unsorted(vec![3, 1, 2]);
//! let view = sorted.view();
//! sorted.insert(4).unwrap();
//! assert_eq!(view.len(), 3);
//! ```

use core::{fmt, ops::Index, ops::Range, slice};

use crate::{
    algo,
    compare::Compare,
    error::{Error, Result},
};

/// A sorted, contiguous, read-only slice of an adapter's live prefix.
pub struct SortedView<'a, T, C> {
    items: &'a [T],
    // Position of `items[0]` inside the adapter.
    offset: usize,
    less: &'a C,
}

impl<T, C> Clone for SortedView<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for SortedView<'_, T, C> {}

impl<'a, T, C> SortedView<'a, T, C> {
    pub(crate) fn new(items: &'a [T], offset: usize, less: &'a C) -> Self {
        Self {
            items,
            offset,
            less,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Smallest element in the view.
    pub fn front(&self) -> Result<&'a T> {
        self.items.first().ok_or(Error::EmptyContainer)
    }

    /// Largest element in the view.
    pub fn back(&self) -> Result<&'a T> {
        self.items.last().ok_or(Error::EmptyContainer)
    }

    /// The `index`-th smallest element in the view.
    pub fn get(&self, index: usize) -> Result<&'a T> {
        self.items.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Positions this view covers in the adapter it came from.
    ///
    /// Pass it to [`Sorted::remove`](crate::Sorted::remove) to drop exactly
    /// these elements.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.items.len()
    }

    /// The first `range.end` elements of this view.
    ///
    /// `range.start` is ignored: a slice always begins at the view's first
    /// element, so `view.slice(0..k)` reads as "the k smallest".
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        let end = range.end;
        if end > self.len() {
            return Err(Error::OutOfRange {
                index: end,
                len: self.len(),
            });
        }
        Ok(Self::new(&self.items[..end], self.offset, self.less))
    }
}

impl<'a, T, C: Compare<T>> SortedView<'a, T, C> {
    /// Elements ordered before `value`.
    pub fn lower_bound(&self, value: &T) -> Self {
        let end = algo::lower_bound(self.items, value, self.less);
        Self::new(&self.items[..end], self.offset, self.less)
    }

    /// Elements ordered after `value`.
    pub fn upper_bound(&self, value: &T) -> Self {
        let start = algo::upper_bound(self.items, value, self.less);
        Self::new(&self.items[start..], self.offset + start, self.less)
    }

    /// Elements equivalent to `value`.
    pub fn equal_range(&self, value: &T) -> Self {
        let range = algo::equal_range(self.items, value, self.less);
        let offset = self.offset + range.start;
        Self::new(&self.items[range], offset, self.less)
    }

    pub fn contains(&self, value: &T) -> bool {
        !self.equal_range(value).is_empty()
    }
}

impl<T, C> Index<usize> for SortedView<'_, T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, C> IntoIterator for SortedView<'a, T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, C> IntoIterator for &SortedView<'a, T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq, C> PartialEq<[T]> for SortedView<'_, T, C> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedView<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items).finish()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
