//! The sorted adapter.
//!
//! [`Sorted`] takes ownership of a [`Store`] and keeps its contents ordered
//! by a comparator for as long as it holds it. The store stays an ordinary
//! sequence: [`Sorted::release`] hands it back, sorted, for use elsewhere.
//!
//! Mutations append at the end of the store and then restore order over the
//! touched suffix only (see [`algo::complete_sort`]), so inserting a few
//! elements into a large adapter costs a binary search plus a shift rather
//! than a full re-sort.

use core::{fmt, mem, ops::Index, ops::Range, slice};

use crate::{
    algo,
    compare::{Ascending, Compare},
    error::{Error, Result},
    store::Store,
    view::SortedView,
};

/// A store whose live contents are always sorted by `C`.
///
/// For all `i < j < len`, `!less(store[j], store[i])`.
///
/// # Example
///
/// ```
/// use sorta_core::{Descending, Sorted};
///
/// let mut sorted: Sorted<Vec<i32>, Descending> =
///     Sorted::from_unsorted(vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7]);
/// assert_eq!(sorted.slice(0..5).unwrap().as_slice(), &[16, 14, 10, 9, 8]);
///
/// sorted.insert(11).unwrap();
/// assert_eq!(sorted.front(), Ok(&16));
/// assert_eq!(sorted.get(3), Ok(&10));
/// ```
pub struct Sorted<S, C = Ascending> {
    store: S,
    less: C,
}

impl<S: Store + Default, C: Default> Sorted<S, C> {
    /// An adapter around an empty store.
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<S: Store + Default, C> Sorted<S, C> {
    pub fn with_comparator(less: C) -> Self {
        Self {
            store: S::default(),
            less,
        }
    }
}

impl<S: Store + Default, C: Default> Default for Sorted<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> Sorted<S, C>
where
    S: Store,
    C: Compare<S::Elem> + Default,
{
    /// Takes `store` in arbitrary order and sorts it.
    pub fn from_unsorted(store: S) -> Self {
        Self::from_unsorted_by(store, C::default())
    }

    /// Takes `store`, which the caller guarantees is already sorted.
    pub fn from_sorted(store: S) -> Self {
        Self::from_sorted_by(store, C::default())
    }
}

impl<S, C> Sorted<S, C>
where
    S: Store,
    C: Compare<S::Elem>,
{
    pub fn from_unsorted_by(mut store: S, less: C) -> Self {
        algo::sort(store.as_mut_slice(), &less);
        let sorted = Self { store, less };
        sorted.debug_check();
        sorted
    }

    pub fn from_sorted_by(store: S, less: C) -> Self {
        let sorted = Self { store, less };
        sorted.debug_check();
        sorted
    }

    /// Replaces the current store with `store`, sorting its contents.
    ///
    /// Costs `O(k log k)` comparisons for `k` elements. The previous store is
    /// dropped.
    pub fn acquire(&mut self, store: S) {
        self.acquire_prefix(store, usize::MAX);
    }

    /// Like [`acquire`](Self::acquire), keeping only the first `initial_len`
    /// elements of `store`.
    pub fn acquire_prefix(&mut self, mut store: S, initial_len: usize) {
        store.truncate(initial_len);
        algo::sort(store.as_mut_slice(), &self.less);
        self.store = store;
        tracing::trace!(len = self.len(), "acquired store");
        self.debug_check();
    }

    /// Replaces the current store with `store` without sorting it.
    ///
    /// The caller guarantees `store` is already sorted by this adapter's
    /// comparator. Debug builds check this and panic if it is not; release
    /// builds trust it.
    pub fn assume(&mut self, store: S) {
        self.assume_prefix(store, usize::MAX);
    }

    /// Like [`assume`](Self::assume), keeping only the first `initial_len`
    /// elements of `store`.
    pub fn assume_prefix(&mut self, mut store: S, initial_len: usize) {
        store.truncate(initial_len);
        self.store = store;
        tracing::trace!(len = self.len(), "assumed sorted store");
        self.debug_check();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn comparator(&self) -> &C {
        &self.less
    }

    pub fn as_slice(&self) -> &[S::Elem] {
        self.store.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, S::Elem> {
        self.as_slice().iter()
    }

    /// Inserts one element.
    ///
    /// The value is appended and then shifted into place, after any
    /// elements it is equivalent to. Fails with
    /// [`Error::CapacityExceeded`] on a full bounded store, leaving the
    /// adapter unchanged.
    pub fn insert(&mut self, value: S::Elem) -> Result<()> {
        let sorted_len = self.len();
        self.store.push(value)?;
        if sorted_len > 0 {
            algo::complete_sort(self.store.as_mut_slice(), sorted_len, &self.less);
        }
        self.debug_check();
        Ok(())
    }

    /// Inserts every element of `values`, returning how many were inserted.
    ///
    /// The new elements are appended as a block, sorted, and merged with the
    /// existing contents in one pass. If the store runs out of room part way
    /// through, everything appended by this call is removed again and the
    /// error is returned.
    pub fn insert_iter<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = S::Elem>,
    {
        let sorted_len = self.len();
        let inserted = match self.store.append(values) {
            Ok(inserted) => inserted,
            Err(err) => {
                tracing::debug!(%err, len = sorted_len, "bulk insert rolled back");
                self.store.truncate(sorted_len);
                return Err(err);
            }
        };
        if inserted > 0 {
            algo::complete_sort(self.store.as_mut_slice(), sorted_len, &self.less);
        }
        self.debug_check();
        Ok(inserted)
    }

    /// Smallest element.
    pub fn front(&self) -> Result<&S::Elem> {
        self.as_slice().first().ok_or(Error::EmptyContainer)
    }

    /// Largest element.
    pub fn back(&self) -> Result<&S::Elem> {
        self.as_slice().last().ok_or(Error::EmptyContainer)
    }

    /// The `index`-th smallest element.
    pub fn get(&self, index: usize) -> Result<&S::Elem> {
        self.as_slice().get(index).ok_or(Error::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Removes the largest element.
    pub fn remove_back(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.store.remove_last();
        self.debug_check();
        Ok(())
    }

    /// Removes the largest element and returns it.
    ///
    /// Makes exactly one clone of the element, where `back` followed by
    /// `remove_back` would leave the clone to the caller.
    pub fn remove_any(&mut self) -> Result<S::Elem>
    where
        S::Elem: Clone,
    {
        let value = self.back()?.clone();
        self.store.remove_last();
        self.debug_check();
        Ok(value)
    }

    /// Removes the elements at `span`, as reported by [`SortedView::span`]
    /// for a view of this adapter.
    ///
    /// Stores without a native range removal swap the span out to the tail,
    /// which scrambles the survivors, so the remainder is always re-sorted.
    /// A span that does not lie within the live prefix fails with
    /// [`Error::OutOfRange`] and removes nothing.
    pub fn remove(&mut self, span: Range<usize>) -> Result<()> {
        let len = self.len();
        if span.end > len || span.start > span.end {
            return Err(Error::OutOfRange {
                index: span.end.max(span.start),
                len,
            });
        }
        if span.is_empty() {
            return Ok(());
        }
        tracing::trace!(start = span.start, end = span.end, len, "removing span");
        self.store.remove_range(span);
        algo::sort(self.store.as_mut_slice(), &self.less);
        self.debug_check();
        Ok(())
    }

    /// A view over every element.
    pub fn view(&self) -> SortedView<'_, S::Elem, C> {
        SortedView::new(self.as_slice(), 0, &self.less)
    }

    /// A view over the first `range.end` elements.
    ///
    /// `range.start` is ignored; slices always begin at the smallest element.
    pub fn slice(&self, range: Range<usize>) -> Result<SortedView<'_, S::Elem, C>> {
        self.view().slice(range)
    }

    /// Elements ordered before `value`.
    pub fn lower_bound(&self, value: &S::Elem) -> SortedView<'_, S::Elem, C> {
        self.view().lower_bound(value)
    }

    /// Elements ordered after `value`.
    pub fn upper_bound(&self, value: &S::Elem) -> SortedView<'_, S::Elem, C> {
        self.view().upper_bound(value)
    }

    /// Elements equivalent to `value`.
    pub fn equal_range(&self, value: &S::Elem) -> SortedView<'_, S::Elem, C> {
        self.view().equal_range(value)
    }

    pub fn contains(&self, value: &S::Elem) -> bool {
        self.view().contains(value)
    }

    /// Verifies the sort order of the live prefix.
    ///
    /// Only fails if the store was changed without going through the
    /// adapter.
    pub fn check_invariant(&self) -> Result<()> {
        match algo::first_unsorted(self.as_slice(), &self.less) {
            Some(index) => Err(Error::InvariantViolation { index }),
            None => Ok(()),
        }
    }

    #[cfg(any(debug_assertions, feature = "invariant-checks"))]
    fn debug_check(&self) {
        if let Err(err) = self.check_invariant() {
            panic!("{err}");
        }
    }

    #[cfg(not(any(debug_assertions, feature = "invariant-checks")))]
    #[inline(always)]
    fn debug_check(&self) {}
}

impl<S: Store + Default, C> Sorted<S, C> {
    /// Gives the store back, sorted, leaving this adapter empty.
    pub fn release(&mut self) -> S {
        tracing::trace!(len = self.store.len(), "releasing store");
        mem::take(&mut self.store)
    }

    /// Drops the store, leaving this adapter empty.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.store.len(), "clearing store");
        self.store = S::default();
    }
}

impl<S: Store + Clone, C: Clone> Sorted<S, C> {
    /// A new adapter owning a deep copy of this one's store.
    pub fn duplicate(&self) -> Self {
        tracing::trace!(len = self.store.len(), "duplicating store");
        Self {
            store: self.store.clone(),
            less: self.less.clone(),
        }
    }
}

impl<S: Store + Clone, C: Clone> Clone for Sorted<S, C> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<S: Store, C> Index<usize> for Sorted<S, C> {
    type Output = S::Elem;

    fn index(&self, index: usize) -> &S::Elem {
        &self.store.as_slice()[index]
    }
}

impl<'a, S: Store, C> IntoIterator for &'a Sorted<S, C> {
    type Item = &'a S::Elem;
    type IntoIter = slice::Iter<'a, S::Elem>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.as_slice().iter()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for Sorted<alloc::vec::Vec<T>, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for Sorted<alloc::vec::Vec<T>, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_iter(iter).expect("appending to a Vec cannot fail");
    }
}

impl<S: Store, C> fmt::Debug for Sorted<S, C>
where
    S::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.store.as_slice()).finish()
    }
}

#[cfg(test)]
#[path = "sorted_test.rs"]
mod sorted_test;
