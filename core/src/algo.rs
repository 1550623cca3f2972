//! Slice-level sorting primitives the adapter is built from.
//!
//! Everything here works on plain slices and a [`Compare`], so it can be
//! tested without a store.

use core::ops::Range;

use crate::compare::Compare;

/// Sorts `v` completely. Stable.
pub fn sort<T, C: Compare<T>>(v: &mut [T], less: &C) {
    v.sort_by(|a, b| less.ordering(a, b));
}

/// Restores order in `v` given that `v[..sorted_len]` is already sorted.
///
/// The unsorted tail is sorted on its own, then merged into the prefix. Only
/// the part of the prefix that the tail's smallest element lands in is
/// touched: a single trailing element becomes one rotation, and a tail that
/// already belongs after the prefix costs one comparison.
pub fn complete_sort<T, C: Compare<T>>(v: &mut [T], sorted_len: usize, less: &C) {
    let len = v.len();
    debug_assert!(sorted_len <= len);
    if sorted_len == 0 || sorted_len >= len {
        sort(&mut v[sorted_len.min(len)..], less);
        return;
    }

    let (prefix, tail) = v.split_at_mut(sorted_len);
    if tail.len() > 1 {
        sort(tail, less);
    }
    if !less.less(&tail[0], &prefix[sorted_len - 1]) {
        return;
    }

    // Tail elements go after prefix elements they are equivalent to.
    let start = upper_bound(prefix, &tail[0], less);
    if tail.len() == 1 {
        v[start..].rotate_right(1);
    } else {
        // Two runs; the stable sort detects them and merges in linear time.
        sort(&mut v[start..], less);
    }
}

/// First index whose element is not ordered before `value`.
pub fn lower_bound<T, C: Compare<T>>(v: &[T], value: &T, less: &C) -> usize {
    v.partition_point(|x| less.less(x, value))
}

/// First index whose element is ordered after `value`.
pub fn upper_bound<T, C: Compare<T>>(v: &[T], value: &T, less: &C) -> usize {
    v.partition_point(|x| !less.less(value, x))
}

/// Positions of the elements equivalent to `value`.
pub fn equal_range<T, C: Compare<T>>(v: &[T], value: &T, less: &C) -> Range<usize> {
    let lo = lower_bound(v, value, less);
    let hi = lo + upper_bound(&v[lo..], value, less);
    lo..hi
}

/// Index of the first element ordered before its predecessor, if any.
pub fn first_unsorted<T, C: Compare<T>>(v: &[T], less: &C) -> Option<usize> {
    v.windows(2)
        .position(|w| less.less(&w[1], &w[0]))
        .map(|i| i + 1)
}

pub fn is_sorted<T, C: Compare<T>>(v: &[T], less: &C) -> bool {
    first_unsorted(v, less).is_none()
}

/// Moves the elements outside `range` to the front of `v` by swapping the
/// range with the tail, and returns how many elements remain.
///
/// Relative order of the survivors is not preserved. The caller truncates
/// its storage to the returned length.
pub fn swap_out_range<T>(v: &mut [T], range: Range<usize>) -> usize {
    let len = v.len();
    debug_assert!(range.start <= range.end && range.end <= len);
    let removed = range.end - range.start;
    // Tail elements that overlap the range are already being dropped.
    let keep_from = range.end.max(len - removed);
    for (offset, src) in (keep_from..len).enumerate() {
        v.swap(range.start + offset, src);
    }
    len - removed
}

#[cfg(test)]
#[path = "algo_test.rs"]
mod algo_test;
