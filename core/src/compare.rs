//! Strict weak orderings used to keep an adapter sorted.

use core::cmp::Ordering;

/// A strict weak ordering over `T`.
///
/// `less(a, b)` must be irreflexive and transitive, and incomparability
/// (`!less(a, b) && !less(b, a)`) must be transitive too. Elements that are
/// incomparable are treated as equivalent by the bound queries.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator:
///
/// ```
/// use sorta_core::Compare;
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.less(&"ab", &"abc"));
/// ```
pub trait Compare<T: ?Sized> {
    fn less(&self, a: &T, b: &T) -> bool;

    /// Three-way form derived from `less`, for the slice sorting routines.
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ascending;

impl<T: Ord + ?Sized> Compare<T> for Ascending {
    #[inline(always)]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }

    fn ordering(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Largest element first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Descending;

impl<T: Ord + ?Sized> Compare<T> for Descending {
    #[inline(always)]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }

    fn ordering(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Orders elements by an extracted key.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Compare<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

/// Flips another comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    #[inline(always)]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_and_descending_mirror() {
        assert!(Ascending.less(&1, &2));
        assert!(!Ascending.less(&2, &2));
        assert!(Descending.less(&2, &1));
        assert!(!Descending.less(&1, &2));
        assert_eq!(Descending.ordering(&1, &2), Ordering::Greater);
    }

    #[test]
    fn test_derived_ordering_treats_incomparable_as_equal() {
        let by_tens = |a: &i32, b: &i32| a / 10 < b / 10;
        assert_eq!(by_tens.ordering(&11, &19), Ordering::Equal);
        assert_eq!(by_tens.ordering(&9, &19), Ordering::Less);
        assert_eq!(by_tens.ordering(&29, &19), Ordering::Greater);
    }

    #[test]
    fn test_by_key() {
        let cmp = ByKey(|s: &&str| s.len());
        assert!(cmp.less(&"a", &"bb"));
        assert!(!cmp.less(&"bb", &"cc"));
    }

    #[test]
    fn test_reverse() {
        let cmp = Reverse(Ascending);
        assert!(cmp.less(&3, &1));
        assert_eq!(Compare::<i32>::ordering(&cmp, &1, &3), Ordering::Greater);
    }
}
