//! Hoare partition quicksort with the pivot held at the leftmost position of each range.
//!
//! Ranges are closed, `[begin, end]`. The sort is unstable, in-place and never allocates. Only the
//! smaller side of each partition is sorted by a recursive call, the larger side is handled by the
//! loop, which bounds the call depth by *O*(log(*n*)) whatever the input and pivot policy.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::pivot::{PivotChooser, PivotPolicy};
use crate::sequence::Sequence;

/// Sorts the slice with the default pivot policy, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    Quicksort::default().sort(v);
}

/// Sorts the slice with a comparator function and the default pivot policy.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but all original elements
/// remain in the slice.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    Quicksort::default().sort_by(v, compare);
}

/// Sorts the closed range `[begin, end]` of `v` in ascending order with the default pivot policy.
///
/// An empty sequence and a single element range are no-ops. Any other range has to satisfy
/// `begin <= end < v.len()`, otherwise an error is returned and `v` is left untouched.
#[inline]
pub fn sort_range<S>(v: &mut S, begin: usize, end: usize) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    Quicksort::default().sort_range(v, begin, end)
}

/// Quicksort configured with a pivot policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quicksort {
    policy: PivotPolicy,
}

impl Quicksort {
    pub const fn new(policy: PivotPolicy) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> PivotPolicy {
        self.policy
    }

    pub fn sort<T>(&self, v: &mut [T])
    where
        T: Ord,
    {
        self.sort_whole(v, &mut |a, b| a.lt(b));
    }

    pub fn sort_by<T, F>(&self, v: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_whole(v, &mut |a, b| compare(a, b) == Ordering::Less);
    }

    pub fn sort_range<S>(&self, v: &mut S, begin: usize, end: usize) -> Result<(), SortError>
    where
        S: Sequence + ?Sized,
        S::Item: Ord,
    {
        self.sort_range_by(v, begin, end, |a, b| a.cmp(b))
    }

    /// Sorts the closed range `[begin, end]` of `v` with a comparator function.
    ///
    /// See [`sort_range`] for the accepted ranges.
    pub fn sort_range_by<S, F>(
        &self,
        v: &mut S,
        begin: usize,
        end: usize,
        mut compare: F,
    ) -> Result<(), SortError>
    where
        S: Sequence + ?Sized,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        let len = v.len();
        if len == 0 {
            return Ok(());
        }

        if end >= len {
            tracing::debug!(begin, end, len, "rejecting sort range, end out of bounds");
            return Err(SortError::EndOutOfBounds { end, len });
        }
        if begin > end {
            tracing::debug!(begin, end, len, "rejecting sort range, begin past end");
            return Err(SortError::BeginAfterEnd { begin, end });
        }

        tracing::trace!(begin, end, len, policy = self.policy.name(), "sorting range");

        let mut is_less = |a: &S::Item, b: &S::Item| compare(a, b) == Ordering::Less;
        let mut chooser = PivotChooser::new(self.policy, len);
        quicksort(v, begin, end, None, &mut chooser, &mut is_less);

        Ok(())
    }

    fn sort_whole<T, F>(&self, v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        // Sorting has no meaningful behavior on zero-sized types.
        if std::mem::size_of::<T>() == 0 {
            return;
        }

        let len = v.len();
        if len < 2 {
            return;
        }

        let mut chooser = PivotChooser::new(self.policy, len);
        quicksort(v, 0, len - 1, None, &mut chooser, is_less);
    }
}

/// Sorts `v[begin..=end]`.
///
/// If the range has a right neighbour that was a pivot of an enclosing partition, its index is
/// given as `successor`. Every element of the range is less than or equal to it.
fn quicksort<S, F>(
    v: &mut S,
    mut begin: usize,
    mut end: usize,
    mut successor: Option<usize>,
    chooser: &mut PivotChooser,
    is_less: &mut F,
) where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        if begin >= end {
            return;
        }

        let pivot_pos = chooser.choose(&*v, begin, end, is_less);
        v.swap(begin, pivot_pos);

        // If the pivot is not less than the successor, it is the greatest element of the range.
        // Partition into elements less than the pivot and elements equal to it, the latter are
        // already in their final place. This case is usually hit when the range contains many
        // duplicate elements.
        if let Some(s) = successor {
            if !is_less(v.get(begin), v.get(s)) {
                let p = partition(v, begin, end, &mut |a, b| !is_less(b, a));
                if p == begin {
                    return;
                }
                end = p - 1;
                successor = Some(p);
                continue;
            }
        }

        let p = partition(v, begin, end, is_less);

        // Recurse into the shorter side, continue with the longer one.
        if p - begin < end - p {
            if p > begin {
                quicksort(v, begin, p - 1, Some(p), chooser, is_less);
            }
            begin = p + 1;
        } else {
            if p < end {
                quicksort(v, p + 1, end, successor, chooser, is_less);
            }
            if p == begin {
                return;
            }
            end = p - 1;
            successor = Some(p);
        }
    }
}

/// Partitions `v[begin..=end]` around the pivot `v[begin]`.
///
/// Returns the final index `p` of the pivot. Afterwards all elements in `[begin, p)` are not
/// greater than the pivot and all elements in `(p, end]` are greater than it.
///
/// Panics unless `begin < end < v.len()`. If `is_less` does not implement a total order the
/// resulting order and return value are unspecified, but all original elements remain in `v`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition<S, F>(v: &mut S, begin: usize, end: usize, is_less: &mut F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    assert!(
        begin < end && end < v.len(),
        "partition requires begin < end < len, got begin {begin}, end {end}, len {}",
        v.len()
    );

    let mut l = begin + 1;
    let mut r = end;

    loop {
        // Find the first element greater than the pivot.
        while l < r && !is_less(v.get(begin), v.get(l)) {
            l += 1;
        }

        // Find the last element not greater than the pivot. Stops at the pivot itself.
        while r > begin && is_less(v.get(begin), v.get(r)) {
            r -= 1;
        }

        // Are we done?
        if l >= r {
            break;
        }

        // Swap the found pair of out-of-order elements, both are in place afterwards.
        v.swap(l, r);
        l += 1;
        r -= 1;
    }

    // Place the pivot between the two partitions.
    v.swap(begin, r);

    r
}
