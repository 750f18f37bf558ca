//! Preferring a container's own sort.
//!
//! Some range types bring a sort with them ([`Vec`] and slices carry the
//! standard library's). [`IntrinsicFirst`] uses that path for whole-range
//! calls on such types and falls back to its wrapped strategy everywhere
//! else. Whether a type has an intrinsic sort is a `const` declaration on
//! [`SortRange`], so the branch below is decided per range type at compile
//! time and costs nothing.

use crate::capability::Capability;
use crate::dispatch::DispatchProfile;
use crate::range::{RangeView, SortRange};
use crate::sorter::Sorter;
use std::cmp::Ordering;

/// Wraps a fallback strategy and delegates whole-range calls to the range
/// type's own sort whenever one is declared.
///
/// View-level calls always run the fallback: a bare view no longer knows
/// what container it came from. `STABLE` is pinned `false` — the framework
/// does not verify what a type's own sort promises, so it claims nothing.
///
/// ```
/// use tiersort::sorts::CollectSort;
/// use tiersort::{IntrinsicFirst, SortExt, Sorter};
///
/// let sorter = IntrinsicFirst::new(CollectSort);
/// assert!(CollectSort::STABLE && !<IntrinsicFirst<CollectSort>>::STABLE);
///
/// let mut values = vec![3u32, 1, 2]; // Vec: sorted by its intrinsic sort
/// sorter.sort(&mut values);
/// assert_eq!(values, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntrinsicFirst<S> {
    fallback: S,
}

impl<S> IntrinsicFirst<S> {
    #[inline]
    pub fn new(fallback: S) -> Self {
        Self { fallback }
    }

    #[inline]
    pub fn into_fallback(self) -> S {
        self.fallback
    }
}

impl<S: Sorter> Sorter for IntrinsicFirst<S> {
    const REQUIRES: Capability = S::REQUIRES;
    const STABLE: bool = false;
    const PROFILE: DispatchProfile = S::PROFILE;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.fallback.sort_view(view, compare);
    }

    fn sort_view_by_key<T, K, F>(&self, view: RangeView<'_, T>, key: &mut F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.fallback.sort_view_by_key(view, key);
    }

    fn sort_range_by<R, C>(&self, range: &mut R, compare: &mut C)
    where
        R: SortRange + ?Sized,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        if R::HAS_INTRINSIC_SORT {
            #[cfg(feature = "work_profiles")]
            println!("({:?}) INTRINSIC", R::TIER);

            range.sort_intrinsic_by(compare);
        } else {
            #[cfg(feature = "work_profiles")]
            println!("({:?}) FALLBACK", R::TIER);

            self.fallback.sort_range_by(range, compare);
        }
    }

    fn sort_range_by_key<R, K, F>(&self, range: &mut R, key: &mut F)
    where
        R: SortRange + ?Sized,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        if R::HAS_INTRINSIC_SORT {
            range.sort_intrinsic_by_key(key);
        } else {
            self.fallback.sort_range_by_key(range, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::SortExt;
    use crate::sorts::{CollectSort, InsertionSort};
    use std::collections::{LinkedList, VecDeque};

    #[test]
    fn descriptor_follows_the_fallback_except_stability() {
        type D = IntrinsicFirst<CollectSort>;

        assert_eq!(D::REQUIRES, CollectSort::REQUIRES);
        assert_eq!(D::PROFILE, CollectSort::PROFILE);
        assert!(CollectSort::STABLE);
        assert!(!D::STABLE);
    }

    #[test]
    fn sorts_intrinsic_and_fallback_ranges_alike() {
        let sorter = IntrinsicFirst::new(InsertionSort);

        let mut vec = vec![4u32, 2, 3, 1];
        sorter.sort(&mut vec);
        assert_eq!(vec, [1, 2, 3, 4]);

        // VecDeque is random access but declares no intrinsic sort.
        let mut deque: VecDeque<u32> = [4u32, 2, 3, 1].into_iter().collect();
        sorter.sort(&mut deque);
        let sorted: Vec<u32> = deque.into_iter().collect();
        assert_eq!(sorted, [1, 2, 3, 4]);

        let mut list: LinkedList<u32> = [4u32, 2, 3, 1].into_iter().collect();
        sorter.sort(&mut list);
        let sorted: Vec<u32> = list.into_iter().collect();
        assert_eq!(sorted, [1, 2, 3, 4]);
    }

    #[test]
    fn keyed_intrinsic_path_applies_the_projection() {
        let sorter = IntrinsicFirst::new(InsertionSort);

        let mut values = vec![3i32, 1, 2];
        sorter.sort_by_key(&mut values, |x| -x);
        assert_eq!(values, [3, 2, 1]);
    }
}
