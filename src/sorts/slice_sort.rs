use crate::capability::Capability;
use crate::range::RangeView;
use crate::sorter::Sorter;
use std::cmp::Ordering;

/// The standard library's stable slice sort as a strategy. The strongest
/// general-purpose member to put at the front of a stable composite.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceSort;

impl Sorter for SliceSort {
    const REQUIRES: Capability = Capability::RandomAccess;
    const STABLE: bool = true;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        match view {
            RangeView::RandomAccess(s) => s.sort_by(|a, b| compare(a, b)),
            v => panic!("slice sort requires random access, got {:?}", v.tier()),
        }
    }

    // The standard library has a keyed entry of its own, so take it rather
    // than lowering the projection.
    fn sort_view_by_key<T, K, F>(&self, view: RangeView<'_, T>, key: &mut F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        match view {
            RangeView::RandomAccess(s) => s.sort_by_key(|x| key(x)),
            v => panic!("slice sort requires random access, got {:?}", v.tier()),
        }
    }
}

/// The standard library's unstable slice sort as a strategy. The fastest
/// thing in this crate on random access input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceSortUnstable;

impl Sorter for SliceSortUnstable {
    const REQUIRES: Capability = Capability::RandomAccess;
    const STABLE: bool = false;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        match view {
            RangeView::RandomAccess(s) => s.sort_unstable_by(|a, b| compare(a, b)),
            v => panic!("slice sort requires random access, got {:?}", v.tier()),
        }
    }

    fn sort_view_by_key<T, K, F>(&self, view: RangeView<'_, T>, key: &mut F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        match view {
            RangeView::RandomAccess(s) => s.sort_unstable_by_key(|x| key(x)),
            v => panic!("slice sort requires random access, got {:?}", v.tier()),
        }
    }
}
