//! The completed call surface.
//!
//! [`SortExt`] turns the two-and-a-half methods a strategy author writes
//! into the full set of entry points: natural order, explicit comparator,
//! key projection, projection with its own order, and plain function
//! pointer forms of each. [`SortWith`] mirrors the same surface onto the
//! range side, so `values.sort_with(&sorter)` reads like the standard
//! library.
//!
//! Every entry point proves strategy/range compatibility in a `const`
//! block. An ineligible pairing is a build failure, never a runtime one.

use crate::builder::{DefaultSort, SortBuilder};
use crate::range::SortRange;
use crate::sorter::Sorter;
use std::cmp::Ordering;

/// Compatibility gate, evaluated at monomorphization.
#[inline(always)]
fn gate<S, R>()
where
    S: Sorter + ?Sized,
    R: SortRange + ?Sized,
{
    const {
        assert!(
            S::REQUIRES.rank() >= R::TIER.rank(),
            "this sorter requires more traversal capability than the range offers"
        )
    };
}

/// Derived entry points for every [`Sorter`].
///
/// Implemented blanket-wise; strategy authors never touch it. Incompatible
/// strategy/range pairings do not build:
///
/// ```compile_fail
/// use std::collections::LinkedList;
/// use tiersort::{sorts::SliceSort, SortExt};
///
/// let mut list: LinkedList<u32> = [2u32, 1].into_iter().collect();
/// // A random access strategy cannot traverse a linked list.
/// SliceSort.sort(&mut list);
/// ```
pub trait SortExt: Sorter {
    /// Sort ascending by the element type's natural order.
    ///
    /// ```
    /// use tiersort::{sorts::SliceSortUnstable, SortExt};
    ///
    /// let mut values = vec![5u32, 3, 4, 1, 2];
    /// SliceSortUnstable.sort(&mut values);
    /// assert_eq!(values, [1, 2, 3, 4, 5]);
    /// ```
    fn sort<R>(&self, range: &mut R)
    where
        R: SortRange + ?Sized,
        R::Item: Ord,
    {
        gate::<Self, R>();
        self.sort_range_by(range, &mut |a: &R::Item, b: &R::Item| a.cmp(b));
    }

    /// Sort by an explicit comparator.
    fn sort_by<R, C>(&self, range: &mut R, mut compare: C)
    where
        R: SortRange + ?Sized,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        gate::<Self, R>();
        self.sort_range_by(range, &mut compare);
    }

    /// Sort ascending by a key projection.
    ///
    /// ```
    /// use tiersort::{sorts::SliceSort, SortExt};
    ///
    /// let mut words = vec!["ccc", "a", "bb"];
    /// SliceSort.sort_by_key(&mut words, |w| w.len());
    /// assert_eq!(words, ["a", "bb", "ccc"]);
    /// ```
    fn sort_by_key<R, K, F>(&self, range: &mut R, mut key: F)
    where
        R: SortRange + ?Sized,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        gate::<Self, R>();
        self.sort_range_by_key(range, &mut key);
    }

    /// Sort by a key projection compared with an explicit comparator over
    /// the projected keys.
    fn sort_by_key_with<R, K, F, C>(&self, range: &mut R, mut key: F, mut compare: C)
    where
        R: SortRange + ?Sized,
        F: FnMut(&R::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        gate::<Self, R>();
        self.sort_range_by(range, &mut |a, b| compare(&key(a), &key(b)));
    }

    /// Natural-order sort as a plain function pointer, for callers that
    /// need a non-capturing callable rather than a strategy value.
    ///
    /// ```
    /// use tiersort::{sorts::InsertionSort, SortExt};
    ///
    /// let run: fn(&mut Vec<u32>) = InsertionSort::sort_fn();
    /// let mut values = vec![2u32, 1, 3];
    /// run(&mut values);
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    fn sort_fn<R>() -> fn(&mut R)
    where
        Self: Sized + Default,
        R: SortRange + ?Sized,
        R::Item: Ord,
    {
        fn run<S, R>(range: &mut R)
        where
            S: Sorter + Default,
            R: SortRange + ?Sized,
            R::Item: Ord,
        {
            S::default().sort(range);
        }
        run::<Self, R>
    }

    /// Comparator sort as a plain function pointer.
    fn sort_by_fn<R, C>() -> fn(&mut R, C)
    where
        Self: Sized + Default,
        R: SortRange + ?Sized,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        fn run<S, R, C>(range: &mut R, compare: C)
        where
            S: Sorter + Default,
            R: SortRange + ?Sized,
            C: FnMut(&R::Item, &R::Item) -> Ordering,
        {
            S::default().sort_by(range, compare);
        }
        run::<Self, R, C>
    }

    /// Keyed sort as a plain function pointer.
    fn sort_by_key_fn<R, K, F>() -> fn(&mut R, F)
    where
        Self: Sized + Default,
        R: SortRange + ?Sized,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        fn run<S, R, K, F>(range: &mut R, key: F)
        where
            S: Sorter + Default,
            R: SortRange + ?Sized,
            K: Ord,
            F: FnMut(&R::Item) -> K,
        {
            S::default().sort_by_key(range, key);
        }
        run::<Self, R, K, F>
    }
}

impl<S: Sorter> SortExt for S {}

/// Range-side calling convention: the same surface as [`SortExt`], written
/// from the data's point of view.
///
/// ```
/// use tiersort::{sorts::SliceSortUnstable, SortWith};
///
/// let mut values = [5u32, 3, 4, 1, 2];
/// values.sort_with(&SliceSortUnstable);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub trait SortWith<T> {
    fn sort_with<S>(&mut self, sorter: &S)
    where
        S: Sorter,
        T: Ord;

    fn sort_with_by<S, C>(&mut self, sorter: &S, compare: C)
    where
        S: Sorter,
        C: FnMut(&T, &T) -> Ordering;

    fn sort_with_by_key<S, K, F>(&mut self, sorter: &S, key: F)
    where
        S: Sorter,
        K: Ord,
        F: FnMut(&T) -> K;

    /// Start a configured sort over this range, defaulting to
    /// [`DefaultSort`].
    ///
    /// ```
    /// use tiersort::{sorts::SliceSort, SortWith};
    ///
    /// let mut values = vec![3u32, 1, 2];
    /// values.sort_builder().with_sorter(SliceSort).sort();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    fn sort_builder(&mut self) -> SortBuilder<'_, Self, DefaultSort>;
}

impl<R> SortWith<R::Item> for R
where
    R: SortRange + ?Sized,
{
    fn sort_with<S>(&mut self, sorter: &S)
    where
        S: Sorter,
        R::Item: Ord,
    {
        sorter.sort(self);
    }

    fn sort_with_by<S, C>(&mut self, sorter: &S, compare: C)
    where
        S: Sorter,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        sorter.sort_by(self, compare);
    }

    fn sort_with_by_key<S, K, F>(&mut self, sorter: &S, key: F)
    where
        S: Sorter,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        sorter.sort_by_key(self, key);
    }

    fn sort_builder(&mut self) -> SortBuilder<'_, Self, DefaultSort> {
        SortBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{CollectSort, InsertionSort, SliceSort};
    use std::collections::LinkedList;

    #[test]
    fn natural_order_equals_explicit_default_comparator() {
        let mut by_default = vec![4u32, 2, 2, 9, 1];
        let mut by_explicit = by_default.clone();

        CollectSort.sort(&mut by_default);
        CollectSort.sort_by(&mut by_explicit, |a, b| a.cmp(b));

        assert_eq!(by_default, by_explicit);
        assert_eq!(by_default, [1, 2, 2, 4, 9]);
    }

    #[test]
    fn container_call_equals_manual_view_lowering() {
        let mut via_facade = vec![3u32, 1, 2];
        let mut via_view = via_facade.clone();

        CollectSort.sort(&mut via_facade);
        CollectSort.sort_view(via_view.view(), &mut |a: &u32, b: &u32| a.cmp(b));

        assert_eq!(via_facade, via_view);
    }

    #[test]
    fn projection_is_applied_not_dropped() {
        let mut values = vec![3i32, 1, 2];
        CollectSort.sort_by_key(&mut values, |x| -x);
        assert_eq!(values, [3, 2, 1]);
    }

    #[test]
    fn projection_with_its_own_order() {
        let mut words = vec!["bb", "a", "ccc"];
        SliceSort.sort_by_key_with(&mut words, |w| w.len(), |a, b| b.cmp(a));
        assert_eq!(words, ["ccc", "bb", "a"]);
    }

    #[test]
    fn facade_reaches_weaker_tiers() {
        let mut list: LinkedList<u32> = [4u32, 1, 3, 2].into_iter().collect();
        InsertionSort.sort(&mut list);

        let sorted: Vec<u32> = list.into_iter().collect();
        assert_eq!(sorted, [1, 2, 3, 4]);
    }

    #[test]
    fn function_pointer_forms_sort() {
        let by_cmp: fn(&mut Vec<i32>, fn(&i32, &i32) -> std::cmp::Ordering) =
            InsertionSort::sort_by_fn();
        let mut values = vec![5, -1, 3];
        by_cmp(&mut values, |a, b| b.cmp(a));
        assert_eq!(values, [5, 3, -1]);

        let by_key: fn(&mut Vec<i32>, fn(&i32) -> i32) = InsertionSort::sort_by_key_fn();
        let mut values = vec![5, -1, 3];
        by_key(&mut values, |x: &i32| x.abs());
        assert_eq!(values, [-1, 3, 5]);
    }

    #[test]
    fn range_side_surface_matches_sorter_side() {
        let mut a = vec![3u32, 1, 2];
        let mut b = a.clone();

        a.sort_with(&SliceSort);
        SliceSort.sort(&mut b);
        assert_eq!(a, b);

        let mut c = vec![3i32, 1, 2];
        c.sort_with_by_key(&SliceSort, |x| -x);
        assert_eq!(c, [3, 2, 1]);
    }
}
