//! The capability dispatcher.
//!
//! A [`HybridSort`] aggregates strategies and routes every call to the
//! member whose requirement sits closest to the input's tier, earliest
//! declared on ties. Selection reads only `const` data
//! ([`DispatchProfile`]s), so for any concrete range type the chosen member
//! is a compile-time constant and the routing folds away.
//!
//! Nesting one `HybridSort` inside another behaves exactly as if the inner
//! member list had been spliced into the outer one, in place: profile
//! merging is associative, so the outer scan already sees the best leaf
//! requirement inside each nested composite, and the nested composite's own
//! routing applies the same rule one level down. Aggregates wider than four
//! members are built by nesting, which for the same reason costs nothing in
//! selection quality.

use crate::capability::Capability;
use crate::dispatch::DispatchProfile;
use crate::range::{RangeView, SortRange};
use crate::sorter::Sorter;
use std::cmp::Ordering;

/// Strategies composed into one, best-fit member per input tier.
///
/// The member tuple is owned by value and declaration order is meaningful:
/// it is the tie-break between members requiring the same tier.
///
/// ```
/// use std::collections::LinkedList;
/// use tiersort::sorts::{CollectSort, SliceSortUnstable};
/// use tiersort::{HybridSort, SortExt};
///
/// let sorter = HybridSort::new((SliceSortUnstable, CollectSort));
///
/// let mut vec = vec![5u32, 3, 4, 1, 2];
/// sorter.sort(&mut vec); // random access: the slice strategy
/// assert_eq!(vec, [1, 2, 3, 4, 5]);
///
/// let mut list: LinkedList<u32> = [5u32, 3, 4, 1, 2].into_iter().collect();
/// sorter.sort(&mut list); // weaker traversal: the run merge strategy
/// let sorted: Vec<u32> = list.into_iter().collect();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridSort<M> {
    members: M,
}

impl<M> HybridSort<M> {
    #[inline]
    pub fn new(members: M) -> Self {
        Self { members }
    }

    #[inline]
    pub fn into_members(self) -> M {
        self.members
    }
}

impl<S1> HybridSort<(S1,)>
where
    S1: Sorter,
{
    #[inline]
    fn choose(tier: Capability) -> usize {
        if !<Self as Sorter>::PROFILE.supports(tier) {
            panic!("no member strategy accepts a {:?} input", tier);
        }

        #[cfg(feature = "work_profiles")]
        println!("({:?}) MEMBER: 0", tier);

        0
    }
}

impl<S1> Sorter for HybridSort<(S1,)>
where
    S1: Sorter,
{
    const REQUIRES: Capability = S1::REQUIRES;
    const STABLE: bool = S1::STABLE;
    const PROFILE: DispatchProfile = S1::PROFILE;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        Self::choose(view.tier());
        self.members.0.sort_view(view, compare);
    }

    fn sort_view_by_key<T, K, F>(&self, view: RangeView<'_, T>, key: &mut F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Self::choose(view.tier());
        self.members.0.sort_view_by_key(view, key);
    }

    fn sort_range_by<R, C>(&self, range: &mut R, compare: &mut C)
    where
        R: SortRange + ?Sized,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        Self::choose(R::TIER);
        self.members.0.sort_range_by(range, compare);
    }

    fn sort_range_by_key<R, K, F>(&self, range: &mut R, key: &mut F)
    where
        R: SortRange + ?Sized,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        Self::choose(R::TIER);
        self.members.0.sort_range_by_key(range, key);
    }
}

impl<S1, S2> HybridSort<(S1, S2)>
where
    S1: Sorter,
    S2: Sorter,
{
    #[inline]
    fn choose(tier: Capability) -> usize {
        let best = <Self as Sorter>::PROFILE.best_at(tier);
        if best.is_none() {
            panic!("no member strategy accepts a {:?} input", tier);
        }

        let chosen = if S1::PROFILE.best_at(tier) == best {
            0
        } else {
            1
        };

        #[cfg(feature = "work_profiles")]
        println!("({:?}) MEMBER: {}", tier, chosen);

        chosen
    }
}

impl<S1, S2> Sorter for HybridSort<(S1, S2)>
where
    S1: Sorter,
    S2: Sorter,
{
    const REQUIRES: Capability = S1::REQUIRES.weaker(S2::REQUIRES);
    const STABLE: bool = S1::STABLE && S2::STABLE;
    const PROFILE: DispatchProfile = DispatchProfile::merge(S1::PROFILE, S2::PROFILE);

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        match Self::choose(view.tier()) {
            0 => self.members.0.sort_view(view, compare),
            _ => self.members.1.sort_view(view, compare),
        }
    }

    fn sort_view_by_key<T, K, F>(&self, view: RangeView<'_, T>, key: &mut F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        match Self::choose(view.tier()) {
            0 => self.members.0.sort_view_by_key(view, key),
            _ => self.members.1.sort_view_by_key(view, key),
        }
    }

    fn sort_range_by<R, C>(&self, range: &mut R, compare: &mut C)
    where
        R: SortRange + ?Sized,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        match Self::choose(R::TIER) {
            0 => self.members.0.sort_range_by(range, compare),
            _ => self.members.1.sort_range_by(range, compare),
        }
    }

    fn sort_range_by_key<R, K, F>(&self, range: &mut R, key: &mut F)
    where
        R: SortRange + ?Sized,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        match Self::choose(R::TIER) {
            0 => self.members.0.sort_range_by_key(range, key),
            _ => self.members.1.sort_range_by_key(range, key),
        }
    }
}

impl<S1, S2, S3> HybridSort<(S1, S2, S3)>
where
    S1: Sorter,
    S2: Sorter,
    S3: Sorter,
{
    #[inline]
    fn choose(tier: Capability) -> usize {
        let best = <Self as Sorter>::PROFILE.best_at(tier);
        if best.is_none() {
            panic!("no member strategy accepts a {:?} input", tier);
        }

        let chosen = if S1::PROFILE.best_at(tier) == best {
            0
        } else if S2::PROFILE.best_at(tier) == best {
            1
        } else {
            2
        };

        #[cfg(feature = "work_profiles")]
        println!("({:?}) MEMBER: {}", tier, chosen);

        chosen
    }
}

impl<S1, S2, S3> Sorter for HybridSort<(S1, S2, S3)>
where
    S1: Sorter,
    S2: Sorter,
    S3: Sorter,
{
    const REQUIRES: Capability = S1::REQUIRES.weaker(S2::REQUIRES).weaker(S3::REQUIRES);
    const STABLE: bool = S1::STABLE && S2::STABLE && S3::STABLE;
    const PROFILE: DispatchProfile = DispatchProfile::merge(
        DispatchProfile::merge(S1::PROFILE, S2::PROFILE),
        S3::PROFILE,
    );

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        match Self::choose(view.tier()) {
            0 => self.members.0.sort_view(view, compare),
            1 => self.members.1.sort_view(view, compare),
            _ => self.members.2.sort_view(view, compare),
        }
    }

    fn sort_view_by_key<T, K, F>(&self, view: RangeView<'_, T>, key: &mut F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        match Self::choose(view.tier()) {
            0 => self.members.0.sort_view_by_key(view, key),
            1 => self.members.1.sort_view_by_key(view, key),
            _ => self.members.2.sort_view_by_key(view, key),
        }
    }

    fn sort_range_by<R, C>(&self, range: &mut R, compare: &mut C)
    where
        R: SortRange + ?Sized,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        match Self::choose(R::TIER) {
            0 => self.members.0.sort_range_by(range, compare),
            1 => self.members.1.sort_range_by(range, compare),
            _ => self.members.2.sort_range_by(range, compare),
        }
    }

    fn sort_range_by_key<R, K, F>(&self, range: &mut R, key: &mut F)
    where
        R: SortRange + ?Sized,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        match Self::choose(R::TIER) {
            0 => self.members.0.sort_range_by_key(range, key),
            1 => self.members.1.sort_range_by_key(range, key),
            _ => self.members.2.sort_range_by_key(range, key),
        }
    }
}

impl<S1, S2, S3, S4> HybridSort<(S1, S2, S3, S4)>
where
    S1: Sorter,
    S2: Sorter,
    S3: Sorter,
    S4: Sorter,
{
    #[inline]
    fn choose(tier: Capability) -> usize {
        let best = <Self as Sorter>::PROFILE.best_at(tier);
        if best.is_none() {
            panic!("no member strategy accepts a {:?} input", tier);
        }

        let chosen = if S1::PROFILE.best_at(tier) == best {
            0
        } else if S2::PROFILE.best_at(tier) == best {
            1
        } else if S3::PROFILE.best_at(tier) == best {
            2
        } else {
            3
        };

        #[cfg(feature = "work_profiles")]
        println!("({:?}) MEMBER: {}", tier, chosen);

        chosen
    }
}

impl<S1, S2, S3, S4> Sorter for HybridSort<(S1, S2, S3, S4)>
where
    S1: Sorter,
    S2: Sorter,
    S3: Sorter,
    S4: Sorter,
{
    const REQUIRES: Capability = S1::REQUIRES
        .weaker(S2::REQUIRES)
        .weaker(S3::REQUIRES)
        .weaker(S4::REQUIRES);
    const STABLE: bool = S1::STABLE && S2::STABLE && S3::STABLE && S4::STABLE;
    const PROFILE: DispatchProfile = DispatchProfile::merge(
        DispatchProfile::merge(S1::PROFILE, S2::PROFILE),
        DispatchProfile::merge(S3::PROFILE, S4::PROFILE),
    );

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        match Self::choose(view.tier()) {
            0 => self.members.0.sort_view(view, compare),
            1 => self.members.1.sort_view(view, compare),
            2 => self.members.2.sort_view(view, compare),
            _ => self.members.3.sort_view(view, compare),
        }
    }

    fn sort_view_by_key<T, K, F>(&self, view: RangeView<'_, T>, key: &mut F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        match Self::choose(view.tier()) {
            0 => self.members.0.sort_view_by_key(view, key),
            1 => self.members.1.sort_view_by_key(view, key),
            2 => self.members.2.sort_view_by_key(view, key),
            _ => self.members.3.sort_view_by_key(view, key),
        }
    }

    fn sort_range_by<R, C>(&self, range: &mut R, compare: &mut C)
    where
        R: SortRange + ?Sized,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        match Self::choose(R::TIER) {
            0 => self.members.0.sort_range_by(range, compare),
            1 => self.members.1.sort_range_by(range, compare),
            2 => self.members.2.sort_range_by(range, compare),
            _ => self.members.3.sort_range_by(range, compare),
        }
    }

    fn sort_range_by_key<R, K, F>(&self, range: &mut R, key: &mut F)
    where
        R: SortRange + ?Sized,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        match Self::choose(R::TIER) {
            0 => self.members.0.sort_range_by_key(range, key),
            1 => self.members.1.sort_range_by_key(range, key),
            2 => self.members.2.sort_range_by_key(range, key),
            _ => self.members.3.sort_range_by_key(range, key),
        }
    }
}
