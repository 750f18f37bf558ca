//! The input side of the framework: what a sortable sequence is, which
//! traversal tier it offers, and how strategies get at its elements.
//!
//! Random access storage hands out a plain mutable slice. Everything weaker
//! is reached through [`Slots`], which materializes one traversal pass as a
//! vector of disjoint mutable borrows. The tier tag on [`RangeView`] tells
//! dispatch what may be assumed; the access surface is deliberately the same
//! for all sub-slice tiers so that strategy code stays ordinary safe Rust.

use crate::capability::Capability;
use std::cmp::Ordering;
use std::collections::{LinkedList, VecDeque};

/// Element access for storage that cannot hand out a slice.
///
/// One call to [`slots`](Slots::slots) is one front-to-back traversal. How
/// often it may be called is governed by the tier of the view it sits
/// behind: any number of times at `Forward` and above, exactly once at
/// `SinglePass`.
pub trait Slots<T> {
    fn len(&self) -> usize;

    /// Materialize the current traversal as mutable element borrows, in
    /// sequence order.
    fn slots(&mut self) -> Vec<&mut T>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A borrowed sortable sequence, tagged with the traversal tier the
/// underlying storage supports.
///
/// Strategies receive exactly this. A strategy must not use more than its
/// declared requirement allows; dispatch in turn guarantees it never sees a
/// view weaker than that requirement.
pub enum RangeView<'r, T> {
    RandomAccess(&'r mut [T]),
    Bidirectional(&'r mut (dyn Slots<T> + 'r)),
    Forward(&'r mut (dyn Slots<T> + 'r)),
    SinglePass(&'r mut (dyn Slots<T> + 'r)),
}

impl<'r, T> RangeView<'r, T> {
    #[inline]
    pub fn tier(&self) -> Capability {
        match self {
            RangeView::RandomAccess(_) => Capability::RandomAccess,
            RangeView::Bidirectional(_) => Capability::Bidirectional,
            RangeView::Forward(_) => Capability::Forward,
            RangeView::SinglePass(_) => Capability::SinglePass,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            RangeView::RandomAccess(s) => s.len(),
            RangeView::Bidirectional(s)
            | RangeView::Forward(s)
            | RangeView::SinglePass(s) => s.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the view into one pass of mutable element borrows. Counts as
    /// the single traversal of a `SinglePass` view.
    pub fn into_slot_refs(self) -> Vec<&'r mut T> {
        match self {
            RangeView::RandomAccess(s) => s.iter_mut().collect(),
            RangeView::Bidirectional(s)
            | RangeView::Forward(s)
            | RangeView::SinglePass(s) => s.slots(),
        }
    }
}

/// A type that can be sorted by this crate's strategies.
///
/// `TIER` is the traversal capability the storage honestly supports and is
/// what dispatch ranks against. `HAS_INTRINSIC_SORT` declares that the type
/// brings a sort of its own which [`IntrinsicFirst`](crate::IntrinsicFirst)
/// may prefer over any strategy; types declaring it must override both
/// `sort_intrinsic_by` and `sort_intrinsic_by_key`.
pub trait SortRange {
    type Item;

    const TIER: Capability;

    const HAS_INTRINSIC_SORT: bool = false;

    fn len(&self) -> usize;

    fn view(&mut self) -> RangeView<'_, Self::Item>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The type's own sort, if declared. Only reachable through
    /// [`IntrinsicFirst`](crate::IntrinsicFirst) on types with
    /// `HAS_INTRINSIC_SORT`, so the default is an impossible arm.
    fn sort_intrinsic_by(
        &mut self,
        _compare: &mut dyn FnMut(&Self::Item, &Self::Item) -> Ordering,
    ) {
        panic!("range type declares no intrinsic sort");
    }

    /// Keyed variant of the intrinsic sort. Lowers the projection into the
    /// comparator unless the type has a keyed sort of its own.
    fn sort_intrinsic_by_key<K: Ord>(&mut self, key: &mut dyn FnMut(&Self::Item) -> K) {
        self.sort_intrinsic_by(&mut |a, b| key(a).cmp(&key(b)));
    }
}

impl<T> SortRange for [T] {
    type Item = T;

    const TIER: Capability = Capability::RandomAccess;
    const HAS_INTRINSIC_SORT: bool = true;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn view(&mut self) -> RangeView<'_, T> {
        RangeView::RandomAccess(self)
    }

    fn sort_intrinsic_by(&mut self, compare: &mut dyn FnMut(&T, &T) -> Ordering) {
        self.sort_by(|a, b| compare(a, b));
    }

    fn sort_intrinsic_by_key<K: Ord>(&mut self, key: &mut dyn FnMut(&T) -> K) {
        self.sort_by_key(|x| key(x));
    }
}

impl<T> SortRange for Vec<T> {
    type Item = T;

    const TIER: Capability = Capability::RandomAccess;
    const HAS_INTRINSIC_SORT: bool = true;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn view(&mut self) -> RangeView<'_, T> {
        RangeView::RandomAccess(self.as_mut_slice())
    }

    fn sort_intrinsic_by(&mut self, compare: &mut dyn FnMut(&T, &T) -> Ordering) {
        self.sort_by(|a, b| compare(a, b));
    }

    fn sort_intrinsic_by_key<K: Ord>(&mut self, key: &mut dyn FnMut(&T) -> K) {
        self.sort_by_key(|x| key(x));
    }
}

/// Random access through `make_contiguous`: one rotation up front, then
/// plain slice access. Cheaper overall than treating the two halves as a
/// forward sequence on every sort. No intrinsic sort of its own.
impl<T> SortRange for VecDeque<T> {
    type Item = T;

    const TIER: Capability = Capability::RandomAccess;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn view(&mut self) -> RangeView<'_, T> {
        RangeView::RandomAccess(self.make_contiguous())
    }
}

impl<T> Slots<T> for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn slots(&mut self) -> Vec<&mut T> {
        self.iter_mut().collect()
    }
}

impl<T> SortRange for LinkedList<T> {
    type Item = T;

    const TIER: Capability = Capability::Bidirectional;

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn view(&mut self) -> RangeView<'_, T> {
        RangeView::Bidirectional(self)
    }
}
