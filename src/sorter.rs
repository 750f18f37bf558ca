use crate::capability::Capability;
use crate::dispatch::DispatchProfile;
use crate::range::{RangeView, SortRange};
use std::cmp::Ordering;

/// A sorting strategy.
///
/// Authors fill in two declarations and one method: the weakest traversal
/// tier the algorithm needs, whether it keeps equal elements in input order,
/// and the comparator-driven sort over a [`RangeView`]. Everything else —
/// keyed sorting, whole-container calls, natural ordering, function pointer
/// forms — is derived by the provided methods here and by
/// [`SortExt`](crate::SortExt).
///
/// `STABLE` is a promise, not a hint: declare `true` only if the algorithm
/// never reorders elements that compare equal.
///
/// ```
/// use std::cmp::Ordering;
/// use tiersort::{Capability, RangeView, SortExt, Sorter};
///
/// struct GnomeSort;
///
/// impl Sorter for GnomeSort {
///     const REQUIRES: Capability = Capability::RandomAccess;
///     const STABLE: bool = true;
///
///     fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
///     where
///         C: FnMut(&T, &T) -> Ordering,
///     {
///         let RangeView::RandomAccess(s) = view else {
///             panic!("gnome sort requires random access");
///         };
///         let mut i = 0;
///         while i < s.len() {
///             if i == 0 || compare(&s[i - 1], &s[i]) != Ordering::Greater {
///                 i += 1;
///             } else {
///                 s.swap(i - 1, i);
///                 i -= 1;
///             }
///         }
///     }
/// }
///
/// let mut values = vec![3, 1, 2];
/// GnomeSort.sort(&mut values);
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub trait Sorter {
    /// Weakest input tier the strategy can work with. Dispatch never hands
    /// this strategy a view below it.
    const REQUIRES: Capability;

    /// Whether equal elements keep their relative input order.
    const STABLE: bool;

    /// Selection table for this strategy's subtree. Leaves keep the default;
    /// composites override it with the merge of their members.
    const PROFILE: DispatchProfile = DispatchProfile::leaf(Self::REQUIRES);

    /// Sort the elements behind `view` by `compare`. The view's tier is
    /// always accepted by [`REQUIRES`](Self::REQUIRES) when the call comes
    /// through the gated surface.
    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering;

    /// Sort by a key projection. The default lowers the projection into the
    /// comparator; strategies with a keyed path of their own override it.
    fn sort_view_by_key<T, K, F>(&self, view: RangeView<'_, T>, key: &mut F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_view(view, &mut |a, b| key(a).cmp(&key(b)));
    }

    /// Whole-container entry point. The default lowers to the range's view;
    /// adapters that can use the container itself override it.
    fn sort_range_by<R, C>(&self, range: &mut R, compare: &mut C)
    where
        R: SortRange + ?Sized,
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        self.sort_view(range.view(), compare);
    }

    /// Keyed whole-container entry point, same lowering rules as
    /// [`sort_range_by`](Self::sort_range_by).
    fn sort_range_by_key<R, K, F>(&self, range: &mut R, key: &mut F)
    where
        R: SortRange + ?Sized,
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        self.sort_view_by_key(range.view(), key);
    }
}
