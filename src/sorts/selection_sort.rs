use crate::capability::Capability;
use crate::range::RangeView;
use crate::sorter::Sorter;
use crate::utils::swap_slots;
use std::cmp::Ordering;

/// Selection sort over one materialized pass: pick the minimum of the
/// remainder, swap it into place, repeat. At most `n - 1` element moves, so
/// it earns its keep when moves are expensive and comparisons are cheap.
/// Swapping across equal elements makes it unstable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    const REQUIRES: Capability = Capability::Forward;
    const STABLE: bool = false;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut slots = view.into_slot_refs();
        let n = slots.len();

        for i in 0..n {
            let mut min = i;
            for j in (i + 1)..n {
                if compare(&*slots[j], &*slots[min]) == Ordering::Less {
                    min = j;
                }
            }
            swap_slots(&mut slots, i, min);
        }
    }
}
