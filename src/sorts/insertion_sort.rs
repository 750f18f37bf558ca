use crate::capability::Capability;
use crate::range::RangeView;
use crate::sorter::Sorter;
use crate::utils::swap_slots;
use std::cmp::Ordering;

/// Classic insertion sort. Quadratic, stable, and only ever moves elements
/// between neighbours, which is why it gets by on bidirectional traversal.
/// The right default for the bidirectional slot of a composite.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    const REQUIRES: Capability = Capability::Bidirectional;
    const STABLE: bool = true;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        match view {
            // Contiguous input gets the allocation-free path.
            RangeView::RandomAccess(s) => {
                for i in 1..s.len() {
                    let mut j = i;
                    while j > 0 && compare(&s[j - 1], &s[j]) == Ordering::Greater {
                        s.swap(j - 1, j);
                        j -= 1;
                    }
                }
            }
            view => {
                let mut slots = view.into_slot_refs();
                for i in 1..slots.len() {
                    let mut j = i;
                    while j > 0 && compare(&*slots[j - 1], &*slots[j]) == Ordering::Greater {
                        swap_slots(&mut slots, j - 1, j);
                        j -= 1;
                    }
                }
            }
        }
    }
}
