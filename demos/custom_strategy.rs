use std::cmp::Ordering;
use std::collections::LinkedList;
use tiersort::sorts::SliceSortUnstable;
use tiersort::{Capability, HybridSort, RangeView, Sorter, SortWith};

struct BrickSort;

impl Sorter for BrickSort {
    const REQUIRES: Capability = Capability::Forward;
    const STABLE: bool = true;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut slots = view.into_slot_refs();
        let len = slots.len();
        let mut swapped = true;

        while swapped {
            swapped = false;

            for start in [1, 2] {
                let mut i = start;
                while i < len {
                    let (a, b) = slots.split_at_mut(i);
                    if compare(&*a[i - 1], &*b[0]) == Ordering::Greater {
                        std::mem::swap(&mut *a[i - 1], &mut *b[0]);
                        swapped = true;
                    }
                    i += 2;
                }
            }
        }
    }
}

fn main() {
    let sorter = HybridSort::new((SliceSortUnstable, BrickSort));

    let mut inputs = Vec::new();
    inputs.extend_from_slice(&[55, 22, 73, 4, 89, 0, 100, 3]);

    inputs.sort_with(&sorter);
    println!("{:?}", &inputs[..]);

    let mut list: LinkedList<u32> = [55, 22, 73, 4, 89, 0, 100, 3].into_iter().collect();
    list.sort_with(&sorter);
    println!("{:?}", list);
}
