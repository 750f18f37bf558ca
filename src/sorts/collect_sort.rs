use crate::capability::Capability;
use crate::range::RangeView;
use crate::sorter::Sorter;
use crate::utils::apply_order;
use itertools::Itertools;
use std::cmp::Ordering;

/// Merge sort over one materialized traversal, in the run-merging family
/// that goes back to Skiena's melsort: split the pass into maximal
/// ascending runs, merge runs pairwise until one ordering remains, then
/// move each element to its place. Already-ordered stretches are a single
/// run, so mostly-sorted input is close to linear. Stable; the merge takes
/// from the earlier run on equal keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectSort;

impl Sorter for CollectSort {
    const REQUIRES: Capability = Capability::Forward;
    const STABLE: bool = true;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut slots = view.into_slot_refs();
        if slots.len() < 2 {
            return;
        }

        // Maximal ascending runs, as slot indices.
        let mut runs: Vec<Vec<usize>> = Vec::new();
        let mut run = vec![0];
        for i in 1..slots.len() {
            if compare(&*slots[i - 1], &*slots[i]) == Ordering::Greater {
                runs.push(std::mem::take(&mut run));
            }
            run.push(i);
        }
        runs.push(run);

        // Merge adjacent runs until a single ordering remains. Runs are
        // index-ordered, so left bias on equal keys is what keeps this
        // stable.
        while runs.len() > 1 {
            let mut next = Vec::with_capacity(runs.len() / 2 + 1);
            let mut pairs = runs.into_iter();

            while let Some(a) = pairs.next() {
                match pairs.next() {
                    Some(b) => {
                        let merged: Vec<usize> = a
                            .into_iter()
                            .merge_by(b, |&x, &y| {
                                compare(&*slots[x], &*slots[y]) != Ordering::Greater
                            })
                            .collect();
                        next.push(merged);
                    }
                    None => next.push(a),
                }
            }

            runs = next;
        }

        let order = runs.swap_remove(0);
        apply_order(&mut slots, &order);
    }
}
