use crate::facade::SortExt;
use crate::hybrid::HybridSort;
use crate::range::SortRange;
use crate::sorter::Sorter;
use crate::sorts::{CollectSort, InsertionSort, SliceSort, SliceSortUnstable};
use std::cmp::Ordering;

/// What you get when you do not choose: the unstable slice sort on random
/// access input, insertion sort on bidirectional input, run merging on
/// forward input. Unstable overall, because its fastest member is.
pub type DefaultSort = HybridSort<(SliceSortUnstable, InsertionSort, CollectSort)>;

/// Same tier coverage as [`DefaultSort`] with every member stable, so the
/// composite is too.
pub type DefaultStableSort = HybridSort<(SliceSort, InsertionSort, CollectSort)>;

/// Configured sort over a borrowed range, started from
/// [`SortWith::sort_builder`](crate::SortWith::sort_builder).
///
/// ```
/// use tiersort::sorts::SliceSortUnstable;
/// use tiersort::SortWith;
///
/// let mut values = vec![3i32, -1, 2];
/// values
///     .sort_builder()
///     .with_sorter(SliceSortUnstable)
///     .sort_by_key(|x| x.abs());
/// assert_eq!(values, [-1, 2, 3]);
/// ```
pub struct SortBuilder<'a, R: ?Sized, S> {
    range: &'a mut R,
    sorter: S,
}

impl<'a, R> SortBuilder<'a, R, DefaultSort>
where
    R: SortRange + ?Sized,
{
    pub(crate) fn new(range: &'a mut R) -> Self {
        Self {
            range,
            sorter: DefaultSort::default(),
        }
    }
}

impl<'a, R, S> SortBuilder<'a, R, S>
where
    R: SortRange + ?Sized,
    S: Sorter,
{
    /// Swap the strategy, keeping the borrowed range.
    pub fn with_sorter<S2: Sorter>(self, sorter: S2) -> SortBuilder<'a, R, S2> {
        SortBuilder {
            range: self.range,
            sorter,
        }
    }

    pub fn sort(self)
    where
        R::Item: Ord,
    {
        if self.range.len() <= 1 {
            return;
        }

        self.sorter.sort(self.range);
    }

    pub fn sort_by<C>(self, compare: C)
    where
        C: FnMut(&R::Item, &R::Item) -> Ordering,
    {
        if self.range.len() <= 1 {
            return;
        }

        self.sorter.sort_by(self.range, compare);
    }

    pub fn sort_by_key<K, F>(self, key: F)
    where
        K: Ord,
        F: FnMut(&R::Item) -> K,
    {
        if self.range.len() <= 1 {
            return;
        }

        self.sorter.sort_by_key(self.range, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::SortWith;
    use std::collections::LinkedList;

    #[test]
    fn default_composite_covers_three_tiers() {
        use crate::capability::Capability;

        assert_eq!(DefaultSort::REQUIRES, Capability::Forward);
        assert!(!DefaultSort::STABLE);
        assert!(DefaultStableSort::STABLE);
    }

    #[test]
    fn builder_sorts_with_the_default() {
        let mut values = vec![5u32, 3, 4, 1, 2];
        values.sort_builder().sort();
        assert_eq!(values, [1, 2, 3, 4, 5]);

        let mut list: LinkedList<u32> = [3u32, 1, 2].into_iter().collect();
        list.sort_builder().sort();
        let sorted: Vec<u32> = list.into_iter().collect();
        assert_eq!(sorted, [1, 2, 3]);
    }

    #[test]
    fn builder_accepts_comparator_and_key() {
        let mut values = vec![1u32, 3, 2];
        values.sort_builder().sort_by(|a, b| b.cmp(a));
        assert_eq!(values, [3, 2, 1]);

        let mut values = vec![1i32, -3, 2];
        values.sort_builder().sort_by_key(|x| x.abs());
        assert_eq!(values, [1, 2, -3]);
    }

    #[test]
    fn builder_swaps_strategies() {
        let mut values = vec![2u32, 1];
        values
            .sort_builder()
            .with_sorter(DefaultStableSort::default())
            .sort();
        assert_eq!(values, [1, 2]);
    }

    #[test]
    fn degenerate_lengths_return_untouched() {
        let mut empty: Vec<u32> = vec![];
        empty.sort_builder().sort();
        assert!(empty.is_empty());

        let mut one = vec![9u32];
        one.sort_builder().sort();
        assert_eq!(one, [9]);
    }
}
