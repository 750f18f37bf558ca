use crate::capability::Capability;
use crate::facade::SortExt;
use crate::range::{RangeView, Slots, SortRange};
use crate::sorter::Sorter;
use block_pseudorand::block_rand;
use std::cell::Cell;
use std::cmp::Ordering;

pub fn input_families() -> Vec<Vec<i64>> {
    let random: Vec<i64> = block_rand(2_000);

    let mut sorted = random.clone();
    sorted.sort_unstable();

    let mut reversed = sorted.clone();
    reversed.reverse();

    let few_distinct: Vec<i64> = random.iter().map(|v| v & 0x7).collect();

    vec![
        vec![],
        random[..1].to_vec(),
        random[..2].to_vec(),
        random[..97].to_vec(),
        sorted,
        reversed,
        few_distinct,
        random,
    ]
}

pub fn sort_suite<S, R, B, U>(sorter: &S, build: B, unbuild: U)
where
    S: Sorter,
    R: SortRange<Item = i64>,
    B: Fn(Vec<i64>) -> R,
    U: Fn(R) -> Vec<i64>,
{
    for family in input_families() {
        let mut expected = family.clone();
        expected.sort_unstable();

        let mut range = build(family);
        sorter.sort(&mut range);

        assert_eq!(unbuild(range), expected);
    }
}

pub fn stability_suite<S: Sorter>(sorter: &S) {
    let keys = block_rand::<i64>(2_000);
    let mut pairs: Vec<(i64, usize)> = keys
        .into_iter()
        .enumerate()
        .map(|(position, key)| (key & 0xF, position))
        .collect();

    sorter.sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));

    for w in pairs.windows(2) {
        assert!(w[0].0 <= w[1].0);
        if w[0].0 == w[1].0 {
            assert!(
                w[0].1 < w[1].1,
                "equal keys reordered: {:?} then {:?}",
                w[0],
                w[1]
            );
        }
    }
}

/// Wraps a `Vec` but only admits to forward traversal.
pub struct ForwardOnly<T> {
    items: Vec<T>,
}

impl<T> ForwardOnly<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Slots<T> for ForwardOnly<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn slots(&mut self) -> Vec<&mut T> {
        self.items.iter_mut().collect()
    }
}

impl<T> SortRange for ForwardOnly<T> {
    type Item = T;
    const TIER: Capability = Capability::Forward;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn view(&mut self) -> RangeView<'_, T> {
        RangeView::Forward(self)
    }
}

/// Wraps a `Vec` but panics if traversed more than once, which is the
/// contract single-pass input holds strategies to.
pub struct OnePass<T> {
    items: Vec<T>,
    taken: bool,
}

impl<T> OnePass<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            taken: false,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Slots<T> for OnePass<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn slots(&mut self) -> Vec<&mut T> {
        if std::mem::replace(&mut self.taken, true) {
            panic!("single-pass range traversed twice");
        }

        self.items.iter_mut().collect()
    }
}

impl<T> SortRange for OnePass<T> {
    type Item = T;
    const TIER: Capability = Capability::SinglePass;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn view(&mut self) -> RangeView<'_, T> {
        RangeView::SinglePass(self)
    }
}

/// Declares whatever requirement and stability the test asks for, counts
/// how often it gets picked, then hands the real work to `inner`.
#[derive(Clone, Copy)]
pub struct Spy<'c, S, const RANK: u8, const STABLE_FLAG: bool = true> {
    hits: &'c Cell<usize>,
    inner: S,
}

impl<'c, S, const RANK: u8, const STABLE_FLAG: bool> Spy<'c, S, RANK, STABLE_FLAG> {
    pub fn new(hits: &'c Cell<usize>, inner: S) -> Self {
        Self { hits, inner }
    }
}

impl<'c, S, const RANK: u8, const STABLE_FLAG: bool> Sorter for Spy<'c, S, RANK, STABLE_FLAG>
where
    S: Sorter,
{
    const REQUIRES: Capability = Capability::from_rank(RANK);
    const STABLE: bool = STABLE_FLAG;

    fn sort_view<T, C>(&self, view: RangeView<'_, T>, compare: &mut C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.hits.set(self.hits.get() + 1);
        self.inner.sort_view(view, compare);
    }
}
