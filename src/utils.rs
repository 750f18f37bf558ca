use std::mem;

/// Swap the contents of two slots. Safe for any pair of positions, the
/// degenerate `i == j` included.
#[inline]
pub(crate) fn swap_slots<T>(slots: &mut [&mut T], i: usize, j: usize) {
    if i == j {
        return;
    }

    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (a, b) = slots.split_at_mut(hi);
    mem::swap(&mut *a[lo], &mut *b[0]);
}

/// Rearrange slot contents so that position `dest` ends up holding what
/// position `order[dest]` held. `order` must be a permutation of
/// `0..slots.len()`.
pub(crate) fn apply_order<T>(slots: &mut [&mut T], order: &[usize]) {
    debug_assert_eq!(slots.len(), order.len());

    // The cycle-walk below applies the inverse of the permutation it is
    // handed, so hand it the inverse.
    let mut inv = vec![0usize; order.len()];
    for (dest, &src) in order.iter().enumerate() {
        inv[src] = dest;
    }

    for i in 0..inv.len() {
        while inv[i] != i {
            let j = inv[i];
            swap_slots(slots, i, j);
            inv.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots_of(values: &mut [u32]) -> Vec<&mut u32> {
        values.iter_mut().collect()
    }

    #[test]
    fn swap_slots_exchanges_contents() {
        let mut values = [1u32, 2, 3];
        let mut slots = slots_of(&mut values);

        swap_slots(&mut slots, 0, 2);
        swap_slots(&mut slots, 1, 1);

        assert_eq!(values, [3, 2, 1]);
    }

    #[test]
    fn apply_order_places_sources_at_destinations() {
        let mut values = [10u32, 20, 30];
        let mut slots = slots_of(&mut values);

        // Position 0 takes the value from index 2, and so on.
        apply_order(&mut slots, &[2, 0, 1]);

        assert_eq!(values, [30, 10, 20]);
    }

    #[test]
    fn apply_order_handles_identity_and_reversal() {
        let mut values = [1u32, 2, 3, 4];
        apply_order(&mut slots_of(&mut values), &[0, 1, 2, 3]);
        assert_eq!(values, [1, 2, 3, 4]);

        apply_order(&mut slots_of(&mut values), &[3, 2, 1, 0]);
        assert_eq!(values, [4, 3, 2, 1]);
    }

    #[test]
    fn apply_order_resolves_long_cycles() {
        let mut values = [0u32, 1, 2, 3, 4, 5];
        let order = [5, 0, 4, 1, 3, 2];
        apply_order(&mut slots_of(&mut values), &order);

        let expected: Vec<u32> = order.iter().map(|&i| i as u32).collect();
        assert_eq!(values.to_vec(), expected);
    }
}
