//! Composition-time dispatch tables.
//!
//! Every [`Sorter`](crate::Sorter) carries a [`DispatchProfile`]: for each
//! input tier, the best (most specific) requirement rank reachable in that
//! sorter's subtree, or nothing if the subtree cannot serve the tier at all.
//! Leaves get a profile straight from their declared requirement; composites
//! merge member profiles pointwise. All of it is `const`, so the full
//! selection table for any composite exists before anything runs.
//!
//! Merging takes the pointwise minimum rank, which is associative. That is
//! what makes nested composites behave exactly as if their member lists had
//! been spliced into the parent: the nested composite reports the best leaf
//! rank it contains, the outer scan picks the earliest member achieving the
//! overall best, and that member's own routing repeats the same rule one
//! level down.

use crate::capability::Capability;

/// Per-tier selection table for one sorter subtree.
///
/// `best_at(tier)` answers: if the input offers `tier`, what is the smallest
/// requirement rank of any eligible leaf below this point? `None` means no
/// leaf is eligible and composition against such an input must not build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchProfile {
    best: [Option<u8>; Capability::COUNT],
}

impl DispatchProfile {
    /// Profile of a leaf strategy declaring `requires`. Eligible for its own
    /// tier and every more capable one, always at its own rank.
    pub const fn leaf(requires: Capability) -> Self {
        let rank = requires.rank();
        let mut best = [None; Capability::COUNT];
        let mut tier = 0;
        while tier < Capability::COUNT {
            if rank >= tier as u8 {
                best[tier] = Some(rank);
            }
            tier += 1;
        }
        DispatchProfile { best }
    }

    /// Combine two member profiles: per tier, the more specific (smaller)
    /// rank wins; a tier only one side serves keeps that side's rank.
    pub const fn merge(a: Self, b: Self) -> Self {
        let mut best = [None; Capability::COUNT];
        let mut tier = 0;
        while tier < Capability::COUNT {
            best[tier] = min_rank(a.best[tier], b.best[tier]);
            tier += 1;
        }
        DispatchProfile { best }
    }

    #[inline]
    pub const fn best_at(&self, tier: Capability) -> Option<u8> {
        self.best[tier.rank() as usize]
    }

    /// Whether any leaf below this point can sort an input of `tier`.
    #[inline]
    pub const fn supports(&self, tier: Capability) -> bool {
        self.best_at(tier).is_some()
    }
}

const fn min_rank(a: Option<u8>, b: Option<u8>) -> Option<u8> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => {
            if a <= b {
                Some(a)
            } else {
                Some(b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability::*;

    #[test]
    fn leaf_serves_its_own_and_stronger_tiers() {
        let p = DispatchProfile::leaf(Forward);

        assert_eq!(p.best_at(RandomAccess), Some(2));
        assert_eq!(p.best_at(Bidirectional), Some(2));
        assert_eq!(p.best_at(Forward), Some(2));
        assert_eq!(p.best_at(SinglePass), None);
    }

    #[test]
    fn random_access_leaf_serves_one_tier() {
        let p = DispatchProfile::leaf(RandomAccess);

        assert_eq!(p.best_at(RandomAccess), Some(0));
        assert!(!p.supports(Bidirectional));
        assert!(!p.supports(Forward));
        assert!(!p.supports(SinglePass));
    }

    #[test]
    fn merge_prefers_the_more_specific_member() {
        let fwd = DispatchProfile::leaf(Forward);
        let ra = DispatchProfile::leaf(RandomAccess);
        let merged = DispatchProfile::merge(fwd, ra);

        // On random access input the random access member is closer.
        assert_eq!(merged.best_at(RandomAccess), Some(0));
        // Below that only the forward member remains eligible.
        assert_eq!(merged.best_at(Bidirectional), Some(2));
        assert_eq!(merged.best_at(Forward), Some(2));
        assert_eq!(merged.best_at(SinglePass), None);
    }

    #[test]
    fn merge_is_associative() {
        let a = DispatchProfile::leaf(RandomAccess);
        let b = DispatchProfile::leaf(Bidirectional);
        let c = DispatchProfile::leaf(SinglePass);

        let left = DispatchProfile::merge(DispatchProfile::merge(a, b), c);
        let right = DispatchProfile::merge(a, DispatchProfile::merge(b, c));
        assert_eq!(left, right);
    }

    #[test]
    fn merge_is_commutative_on_ranks() {
        let a = DispatchProfile::leaf(Forward);
        let b = DispatchProfile::leaf(Bidirectional);

        assert_eq!(DispatchProfile::merge(a, b), DispatchProfile::merge(b, a));
    }
}
