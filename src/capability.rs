/// Traversal capability of a sortable input, ordered from most to least
/// capable. Strategies declare the weakest tier they can work with, inputs
/// declare the tier they actually offer, and dispatch matches the two.
///
/// The numeric rank runs the other way: `RandomAccess` is rank 0 and
/// `SinglePass` is rank 3, so a larger rank means a less demanding
/// requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Indexable in O(1), contiguous or contiguable storage.
    RandomAccess,
    /// Traversable from both ends, no random indexing.
    Bidirectional,
    /// Traversable front-to-back, any number of passes.
    Forward,
    /// A single front-to-back pass.
    SinglePass,
}

impl Capability {
    /// Number of tiers in the model.
    pub const COUNT: usize = 4;

    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Capability::RandomAccess => 0,
            Capability::Bidirectional => 1,
            Capability::Forward => 2,
            Capability::SinglePass => 3,
        }
    }

    /// Inverse of [`rank`](Self::rank). Ranks above 3 are a caller bug.
    #[inline]
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Capability::RandomAccess,
            1 => Capability::Bidirectional,
            2 => Capability::Forward,
            3 => Capability::SinglePass,
            _ => panic!("capability ranks run from 0 to 3"),
        }
    }

    /// Whether a strategy requiring `self` can run on an input offering
    /// `input`. A requirement is satisfied by its own tier or any more
    /// capable one, so `SinglePass` accepts everything and `RandomAccess`
    /// accepts only random access.
    #[inline]
    pub const fn accepts(self, input: Capability) -> bool {
        self.rank() >= input.rank()
    }

    /// The less capable of two tiers. Folding member requirements with this
    /// yields a composite's overall requirement: the composite as a whole
    /// can only promise what its least demanding member still satisfies.
    #[inline]
    pub const fn weaker(self, other: Capability) -> Capability {
        if self.rank() >= other.rank() {
            self
        } else {
            other
        }
    }
}
