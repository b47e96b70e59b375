//! Compact sets of alphabet letters
//!
//! Letters are referred to by their index in the [`Alphabet`](super::Alphabet), so a set
//! fits in a single `u128` and set algebra is a handful of bit operations.

/// A set of alphabet indices, stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u128);

impl LetterSet {
    /// Largest alphabet a set can describe
    pub const CAPACITY: usize = 128;

    pub const EMPTY: Self = Self(0);

    /// The set of the first `len` letters of the alphabet
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds [`Self::CAPACITY`]
    #[must_use]
    pub const fn full(len: usize) -> Self {
        debug_assert!(len <= Self::CAPACITY, "letter set capacity exceeded");
        if len >= Self::CAPACITY {
            Self(u128::MAX)
        } else {
            Self((1u128 << len) - 1)
        }
    }

    #[inline]
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        Self(self.0 | (1u128 << index))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        self.0 & (1u128 << index) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the indices in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(index)
        })
    }
}

impl FromIterator<usize> for LetterSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}
