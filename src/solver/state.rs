//! Solver state identifiers and results

use std::fmt;

/// Canonical identifier of a game state
///
/// Within one search from the root, the sorted guessed letters together with the smallest
/// word id still in play pin down exactly one set of candidate words, so the candidates
/// themselves never need to be hashed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    used_letters: String,
    min_id: usize,
}

impl StateKey {
    /// Create a key; `used_letters` may be given in any order
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::StateKey;
    ///
    /// assert_eq!(StateKey::new("cb", 2), StateKey::new("bc", 2));
    /// assert_eq!(StateKey::new("cb", 2).used_letters(), "bc");
    /// ```
    #[must_use]
    pub fn new(used_letters: &str, min_id: usize) -> Self {
        Self {
            used_letters: sorted_letters(used_letters),
            min_id,
        }
    }

    /// The state before any guess, with every word in play
    #[must_use]
    pub fn root() -> Self {
        Self::new("", 0)
    }

    /// Key for a set of candidates, or `None` if there are no candidates
    #[must_use]
    pub fn for_subset(used_letters: &str, subset: &[usize]) -> Option<Self> {
        subset
            .iter()
            .min()
            .map(|&min_id| Self::new(used_letters, min_id))
    }

    #[inline]
    #[must_use]
    pub fn used_letters(&self) -> &str {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn min_id(&self) -> usize {
        self.min_id
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.used_letters, self.min_id)
    }
}

/// Value of a solved state
///
/// `errors` is the smallest achievable worst-case number of wrong guesses and
/// `letters` the guess realizing it. Several letters mean they are guessed at once;
/// no letters means nothing is left to guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub errors: u32,
    pub letters: String,
}

impl Outcome {
    #[must_use]
    pub fn new(errors: u32, letters: impl Into<String>) -> Self {
        Self {
            errors,
            letters: letters.into(),
        }
    }
}

/// Sort letters by code point
pub(crate) fn sorted_letters(letters: &str) -> String {
    let mut chars: Vec<char> = letters.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
