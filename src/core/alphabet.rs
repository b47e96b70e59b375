//! Hangman alphabet
//!
//! The alphabet fixes the order of the letters. That order defines every letter's index,
//! which is how [`WordShape`](super::WordShape) and [`LetterSet`] refer to letters.

use super::LetterSet;
use crate::error::SolverError;
use std::fmt;

/// Ordered sequence of distinct lowercase letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from its letters, in order
    ///
    /// Letters are lowercased, since hangman does not distinguish case.
    ///
    /// # Errors
    /// Returns `SolverError` if a letter repeats or there are more than
    /// [`LetterSet::CAPACITY`] letters.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("abCd").unwrap();
    /// assert_eq!(alphabet.index_of('c'), Some(2));
    /// assert!(Alphabet::new("aba").is_err());
    /// ```
    pub fn new(letters: &str) -> Result<Self, SolverError> {
        let letters: Vec<char> = letters.to_lowercase().chars().collect();

        if letters.len() > LetterSet::CAPACITY {
            return Err(SolverError::AlphabetTooLarge(letters.len()));
        }

        for (i, &letter) in letters.iter().enumerate() {
            if letters[..i].contains(&letter) {
                return Err(SolverError::DuplicateLetter(letter));
            }
        }

        Ok(Self { letters })
    }

    /// The sorted distinct letters occurring in `words`
    ///
    /// # Errors
    /// Returns `SolverError::AlphabetTooLarge` if the words use more than
    /// [`LetterSet::CAPACITY`] distinct letters.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, SolverError> {
        let mut letters: Vec<char> = words
            .iter()
            .flat_map(|word| word.as_ref().to_lowercase().chars().collect::<Vec<_>>())
            .collect();
        letters.sort_unstable();
        letters.dedup();

        if letters.len() > LetterSet::CAPACITY {
            return Err(SolverError::AlphabetTooLarge(letters.len()));
        }
        Ok(Self { letters })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Get the letter at an index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter(&self, index: usize) -> char {
        self.letters[index]
    }

    #[inline]
    #[must_use]
    pub fn index_of(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|&c| c == letter)
    }

    /// Every letter of the alphabet as a set
    #[must_use]
    pub const fn all(&self) -> LetterSet {
        LetterSet::full(self.letters.len())
    }

    /// Collect the letters of a set into a string, in alphabet order
    #[must_use]
    pub fn spell(&self, set: LetterSet) -> String {
        set.iter().map(|index| self.letters[index]).collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
