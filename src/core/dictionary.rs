//! Word storage
//!
//! Every word gets several representations, all addressed by its id (its index in the
//! input list): the original spelling, the lowercase text, its [`WordShape`] and the
//! [`LetterSet`] of letters it contains.

use super::{Alphabet, LetterSet, WordShape};
use crate::error::SolverError;
use rustc_hash::FxHashMap;
use std::ops::Range;

/// Words of one game with their derived representations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    alphabet: Alphabet,
    original: Vec<String>,
    words: Vec<String>,
    shapes: Vec<WordShape>,
    letters: Vec<LetterSet>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build the representations of `words` over `alphabet`
    ///
    /// Words are compared case-insensitively; the original spelling is kept for output.
    ///
    /// # Errors
    /// Returns `SolverError::ForeignLetter` if a word uses a letter outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Alphabet, Dictionary};
    ///
    /// let dictionary = Dictionary::new(&["abc", "Aaa"], Alphabet::new("abcd").unwrap()).unwrap();
    /// assert_eq!(dictionary.word(1), "aaa");
    /// assert_eq!(dictionary.original(1), "Aaa");
    /// assert_eq!(dictionary.id_of("AAA"), Some(1));
    /// ```
    pub fn new<S: AsRef<str>>(words: &[S], alphabet: Alphabet) -> Result<Self, SolverError> {
        let original: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        let lowercase: Vec<String> = original.iter().map(|w| w.to_lowercase()).collect();

        let mut letters = Vec::with_capacity(lowercase.len());
        for word in &lowercase {
            let mut set = LetterSet::EMPTY;
            for letter in word.chars() {
                let index = alphabet
                    .index_of(letter)
                    .ok_or_else(|| SolverError::ForeignLetter {
                        word: word.clone(),
                        letter,
                    })?;
                set = set.with(index);
            }
            letters.push(set);
        }

        let shapes = lowercase
            .iter()
            .map(|word| WordShape::new(word, &alphabet))
            .collect();

        // Duplicates resolve to their first occurrence
        let mut index = FxHashMap::default();
        for (id, word) in lowercase.iter().enumerate() {
            index.entry(word.clone()).or_insert(id);
        }

        Ok(Self {
            alphabet,
            original,
            words: lowercase,
            shapes,
            letters,
            index,
        })
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All word ids
    #[inline]
    #[must_use]
    pub fn ids(&self) -> Range<usize> {
        0..self.words.len()
    }

    /// Lowercase text of a word
    #[inline]
    #[must_use]
    pub fn word(&self, id: usize) -> &str {
        &self.words[id]
    }

    /// Original spelling of a word
    #[inline]
    #[must_use]
    pub fn original(&self, id: usize) -> &str {
        &self.original[id]
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn original_words(&self) -> &[String] {
        &self.original
    }

    #[inline]
    #[must_use]
    pub fn shape(&self, id: usize) -> &WordShape {
        &self.shapes[id]
    }

    /// Letters contained in a word
    #[inline]
    #[must_use]
    pub fn letters(&self, id: usize) -> LetterSet {
        self.letters[id]
    }

    /// Number of characters in a word
    #[must_use]
    pub fn word_len(&self, id: usize) -> usize {
        self.words[id].chars().count()
    }

    /// Id of a word, case-insensitive
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<usize> {
        self.index.get(&word.to_lowercase()).copied()
    }

    /// Translate letters into their alphabet indices
    ///
    /// Letters outside the alphabet are skipped.
    #[must_use]
    pub fn letter_indices(&self, letters: &str) -> Vec<usize> {
        letters
            .chars()
            .filter_map(|letter| self.alphabet.index_of(letter))
            .collect()
    }

    /// Convert alphabet letters into a set
    #[must_use]
    pub fn letter_set(&self, letters: &str) -> LetterSet {
        self.letter_indices(letters).into_iter().collect()
    }

    /// Occurrences of a letter across the given words
    #[must_use]
    pub fn frequency(&self, subset: &[usize], letter: usize) -> usize {
        subset
            .iter()
            .map(|&id| self.shapes[id].positions(letter).len())
            .sum()
    }

    /// The revealed form of a word: letters of `known` in place, `_` elsewhere
    #[must_use]
    pub fn reveal(&self, id: usize, known: LetterSet) -> String {
        self.words[id]
            .chars()
            .map(|letter| match self.alphabet.index_of(letter) {
                Some(index) if known.contains(index) => letter,
                _ => '_',
            })
            .collect()
    }
}
