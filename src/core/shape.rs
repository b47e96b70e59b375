//! Word shapes
//!
//! A shape records, for every letter of the alphabet, the positions where that letter
//! occurs in a word. Restricting a shape to a handful of letters yields exactly what a
//! player learns by guessing those letters, so two words with equal restricted shapes
//! cannot be told apart by that evidence.

use super::Alphabet;

/// Per-letter character positions of a word
///
/// Indexed by alphabet position; each entry lists the positions (in `char`s, ascending)
/// where that letter occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordShape(Vec<Vec<usize>>);

impl WordShape {
    /// Calculate the shape of `word` over `alphabet`
    ///
    /// Characters outside the alphabet are ignored.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Alphabet, WordShape};
    ///
    /// let alphabet = Alphabet::new("abc").unwrap();
    /// let shape = WordShape::new("abacaba", &alphabet);
    ///
    /// assert_eq!(shape.positions(0), &[0, 2, 4, 6]);
    /// assert_eq!(shape.positions(1), &[1, 5]);
    /// assert_eq!(shape.positions(2), &[3]);
    /// ```
    #[must_use]
    pub fn new(word: &str, alphabet: &Alphabet) -> Self {
        let mut positions = vec![Vec::new(); alphabet.len()];
        for (position, letter) in word.chars().enumerate() {
            if let Some(index) = alphabet.index_of(letter) {
                positions[index].push(position);
            }
        }
        Self(positions)
    }

    /// Positions of the letter with the given alphabet index
    ///
    /// # Panics
    /// Panics if the index is outside the alphabet the shape was built over
    #[inline]
    #[must_use]
    pub fn positions(&self, letter: usize) -> &[usize] {
        &self.0[letter]
    }

    /// The shape as seen through the given letters only
    ///
    /// Entries follow the order of `letters`.
    #[must_use]
    pub fn restrict(&self, letters: &[usize]) -> Self {
        Self(letters.iter().map(|&letter| self.0[letter].clone()).collect())
    }

    /// Number of letters the shape covers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Vec<usize>] {
        &self.0
    }
}

impl From<Vec<Vec<usize>>> for WordShape {
    fn from(positions: Vec<Vec<usize>>) -> Self {
        Self(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(word: &str, alphabet: &str) -> WordShape {
        WordShape::new(word, &Alphabet::new(alphabet).unwrap())
    }

    #[test]
    fn shape_of_distinct_letters() {
        assert_eq!(
            shape("abc", "abc"),
            WordShape::from(vec![vec![0], vec![1], vec![2]])
        );
    }

    #[test]
    fn shape_of_repeated_letters() {
        assert_eq!(
            shape("abacaba", "abc"),
            WordShape::from(vec![vec![0, 2, 4, 6], vec![1, 5], vec![3]])
        );
        assert_eq!(
            shape("abacaba", "bacd"),
            WordShape::from(vec![vec![1, 5], vec![0, 2, 4, 6], vec![3], vec![]])
        );
    }

    #[test]
    fn shape_of_empty_word() {
        let empty = shape("", "bacde");
        assert_eq!(empty.len(), 5);
        assert!(empty.as_slice().iter().all(Vec::is_empty));
    }

    #[test]
    fn shape_counts_chars_not_bytes() {
        let shape = shape("čaša", "ačš");
        assert_eq!(shape.positions(0), &[1, 3]);
        assert_eq!(shape.positions(1), &[0]);
        assert_eq!(shape.positions(2), &[2]);
    }

    #[test]
    fn restricted_shapes_tell_words_apart() {
        let alphabet = Alphabet::new("abcd").unwrap();
        let aba = WordShape::new("aba", &alphabet);
        let aaa = WordShape::new("aaa", &alphabet);
        let aca = WordShape::new("aca", &alphabet);

        // Guessing 'a' separates aaa from the others
        assert_eq!(aba.restrict(&[0]), aca.restrict(&[0]));
        assert_ne!(aba.restrict(&[0]), aaa.restrict(&[0]));

        // Guessing 'd' reveals nothing
        assert_eq!(aba.restrict(&[3]), aaa.restrict(&[3]));

        // Guessing 'a' and 'b' separates all three
        assert_ne!(aba.restrict(&[0, 1]), aca.restrict(&[0, 1]));
        assert_eq!(aba.restrict(&[1, 0]).positions(0), &[1]);
    }
}
