//! Word lists for hangman solving
//!
//! Provides an embedded sample list and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_words_are_lowercase_and_nonempty() {
        for &word in SAMPLE {
            assert!(!word.is_empty());
            assert_eq!(word, word.to_lowercase(), "Word '{word}' is not lowercase");
            assert!(
                word.chars().all(char::is_alphabetic),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn sample_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = SAMPLE.iter().collect();
        assert_eq!(unique.len(), SAMPLE.len());
    }
}
