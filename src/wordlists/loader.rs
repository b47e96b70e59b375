//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded sample.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed, blank lines are skipped and case-insensitive duplicates are
/// dropped, keeping the first spelling.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/sample.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to a word list
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::SAMPLE;
///
/// let words = words_from_slice(SAMPLE);
/// assert_eq!(words.len(), SAMPLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let words: Vec<String> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    remove_capitalized_duplicates(words)
}

/// Drop words that repeat an earlier word up to case
#[must_use]
pub fn remove_capitalized_duplicates(words: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.to_lowercase()))
        .collect()
}

/// Keep only the words with `length` letters
#[must_use]
pub fn with_length(words: &[String], length: usize) -> Vec<String> {
    words
        .iter()
        .filter(|word| word.chars().count() == length)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["miza", "riba", "roka"]);
        assert_eq!(words, vec!["miza", "riba", "roka"]);
    }

    #[test]
    fn words_from_slice_skips_blank_lines() {
        let words = words_from_slice(&["miza", "", "   ", " riba "]);
        assert_eq!(words, vec!["miza", "riba"]);
    }

    #[test]
    fn duplicates_keep_first_spelling() {
        let words = remove_capitalized_duplicates(vec![
            "Voda".to_string(),
            "reka".to_string(),
            "voda".to_string(),
            "REKA".to_string(),
        ]);
        assert_eq!(words, vec!["Voda", "reka"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn filter_by_length_counts_chars() {
        let words = words_from_slice(&["miš", "sir", "kruh", "hiša"]);
        assert_eq!(with_length(&words, 3), vec!["miš", "sir"]);
        assert_eq!(with_length(&words, 4), vec!["kruh", "hiša"]);
        assert!(with_length(&words, 5).is_empty());
    }

    #[test]
    fn load_from_sample_file() {
        let words = load_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.txt")).unwrap();
        assert_eq!(words.len(), crate::wordlists::SAMPLE_COUNT);
    }
}
