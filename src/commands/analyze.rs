//! Word list analysis command
//!
//! Finds the largest cluster of words that differ in a single position, where the
//! differing letter appears nowhere else in the word. Such a cluster can only be
//! told apart one letter at a time, so its size bounds how hard the list is.

use crate::wordlists::loader::remove_capitalized_duplicates;
use rustc_hash::FxHashSet;

/// Result of analyzing a word list
pub struct AnalysisResult {
    pub total_words: usize,
    /// Largest one-letter-away group found first
    pub largest: Vec<String>,
    /// Other groups of the same size
    pub alternatives: Vec<Vec<String>>,
}

impl AnalysisResult {
    /// Wrong guesses the largest group forces on any strategy
    #[must_use]
    pub fn forced_errors(&self) -> usize {
        self.largest.len().saturating_sub(1)
    }
}

/// Groups of words matching `word` everywhere except one position
///
/// Each (position, remaining letters) combination is examined only once across calls.
fn one_letter_away(
    word: &[char],
    words: &[Vec<char>],
    checked: &mut FxHashSet<(usize, Vec<char>)>,
) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();

    for i in 0..word.len() {
        let mut rest = word.to_vec();
        rest.remove(i);
        if !checked.insert((i, rest.clone())) {
            continue;
        }

        let group = words
            .iter()
            .enumerate()
            .filter(|(_, other)| {
                other.len() == word.len()
                    && other[..i] == rest[..i]
                    && other[i + 1..] == rest[i..]
                    && !rest.contains(&other[i])
            })
            .map(|(id, _)| id)
            .collect();
        groups.push(group);
    }

    groups
}

/// Find the largest one-letter-away group of `words`
///
/// Words are compared case-insensitively; later spellings of a word are ignored.
#[must_use]
pub fn analyze_words(words: &[String]) -> AnalysisResult {
    let unique = remove_capitalized_duplicates(words.to_vec());
    let chars: Vec<Vec<char>> = unique
        .iter()
        .map(|word| word.to_lowercase().chars().collect())
        .collect();

    let mut largest: Vec<usize> = Vec::new();
    let mut alternatives: Vec<Vec<usize>> = Vec::new();
    let mut checked = FxHashSet::default();

    for word in &chars {
        let Some(best) = one_letter_away(word, &chars, &mut checked)
            .into_iter()
            .filter(|group| !group.is_empty())
            .max_by_key(Vec::len)
        else {
            continue;
        };

        if best.len() > largest.len() {
            largest = best;
            alternatives.clear();
        } else if best.len() == largest.len() {
            alternatives.push(best);
        }
    }

    let spell = |group: Vec<usize>| group.into_iter().map(|id| unique[id].clone()).collect();
    log::debug!(
        "largest one-letter-away group has {} words, {} alternatives",
        largest.len(),
        alternatives.len()
    );

    AnalysisResult {
        total_words: unique.len(),
        largest: spell(largest),
        alternatives: alternatives.into_iter().map(spell).collect(),
    }
}
