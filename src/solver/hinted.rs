//! Games with a hinted first letter
//!
//! The player is shown the length of the word and every position of its first letter,
//! e.g. `a__a_`. Words with the same hint form an independent game, so a mixed word list
//! splits into groups that are each solved on their own.

use super::json::HintedDocument;
use super::strategy::Strategy;
use crate::error::SolverError;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// What a hint reveals: length, first letter and where the first letter occurs
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HintKey {
    pub length: usize,
    pub first: char,
    pub positions: Vec<usize>,
}

impl HintKey {
    /// Key of a word or of a hint, or `None` if it is empty
    ///
    /// Characters other than the first letter are ignored, so `"abca"` and `"a__a"`
    /// share a key.
    #[must_use]
    pub fn of(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        let first = word.chars().next()?;
        let positions = word
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == first)
            .map(|(i, _)| i)
            .collect();

        Some(Self {
            length: word.chars().count(),
            first,
            positions,
        })
    }

    /// Render as a hint such as `a__a`
    #[must_use]
    pub fn hint(&self) -> String {
        let mut chars = vec!['_'; self.length];
        for &position in &self.positions {
            chars[position] = self.first;
        }
        chars.into_iter().collect()
    }
}

/// The hint shown for a word
///
/// # Examples
/// ```
/// use hangman_solver::solver::make_hint;
///
/// assert_eq!(make_hint("Abcda"), "a___a");
/// ```
#[must_use]
pub fn make_hint(word: &str) -> String {
    HintKey::of(word).map(|key| key.hint()).unwrap_or_default()
}

/// Words sharing one hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub key: HintKey,
    pub words: Vec<String>,
}

/// A mixed word list split by hint, with one strategy per group
#[derive(Debug, Clone)]
pub struct HintedGame {
    words: Vec<String>,
    groups: Vec<WordGroup>,
    index: FxHashMap<HintKey, usize>,
    strategies: Vec<Strategy>,
}

impl HintedGame {
    /// Group `words` by hint; groups keep the order of their first word
    ///
    /// # Errors
    /// Returns `SolverError::EmptyWord` if any word is empty.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, SolverError> {
        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        let mut groups: Vec<WordGroup> = Vec::new();
        let mut index = FxHashMap::default();

        for word in &words {
            let key = HintKey::of(word).ok_or(SolverError::EmptyWord)?;
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                groups.push(WordGroup {
                    key,
                    words: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].words.push(word.clone());
        }

        Ok(Self {
            words,
            groups,
            index,
            strategies: Vec::new(),
        })
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn groups(&self) -> &[WordGroup] {
        &self.groups
    }

    #[must_use]
    pub fn is_strategized(&self) -> bool {
        !self.strategies.is_empty()
    }

    /// Solve every group, one after another; does nothing if already solved
    ///
    /// # Errors
    /// Returns the first error from [`Strategy::from_words`].
    pub fn strategize(&mut self) -> Result<(), SolverError> {
        self.strategize_with(|_, _| {})
    }

    /// Like [`strategize`](Self::strategize), reporting `(done, total)` after each group
    ///
    /// # Errors
    /// Returns the first error from [`Strategy::from_words`].
    pub fn strategize_with<F: FnMut(usize, usize)>(&mut self, mut progress: F) -> Result<(), SolverError> {
        if self.is_strategized() {
            return Ok(());
        }

        let total = self.groups.len();
        let mut strategies = Vec::with_capacity(total);
        for (i, group) in self.groups.iter().enumerate() {
            let strategy = Strategy::from_words(&group.words)?;
            log::debug!(
                "strategized {} ({} words, {} max errors)",
                group.key.hint(),
                group.words.len(),
                strategy.max_errors()
            );
            strategies.push(strategy);
            progress(i + 1, total);
        }

        log::info!("strategized {total} groups");
        self.strategies = strategies;
        Ok(())
    }

    /// Solve every group on the rayon thread pool; does nothing if already solved
    ///
    /// Produces the same strategies as [`strategize`](Self::strategize).
    ///
    /// # Errors
    /// Returns an error from [`Strategy::from_words`].
    pub fn strategize_parallel(&mut self) -> Result<(), SolverError> {
        if self.is_strategized() {
            return Ok(());
        }

        self.strategies = self
            .groups
            .par_iter()
            .map(|group| Strategy::from_words(&group.words))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("strategized {} groups in parallel", self.groups.len());
        Ok(())
    }

    /// Strategy for the group a hint such as `a__a` describes
    ///
    /// # Errors
    /// Returns `SolverError::UnknownHint` if no group matches or nothing is solved yet.
    pub fn get_strat_by_hint(&self, hint: &str) -> Result<&Strategy, SolverError> {
        HintKey::of(hint)
            .and_then(|key| self.index.get(&key))
            .and_then(|&slot| self.strategies.get(slot))
            .ok_or_else(|| SolverError::UnknownHint(hint.to_string()))
    }

    /// Solved groups with their hints, in group order
    pub fn strategies(&self) -> impl Iterator<Item = (&HintKey, &Strategy)> {
        self.groups
            .iter()
            .map(|group| &group.key)
            .zip(&self.strategies)
    }

    /// Export every solved group's decision tree, keyed by hint
    #[must_use]
    pub fn json(&self) -> HintedDocument {
        HintedDocument {
            words: self.words.clone(),
            strategies: self
                .strategies()
                .map(|(key, strategy)| (key.hint(), strategy.start().json_or_won()))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}
