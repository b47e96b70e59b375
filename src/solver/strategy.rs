//! Solved games
//!
//! A [`Strategy`] keeps only the decisions actually played by the optimal strategy,
//! flattened into a map, and the full decision tree built from them.

use super::choice::Choice;
use super::json::StrategyDocument;
use super::state::StateKey;
use super::tree::GameStateTree;
use crate::core::{Alphabet, Dictionary, LetterSet};
use crate::error::SolverError;
use rustc_hash::FxHashMap;

/// Flattened decisions: (sorted guessed letters, smallest word id) to letters to guess
pub type Decisions = FxHashMap<StateKey, String>;

/// An immutable solved game
#[derive(Debug, Clone)]
pub struct Strategy {
    dictionary: Dictionary,
    decisions: Decisions,
    max_errors: u32,
    start: Choice,
}

/// The course of one game played by a strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playthrough {
    pub word: String,
    pub guesses: Vec<String>,
    pub wrong_guesses: u32,
    pub revealed: String,
}

impl Strategy {
    /// Build a strategy from a solved tree
    ///
    /// # Errors
    /// Returns `SolverError::PreconditionNotMet` if [`GameStateTree::solve_all`] has not run.
    pub fn from_tree(tree: &GameStateTree) -> Result<Self, SolverError> {
        let root = StateKey::root();
        let decisions = tree.extract_strategy(&root)?;
        let max_errors = tree
            .outcome(&root)
            .map(|outcome| outcome.errors)
            .ok_or(SolverError::PreconditionNotMet)?;

        let dictionary = tree.dictionary().clone();
        let start = Choice::build(
            LetterSet::EMPTY,
            dictionary.ids().collect(),
            &dictionary,
            &decisions,
        )?;

        Ok(Self {
            dictionary,
            decisions,
            max_errors,
            start,
        })
    }

    /// Solve a list of equal-length words
    ///
    /// The alphabet is every distinct letter of the words, sorted.
    ///
    /// # Errors
    /// Returns `SolverError` if the list is empty or the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::Strategy;
    ///
    /// let strategy = Strategy::from_words(&["aa", "bb", "cc", "dd"]).unwrap();
    /// assert_eq!(strategy.max_errors(), 3);
    /// assert_eq!(strategy.start().letters(), "a");
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, SolverError> {
        let Some(first) = words.first() else {
            return Err(SolverError::EmptyWordList);
        };

        let expected = first.as_ref().to_lowercase().chars().count();
        for word in words {
            let found = word.as_ref().to_lowercase().chars().count();
            if found != expected {
                return Err(SolverError::MixedLengths { expected, found });
            }
        }

        let alphabet = Alphabet::from_words(words)?;
        let mut tree = GameStateTree::from_dictionary(Dictionary::new(words, alphabet)?);
        tree.solve_all();
        Self::from_tree(&tree)
    }

    /// Letters to guess for `subset`, the words consistent with `used_letters`
    ///
    /// The subset is not checked against the evidence; passing a subset the evidence
    /// does not describe gives a meaningless answer.
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentLookup` if the strategy never reaches this state.
    pub fn get_strategy(&self, subset: &[usize], used_letters: &str) -> Result<&str, SolverError> {
        lookup(&self.decisions, subset, used_letters)
    }

    /// Worst-case number of wrong guesses over all words
    #[inline]
    #[must_use]
    pub const fn max_errors(&self) -> u32 {
        self.max_errors
    }

    /// Root of the decision tree
    #[inline]
    #[must_use]
    pub const fn start(&self) -> &Choice {
        &self.start
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        self.dictionary.alphabet()
    }

    #[inline]
    #[must_use]
    pub const fn decisions(&self) -> &Decisions {
        &self.decisions
    }

    /// Follow the decision tree until `word` is revealed
    ///
    /// # Errors
    /// Returns `SolverError::UnknownWord` if the word is not part of the game.
    pub fn play(&self, word: &str) -> Result<Playthrough, SolverError> {
        let id = self
            .dictionary
            .id_of(word)
            .ok_or_else(|| SolverError::UnknownWord(word.to_string()))?;
        let contained = self.dictionary.letters(id);

        let mut node = &self.start;
        let mut guesses = Vec::new();
        let mut wrong_guesses = 0;

        while !node.is_won() {
            let guessed = self.dictionary.letter_set(node.letters());
            wrong_guesses += guessed.difference(contained).len() as u32;
            guesses.push(node.letters().to_string());
            node = node.advance(self, word)?;
        }

        Ok(Playthrough {
            word: self.dictionary.word(id).to_string(),
            guesses,
            wrong_guesses,
            revealed: node.pattern().to_string(),
        })
    }

    /// Export the solved game
    #[must_use]
    pub fn json(&self) -> StrategyDocument {
        StrategyDocument {
            max_errors: self.max_errors,
            alphabet: self.dictionary.alphabet().to_string(),
            words: self.dictionary.words().to_vec(),
            strategy: self.start.json_or_won(),
        }
    }
}

pub(crate) fn lookup<'a>(
    decisions: &'a Decisions,
    subset: &[usize],
    used_letters: &str,
) -> Result<&'a str, SolverError> {
    let key = StateKey::for_subset(used_letters, subset).ok_or(SolverError::EmptyWordList)?;
    decisions
        .get(&key)
        .map(String::as_str)
        .ok_or_else(|| SolverError::InconsistentLookup {
            used_letters: key.used_letters().to_string(),
            min_id: key.min_id(),
        })
}
