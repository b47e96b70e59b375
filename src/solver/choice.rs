//! Realized decision trees
//!
//! A [`Choice`] is one state reached while playing a [`Strategy`]: the letters guessed
//! there and one child per outcome the guess can reveal. The whole tree is built up
//! front, so playing it only walks existing nodes.

use super::grouping::group_words;
use super::json::ChoiceJson;
use super::state::sorted_letters;
use super::strategy::{Decisions, Strategy, lookup};
use crate::core::{Dictionary, LetterSet, WordShape};
use crate::error::SolverError;
use std::collections::BTreeMap;

/// A played game state and every state that can follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    used_letters: String,
    words: Vec<usize>,
    letters: String,
    letter_ids: Vec<usize>,
    pattern: String,
    branches: Vec<Branch>,
}

/// One outcome of a guess: what it revealed and where the game continues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub shape: WordShape,
    pub choice: Choice,
}

impl Choice {
    /// Build the decision tree for `words` once `used_letters` have been guessed
    ///
    /// # Errors
    /// Returns `SolverError::EmptyWordList` for an empty subset and
    /// `SolverError::InconsistentLookup` if the strategy has no decision for a state.
    pub fn new(used_letters: &str, words: Vec<usize>, strategy: &Strategy) -> Result<Self, SolverError> {
        if words.is_empty() {
            return Err(SolverError::EmptyWordList);
        }
        let dictionary = strategy.dictionary();
        Self::build(
            dictionary.letter_set(used_letters),
            words,
            dictionary,
            strategy.decisions(),
        )
    }

    pub(crate) fn build(
        used: LetterSet,
        words: Vec<usize>,
        dictionary: &Dictionary,
        decisions: &Decisions,
    ) -> Result<Self, SolverError> {
        let used_letters = sorted_letters(&dictionary.alphabet().spell(used));
        let pattern = words
            .first()
            .map(|&id| dictionary.reveal(id, used))
            .unwrap_or_default();

        let present = words
            .iter()
            .fold(LetterSet::EMPTY, |acc, &id| acc.union(dictionary.letters(id)));
        if present.is_subset(used) {
            return Ok(Self::won(used_letters, words, pattern));
        }

        let letters = lookup(decisions, &words, &used_letters)?.to_string();
        if letters.is_empty() {
            return Ok(Self::won(used_letters, words, pattern));
        }

        let letter_ids = dictionary.letter_indices(&letters);
        let next = used.union(letter_ids.iter().copied().collect());

        let branches = group_words(dictionary, &words, &letter_ids)
            .into_iter()
            .map(|group| {
                let shape = dictionary.shape(group[0]).restrict(&letter_ids);
                let choice = Self::build(next, group, dictionary, decisions)?;
                Ok(Branch { shape, choice })
            })
            .collect::<Result<Vec<_>, SolverError>>()?;

        Ok(Self {
            used_letters,
            words,
            letters,
            letter_ids,
            pattern,
            branches,
        })
    }

    fn won(used_letters: String, words: Vec<usize>, pattern: String) -> Self {
        Self {
            used_letters,
            words,
            letters: String::new(),
            letter_ids: Vec::new(),
            pattern,
            branches: Vec::new(),
        }
    }

    /// Letters guessed at this state; empty once the word is revealed
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Letters guessed before this state, sorted
    #[inline]
    #[must_use]
    pub fn used_letters(&self) -> &str {
        &self.used_letters
    }

    /// The word as revealed so far, `_` for hidden positions
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.letters.is_empty()
    }

    /// Ids of the words still possible
    #[inline]
    #[must_use]
    pub fn word_ids(&self) -> &[usize] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Words still possible at this state
    #[must_use]
    pub fn possible_words<'a>(&self, strategy: &'a Strategy) -> Vec<&'a str> {
        self.words
            .iter()
            .map(|&id| strategy.dictionary().word(id))
            .collect()
    }

    /// Guess this state's letters against `word` and move to the revealed outcome
    ///
    /// # Errors
    /// Returns `SolverError::UnknownWord` if the word is not in the game, and
    /// `SolverError::InconsistentLookup` if it cannot be reached from this state.
    pub fn advance<'a>(&'a self, strategy: &Strategy, word: &str) -> Result<&'a Self, SolverError> {
        let dictionary = strategy.dictionary();
        let id = dictionary
            .id_of(word)
            .ok_or_else(|| SolverError::UnknownWord(word.to_string()))?;
        let shape = dictionary.shape(id).restrict(&self.letter_ids);

        self.branches
            .iter()
            .find(|branch| branch.shape == shape)
            .map(|branch| &branch.choice)
            .ok_or_else(|| SolverError::InconsistentLookup {
                used_letters: sorted_letters(&format!("{}{}", self.used_letters, self.letters)),
                min_id: id,
            })
    }

    /// Serialize the subtree rooted here
    #[must_use]
    pub fn json_or_won(&self) -> ChoiceJson {
        if self.is_won() {
            return ChoiceJson::Won;
        }

        let outcomes: BTreeMap<String, ChoiceJson> = self
            .branches
            .iter()
            .map(|branch| (branch.choice.pattern.clone(), branch.choice.json_or_won()))
            .collect();

        ChoiceJson::Guess {
            letters: self.letters.clone(),
            outcomes,
        }
    }

    /// Number of states in the subtree rooted here
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self
            .branches
            .iter()
            .map(|branch| branch.choice.size())
            .sum::<usize>()
    }
}
