//! Error types
//!
//! Every failure in the library is a deterministic misuse of the API: nothing here is
//! transient and nothing is retried.

use thiserror::Error;

/// The errors that `hangman_solver` can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The memo table is empty. Solving is expensive, so it never runs implicitly.
    #[error("no strategy found, run solve_all first")]
    PreconditionNotMet,

    /// The flattened strategy has no decision for this evidence.
    #[error("no decision recorded for used letters {used_letters:?} and word id {min_id}")]
    InconsistentLookup { used_letters: String, min_id: usize },

    #[error("the word {0:?} is not part of this game")]
    UnknownWord(String),

    /// The hint matches no word group, or the groups have not been strategized yet.
    #[error("no strategy for hint {0:?}")]
    UnknownHint(String),

    #[error("the word list is empty")]
    EmptyWordList,

    #[error("empty words cannot be played")]
    EmptyWord,

    #[error("all words must have the same length: expected {expected}, found {found}")]
    MixedLengths { expected: usize, found: usize },

    #[error("the word {word:?} contains {letter:?}, which is not in the alphabet")]
    ForeignLetter { word: String, letter: char },

    #[error("the letter {0:?} appears twice in the alphabet")]
    DuplicateLetter(char),

    #[error("alphabets are limited to 128 letters, got {0}")]
    AlphabetTooLarge(usize),
}
