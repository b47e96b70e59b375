//! Core domain types for hangman
//!
//! This module contains the word representations the solver works on. Nothing here
//! performs I/O.

mod alphabet;
mod dictionary;
mod letters;
mod shape;

pub use alphabet::Alphabet;
pub use dictionary::Dictionary;
pub use letters::LetterSet;
pub use shape::WordShape;
