//! Minimax hangman solving
//!
//! [`GameStateTree`] searches for the strategy with the fewest wrong guesses in the worst
//! case, [`Strategy`] keeps the decisions it plays and realizes them as a tree of
//! [`Choice`]s, and [`HintedGame`] solves mixed word lists one hint at a time.

mod choice;
mod grouping;
mod hinted;
mod json;
mod state;
mod strategy;
mod tree;

pub use choice::{Branch, Choice};
pub use grouping::group_words;
pub use hinted::{HintKey, HintedGame, WordGroup, make_hint};
pub use json::{ChoiceJson, HintedDocument, StrategyDocument, WON};
pub use state::{Outcome, StateKey};
pub use strategy::{Decisions, Playthrough, Strategy};
pub use tree::GameStateTree;
