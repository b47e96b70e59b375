//! Hangman Solver
//!
//! Minimax-optimal hangman strategies: for a list of words, the guessing strategy that
//! makes the fewest wrong guesses in the worst case.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::solver::{HintedGame, Strategy};
//!
//! // Solve equal-length words directly
//! let strategy = Strategy::from_words(&["baa", "bbb", "ccb", "ddb"]).unwrap();
//! assert_eq!(strategy.max_errors(), 1);
//! assert_eq!(strategy.start().letters(), "b");
//!
//! // Or split a mixed list by its first-letter hint
//! let mut game = HintedGame::new(&["xabc", "xbac", "abc"]).unwrap();
//! game.strategize().unwrap();
//! let x = game.get_strat_by_hint("x___").unwrap();
//! assert_eq!(x.start().letters(), "abcx");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
