//! Strategy solving command
//!
//! Solves a list of equal-length words and reports the resulting decision tree.

use crate::solver::Strategy;
use crate::wordlists::loader::with_length;
use std::time::{Duration, Instant};

/// Configuration for solving a word list
pub struct SolveConfig {
    /// Only solve words with this many letters
    pub length: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { length: None }
    }

    #[must_use]
    pub const fn with_length(length: usize) -> Self {
        Self {
            length: Some(length),
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of solving a word list
pub struct SolveResult {
    pub strategy: Strategy,
    pub total_words: usize,
    pub states: usize,
    pub duration: Duration,
}

/// Solve `words` with a minimax strategy
///
/// # Errors
///
/// Returns an error if:
/// - No words remain after filtering
/// - The words differ in length
pub fn solve_words(words: &[String], config: &SolveConfig) -> Result<SolveResult, String> {
    let words = match config.length {
        Some(length) => with_length(words, length),
        None => words.to_vec(),
    };

    let start = Instant::now();
    let strategy = Strategy::from_words(&words).map_err(|e| format!("Cannot solve word list: {e}"))?;
    let duration = start.elapsed();

    log::info!(
        "solved {} words in {:.2}s, worst case {} wrong guesses",
        words.len(),
        duration.as_secs_f64(),
        strategy.max_errors()
    );

    Ok(SolveResult {
        states: strategy.start().size(),
        total_words: words.len(),
        strategy,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SAMPLE;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_equal_length_words() {
        let words = words_from_slice(&["aa", "bb", "cc", "dd"]);
        let result = solve_words(&words, &SolveConfig::new()).unwrap();

        assert_eq!(result.total_words, 4);
        assert_eq!(result.strategy.max_errors(), 3);
        assert!(result.states >= 4);
    }

    #[test]
    fn solve_mixed_lengths_fails() {
        let words = words_from_slice(SAMPLE);
        assert!(solve_words(&words, &SolveConfig::new()).is_err());
    }

    #[test]
    fn solve_filtered_sample() {
        let words = words_from_slice(SAMPLE);
        let result = solve_words(&words, &SolveConfig::with_length(3)).unwrap();

        assert!(result.total_words > 1);
        for word in result.strategy.dictionary().words() {
            let game = result.strategy.play(word).unwrap();
            assert!(game.wrong_guesses <= result.strategy.max_errors());
        }
    }

    #[test]
    fn solve_missing_length_fails() {
        let words = words_from_slice(SAMPLE);
        assert!(solve_words(&words, &SolveConfig::with_length(40)).is_err());
    }
}
