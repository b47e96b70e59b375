//! Hinted game command
//!
//! Splits a mixed word list by hint and solves every group.

use crate::output::formatters::progress_bar;
use crate::solver::HintedGame;
use std::time::{Duration, Instant};

/// Configuration for solving a hinted game
pub struct HintConfig {
    /// Solve groups on the rayon thread pool
    pub parallel: bool,
    /// Show a progress bar while solving sequentially
    pub progress: bool,
}

impl HintConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parallel: false,
            progress: true,
        }
    }
}

impl Default for HintConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of solving a hinted game
pub struct HintResult {
    pub game: HintedGame,
    pub total_words: usize,
    pub groups: usize,
    /// Hints with the largest worst case, and that worst case
    pub hardest: Vec<(String, u32)>,
    pub duration: Duration,
}

/// Solve every hint group of `words`
///
/// # Errors
///
/// Returns an error if a word is empty.
pub fn strategize_words(words: &[String], config: &HintConfig) -> Result<HintResult, String> {
    let mut game = HintedGame::new(words).map_err(|e| format!("Cannot group word list: {e}"))?;
    let groups = game.groups().len();

    let start = Instant::now();
    let solved = if config.parallel {
        game.strategize_parallel()
    } else if config.progress {
        let pb = progress_bar(groups, "groups");
        let result = game.strategize_with(|done, _| pb.set_position(done as u64));
        pb.finish_and_clear();
        result
    } else {
        game.strategize()
    };
    solved.map_err(|e| format!("Cannot solve word list: {e}"))?;
    let duration = start.elapsed();

    let worst = game
        .strategies()
        .map(|(_, strategy)| strategy.max_errors())
        .max()
        .unwrap_or(0);
    let hardest = game
        .strategies()
        .filter(|(_, strategy)| strategy.max_errors() == worst)
        .map(|(key, strategy)| (key.hint(), strategy.max_errors()))
        .collect();

    Ok(HintResult {
        total_words: words.len(),
        groups,
        hardest,
        duration,
        game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SAMPLE;
    use crate::wordlists::loader::words_from_slice;

    fn quiet() -> HintConfig {
        HintConfig {
            parallel: false,
            progress: false,
        }
    }

    #[test]
    fn strategize_sample() {
        let words = words_from_slice(SAMPLE);
        let result = strategize_words(&words, &quiet()).unwrap();

        assert_eq!(result.total_words, SAMPLE.len());
        assert_eq!(result.groups, result.game.groups().len());
        assert!(result.game.is_strategized());
        assert!(!result.hardest.is_empty());
    }

    #[test]
    fn hardest_groups_share_worst_case() {
        let words = words_from_slice(&["aa", "ab", "ac", "ad", "bb"]);
        let result = strategize_words(&words, &quiet()).unwrap();

        assert_eq!(result.hardest, vec![("a_".to_string(), 2)]);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let words = words_from_slice(SAMPLE);
        let sequential = strategize_words(&words, &quiet()).unwrap();
        let parallel = strategize_words(
            &words,
            &HintConfig {
                parallel: true,
                progress: false,
            },
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(sequential.game.json()).unwrap(),
            serde_json::to_value(parallel.game.json()).unwrap()
        );
    }

    #[test]
    fn empty_word_fails() {
        let words = vec!["abc".to_string(), String::new()];
        assert!(strategize_words(&words, &quiet()).is_err());
    }
}
