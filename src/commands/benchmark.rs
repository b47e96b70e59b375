//! Benchmark command
//!
//! Plays words through their hinted strategies and collects wrong-guess statistics.

use crate::output::formatters::progress_bar;
use crate::solver::{HintedGame, make_hint};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random words to play; every word when `None`
    pub count: Option<usize>,
    /// Seed for picking words, for repeatable runs
    pub seed: Option<u64>,
    pub progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: None,
            seed: None,
            progress: true,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_errors: u32,
    pub average_errors: f64,
    pub max_errors: u32,
    /// Wrong guesses to number of words
    pub distribution: BTreeMap<u32, usize>,
    /// Words needing `max_errors` wrong guesses
    pub worst_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the words a benchmark plays
#[must_use]
pub fn sample_words(words: &[String], config: &BenchmarkConfig) -> Vec<String> {
    let Some(count) = config.count.filter(|&count| count < words.len()) else {
        return words.to_vec();
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Play `words` through the strategy for their hint
///
/// # Errors
///
/// Returns an error if a word belongs to no solved group of `game`.
pub fn run_benchmark(
    game: &HintedGame,
    words: &[String],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, String> {
    let targets = sample_words(words, config);
    let pb = config.progress.then(|| progress_bar(targets.len(), "words"));

    let start = Instant::now();
    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();
    let mut worst_words = Vec::new();
    let mut max_errors = 0;
    let mut total_errors = 0;

    for target in &targets {
        let strategy = game
            .get_strat_by_hint(&make_hint(target))
            .map_err(|e| format!("Cannot play '{target}': {e}"))?;
        let played = strategy
            .play(target)
            .map_err(|e| format!("Cannot play '{target}': {e}"))?;

        let errors = played.wrong_guesses;
        *distribution.entry(errors).or_insert(0) += 1;
        total_errors += errors;

        if errors > max_errors {
            max_errors = errors;
            worst_words.clear();
        }
        if errors == max_errors {
            worst_words.push(played.word);
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    let average_errors = if total_words == 0 {
        0.0
    } else {
        f64::from(total_errors) / total_words as f64
    };

    Ok(BenchmarkResult {
        total_words,
        total_errors,
        average_errors,
        max_errors,
        distribution,
        worst_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
