//! Hangman Solver - CLI
//!
//! Computes minimax hangman strategies and exports them as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        BenchmarkConfig, HintConfig, SolveConfig, analyze_words, run_benchmark, solve_words,
        strategize_words, write_json,
    },
    output::{print_analysis_result, print_benchmark_result, print_hint_result, print_solve_result},
    wordlists::{
        SAMPLE,
        loader::{load_from_file, words_from_slice},
    },
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Minimax hangman solver: the fewest wrong guesses in the worst case",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'sample' (default, embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "sample")]
    wordlist: String,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a list of equal-length words and export the strategy
    Solve {
        /// Only use words of this length
        #[arg(short, long)]
        length: Option<usize>,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Print a summary with every word's game
        #[arg(short, long)]
        summary: bool,
    },

    /// Split the words by first-letter hint and solve every group
    Hint {
        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Solve groups on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Play random words through their hinted strategies
    Benchmark {
        /// Number of random words to play (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for picking words
        #[arg(short, long)]
        seed: Option<u64>,

        /// Solve groups on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Find the largest group of words one letter apart
    Analyze,
}

/// Load the word list named by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "sample" => Ok(words_from_slice(SAMPLE)),
        path => load_from_file(path).with_context(|| format!("Cannot read word list '{path}'")),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;
    log::info!("loaded {} words from {}", words.len(), cli.wordlist);

    match cli.command {
        Commands::Solve {
            length,
            output,
            pretty,
            summary,
        } => run_solve_command(&words, length, output.as_deref(), pretty, summary),
        Commands::Hint {
            output,
            pretty,
            parallel,
        } => run_hint_command(&words, output.as_deref(), pretty, parallel),
        Commands::Benchmark {
            count,
            seed,
            parallel,
        } => run_benchmark_command(&words, count, seed, parallel),
        Commands::Analyze => {
            print_analysis_result(&analyze_words(&words));
            Ok(())
        }
    }
}

fn run_solve_command(
    words: &[String],
    length: Option<usize>,
    output: Option<&Path>,
    pretty: bool,
    summary: bool,
) -> Result<()> {
    let config = SolveConfig { length };
    let result = solve_words(words, &config).map_err(|e| anyhow::anyhow!(e))?;

    // Keep stdout clean for JSON unless a file was requested
    if output.is_some() || summary {
        print_solve_result(&result, summary);
    }
    if output.is_some() || !summary {
        write_json(&result.strategy.json(), output, pretty)
            .context("Cannot write strategy")?;
    }
    Ok(())
}

fn run_hint_command(
    words: &[String],
    output: Option<&Path>,
    pretty: bool,
    parallel: bool,
) -> Result<()> {
    let config = HintConfig {
        parallel,
        progress: output.is_some(),
    };
    let result = strategize_words(words, &config).map_err(|e| anyhow::anyhow!(e))?;

    if output.is_some() {
        print_hint_result(&result);
    }
    write_json(&result.game.json(), output, pretty).context("Cannot write strategies")
}

fn run_benchmark_command(
    words: &[String],
    count: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
) -> Result<()> {
    let hinted = strategize_words(
        words,
        &HintConfig {
            parallel,
            progress: true,
        },
    )
    .map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "Playing {} of {} words...",
        count.map_or(words.len(), |count| count.min(words.len())),
        words.len()
    );

    let config = BenchmarkConfig {
        count,
        seed,
        progress: true,
    };
    let result = run_benchmark(&hinted.game, words, &config).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}
