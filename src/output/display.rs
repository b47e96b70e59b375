//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_pattern};
use crate::commands::{AnalysisResult, BenchmarkResult, HintResult, SolveResult};
use colored::Colorize;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of solving a word list
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let strategy = &result.strategy;
    header("MINIMAX STRATEGY");

    println!("\n📊 {}", "Game:".bright_cyan().bold());
    println!("   Words:          {}", result.total_words);
    println!("   Alphabet:       {}", strategy.alphabet());
    println!(
        "   Worst case:     {}",
        format!("{} wrong guesses", strategy.max_errors())
            .bright_yellow()
            .bold()
    );
    println!(
        "   First guess:    {}",
        strategy.start().letters().to_uppercase().green()
    );
    println!("   Tree states:    {}", result.states);
    println!("   Time taken:     {:.2}s", result.duration.as_secs_f64());

    if !verbose {
        return;
    }

    println!("\n🎯 {}", "Games:".bright_cyan().bold());
    for word in strategy.dictionary().words() {
        let Ok(game) = strategy.play(word) else {
            continue;
        };
        let errors = if game.wrong_guesses == strategy.max_errors() {
            game.wrong_guesses.to_string().red()
        } else {
            game.wrong_guesses.to_string().green()
        };
        println!(
            "   {:<12} {} [{}]  {}",
            game.word.bright_yellow(),
            errors,
            spaced_pattern(&game.revealed),
            game.guesses.join(" → ")
        );
    }
}

/// Print the result of solving a hinted game
pub fn print_hint_result(result: &HintResult) {
    header("HINTED STRATEGIES");

    println!("\n📊 {}", "Game:".bright_cyan().bold());
    println!("   Words:          {}", result.total_words);
    println!("   Hint groups:    {}", result.groups);
    println!("   Time taken:     {:.2}s", result.duration.as_secs_f64());

    println!("\n🧩 {}", "Groups:".bright_cyan().bold());
    for (key, strategy) in result.game.strategies() {
        println!(
            "   {:<16} {:4} words  {} wrong guesses",
            spaced_pattern(&key.hint()),
            strategy.dictionary().len(),
            strategy.max_errors()
        );
    }

    if let Some((_, worst)) = result.hardest.first() {
        let hints: Vec<&str> = result.hardest.iter().map(|(hint, _)| hint.as_str()).collect();
        println!(
            "\n🔥 Hardest: {} ({} wrong guesses)",
            hints.join(", ").red().bold(),
            worst
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    header("BENCHMARK RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Average errors:   {}",
        format!("{:.2}", result.average_errors).bright_yellow().bold()
    );
    println!(
        "   Worst case:       {}",
        result.max_errors.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&errors, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {errors:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.worst_words.is_empty() {
        println!(
            "\n🔥 Worst words: {}",
            result.worst_words.join(", ").red()
        );
    }
}

/// Print the result of word list analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    header("ONE-LETTER-AWAY ANALYSIS");

    println!("\n📊 Across {} distinct words:", result.total_words);
    if result.largest.is_empty() {
        println!("   No words differ in a single position.");
        return;
    }

    println!(
        "   Largest group:   {} words",
        result.largest.len().to_string().bright_yellow().bold()
    );
    println!("   {}", result.largest.join(", ").green());
    println!(
        "   Forces at least {} wrong guesses",
        result.forced_errors().to_string().red()
    );

    for group in &result.alternatives {
        println!("   {} {}", "or".bright_black(), group.join(", "));
    }
}
