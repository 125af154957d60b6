//! Display functions for command results

use super::formatters::{colored_word, create_progress_bar, rating_to_emoji};
use crate::commands::{BenchmarkResult, RateResult, RevealResult};
use crate::core::EmojiPalette;
use colored::Colorize;

/// Print the rating of one guess
pub fn print_rate_result(result: &RateResult, palette: EmojiPalette) {
    println!(
        "\n{}  {}  {}",
        colored_word(&result.guess, &result.rating),
        rating_to_emoji(&result.rating, palette),
        result.rating.to_string().bright_black()
    );
    if result.rating.is_winning() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the revealed rows of one candidate
pub fn print_reveal_result(result: &RevealResult, palette: EmojiPalette) {
    println!("\n{}", "─".repeat(60).cyan());
    let candidate = result
        .candidate
        .as_deref()
        .map_or_else(|| format!("#{}", result.candidate_index), str::to_uppercase);
    println!(
        "Puzzle {}: candidate {}",
        result.key.to_string().bright_cyan(),
        candidate.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, row) in result.rows.iter().enumerate() {
        let word = row
            .word
            .as_deref()
            .map_or_else(|| " ? ".repeat(row.rating.len()), |w| colored_word(w, &row.rating));
        println!(
            "{:>3}. {}  {}",
            i + 1,
            word,
            rating_to_emoji(&row.rating, palette)
        );
    }

    println!();
    match result.rows.last() {
        Some(row) if row.rating.is_winning() => println!(
            "{}",
            format!("✅ Solved on guess {}", result.rows.len()).green().bold()
        ),
        _ => println!("{}", "❌ Not solved by any guess".red().bold()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Spoilers:         {}", result.spoilers);
    println!(
        "   Ratings:          {}",
        result.ratings.to_string().bright_yellow().bold()
    );
    println!("   Winning rows:     {}", result.winning_rows);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Ratings/second:   {:.0}", result.ratings_per_second);

    if result.candidates > 0 {
        println!(
            "\n   Solved candidates: [{}] {}/{}",
            create_progress_bar(
                result.solved_candidates as f64,
                result.candidates as f64,
                30
            )
            .green(),
            result.solved_candidates,
            result.candidates
        );
    }
}
