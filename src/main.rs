//! Wordle Spoiler - CLI
//!
//! Rates guesses and reveals per-candidate spoilers for Wordle-style puzzles,
//! including boards that accept more than one answer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use wordle_spoiler::{
    commands::{BenchmarkConfig, rate_words, reveal_candidate, run_benchmark},
    config::SpoilerConfig,
    output::{print_benchmark_result, print_rate_result, print_reveal_result},
    source::PuzzleFile,
    spoiler::{RegistryError, SpoilerKey},
};

#[derive(Parser)]
#[command(
    name = "wordle_spoiler",
    about = "Rate Wordle-style guesses and reveal spoilers for multi-solution puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file (duplicate policy, emoji palette)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate one guess against one solution
    Rate {
        guess: String,
        solution: String,
    },

    /// Reveal the guess ratings for one candidate solution of a puzzle
    Reveal {
        /// JSON puzzle file
        file: PathBuf,

        /// Puzzle id
        puzzle: i64,

        /// Sub-puzzle index within the puzzle
        sub_puzzle: usize,

        /// Candidate solution index
        #[arg(default_value = "0")]
        candidate: usize,
    },

    /// Build spoilers for random puzzles and report throughput
    Benchmark {
        /// Number of random puzzles (32 boards each)
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the puzzle generator
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SpoilerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Rate { guess, solution } => run_rate_command(&guess, &solution, &config),
        Commands::Reveal {
            file,
            puzzle,
            sub_puzzle,
            candidate,
        } => run_reveal_command(&file, SpoilerKey::new(puzzle, sub_puzzle), candidate, &config),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed);
            Ok(())
        }
    }
}

fn run_rate_command(guess: &str, solution: &str, config: &SpoilerConfig) -> Result<()> {
    let result = rate_words(guess, solution)?;
    print_rate_result(&result, config.palette.palette());
    Ok(())
}

fn run_reveal_command(
    path: &Path,
    key: SpoilerKey,
    candidate: usize,
    config: &SpoilerConfig,
) -> Result<()> {
    let file = PuzzleFile::load(path)
        .with_context(|| format!("loading puzzles from {}", path.display()))?;
    let mut registry = config.registry();

    match reveal_candidate(&mut registry, &file, key, candidate) {
        Ok(result) => print_reveal_result(&result, config.palette.palette()),
        // nothing to reveal is not a failure
        Err(e @ (RegistryError::NotFound(_) | RegistryError::CandidateOutOfRange { .. })) => {
            println!("Nothing to reveal: {e}");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn run_benchmark_command(count: usize, seed: u64) {
    let config = BenchmarkConfig::new(count, seed);
    println!(
        "Running benchmark on {} random boards ({} candidates, {} guesses each)...",
        count * config.sub_puzzles,
        config.candidates,
        config.guesses
    );

    let (_registry, result) = run_benchmark(&config);
    print_benchmark_result(&result);
}
