//! Benchmark command
//!
//! Generates random multi-solution puzzles, builds their spoilers in
//! parallel and registers them.

use crate::core::Guess;
use crate::spoiler::{Spoiler, SpoilerKey, SpoilerRegistry};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Shape of the generated puzzles
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub puzzles: usize,
    pub sub_puzzles: usize,
    pub candidates: usize,
    pub guesses: usize,
    pub word_len: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(puzzles: usize, seed: u64) -> Self {
        Self {
            puzzles,
            sub_puzzles: 32,
            candidates: 2,
            guesses: 37,
            word_len: 5,
            seed,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub spoilers: usize,
    pub candidates: usize,
    pub solved_candidates: usize,
    pub ratings: usize,
    pub winning_rows: usize,
    pub duration: Duration,
    pub ratings_per_second: f64,
}

struct GeneratedBoard {
    key: SpoilerKey,
    guesses: Vec<String>,
    candidates: Vec<String>,
}

fn random_word(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| char::from(rng.random_range(b'a'..=b'z'))).collect()
}

fn generate_boards(config: &BenchmarkConfig) -> Vec<GeneratedBoard> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut boards = Vec::with_capacity(config.puzzles * config.sub_puzzles);

    for puzzle_id in 0..config.puzzles {
        for sub in 0..config.sub_puzzles {
            let candidates: Vec<String> = (0..config.candidates)
                .map(|_| random_word(&mut rng, config.word_len))
                .collect();
            let mut guesses: Vec<String> = (0..config.guesses)
                .map(|_| random_word(&mut rng, config.word_len))
                .collect();

            // the board was solved somewhere along the way
            if let (Some(first), false) = (candidates.first(), guesses.is_empty()) {
                let at = rng.random_range(0..guesses.len());
                guesses[at].clone_from(first);
            }

            boards.push(GeneratedBoard {
                key: SpoilerKey::new(i64::try_from(puzzle_id).unwrap_or(i64::MAX), sub),
                guesses,
                candidates,
            });
        }
    }

    boards
}

/// Build and register a batch of random puzzles
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig) -> (SpoilerRegistry, BenchmarkResult) {
    let boards = generate_boards(config);

    let pb = if config.show_progress {
        ProgressBar::new(boards.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let spoilers: Vec<Spoiler> = boards
        .par_iter()
        .map(|board| Spoiler::build(board.key, &board.guesses, &board.candidates))
        .collect();

    let mut registry = SpoilerRegistry::new();
    let mut ratings = 0;
    let mut winning_rows = 0;

    for spoiler in spoilers {
        for solution in spoiler.solutions() {
            ratings += solution.guesses().len();
            winning_rows += solution.guesses().iter().filter(|g| g.is_winning()).count();
        }
        pb.set_message(spoiler.key().to_string());
        // generated keys are unique
        if registry.insert(spoiler).is_ok() {
            pb.inc(1);
        }
    }

    let duration = start.elapsed();
    pb.finish_with_message(format!("{} spoilers", registry.len()));

    let result = BenchmarkResult {
        spoilers: registry.len(),
        candidates: registry.iter().map(|s| s.solutions().len()).sum(),
        solved_candidates: count_winners(&registry),
        ratings,
        winning_rows,
        duration,
        ratings_per_second: ratings as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };

    (registry, result)
}

/// Count candidate solutions that some guess row solved
#[must_use]
pub fn count_winners(registry: &SpoilerRegistry) -> usize {
    registry
        .iter()
        .flat_map(Spoiler::solutions)
        .filter(|solution| solution.guesses().iter().any(Guess::is_winning))
        .count()
}
