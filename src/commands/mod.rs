//! Command implementations

pub mod benchmark;
pub mod rate;
pub mod reveal;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, count_winners, run_benchmark};
pub use rate::{RateResult, rate_words};
pub use reveal::{RevealResult, RevealRow, reveal_candidate};
