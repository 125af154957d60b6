//! Spoilers for puzzles with one or more candidate solutions

mod registry;
mod reveal;

pub use registry::{DuplicatePolicy, RegistryError, Solution, Spoiler, SpoilerKey, SpoilerRegistry};
pub use reveal::{MarkerBoard, MarkerSink, reveal, reveal_rows};
