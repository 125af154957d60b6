//! Puzzle files
//!
//! A JSON document listing, per puzzle and sub-puzzle, the raw guess rows
//! and the candidate solutions:
//!
//! ```json
//! { "puzzles": [ { "id": 1, "sub_puzzles": [
//!     { "index": 0, "guesses": ["crane", "flood"], "solutions": ["flood"] } ] } ] }
//! ```

use crate::spoiler::{RegistryError, SpoilerKey, SpoilerRegistry};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Error type for loading puzzle files
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed puzzle file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubPuzzleRecord {
    pub index: usize,
    #[serde(default)]
    pub guesses: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleRecord {
    pub id: i64,
    pub sub_puzzles: Vec<SubPuzzleRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PuzzleFile {
    pub puzzles: Vec<PuzzleRecord>,
}

impl PuzzleFile {
    /// Parse a puzzle document
    ///
    /// # Errors
    /// Returns `SourceError::Json` for malformed JSON.
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a puzzle document from disk
    ///
    /// # Errors
    /// Returns `SourceError` if the file cannot be read or parsed.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_spoiler::source::PuzzleFile;
    ///
    /// let file = PuzzleFile::load("puzzles.json").unwrap();
    /// println!("Loaded {} puzzles", file.puzzles.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Every sub-puzzle with its key, in document order
    pub fn sub_puzzles(&self) -> impl Iterator<Item = (SpoilerKey, &SubPuzzleRecord)> {
        self.puzzles.iter().flat_map(|puzzle| {
            puzzle
                .sub_puzzles
                .iter()
                .map(move |sub| (SpoilerKey::new(puzzle.id, sub.index), sub))
        })
    }
}

/// Outcome of registering a whole puzzle file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterSummary {
    pub registered: usize,
    pub skipped: usize,
}

/// Register every sub-puzzle of `file`
///
/// Rejected duplicates are logged and counted, never fatal.
pub fn register_all(registry: &mut SpoilerRegistry, file: &PuzzleFile) -> RegisterSummary {
    let mut summary = RegisterSummary::default();

    for (key, sub) in file.sub_puzzles() {
        match registry.register(key, &sub.guesses, &sub.solutions) {
            Ok(()) => summary.registered += 1,
            Err(RegistryError::AlreadyRegistered(_)) => summary.skipped += 1,
            Err(e) => {
                warn!(puzzle = %key, "registration failed: {e}");
                summary.skipped += 1;
            }
        }
    }

    info!(
        registered = summary.registered,
        skipped = summary.skipped,
        "puzzle file registered"
    );
    summary
}
