//! Reveal command
//!
//! Registers a puzzle file and reveals the guess ratings of one candidate
//! solution the way a page would on hover.

use crate::core::Guess;
use crate::source::{PuzzleFile, register_all};
use crate::spoiler::{
    MarkerBoard, RegistryError, Solution, SpoilerKey, SpoilerRegistry, reveal, reveal_rows,
};

/// One revealed guess row
pub struct RevealRow {
    /// The guess text, when it can be paired with the rated row
    pub word: Option<String>,
    pub rating: Guess,
}

/// Result of revealing one candidate
pub struct RevealResult {
    pub key: SpoilerKey,
    pub candidate_index: usize,
    pub candidate: Option<String>,
    pub rows: Vec<RevealRow>,
    /// Marker state after the reveal, one row per revealed guess
    pub board: MarkerBoard,
}

/// Register `file` into `registry` and reveal one candidate of `key`
///
/// Words and ratings both come from the spoiler the registry holds, so a
/// replaced registration is shown consistently.
///
/// # Errors
///
/// Returns `RegistryError::NotFound` or `RegistryError::CandidateOutOfRange`
/// if the puzzle or candidate does not exist. Callers should report it and
/// carry on.
pub fn reveal_candidate(
    registry: &mut SpoilerRegistry,
    file: &PuzzleFile,
    key: SpoilerKey,
    candidate_index: usize,
) -> Result<RevealResult, RegistryError> {
    register_all(registry, file);

    let mut board = MarkerBoard::new();
    reveal(registry, key, candidate_index, &mut board)?;

    let solution = registry
        .get(key)
        .and_then(|spoiler| spoiler.solution(candidate_index));
    let words = solution.map(Solution::words).unwrap_or_default();

    let rows = reveal_rows(registry.query(key, candidate_index)?)
        .iter()
        .enumerate()
        .map(|(i, rating)| RevealRow {
            word: words.get(i).map(ToString::to_string),
            rating: rating.clone(),
        })
        .collect();

    Ok(RevealResult {
        key,
        candidate_index,
        candidate: solution.map(|s| s.candidate().to_string()),
        rows,
        board,
    })
}
