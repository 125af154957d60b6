//! Reveal and clear on behalf of a presentation layer
//!
//! The registry only hands out ratings. Whatever draws them implements
//! [`MarkerSink`]; [`reveal`] drives it row by row and stops after the
//! winning row.

use super::registry::{RegistryError, SpoilerKey, SpoilerRegistry};
use crate::core::{Guess, RatingLetter};

/// Rows to mark when revealing one candidate
///
/// Everything up to and including the first all-Correct row. Rows after it
/// say nothing about this candidate.
///
/// # Examples
/// ```
/// use wordle_spoiler::core::Guess;
/// use wordle_spoiler::spoiler::reveal_rows;
///
/// let rows: Vec<Guess> = ["WWMWC", "CCCCC", "MWWWW"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(reveal_rows(&rows).len(), 2);
/// ```
#[must_use]
pub fn reveal_rows(guesses: &[Guess]) -> &[Guess] {
    match guesses.iter().position(Guess::is_winning) {
        Some(winning) => &guesses[..=winning],
        None => guesses,
    }
}

/// Receives visual markers from [`reveal`]
pub trait MarkerSink {
    /// Mark one letter box of one guess row
    fn mark(&mut self, row: usize, position: usize, rating: RatingLetter);

    /// Remove every marker previously applied
    fn clear(&mut self);
}

/// Mark the guess rows of one candidate solution
///
/// Returns the number of rows marked.
///
/// # Errors
/// Returns the registry's `NotFound`/`CandidateOutOfRange` error without
/// touching the sink. Callers should treat that as a no-op.
pub fn reveal<S: MarkerSink + ?Sized>(
    registry: &SpoilerRegistry,
    key: SpoilerKey,
    candidate_index: usize,
    sink: &mut S,
) -> Result<usize, RegistryError> {
    let rows = reveal_rows(registry.query(key, candidate_index)?);

    for (row, guess) in rows.iter().enumerate() {
        for (position, &rating) in guess.ratings().iter().enumerate() {
            sink.mark(row, position, rating);
        }
    }

    Ok(rows.len())
}

/// In-memory marker grid, one row per guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerBoard {
    rows: Vec<Vec<Option<RatingLetter>>>,
}

impl MarkerBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<RatingLetter>>] {
        &self.rows
    }

    /// Marker at a position, if any
    #[must_use]
    pub fn marker(&self, row: usize, position: usize) -> Option<RatingLetter> {
        self.rows.get(row)?.get(position).copied().flatten()
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.rows.iter().flatten().all(Option::is_none)
    }
}

impl MarkerSink for MarkerBoard {
    fn mark(&mut self, row: usize, position: usize, rating: RatingLetter) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= position {
            cells.resize(position + 1, None);
        }
        cells[position] = Some(rating);
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
