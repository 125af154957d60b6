//! Rate command
//!
//! Rates a single guess against a single solution.

use crate::core::{Guess, RatingError, ScalarSequence};

/// Result of rating one guess
pub struct RateResult {
    pub guess: String,
    pub solution: String,
    pub rating: Guess,
}

/// Rate `guess` against `solution`
///
/// # Errors
///
/// Returns `RatingError::LengthMismatch` if the words have different
/// scalar lengths.
pub fn rate_words(guess: &str, solution: &str) -> Result<RateResult, RatingError> {
    let rating = Guess::rated(&ScalarSequence::from(guess), &ScalarSequence::from(solution))?;

    Ok(RateResult {
        guess: guess.to_string(),
        solution: solution.to_string(),
        rating,
    })
}
