//! Wordle-style rating of a guess against one candidate solution
//!
//! Each guess position is rated:
//! - `C` = Correct (same letter in the same position)
//! - `M` = Misplaced (letter occurs elsewhere and is still unclaimed)
//! - `W` = Wrong (letter not available)
//!
//! Words of any length are supported as long as guess and solution have the
//! same number of scalar values.

use super::ScalarSequence;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rating of a single guess position relative to one solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingLetter {
    Correct,
    Misplaced,
    Wrong,
}

impl RatingLetter {
    /// One-letter notation (`C`, `M`, `W`)
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Misplaced => 'M',
            Self::Wrong => 'W',
        }
    }

    /// Parse the one-letter notation, case-insensitive
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'C' | 'c' => Some(Self::Correct),
            'M' | 'm' => Some(Self::Misplaced),
            'W' | 'w' => Some(Self::Wrong),
            _ => None,
        }
    }

    /// Name of the visual marker a presentation layer applies for this rating
    #[must_use]
    pub const fn marker_class(self) -> &'static str {
        match self {
            Self::Correct => "rating-correct",
            Self::Misplaced => "rating-misplaced",
            Self::Wrong => "rating-wrong",
        }
    }
}

impl fmt::Display for RatingLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Emoji squares used when rendering a rated row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiPalette {
    pub correct: char,
    pub misplaced: char,
    pub wrong: char,
}

impl EmojiPalette {
    /// Green / yellow / white squares
    pub const STANDARD: Self = Self {
        correct: '\u{1F7E9}',
        misplaced: '\u{1F7E8}',
        wrong: '\u{2B1C}',
    };

    /// Equation puzzles show misplaced symbols in purple
    pub const NERDLE: Self = Self {
        correct: '\u{1F7E9}',
        misplaced: '\u{1F7EA}',
        wrong: '\u{2B1C}',
    };

    #[must_use]
    pub const fn square(self, letter: RatingLetter) -> char {
        match letter {
            RatingLetter::Correct => self.correct,
            RatingLetter::Misplaced => self.misplaced,
            RatingLetter::Wrong => self.wrong,
        }
    }
}

impl Default for EmojiPalette {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Error type for rating failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingError {
    /// Guess and solution differ in scalar length
    #[error("guess has {guess} letters but solution has {solution}")]
    LengthMismatch { guess: usize, solution: usize },

    /// A character that is not one of the `C`/`M`/`W` rating symbols
    #[error("invalid rating letter {0:?}")]
    InvalidSymbol(char),
}

/// Rate `guess` against `solution`
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and consume both sides
/// 2. Second pass: for each unconsumed guess position in ascending order,
///    claim the first unconsumed solution position holding the same letter
///    and mark it Misplaced
/// 3. Everything left over stays Wrong
///
/// A letter repeated in the guess is only credited as often as it remains
/// in the solution after the exact matches.
///
/// # Errors
/// Returns `RatingError::LengthMismatch` if the scalar lengths differ.
///
/// # Examples
/// ```
/// use wordle_spoiler::core::{rate, RatingLetter::*, ScalarSequence};
///
/// let guess = ScalarSequence::from("robot");
/// let solution = ScalarSequence::from("floor");
/// assert_eq!(
///     rate(&guess, &solution).unwrap(),
///     vec![Misplaced, Misplaced, Wrong, Correct, Wrong]
/// );
/// ```
pub fn rate(
    guess: &ScalarSequence,
    solution: &ScalarSequence,
) -> Result<Vec<RatingLetter>, RatingError> {
    if guess.len() != solution.len() {
        return Err(RatingError::LengthMismatch {
            guess: guess.len(),
            solution: solution.len(),
        });
    }

    // `None` marks a consumed position
    let mut guess_left: Vec<Option<char>> = guess.scalars().iter().copied().map(Some).collect();
    let mut solution_left: Vec<Option<char>> =
        solution.scalars().iter().copied().map(Some).collect();
    let mut ratings = vec![RatingLetter::Wrong; guess.len()];

    // First pass: exact matches
    for (i, rating) in ratings.iter_mut().enumerate() {
        if guess_left[i] == solution_left[i] {
            guess_left[i] = None;
            solution_left[i] = None;
            *rating = RatingLetter::Correct;
        }
    }

    // Second pass: first available match elsewhere, ascending on both sides
    for (g, rating) in ratings.iter_mut().enumerate() {
        let Some(letter) = guess_left[g] else {
            continue;
        };

        if let Some(slot) = solution_left.iter_mut().find(|s| **s == Some(letter)) {
            *slot = None;
            guess_left[g] = None;
            *rating = RatingLetter::Misplaced;
        }
    }

    Ok(ratings)
}

/// Ratings of one guess row against one candidate solution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    ratings: Vec<RatingLetter>,
}

impl Guess {
    #[must_use]
    pub const fn new(ratings: Vec<RatingLetter>) -> Self {
        Self { ratings }
    }

    /// Rate `guess` against `solution` and wrap the result
    ///
    /// # Errors
    /// Returns `RatingError::LengthMismatch` if the scalar lengths differ.
    pub fn rated(guess: &ScalarSequence, solution: &ScalarSequence) -> Result<Self, RatingError> {
        rate(guess, solution).map(Self::new)
    }

    #[inline]
    #[must_use]
    pub fn ratings(&self) -> &[RatingLetter] {
        &self.ratings
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Check if every position is Correct (the winning row)
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.ratings.iter().all(|&r| r == RatingLetter::Correct)
    }

    /// Count positions with the given rating
    #[must_use]
    pub fn count(&self, letter: RatingLetter) -> usize {
        self.ratings.iter().filter(|&&r| r == letter).count()
    }

    /// Render as emoji squares
    ///
    /// # Examples
    /// ```
    /// use wordle_spoiler::core::{EmojiPalette, Guess};
    ///
    /// let guess: Guess = "CMW".parse().unwrap();
    /// assert_eq!(guess.to_emoji(EmojiPalette::STANDARD), "🟩🟨⬜");
    /// assert_eq!(guess.to_emoji(EmojiPalette::NERDLE), "🟩🟪⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self, palette: EmojiPalette) -> String {
        self.ratings.iter().map(|&r| palette.square(r)).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ratings.iter().try_for_each(|r| write!(f, "{r}"))
    }
}

impl FromStr for Guess {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| RatingLetter::from_symbol(c).ok_or(RatingError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}
