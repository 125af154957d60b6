//! Core domain types for rating guesses
//!
//! This module contains the scalar-value codec and the rating engine.
//! Everything here is pure and performs no I/O.

mod codec;
mod rating;

pub use codec::{CodecError, DecodeScalars, ScalarSequence};
pub use rating::{EmojiPalette, Guess, RatingError, RatingLetter, rate};
