//! Wordle Spoiler
//!
//! Rates guesses against one or more candidate solutions of a Wordle-style
//! puzzle and keeps the ratings ready for a reveal on demand.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_spoiler::core::{rate, ScalarSequence};
//! use wordle_spoiler::spoiler::{reveal_rows, SpoilerKey, SpoilerRegistry};
//!
//! // Rate one guess
//! let ratings = rate(&ScalarSequence::from("crane"), &ScalarSequence::from("slate")).unwrap();
//! assert_eq!(ratings.len(), 5);
//!
//! // Register a puzzle with two accepted answers
//! let mut registry = SpoilerRegistry::new();
//! let key = SpoilerKey::new(1, 0);
//! registry.register(key, &["crane", "slate", "plate"], &["slate", "plate"]).unwrap();
//!
//! let rows = reveal_rows(registry.query(key, 0).unwrap());
//! assert_eq!(rows.len(), 2);
//! ```

// Codec and rating engine
pub mod core;

// Spoiler registry and reveal
pub mod spoiler;

// Runtime configuration
pub mod config;

// Puzzle files
pub mod source;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
