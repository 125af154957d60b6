//! Spoiler registry
//!
//! Holds precomputed ratings per (puzzle id, sub-puzzle index). All rating
//! work happens once at registration; queries only read.

use crate::core::{DecodeScalars, Guess, ScalarSequence};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Identity of one playable board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpoilerKey {
    pub puzzle_id: i64,
    pub sub_puzzle_index: usize,
}

impl SpoilerKey {
    #[must_use]
    pub const fn new(puzzle_id: i64, sub_puzzle_index: usize) -> Self {
        Self {
            puzzle_id,
            sub_puzzle_index,
        }
    }
}

impl fmt::Display for SpoilerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.puzzle_id, self.sub_puzzle_index)
    }
}

/// What to do when a key is registered a second time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the existing spoiler and report `AlreadyRegistered`
    #[default]
    Reject,
    /// Swap in the new spoiler at the old position
    Replace,
}

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no spoiler registered for puzzle {0}")]
    NotFound(SpoilerKey),

    #[error("puzzle {key} has {available} candidate solutions, index {index} is out of range")]
    CandidateOutOfRange {
        key: SpoilerKey,
        index: usize,
        available: usize,
    },

    #[error("puzzle {0} is already registered")]
    AlreadyRegistered(SpoilerKey),
}

/// Ratings of every applicable guess row against one candidate solution
///
/// Keeps the decoded candidate and, per rated row, the guess word it was
/// rated from, so a presentation layer can label rows without going back to
/// the puzzle source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    candidate: ScalarSequence,
    words: Vec<ScalarSequence>,
    guesses: Vec<Guess>,
}

impl Solution {
    /// Rate every guess row against `candidate`, in row order
    ///
    /// Rows whose length differs from the candidate do not apply to it and
    /// are left out.
    #[must_use]
    pub fn rate_all(guess_words: &[ScalarSequence], candidate: &ScalarSequence) -> Self {
        let (words, guesses) = guess_words
            .iter()
            .filter_map(|word| match Guess::rated(word, candidate) {
                Ok(guess) => Some((word.clone(), guess)),
                Err(e) => {
                    debug!(guess = %word, candidate = %candidate, "skipping row: {e}");
                    None
                }
            })
            .unzip();

        Self {
            candidate: candidate.clone(),
            words,
            guesses,
        }
    }

    #[inline]
    #[must_use]
    pub fn candidate(&self) -> &ScalarSequence {
        &self.candidate
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Guess words of the rated rows, parallel to [`Solution::guesses`]
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[ScalarSequence] {
        &self.words
    }
}

/// All candidate solutions of one board, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spoiler {
    key: SpoilerKey,
    solutions: Vec<Solution>,
}

impl Spoiler {
    /// Compute a spoiler without touching any registry
    ///
    /// Guess words and candidates that fail to decode are skipped with a
    /// warning. Pure, so many spoilers can be built in parallel.
    pub fn build<G, C>(key: SpoilerKey, guess_words: &[G], candidates: &[C]) -> Self
    where
        G: DecodeScalars,
        C: DecodeScalars,
    {
        let guess_words = decode_all(key, "guess", guess_words);
        let solutions = decode_all(key, "candidate", candidates)
            .iter()
            .map(|candidate| Solution::rate_all(&guess_words, candidate))
            .collect();

        Self { key, solutions }
    }

    #[inline]
    #[must_use]
    pub const fn key(&self) -> SpoilerKey {
        self.key
    }

    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Get one candidate's solution by index
    #[must_use]
    pub fn solution(&self, candidate_index: usize) -> Option<&Solution> {
        self.solutions.get(candidate_index)
    }
}

fn decode_all<T: DecodeScalars>(key: SpoilerKey, what: &str, texts: &[T]) -> Vec<ScalarSequence> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(i, text)| match text.decode_scalars() {
            Ok(seq) => Some(seq),
            Err(e) => {
                warn!(puzzle = %key, index = i, "skipping undecodable {what}: {e}");
                None
            }
        })
        .collect()
}

/// Process-wide store of spoilers, in insertion order
#[derive(Debug, Default)]
pub struct SpoilerRegistry {
    policy: DuplicatePolicy,
    spoilers: Vec<Spoiler>,
    index: FxHashMap<SpoilerKey, usize>,
}

impl SpoilerRegistry {
    /// Create an empty registry that rejects duplicate keys
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Rate every (guess, candidate) pair and store the result under the key
    ///
    /// # Errors
    /// Returns `RegistryError::AlreadyRegistered` if the key exists and the
    /// policy is `Reject`. Undecodable or length-mismatched input never fails
    /// the call.
    ///
    /// # Examples
    /// ```
    /// use wordle_spoiler::spoiler::{SpoilerKey, SpoilerRegistry};
    ///
    /// let mut registry = SpoilerRegistry::new();
    /// let key = SpoilerKey::new(7, 0);
    /// registry.register(key, &["crane", "slate"], &["slate"]).unwrap();
    ///
    /// let guesses = registry.query(key, 0).unwrap();
    /// assert_eq!(guesses.len(), 2);
    /// assert!(guesses[1].is_winning());
    /// ```
    pub fn register<G, C>(
        &mut self,
        key: SpoilerKey,
        guess_words: &[G],
        candidates: &[C],
    ) -> Result<(), RegistryError>
    where
        G: DecodeScalars,
        C: DecodeScalars,
    {
        // don't rate anything we're about to throw away
        if self.policy == DuplicatePolicy::Reject && self.contains(key) {
            warn!(puzzle = %key, "rejecting duplicate registration");
            return Err(RegistryError::AlreadyRegistered(key));
        }

        self.insert(Spoiler::build(key, guess_words, candidates))
    }

    /// Store a spoiler built with [`Spoiler::build`]
    ///
    /// # Errors
    /// Returns `RegistryError::AlreadyRegistered` if the key exists and the
    /// policy is `Reject`.
    pub fn insert(&mut self, spoiler: Spoiler) -> Result<(), RegistryError> {
        let key = spoiler.key();
        debug!(
            puzzle = %key,
            candidates = spoiler.solutions().len(),
            rows = spoiler.solutions().iter().map(|s| s.guesses().len()).sum::<usize>(),
            "registering spoiler"
        );

        match (self.index.get(&key), self.policy) {
            (Some(_), DuplicatePolicy::Reject) => {
                warn!(puzzle = %key, "rejecting duplicate registration");
                Err(RegistryError::AlreadyRegistered(key))
            }
            (Some(&slot), DuplicatePolicy::Replace) => {
                debug!(puzzle = %key, "replacing existing spoiler");
                self.spoilers[slot] = spoiler;
                Ok(())
            }
            (None, _) => {
                self.index.insert(key, self.spoilers.len());
                self.spoilers.push(spoiler);
                Ok(())
            }
        }
    }

    /// Get the rated guess rows for one candidate solution
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` for an unknown key and
    /// `RegistryError::CandidateOutOfRange` for a bad candidate index.
    pub fn query(&self, key: SpoilerKey, candidate_index: usize) -> Result<&[Guess], RegistryError> {
        let spoiler = self.get(key).ok_or(RegistryError::NotFound(key))?;
        spoiler
            .solution(candidate_index)
            .map(Solution::guesses)
            .ok_or(RegistryError::CandidateOutOfRange {
                key,
                index: candidate_index,
                available: spoiler.solutions().len(),
            })
    }

    #[must_use]
    pub fn get(&self, key: SpoilerKey) -> Option<&Spoiler> {
        self.index.get(&key).map(|&slot| &self.spoilers[slot])
    }

    #[must_use]
    pub fn contains(&self, key: SpoilerKey) -> bool {
        self.index.contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spoilers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spoilers.is_empty()
    }

    /// Iterate spoilers in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, Spoiler> {
        self.spoilers.iter()
    }
}

impl<'a> IntoIterator for &'a SpoilerRegistry {
    type Item = &'a Spoiler;
    type IntoIter = std::slice::Iter<'a, Spoiler>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RatingLetter::{Correct, Misplaced, Wrong};

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn register_and_query() {
        let mut registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(1, 0);
        registry
            .register(key, &["crane", "slate"], &["slate"])
            .unwrap();

        let guesses = registry.query(key, 0).unwrap();
        assert_eq!(guesses.len(), 2);
        assert_eq!(guesses[0].ratings(), &[Wrong, Wrong, Correct, Wrong, Correct]);
        assert!(guesses[1].is_winning());
    }

    #[test]
    fn register_skips_length_mismatch() {
        let mut registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(1, 0);
        registry
            .register(key, &["crane", "slate"], &["floods"])
            .unwrap();

        let spoiler = registry.get(key).unwrap();
        assert_eq!(spoiler.solutions().len(), 1);
        assert!(registry.query(key, 0).unwrap().is_empty());
    }

    #[test]
    fn register_keeps_row_order_around_skipped_rows() {
        let mut registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(2, 0);
        registry
            .register(key, &["abc", "toolong", "cab", "ab"], &["abc"])
            .unwrap();

        let rows: Vec<String> = registry
            .query(key, 0)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rows, vec!["CCC", "MMM"]);
    }

    #[test]
    fn register_multiple_candidates_independently() {
        let mut registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(3, 1);
        registry
            .register(key, &["ab", "ba"], &["ab", "ba"])
            .unwrap();

        let first = registry.query(key, 0).unwrap();
        let second = registry.query(key, 1).unwrap();
        assert_eq!(first[0].ratings(), &[Correct, Correct]);
        assert_eq!(first[1].ratings(), &[Misplaced, Misplaced]);
        assert_eq!(second[0].ratings(), &[Misplaced, Misplaced]);
        assert_eq!(second[1].ratings(), &[Correct, Correct]);
    }

    #[test]
    fn register_skips_undecodable_text() {
        let mut registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(4, 0);
        let guesses = vec![utf16("ab"), vec![0x61, 0xDC00], utf16("ba")];
        let candidates = vec![vec![0xD800, 0x62], utf16("ab")];
        registry.register(key, &guesses, &candidates).unwrap();

        let spoiler = registry.get(key).unwrap();
        assert_eq!(spoiler.solutions().len(), 1);
        assert_eq!(spoiler.solutions()[0].guesses().len(), 2);
    }

    #[test]
    fn solution_keeps_candidate_and_row_words() {
        let spoiler = Spoiler::build(SpoilerKey::new(2, 1), &["abc", "toolong", "cab"], &["abc"]);
        let solution = spoiler.solution(0).unwrap();

        assert_eq!(solution.candidate().to_string(), "abc");
        let words: Vec<String> = solution.words().iter().map(ToString::to_string).collect();
        assert_eq!(words, vec!["abc", "cab"]);
        assert_eq!(solution.words().len(), solution.guesses().len());
    }

    #[test]
    fn query_unknown_key() {
        let registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(9, 9);
        assert_eq!(registry.query(key, 0), Err(RegistryError::NotFound(key)));
    }

    #[test]
    fn query_candidate_out_of_range() {
        let mut registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(5, 0);
        registry.register(key, &["ab"], &["ab"]).unwrap();

        assert_eq!(
            registry.query(key, 1),
            Err(RegistryError::CandidateOutOfRange {
                key,
                index: 1,
                available: 1
            })
        );
    }

    #[test]
    fn duplicate_rejected_by_default() {
        let mut registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(6, 0);
        registry.register(key, &["ab"], &["ab"]).unwrap();

        let err = registry.register(key, &["ab"], &["ba"]);
        assert_eq!(err, Err(RegistryError::AlreadyRegistered(key)));
        assert!(registry.query(key, 0).unwrap()[0].is_winning());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_replaced_in_place() {
        let mut registry = SpoilerRegistry::with_policy(DuplicatePolicy::Replace);
        let first = SpoilerKey::new(6, 0);
        let second = SpoilerKey::new(6, 1);
        registry.register(first, &["ab"], &["ab"]).unwrap();
        registry.register(second, &["ab"], &["ab"]).unwrap();
        registry.register(first, &["ab"], &["ba"]).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.query(first, 0).unwrap()[0].to_string(), "MM");
        let keys: Vec<SpoilerKey> = registry.iter().map(Spoiler::key).collect();
        assert_eq!(keys, vec![first, second]);
    }

    #[test]
    fn iteration_is_insertion_ordered() {
        let mut registry = SpoilerRegistry::new();
        for (id, sub) in [(3, 0), (1, 2), (2, 1)] {
            registry
                .register(SpoilerKey::new(id, sub), &["x"], &["x"])
                .unwrap();
        }

        let keys: Vec<String> = (&registry).into_iter().map(|s| s.key().to_string()).collect();
        assert_eq!(keys, vec!["3/0", "1/2", "2/1"]);
        assert!(!registry.is_empty());
    }

    #[test]
    fn insert_prebuilt_spoiler() {
        let mut registry = SpoilerRegistry::new();
        let key = SpoilerKey::new(8, 0);
        let spoiler = Spoiler::build(key, &["abc"], &["cab", "abc"]);
        registry.insert(spoiler.clone()).unwrap();

        assert_eq!(registry.get(key), Some(&spoiler));
        assert!(registry.insert(spoiler).is_err());
    }

    #[test]
    fn duplicate_policy_deserializes() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: DuplicatePolicy,
        }
        let w: Wrapper = serde_json::from_str(r#"{"policy":"replace"}"#).unwrap();
        assert_eq!(w.policy, DuplicatePolicy::Replace);
    }
}
