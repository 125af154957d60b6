//! Unicode scalar sequences
//!
//! Guess and solution words are compared per scalar value, never per UTF-16
//! code unit, so characters outside the Basic Multilingual Plane (emoji, rare
//! scripts) count as a single position.

use std::fmt;
use thiserror::Error;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;
const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

/// Error type for malformed UTF-16 input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A high surrogate that is not immediately followed by a low surrogate
    #[error("unpaired high surrogate {unit:#06X} at code unit {index}")]
    UnpairedHighSurrogate { index: usize, unit: u16 },

    /// A low surrogate without a preceding high surrogate
    #[error("unpaired low surrogate {unit:#06X} at code unit {index}")]
    UnpairedLowSurrogate { index: usize, unit: u16 },
}

/// An immutable, ordered sequence of Unicode scalar values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScalarSequence(Vec<char>);

impl ScalarSequence {
    /// Decode UTF-16 code units into scalar values
    ///
    /// Surrogate pairs combine into one scalar value. Any unpaired surrogate
    /// fails the whole decode; nothing is dropped or replaced.
    ///
    /// # Errors
    /// Returns `CodecError` on the first unpaired high or low surrogate.
    ///
    /// # Examples
    /// ```
    /// use wordle_spoiler::core::ScalarSequence;
    ///
    /// let units: Vec<u16> = "a🟩b".encode_utf16().collect();
    /// let seq = ScalarSequence::decode(&units).unwrap();
    /// assert_eq!(seq.len(), 3);
    ///
    /// assert!(ScalarSequence::decode(&[0x61, 0xD83D]).is_err());
    /// ```
    pub fn decode(units: &[u16]) -> Result<Self, CodecError> {
        let mut scalars = Vec::with_capacity(units.len());
        let mut pending_high: Option<(usize, u16)> = None;

        for (index, &unit) in units.iter().enumerate() {
            if let Some((high_index, high)) = pending_high.take() {
                let unpaired = CodecError::UnpairedHighSurrogate {
                    index: high_index,
                    unit: high,
                };
                if !LOW_SURROGATES.contains(&unit) {
                    return Err(unpaired);
                }
                scalars.push(combine_surrogates(high, unit).ok_or(unpaired)?);
            } else if HIGH_SURROGATES.contains(&unit) {
                pending_high = Some((index, unit));
            } else {
                // only low surrogates are left without a scalar value
                let scalar = char::from_u32(u32::from(unit))
                    .ok_or(CodecError::UnpairedLowSurrogate { index, unit })?;
                scalars.push(scalar);
            }
        }

        // input ended right after a high surrogate
        if let Some((index, unit)) = pending_high {
            return Err(CodecError::UnpairedHighSurrogate { index, unit });
        }

        Ok(Self(scalars))
    }

    /// Encode back into UTF-16 code units
    ///
    /// Scalars at or above U+10000 are split into a high/low surrogate pair.
    #[must_use]
    pub fn encode(&self) -> Vec<u16> {
        let mut units = Vec::with_capacity(self.0.len());
        for &scalar in &self.0 {
            let value = u32::from(scalar);
            if value >= SUPPLEMENTARY_BASE {
                let rest = value - SUPPLEMENTARY_BASE;
                units.push(0xD800 + ((rest >> 10) & 0x3FF) as u16);
                units.push(0xDC00 + (rest & 0x3FF) as u16);
            } else {
                units.push(value as u16);
            }
        }
        units
    }

    /// Number of scalar values (not code units)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the scalar values as a slice
    #[inline]
    #[must_use]
    pub fn scalars(&self) -> &[char] {
        &self.0
    }
}

/// Combine a surrogate pair into one scalar value
fn combine_surrogates(high: u16, low: u16) -> Option<char> {
    let value = SUPPLEMENTARY_BASE
        + ((u32::from(high) - 0xD800) << 10)
        + (u32::from(low) - 0xDC00);
    char::from_u32(value)
}

impl From<&str> for ScalarSequence {
    fn from(text: &str) -> Self {
        Self(text.chars().collect())
    }
}

impl fmt::Display for ScalarSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Text that can be decoded into a `ScalarSequence`
///
/// Rust strings are always well-formed and decode infallibly. Raw UTF-16
/// buffers, as handed over by a page or document source, go through
/// [`ScalarSequence::decode`].
pub trait DecodeScalars {
    /// # Errors
    /// Returns `CodecError` if the text contains an unpaired surrogate.
    fn decode_scalars(&self) -> Result<ScalarSequence, CodecError>;
}

impl DecodeScalars for str {
    fn decode_scalars(&self) -> Result<ScalarSequence, CodecError> {
        Ok(ScalarSequence::from(self))
    }
}

impl DecodeScalars for String {
    fn decode_scalars(&self) -> Result<ScalarSequence, CodecError> {
        self.as_str().decode_scalars()
    }
}

impl DecodeScalars for [u16] {
    fn decode_scalars(&self) -> Result<ScalarSequence, CodecError> {
        ScalarSequence::decode(self)
    }
}

impl DecodeScalars for Vec<u16> {
    fn decode_scalars(&self) -> Result<ScalarSequence, CodecError> {
        ScalarSequence::decode(self)
    }
}

impl<T: DecodeScalars + ?Sized> DecodeScalars for &T {
    fn decode_scalars(&self) -> Result<ScalarSequence, CodecError> {
        (**self).decode_scalars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn decode_ascii() {
        let seq = ScalarSequence::decode(&utf16("crane")).unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.scalars(), &['c', 'r', 'a', 'n', 'e']);
    }

    #[test]
    fn decode_surrogate_pair_is_one_scalar() {
        // U+1F7E9 LARGE GREEN SQUARE = D83D DFE9
        let seq = ScalarSequence::decode(&[0xD83D, 0xDFE9]).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.scalars()[0], '\u{1F7E9}');
    }

    #[test]
    fn decode_mixed_planes() {
        let seq = ScalarSequence::decode(&utf16("x𝔸y😀")).unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.scalars(), &['x', '𝔸', 'y', '😀']);
    }

    #[test]
    fn decode_empty() {
        let seq = ScalarSequence::decode(&[]).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.encode(), Vec::<u16>::new());
    }

    #[test]
    fn decode_rejects_lone_low_surrogate() {
        assert_eq!(
            ScalarSequence::decode(&[0x61, 0xDC00, 0x62]),
            Err(CodecError::UnpairedLowSurrogate {
                index: 1,
                unit: 0xDC00
            })
        );
    }

    #[test]
    fn decode_rejects_high_followed_by_bmp() {
        assert_eq!(
            ScalarSequence::decode(&[0xD83D, 0x0041]),
            Err(CodecError::UnpairedHighSurrogate {
                index: 0,
                unit: 0xD83D
            })
        );
    }

    #[test]
    fn decode_rejects_two_high_surrogates() {
        assert!(matches!(
            ScalarSequence::decode(&[0xD83D, 0xD83D, 0xDFE9]),
            Err(CodecError::UnpairedHighSurrogate { index: 0, .. })
        ));
    }

    #[test]
    fn decode_rejects_trailing_high_surrogate() {
        assert_eq!(
            ScalarSequence::decode(&[0x61, 0x62, 0xDBFF]),
            Err(CodecError::UnpairedHighSurrogate {
                index: 2,
                unit: 0xDBFF
            })
        );
    }

    #[test]
    fn encode_splits_supplementary() {
        let seq = ScalarSequence::from("a\u{10FFFF}");
        assert_eq!(seq.encode(), vec![0x61, 0xDBFF, 0xDFFF]);
    }

    #[test]
    fn encode_matches_std_utf16() {
        for text in ["crane", "🟩🟨⬜", "Žluťoučký", "𝔘𝔫𝔦𝔠𝔬𝔡𝔢", ""] {
            let seq = ScalarSequence::from(text);
            assert_eq!(seq.encode(), utf16(text), "mismatch for {text:?}");
        }
    }

    #[test]
    fn round_trip() {
        let units = utf16("po😀kus𐍈");
        let seq = ScalarSequence::decode(&units).unwrap();
        assert_eq!(seq.encode(), units);
        assert_eq!(seq.to_string(), "po😀kus𐍈");
    }

    #[test]
    fn decode_scalars_trait_inputs() {
        let from_str = "ab😀".decode_scalars().unwrap();
        let from_units = utf16("ab😀").decode_scalars().unwrap();
        assert_eq!(from_str, from_units);
        assert!(vec![0xDC00u16].decode_scalars().is_err());
    }

    #[test]
    fn every_single_unit_decodes_or_fails() {
        for unit in 0..=u16::MAX {
            let decoded = ScalarSequence::decode(&[unit]);
            if HIGH_SURROGATES.contains(&unit) {
                assert_eq!(
                    decoded,
                    Err(CodecError::UnpairedHighSurrogate { index: 0, unit })
                );
            } else if LOW_SURROGATES.contains(&unit) {
                assert_eq!(
                    decoded,
                    Err(CodecError::UnpairedLowSurrogate { index: 0, unit })
                );
            } else {
                let seq = decoded.unwrap();
                assert_eq!(seq.encode(), vec![unit]);
                assert_eq!(u32::from(seq.scalars()[0]), u32::from(unit));
            }
        }
    }

    #[test]
    fn every_surrogate_pair_combines() {
        for high in HIGH_SURROGATES {
            for low in [0xDC00, 0xDE00, 0xDFFF] {
                let seq = ScalarSequence::decode(&[high, low]).unwrap();
                assert_eq!(seq.len(), 1);
                assert_eq!(seq.encode(), vec![high, low]);
            }
        }
    }

    #[test]
    fn error_display() {
        let err = CodecError::UnpairedLowSurrogate {
            index: 3,
            unit: 0xDC01,
        };
        assert_eq!(err.to_string(), "unpaired low surrogate 0xDC01 at code unit 3");
    }
}
