//! Runtime configuration
//!
//! Loaded from an optional TOML file:
//!
//! ```toml
//! duplicate_policy = "replace"
//! palette = "nerdle"
//! ```
//!
//! Missing keys take their defaults. A file that exists but fails to parse
//! is an error, never a silent fallback.

use crate::core::EmojiPalette;
use crate::spoiler::{DuplicatePolicy, SpoilerRegistry};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Emoji palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    #[default]
    Standard,
    Nerdle,
}

impl PaletteName {
    #[must_use]
    pub const fn palette(self) -> EmojiPalette {
        match self {
            Self::Standard => EmojiPalette::STANDARD,
            Self::Nerdle => EmojiPalette::NERDLE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpoilerConfig {
    pub duplicate_policy: DuplicatePolicy,
    pub palette: PaletteName,
}

impl SpoilerConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns the TOML error if the text is malformed or has unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from a file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, otherwise use defaults
    ///
    /// # Errors
    /// Returns `ConfigError` if a given file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Create an empty registry honoring this configuration
    #[must_use]
    pub fn registry(&self) -> SpoilerRegistry {
        SpoilerRegistry::with_policy(self.duplicate_policy)
    }
}
