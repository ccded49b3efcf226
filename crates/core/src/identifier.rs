//! Validated Goodreads profile identifiers.
//!
//! The identifier ends up both in the profile URL path and in the cache
//! filename, so anything outside `[A-Za-z0-9_-]` is rejected up front.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{Result, ShelfwiseError};

/// Longest identifier accepted, in bytes.
pub const MAX_IDENTIFIER_LEN: usize = 128;

/// An opaque, validated profile identifier such as `12345` or `12345-jane-doe`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Validates `raw` after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfwiseError::InvalidIdentifier`] when the trimmed value is
    /// empty, longer than [`MAX_IDENTIFIER_LEN`], or contains a character other
    /// than an ASCII letter, digit, `-` or `_`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelfwise_core::ProfileId;
    ///
    /// let id = ProfileId::parse(" 12345-jane-doe\n").unwrap();
    /// assert_eq!(id.as_str(), "12345-jane-doe");
    /// assert!(ProfileId::parse("../../secret").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        let valid = !trimmed.is_empty()
            && trimmed.len() <= MAX_IDENTIFIER_LEN
            && trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid { Ok(Self(trimmed.to_string())) } else { Err(ShelfwiseError::InvalidIdentifier(raw.to_string())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProfileId {
    type Err = ShelfwiseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProfileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
