//! Profile output types.
//!
//! [`Profile`] is the complete result of reading one profile page: the owner's
//! display name (if the page exposes it) and the ordered shelf list.

use std::fmt;

use serde::Serialize;

use crate::extract::{ExtractConfig, extract_profile_name, extract_shelves};
use crate::{Document, ProfileId, Result};

/// One named shelf and the number of books on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfEntry {
    pub name: String,
    pub count: u64,
}

impl ShelfEntry {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self { name: name.into(), count }
    }
}

impl fmt::Display for ShelfEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}

/// Structured data extracted from a profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Identifier the page was requested for.
    pub id: ProfileId,

    /// Display name, `None` when the page has no name heading (private
    /// profile, error page, changed layout).
    pub name: Option<String>,

    /// Shelves in the order they appear on the page.
    pub shelves: Vec<ShelfEntry>,
}

impl Profile {
    /// Runs both extractors over `doc`.
    ///
    /// Missing nodes are not errors; only an invalid XPath in `config` is.
    pub fn from_document(id: ProfileId, doc: &Document, config: &ExtractConfig) -> Result<Self> {
        let name = extract_profile_name(doc, config)?;
        let shelves = extract_shelves(doc, config)?;

        tracing::debug!(%id, found_name = name.is_some(), shelves = shelves.len(), "extracted profile");

        Ok(Self { id, name, shelves })
    }

    /// Total number of books across all shelves.
    pub fn total_books(&self) -> u64 {
        self.shelves.iter().map(|shelf| shelf.count).sum()
    }
}
