//! Field extraction from a parsed profile page.
//!
//! Both extractors are lenient: a missing name heading yields `None`, and a
//! shelf link whose text does not look like `Name (count)` is skipped.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::Document;
use crate::profile::ShelfEntry;
use crate::xpath::XPathEvaluator;
use crate::Result;

/// Heading that carries the profile owner's display name.
pub const PROFILE_NAME_XPATH: &str = r#"//*[@id="profileNameTopHeading"]"#;

/// One text node per shelf link inside the shelves sidebar.
pub const SHELVES_XPATH: &str = r#"//*[@id="shelves"]//a/text()"#;

/// Invisible marks Goodreads renders between a shelf name and its count:
/// LEFT-TO-RIGHT MARK and ZERO WIDTH JOINER.
const DIRECTION_MARKS: [char; 2] = ['\u{200E}', '\u{200D}'];

static SHELF_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+)[\x{200D}\x{200E}]?\s+\(([0-9]+)\)").expect("shelf label pattern is valid")
});

/// Configuration for field extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// XPath selecting the element whose text is the display name
    pub name_xpath: String,
    /// XPath selecting one text node per shelf label
    pub shelves_xpath: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { name_xpath: PROFILE_NAME_XPATH.to_string(), shelves_xpath: SHELVES_XPATH.to_string() }
    }
}

/// Extracts the profile owner's display name.
///
/// Returns the full text content of the first matching element, trimmed, or
/// `None` when no element matches. Absence is an expected outcome (private
/// profile, changed layout), not an error.
///
/// # Errors
///
/// Only when `config.name_xpath` is not a valid XPath expression.
pub fn extract_profile_name(doc: &Document, config: &ExtractConfig) -> Result<Option<String>> {
    let name = XPathEvaluator::new().first_string(doc, &config.name_xpath)?;
    Ok(name.map(|name| name.trim().to_string()))
}

/// Extracts the shelf list in document order.
///
/// Every text node selected by `config.shelves_xpath` goes through
/// [`parse_shelf_label`]; labels that do not parse are dropped. Duplicates are
/// kept.
///
/// # Errors
///
/// Only when `config.shelves_xpath` is not a valid XPath expression.
pub fn extract_shelves(doc: &Document, config: &ExtractConfig) -> Result<Vec<ShelfEntry>> {
    let labels = XPathEvaluator::new().all_strings(doc, &config.shelves_xpath)?;

    let shelves: Vec<ShelfEntry> = labels.iter().filter_map(|label| parse_shelf_label(label)).collect();
    tracing::debug!(labels = labels.len(), shelves = shelves.len(), "parsed shelf labels");

    Ok(shelves)
}

/// Parses one shelf label of the form `Name (count)`.
///
/// A left-to-right mark or zero-width joiner anywhere in the name is removed
/// before trimming. Returns `None` for anything else: no parenthesised count,
/// a count with anything but ASCII digits, a count too large for `u64`, or an
/// empty name.
///
/// # Example
///
/// ```rust
/// use shelfwise_core::{ShelfEntry, parse_shelf_label};
///
/// assert_eq!(parse_shelf_label("Read\u{200e} (42)"), Some(ShelfEntry::new("Read", 42)));
/// assert_eq!(parse_shelf_label("No Count Here"), None);
/// ```
pub fn parse_shelf_label(label: &str) -> Option<ShelfEntry> {
    let captures = SHELF_LABEL.captures(label)?;

    let name: String = captures[1].chars().filter(|c| !DIRECTION_MARKS.contains(c)).collect();
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let count = captures[2].parse::<u64>().ok()?;

    Some(ShelfEntry::new(name, count))
}
