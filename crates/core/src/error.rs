//! Error types for Shelfwise operations.
//!
//! This module defines the main error type [`ShelfwiseError`] which represents
//! everything that can go wrong while fetching, caching, or querying a profile
//! page. Expected absences (no name node, unparseable shelf labels) are not
//! errors and never surface here.
//!
//! # Example
//!
//! ```rust
//! use shelfwise_core::{ProfileId, ShelfwiseError};
//!
//! match ProfileId::parse("../etc/passwd") {
//!     Err(ShelfwiseError::InvalidIdentifier(id)) => println!("rejected {id}"),
//!     Err(e) => println!("Error: {}", e),
//!     Ok(id) => println!("accepted {id}"),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use sxd_xpath::ExecutionError;

/// Main error type for profile fetching and extraction.
#[derive(Error, Debug)]
pub enum ShelfwiseError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Non-success HTTP status, only raised when the fetch config asks for it.
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL provided or built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Profile identifier that is empty or contains path/URL-unsafe characters.
    #[error("Invalid profile identifier: {0:?} (expected ASCII letters, digits, '-' or '_')")]
    InvalidIdentifier(String),

    /// Cache file read or write failure.
    #[error("Cache I/O failed for {}: {source}", path.display())]
    CacheError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XPath expression that does not compile.
    #[error("Invalid XPath '{xpath}': {reason}")]
    InvalidXPath { xpath: String, reason: String },

    /// XPath evaluation errors.
    #[error("XPath error: {0}")]
    XPathError(String),

    /// JSON serialization failure in the formatters.
    #[error("Failed to serialize output: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl From<ExecutionError> for ShelfwiseError {
    fn from(err: ExecutionError) -> Self {
        ShelfwiseError::XPathError(err.to_string())
    }
}

/// Result type alias for ShelfwiseError.
///
/// This is a convenience alias for `std::result::Result<T, ShelfwiseError>`.
pub type Result<T> = std::result::Result<T, ShelfwiseError>;
