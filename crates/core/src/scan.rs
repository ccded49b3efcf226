//! End-to-end profile scanning.
//!
//! [`scan_profile`] runs the whole pipeline for one identifier: cache-aware
//! fetch, lenient parse, then both extractors. [`scan_html`] is the offline
//! half for markup that is already at hand.
//!
//! # Example
//!
//! ```rust,no_run
//! use shelfwise_core::{ProfileId, ScanConfig, scan_profile};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let id = ProfileId::parse("12345")?;
//! let scan = scan_profile(&id, &ScanConfig::default()).await?;
//! println!("{:?}: {} shelves", scan.profile.name, scan.profile.shelves.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::cache::{DEFAULT_CACHE_DIR, PageCache};
use crate::extract::ExtractConfig;
use crate::fetch::{FetchConfig, PageOrigin, fetch_profile};
use crate::{Document, Profile, ProfileId, Result};

/// Configuration for a profile scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// HTTP settings used on a cache miss.
    pub fetch: FetchConfig,
    /// Node selection for the extractors.
    pub extract: ExtractConfig,
    /// Directory holding cached profile pages (default: `files`).
    pub cache_dir: PathBuf,
    /// Fetch even when a cached page exists, then overwrite it.
    pub refresh: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            extract: ExtractConfig::default(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            refresh: false,
        }
    }
}

/// Result of a scan: the extracted profile and where the page came from.
#[derive(Debug, Clone)]
pub struct Scan {
    pub profile: Profile,
    pub origin: PageOrigin,
    /// Size of the raw page in bytes.
    pub page_size: usize,
}

/// Fetch (or load from cache), parse and extract the profile for `id`.
pub async fn scan_profile(id: &ProfileId, config: &ScanConfig) -> Result<Scan> {
    let cache = PageCache::new(&config.cache_dir);
    let page = fetch_profile(id, &cache, &config.fetch, config.refresh).await?;

    let profile = scan_html(id.clone(), &page.html, &config.extract)?;

    Ok(Scan { profile, origin: page.origin, page_size: page.html.len() })
}

/// Parse already-fetched markup and extract the profile.
pub fn scan_html(id: ProfileId, html: &str, config: &ExtractConfig) -> Result<Profile> {
    let doc = Document::parse(html);
    Profile::from_document(id, &doc, config)
}
