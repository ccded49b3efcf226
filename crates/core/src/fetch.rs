//! Profile page fetching, backed by the local page cache.
//!
//! [`fetch_profile`] is the cache-aware entry point: a cached page is returned
//! as-is and the network is only touched on a miss. [`fetch_url`] is the raw
//! HTTP GET underneath it.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::cache::PageCache;
use crate::{ProfileId, Result, ShelfwiseError};

/// Profile URL template; the identifier is appended as the last path segment.
pub const DEFAULT_BASE_URL: &str = "https://www.goodreads.com/user/show/";

/// Browser-like agent so the request is not rejected as an automated client.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// HTTP client configuration for fetching profile pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// URL the profile identifier is appended to.
    pub base_url: Url,
    /// Turn non-2xx responses into [`ShelfwiseError::HttpStatus`] instead of
    /// returning the error page body.
    pub require_success: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            require_success: false,
        }
    }
}

/// Where a page body came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOrigin {
    /// Read from this cache file; no request was made.
    Cache(PathBuf),
    /// Fetched from this URL (and then written to the cache).
    Remote(Url),
}

/// Raw markup of a profile page plus its origin.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub html: String,
    pub origin: PageOrigin,
}

impl FetchedPage {
    pub fn from_cache(&self) -> bool {
        matches!(self.origin, PageOrigin::Cache(_))
    }
}

/// Builds the profile URL for `id` under `base`.
///
/// # Example
///
/// ```rust
/// use shelfwise_core::{ProfileId, fetch::profile_url};
/// use url::Url;
///
/// let base = Url::parse("https://www.goodreads.com/user/show/").unwrap();
/// let id = ProfileId::parse("12345").unwrap();
/// assert_eq!(profile_url(&base, &id).unwrap().as_str(), "https://www.goodreads.com/user/show/12345");
/// ```
pub fn profile_url(base: &Url, id: &ProfileId) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ShelfwiseError::InvalidUrl(format!("{} cannot be used as a base URL", base)))?
        .pop_if_empty()
        .push(id.as_str());
    Ok(url)
}

/// Fetches HTML content from a URL.
///
/// Performs a single GET with the configured User-Agent and returns the body
/// text. Unless [`FetchConfig::require_success`] is set, the body is returned
/// whatever the status code; a non-success status is only logged.
pub async fn fetch_url(url: &Url, config: &FetchConfig) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ShelfwiseError::HttpError)?;

    let response = client
        .get(url.clone())
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ShelfwiseError::Timeout { timeout: config.timeout }
            } else {
                ShelfwiseError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        if config.require_success {
            return Err(ShelfwiseError::HttpStatus { status: status.as_u16(), url: url.to_string() });
        }
        tracing::warn!(%url, status = status.as_u16(), "non-success status, parsing body anyway");
    }

    let content = response.text().await?;
    tracing::debug!(%url, bytes = content.len(), "fetched page");

    Ok(content)
}

/// Returns the raw profile page for `id`.
///
/// A cached page is returned without any network call (unless `refresh` is
/// set). Otherwise the page is fetched once and written to the cache before
/// returning, so the next run for the same identifier stays offline.
pub async fn fetch_profile(
    id: &ProfileId, cache: &PageCache, config: &FetchConfig, refresh: bool,
) -> Result<FetchedPage> {
    if !refresh && let Some(html) = cache.load(id)? {
        return Ok(FetchedPage { html, origin: PageOrigin::Cache(cache.path_for(id)) });
    }

    let url = profile_url(&config.base_url, id)?;
    tracing::debug!(%url, refresh, "fetching profile");

    let html = fetch_url(&url, config).await?;
    cache.store(id, &html)?;

    Ok(FetchedPage { html, origin: PageOrigin::Remote(url) })
}
