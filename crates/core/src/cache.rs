//! Local raw-page cache.
//!
//! One plain HTML file per profile, `<dir>/user_<id>.html`. Entries never
//! expire; a present file always wins over the network.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{ProfileId, Result, ShelfwiseError};

/// Default cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "files";

/// File-backed cache of raw profile pages.
#[derive(Debug, Clone)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache location for `id`. Deterministic; the identifier is already
    /// restricted to filename-safe characters.
    pub fn path_for(&self, id: &ProfileId) -> PathBuf {
        self.dir.join(format!("user_{}.html", id))
    }

    /// Reads the cached page for `id`, or `Ok(None)` when nothing is cached.
    pub fn load(&self, id: &ProfileId) -> Result<Option<String>> {
        let path = self.path_for(id);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "cache miss");
            return Ok(None);
        }

        let html =
            fs::read_to_string(&path).map_err(|source| ShelfwiseError::CacheError { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), bytes = html.len(), "cache hit");

        Ok(Some(html))
    }

    /// Writes `html` verbatim as the cached page for `id`, creating the cache
    /// directory when needed. Returns the path written.
    pub fn store(&self, id: &ProfileId, html: &str) -> Result<PathBuf> {
        let path = self.path_for(id);

        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir)
                .map_err(|source| ShelfwiseError::CacheError { path: self.dir.clone(), source })?;
        }

        fs::write(&path, html).map_err(|source| ShelfwiseError::CacheError { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), bytes = html.len(), "cached page");

        Ok(path)
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_DIR)
    }
}
