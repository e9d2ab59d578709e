//! On-disk response cache
//!
//! Page bodies are stored as `<cache-dir>/<sha256(url) hex>.html`. The cache
//! never expires entries; delete the directory to refresh it.

use crate::search::fetcher::{FetchResult, PageFetcher};
use sha2::{Digest, Sha256};
use std::future::Future;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory of cached page bodies keyed by URL
#[derive(Debug, Clone)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    /// Opens the cache, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds (or would hold) the body for `url`
    pub fn path_for(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.dir.join(format!("{}.html", hex::encode(digest)))
    }

    /// Reads a cached body; any error counts as a miss
    pub async fn read(&self, url: &str) -> Option<String> {
        match tokio::fs::read_to_string(self.path_for(url)).await {
            Ok(body) => Some(body),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::debug!("Unreadable cache entry for {}: {}", url, e);
                None
            }
        }
    }

    /// Stores a body for `url`
    ///
    /// The body goes to a temporary file in the cache directory that is then
    /// renamed over the entry, so readers never see a partial page.
    pub async fn write(&self, url: &str, body: &str) -> io::Result<()> {
        let dir = self.dir.clone();
        let path = self.path_for(url);
        let body = body.to_owned();

        tokio::task::spawn_blocking(move || -> io::Result<()> {
            let mut file = NamedTempFile::new_in(&dir)?;
            file.write_all(body.as_bytes())?;
            file.flush()?;
            file.persist(&path)?;
            Ok(())
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }
}

/// Fetcher that answers from the cache and fills it on successful misses
#[derive(Debug, Clone)]
pub struct CachedFetcher<F> {
    inner: F,
    cache: PageCache,
}

impl<F: PageFetcher> CachedFetcher<F> {
    pub fn new(inner: F, cache: PageCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }
}

impl<F: PageFetcher> PageFetcher for CachedFetcher<F> {
    fn fetch(&self, url: &str) -> impl Future<Output = FetchResult> + Send {
        async move {
            if let Some(body) = self.cache.read(url).await {
                tracing::debug!("Cache hit for {}", url);
                return FetchResult::Success {
                    final_url: url.to_string(),
                    status_code: 200,
                    body,
                };
            }

            let result = self.inner.fetch(url).await;

            if let FetchResult::Success { body, .. } = &result {
                if let Err(e) = self.cache.write(url, body).await {
                    tracing::warn!("Failed to cache {}: {}", url, e);
                }
            }

            result
        }
    }
}
