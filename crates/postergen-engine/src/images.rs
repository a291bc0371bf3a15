//! Image metadata service.
//!
//! Resolves an image URL to pixel dimensions. Downloads go through a
//! content-addressed on-disk cache keyed by a SHA-256 hash of the
//! URL, so repeated references to the same image pay the network
//! cost at most once per cache lifetime. Failures are reported as
//! errors; the height estimator maps them to a fallback height
//! rather than aborting.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use sha2::{Digest, Sha256};

use crate::error::{EngineError, Result};

/// Source of pixel dimensions for image URLs.
pub trait ImageMetadata {
    /// Resolve a URL to `(pixel_width, pixel_height)`.
    fn dimensions(&self, url: &str) -> Result<(u32, u32)>;
}

/// Download timeout for image fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-backed implementation with an on-disk cache.
#[derive(Debug)]
pub struct HttpImageCache {
    cache_dir: PathBuf,
    client: Client,
}

impl HttpImageCache {
    /// Create a cache rooted at `cache_dir` (created if missing).
    pub fn new(cache_dir: impl Into<PathBuf>) -> Result<Self> {
        let cache_dir = cache_dir.into();
        fs::create_dir_all(&cache_dir)?;
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Ok(Self { cache_dir, client })
    }

    /// Cache file path for a URL: `<sha256(url)><ext>`, keeping the
    /// URL's original extension so decoders can sniff the format.
    pub fn cache_path(&self, url: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let hash: String = hasher
            .finalize()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        self.cache_dir.join(format!("{hash}{}", url_extension(url)))
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        log::info!("Downloading image: {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| EngineError::image_download(url, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::image_download(url, format!("HTTP {status}")));
        }
        let bytes = response
            .bytes()
            .map_err(|e| EngineError::image_download(url, e.to_string()))?;
        fs::write(dest, &bytes)?;
        Ok(())
    }
}

impl ImageMetadata for HttpImageCache {
    fn dimensions(&self, url: &str) -> Result<(u32, u32)> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(EngineError::invalid_url(url));
        }

        let path = self.cache_path(url);
        if path.exists() {
            log::debug!("Using cached image: {}", path.display());
        } else {
            self.fetch(url, &path)?;
        }

        image::image_dimensions(&path)
            .map_err(|e| EngineError::image_decode(path.display().to_string(), e.to_string()))
    }
}

/// Extension of the URL's final path segment, query stripped;
/// `.png` when the URL carries none.
fn url_extension(url: &str) -> String {
    let tail = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .rsplit('/')
        .next()
        .unwrap_or("");
    match tail.rfind('.') {
        Some(pos) if pos > 0 => tail[pos..].to_string(),
        _ => ".png".to_string(),
    }
}

/// Canned dimensions keyed by URL, for tests and offline runs.
/// Unknown URLs resolve to an error, exercising the fallback path.
#[derive(Debug, Default)]
pub struct StaticDimensions {
    sizes: HashMap<String, (u32, u32)>,
}

impl StaticDimensions {
    /// Empty table: every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a known URL.
    pub fn insert(mut self, url: impl Into<String>, size: (u32, u32)) -> Self {
        self.sizes.insert(url.into(), size);
        self
    }
}

impl ImageMetadata for StaticDimensions {
    fn dimensions(&self, url: &str) -> Result<(u32, u32)> {
        self.sizes
            .get(url)
            .copied()
            .ok_or_else(|| EngineError::invalid_url(url))
    }
}
