//! Error types for the pagination engine.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while building a deck.
///
/// Image failures are handled inside the height estimator (fallback
/// height) and never surface here; pagination itself is total.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Image could not be downloaded
    #[error("Image download failed for {url}: {reason}")]
    ImageDownload { url: String, reason: String },

    /// Downloaded image could not be decoded
    #[error("Image decode failed for {path}: {reason}")]
    ImageDecode { path: String, reason: String },

    /// Image URL is malformed
    #[error("Invalid image URL: {url}")]
    InvalidUrl { url: String },

    /// Theme metrics are unusable (e.g. non-positive height budget)
    #[error("Invalid theme metrics: {reason}")]
    InvalidMetrics { reason: String },

    /// TOML parsing error (theme metrics file)
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl EngineError {
    /// Create an image download error
    pub fn image_download(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImageDownload {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an image decode error
    pub fn image_decode(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImageDecode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Create an invalid metrics error
    pub fn invalid_metrics(reason: impl Into<String>) -> Self {
        Self::InvalidMetrics {
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::ImageDownload { .. } => "PGEN001",
            Self::ImageDecode { .. } => "PGEN002",
            Self::InvalidUrl { .. } => "PGEN003",
            Self::InvalidMetrics { .. } => "PGEN004",
            Self::TomlError(_) => "PGEN005",
            Self::IoError(_) => "PGEN006",
        }
    }
}
