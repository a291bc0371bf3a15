//! Tool configuration loaded from `postergen.toml`.
//!
//! Every field has a default, so an absent or empty file yields a
//! working configuration. The `[metrics]` and `[chrome]` tables are
//! passed straight through to the layout engine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use postergen_engine::ThemeMetrics;
use postergen_model::Chrome;

/// Names probed when no `--config` path is given.
const CONFIG_CANDIDATES: [&str; 2] = ["postergen.toml", ".postergen.toml"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory the preview, deck and layout log are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory downloaded images are cached in
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Height heuristics for the layout engine
    #[serde(default)]
    pub metrics: ThemeMetrics,

    /// Decorative header/footer strings
    #[serde(default)]
    pub chrome: Chrome,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache/images")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            cache_dir: default_cache_dir(),
            metrics: ThemeMetrics::default(),
            chrome: Chrome::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("Failed to parse configuration")?;
        config
            .metrics
            .validate()
            .context("Invalid [metrics] section")?;
        Ok(config)
    }

    /// Load configuration from an explicit path, or probe the current
    /// directory for `postergen.toml` and fall back to defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                Self::from_toml_str(&content)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))
            }
            None => {
                for candidate in CONFIG_CANDIDATES {
                    if Path::new(candidate).exists() {
                        let content = fs::read_to_string(candidate)?;
                        if let Ok(config) = Self::from_toml_str(&content) {
                            return Ok(config);
                        }
                    }
                }
                Ok(Self::default())
            }
        }
    }
}
