//! Theme metrics: calibration constants for height estimation.
//!
//! Every heuristic the estimator uses is a calibration value tied to
//! a visual theme (375-unit-wide canvas, specific fonts). They are
//! grouped here as a serde table so alternate themes can recalibrate
//! from `postergen.toml` without touching pagination logic.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Height estimation constants, in virtual layout units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeMetrics {
    /// Usable slide height excluding header/footer chrome
    #[serde(default = "default_max_height")]
    pub max_height: f32,

    /// Fixed height of a level-2 heading
    #[serde(default = "default_heading2_height")]
    pub heading2_height: f32,

    /// Fixed height of a level-3 heading
    #[serde(default = "default_heading3_height")]
    pub heading3_height: f32,

    /// Rendered line height for wrapped text
    #[serde(default = "default_line_height")]
    pub line_height: f32,

    /// Characters per wrapped line inside a list item (indented, so
    /// narrower than a paragraph)
    #[serde(default = "default_list_chars_per_line")]
    pub list_chars_per_line: f32,

    /// Vertical spacing charged per list item
    #[serde(default = "default_list_item_spacing")]
    pub list_item_spacing: f32,

    /// Base top/bottom padding of a list block
    #[serde(default = "default_list_padding")]
    pub list_padding: f32,

    /// Height charged per source line of a code block
    #[serde(default = "default_code_line_height")]
    pub code_line_height: f32,

    /// Base padding of a code block
    #[serde(default = "default_code_padding")]
    pub code_padding: f32,

    /// Characters per wrapped line inside a blockquote
    #[serde(default = "default_quote_chars_per_line")]
    pub quote_chars_per_line: f32,

    /// Base padding of a blockquote
    #[serde(default = "default_quote_padding")]
    pub quote_padding: f32,

    /// Characters per wrapped line of a paragraph
    #[serde(default = "default_para_chars_per_line")]
    pub para_chars_per_line: f32,

    /// Base padding of a paragraph
    #[serde(default = "default_para_padding")]
    pub para_padding: f32,

    /// Width images are rendered at (slide width minus padding)
    #[serde(default = "default_image_render_width")]
    pub image_render_width: f32,

    /// Clamp for tall images
    #[serde(default = "default_image_max_height")]
    pub image_max_height: f32,

    /// Height substituted when image metadata cannot be resolved
    #[serde(default = "default_image_fallback_height")]
    pub image_fallback_height: f32,
}

fn default_max_height() -> f32 {
    420.0
}
fn default_heading2_height() -> f32 {
    60.0
}
fn default_heading3_height() -> f32 {
    50.0
}
fn default_line_height() -> f32 {
    24.0
}
fn default_list_chars_per_line() -> f32 {
    20.0
}
fn default_list_item_spacing() -> f32 {
    8.0
}
fn default_list_padding() -> f32 {
    10.0
}
fn default_code_line_height() -> f32 {
    30.0
}
fn default_code_padding() -> f32 {
    30.0
}
fn default_quote_chars_per_line() -> f32 {
    18.0
}
fn default_quote_padding() -> f32 {
    50.0
}
fn default_para_chars_per_line() -> f32 {
    22.0
}
fn default_para_padding() -> f32 {
    20.0
}
fn default_image_render_width() -> f32 {
    325.0
}
fn default_image_max_height() -> f32 {
    520.0
}
fn default_image_fallback_height() -> f32 {
    300.0
}

impl Default for ThemeMetrics {
    fn default() -> Self {
        // Deserializing an empty table applies every serde default
        toml::from_str("").expect("empty metrics table must deserialize")
    }
}

impl ThemeMetrics {
    /// Parse metrics from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let metrics: Self = toml::from_str(input)?;
        metrics.validate()?;
        Ok(metrics)
    }

    /// Load metrics from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the table is usable for pagination.
    pub fn validate(&self) -> Result<()> {
        if self.max_height <= 0.0 {
            return Err(EngineError::invalid_metrics("max_height must be positive"));
        }
        for (name, value) in [
            ("line_height", self.line_height),
            ("list_chars_per_line", self.list_chars_per_line),
            ("quote_chars_per_line", self.quote_chars_per_line),
            ("para_chars_per_line", self.para_chars_per_line),
            ("image_render_width", self.image_render_width),
        ] {
            if value <= 0.0 {
                return Err(EngineError::invalid_metrics(format!(
                    "{name} must be positive"
                )));
            }
        }
        Ok(())
    }
}
