//! Fixed decorative header/footer strings.
//!
//! Every slide carries the same chrome except `footer_right`, which
//! the assembler rewrites to the slide's position once the total
//! count is known. The strings are theme configuration, loadable
//! from the `[chrome]` section of `postergen.toml`.

use serde::{Deserialize, Serialize};

/// Decorative strings stamped onto every slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chrome {
    /// Left header on all slides
    #[serde(default = "default_header_left")]
    pub header_left: String,

    /// Right header on the cover slide
    #[serde(default = "default_header_cover")]
    pub header_cover: String,

    /// Right header on content slides
    #[serde(default = "default_header_content")]
    pub header_content: String,

    /// Left footer on the cover slide
    #[serde(default = "default_footer_cover")]
    pub footer_cover: String,

    /// Left footer on content slides
    #[serde(default = "default_footer_content")]
    pub footer_content: String,

    /// Subtitle shown under the cover title
    #[serde(default = "default_cover_subtitle")]
    pub cover_subtitle: String,
}

fn default_header_left() -> String {
    "PARENT PROCESS".to_string()
}
fn default_header_cover() -> String {
    "COVER".to_string()
}
fn default_header_content() -> String {
    "CONTENT".to_string()
}
fn default_footer_cover() -> String {
    "AUTHOR".to_string()
}
fn default_footer_content() -> String {
    "POSTER GEN".to_string()
}
fn default_cover_subtitle() -> String {
    "Generated by PosterGen".to_string()
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            header_left: default_header_left(),
            header_cover: default_header_cover(),
            header_content: default_header_content(),
            footer_cover: default_footer_cover(),
            footer_content: default_footer_content(),
            cover_subtitle: default_cover_subtitle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let chrome = Chrome::default();
        assert_eq!(chrome.header_left, "PARENT PROCESS");
        assert_eq!(chrome.header_cover, "COVER");
        assert_eq!(chrome.footer_content, "POSTER GEN");
    }
}
