//! Height estimator.
//!
//! Turns a [`RawBlock`] into a [`Block`] with rendered markup and an
//! estimated height in virtual layout units. Estimation is a pure
//! function of the block's kind and source text (plus image metadata
//! responses, which are content-addressed); it never looks at
//! pagination state, so blocks can be estimated in any order.

use postergen_model::{Block, BlockKind, RawBlock};
use regex::Regex;

use crate::images::ImageMetadata;
use crate::inline::{self, render_inline, render_list, render_paragraph};
use crate::metrics::ThemeMetrics;

/// Resolves markup and heights for raw blocks.
pub struct Estimator<'a> {
    metrics: &'a ThemeMetrics,
    images: &'a dyn ImageMetadata,
    image_ref: Regex,
    item_marker: Regex,
}

impl<'a> Estimator<'a> {
    pub fn new(metrics: &'a ThemeMetrics, images: &'a dyn ImageMetadata) -> Self {
        Self {
            metrics,
            images,
            image_ref: Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap(),
            item_marker: Regex::new(r"^(\s*[-*]|\s*\d+\.)\s*").unwrap(),
        }
    }

    /// The metrics table this estimator was built with.
    pub fn metrics(&self) -> &ThemeMetrics {
        self.metrics
    }

    /// Estimate a single block.
    ///
    /// A paragraph opening with `>` is reclassified as a blockquote
    /// here; the tokenizer never emits `Blockquote` itself.
    pub fn estimate(&self, raw: RawBlock) -> Block {
        let m = self.metrics;
        let kind = if raw.kind == BlockKind::Paragraph && raw.text.starts_with('>') {
            BlockKind::Blockquote
        } else {
            raw.kind
        };
        let chars = raw.text.chars().count() as f32;

        let (markup, height) = match kind {
            // Cover-only; never enters the pagination flow
            BlockKind::Heading1 => (format!("<h1>{}</h1>", render_inline(&raw.text)), 0.0),
            BlockKind::Heading2 => (
                format!("<h2>{}</h2>", render_inline(&raw.text)),
                m.heading2_height,
            ),
            BlockKind::Heading3 => (
                format!("<h3>{}</h3>", render_inline(&raw.text)),
                m.heading3_height,
            ),
            BlockKind::Paragraph => (
                render_paragraph(&raw.text),
                (chars / m.para_chars_per_line) * m.line_height + m.para_padding,
            ),
            BlockKind::Blockquote => (
                quote_markup(&raw.text),
                (chars / m.quote_chars_per_line) * m.line_height + m.quote_padding,
            ),
            BlockKind::List => (render_list(&raw.text), self.list_height(&raw.text)),
            BlockKind::Code => (
                code_markup(&raw.text),
                raw.text.lines().count() as f32 * m.code_line_height + m.code_padding,
            ),
            BlockKind::Image => self.image_markup_and_height(&raw.text),
        };

        Block {
            kind,
            raw: raw.text,
            markup,
            height,
        }
    }

    /// Height of one list item line: wrapped line count (at the
    /// narrower list width) times line height, plus item spacing.
    pub(crate) fn list_item_height(&self, line: &str) -> f32 {
        let m = self.metrics;
        let stripped = self.item_marker.replace(line, "");
        let chars = stripped.chars().count() as f32;
        (chars / m.list_chars_per_line).max(1.0) * m.line_height + m.list_item_spacing
    }

    fn list_height(&self, text: &str) -> f32 {
        let items: f32 = text.lines().map(|l| self.list_item_height(l)).sum();
        items + self.metrics.list_padding
    }

    fn image_markup_and_height(&self, text: &str) -> (String, f32) {
        let m = self.metrics;
        let Some(caps) = self.image_ref.captures(text) else {
            return (String::new(), m.image_fallback_height);
        };
        let (alt, url) = (&caps[1], &caps[2]);
        let markup = format!(
            "<div class=\"image-wrapper\"><img src=\"{}\" alt=\"{}\"></div>",
            inline::escape_html(url),
            inline::escape_html(alt)
        );

        let height = match self.images.dimensions(url) {
            Ok((w, h)) if w > 0 => {
                let scaled = m.image_render_width * h as f32 / w as f32;
                scaled.min(m.image_max_height)
            }
            Ok(_) => m.image_fallback_height,
            Err(e) => {
                log::warn!("Image metadata unavailable for {url}: {e}; using fallback height");
                m.image_fallback_height
            }
        };
        (markup, height)
    }
}

/// Code markup: fence markers and language tag removed, content
/// escaped inside a code container.
fn code_markup(text: &str) -> String {
    let body: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim_start().starts_with("```"))
        .collect();
    format!(
        "<div class=\"code-block\">{}</div>",
        inline::escape_html(body.join("\n").trim())
    )
}

/// Quote markup: `>` markers stripped, rendered as one paragraph.
fn quote_markup(text: &str) -> String {
    let flat = text
        .lines()
        .map(|l| l.trim_start().trim_start_matches('>').trim())
        .collect::<Vec<_>>()
        .join(" ");
    format!("<blockquote><p>{}</p></blockquote>", render_inline(&flat))
}
