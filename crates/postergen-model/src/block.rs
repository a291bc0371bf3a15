//! Typed content blocks extracted from a Markdown document.
//!
//! A document is tokenized into an ordered sequence of [`RawBlock`]s,
//! which the height estimator turns into [`Block`]s carrying rendered
//! markup and an estimated height in virtual layout units.

use serde::{Deserialize, Serialize};

/// The closed set of block kinds the tokenizer can produce.
///
/// `Heading1` is consumed only for the cover slide and never enters
/// the pagination flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Top-level heading (`#`), becomes the cover slide
    Heading1,
    /// Section heading (`##`)
    Heading2,
    /// Sub-heading (`###` and deeper)
    Heading3,
    /// Plain prose paragraph
    Paragraph,
    /// Quoted paragraph (`>`), classified at estimation time
    Blockquote,
    /// Bullet or numbered list, one block per run of list lines
    List,
    /// Fenced code block
    Code,
    /// Standalone image reference `![alt](url)`
    Image,
}

impl BlockKind {
    /// Short label used in the layout log.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Heading1 => "h1",
            Self::Heading2 => "h2",
            Self::Heading3 => "h3",
            Self::Paragraph => "p",
            Self::Blockquote => "quote",
            Self::List => "list",
            Self::Code => "code",
            Self::Image => "image",
        }
    }

    /// Whether this kind is a section heading subject to orphan
    /// protection during pagination.
    pub fn is_section_heading(&self) -> bool {
        matches!(self, Self::Heading2 | Self::Heading3)
    }
}

/// A block as produced by the tokenizer: typed source text, height
/// not yet resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    /// Block kind
    pub kind: BlockKind,
    /// Original Markdown source span
    pub text: String,
}

impl RawBlock {
    /// Create a raw block.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// A fully resolved block: markup rendered, height estimated.
///
/// `height` is a pure function of `kind` and `raw` (plus image
/// metadata responses); it never depends on pagination state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block kind
    pub kind: BlockKind,
    /// Original Markdown source span, kept for re-splitting
    pub raw: String,
    /// Markup fragment ready for presentation
    pub markup: String,
    /// Estimated vertical extent in virtual layout units (>= 0)
    pub height: f32,
}

impl Block {
    /// Truncated single-line content snippet for diagnostics.
    pub fn snippet(&self) -> String {
        let flat = self.raw.replace('\n', " ");
        if flat.chars().count() > 30 {
            let cut: String = flat.chars().take(30).collect();
            format!("{cut}...")
        } else {
            flat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(BlockKind::Heading2.label(), "h2");
        assert_eq!(BlockKind::Paragraph.label(), "p");
        assert_eq!(BlockKind::Blockquote.label(), "quote");
    }

    #[test]
    fn test_section_heading_detection() {
        assert!(BlockKind::Heading2.is_section_heading());
        assert!(BlockKind::Heading3.is_section_heading());
        assert!(!BlockKind::Heading1.is_section_heading());
        assert!(!BlockKind::List.is_section_heading());
    }

    #[test]
    fn test_snippet_truncation() {
        let block = Block {
            kind: BlockKind::Paragraph,
            raw: "a".repeat(40),
            markup: String::new(),
            height: 0.0,
        };
        let snippet = block.snippet();
        assert_eq!(snippet.chars().count(), 33);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_snippet_flattens_newlines() {
        let block = Block {
            kind: BlockKind::List,
            raw: "- a\n- b".to_string(),
            markup: String::new(),
            height: 0.0,
        };
        assert_eq!(block.snippet(), "- a - b");
    }
}
