//! Markdown tokenizer.
//!
//! Splits a flat Markdown document into an ordered sequence of typed
//! [`RawBlock`]s. The scan is line-oriented with a small state
//! machine over the block kind currently being accumulated
//! (`Paragraph` is the default/reset state). Heights are not
//! resolved here; that is the estimator's job.
//!
//! # Rules
//!
//! - A ``` fence toggles code capture; inside a fence every line is
//!   captured verbatim, including ones that look like headings or
//!   list items.
//! - `#` runs classify headings (1 -> Heading1, 2 -> Heading2,
//!   3+ -> Heading3); a heading is flushed as its own block.
//! - Bullet (`- `, `* `) and numbered (`1.`) markers start or
//!   continue a list accumulation; indented sub-items stay in the
//!   same block.
//! - `![alt](url)` lines flush as standalone image blocks.
//! - A blank line flushes the current block.
//! - Anything else is appended to the current accumulation.

use postergen_model::{BlockKind, RawBlock};
use regex::Regex;

/// Tokenize a Markdown document into raw blocks.
pub fn tokenize(text: &str) -> Vec<RawBlock> {
    let mut scanner = Scanner::new();
    for line in text.trim().lines() {
        scanner.process_line(line.trim_end());
    }
    scanner.finish()
}

/// Line scanner owning the current accumulation state.
struct Scanner {
    /// Kind of the block currently being accumulated
    kind: BlockKind,
    /// Lines accumulated so far
    lines: Vec<String>,
    /// Completed blocks
    blocks: Vec<RawBlock>,
    list_marker: Regex,
    image_line: Regex,
}

impl Scanner {
    fn new() -> Self {
        Self {
            kind: BlockKind::Paragraph,
            lines: Vec::new(),
            blocks: Vec::new(),
            list_marker: Regex::new(r"^\d+\.").unwrap(),
            image_line: Regex::new(r"^!\[.*?\]\(.*?\)").unwrap(),
        }
    }

    fn process_line(&mut self, line: &str) {
        let stripped = line.trim();

        // Code fence transitions take priority over everything else
        if stripped.starts_with("```") {
            if self.kind == BlockKind::Code {
                self.lines.push(line.to_string());
                self.flush();
                self.kind = BlockKind::Paragraph;
            } else {
                self.flush();
                self.kind = BlockKind::Code;
                self.lines.push(line.to_string());
            }
            return;
        }

        // Inside a fence, capture everything verbatim
        if self.kind == BlockKind::Code {
            self.lines.push(line.to_string());
            return;
        }

        // Headings: classify by run length of leading '#'
        if line.starts_with('#') {
            self.flush();
            let level = line.chars().take_while(|&c| c == '#').count();
            self.kind = match level {
                1 => BlockKind::Heading1,
                2 => BlockKind::Heading2,
                _ => BlockKind::Heading3,
            };
            self.lines
                .push(line.trim_start_matches('#').trim().to_string());
            self.flush();
            self.kind = BlockKind::Paragraph;
            return;
        }

        // List items, including indented sub-items
        if stripped.starts_with("- ")
            || stripped.starts_with("* ")
            || self.list_marker.is_match(stripped)
        {
            if self.kind != BlockKind::List {
                self.flush();
                self.kind = BlockKind::List;
            }
            self.lines.push(line.to_string());
            return;
        }

        // Standalone image references
        if self.image_line.is_match(stripped) {
            self.flush();
            self.kind = BlockKind::Image;
            self.lines.push(stripped.to_string());
            self.flush();
            self.kind = BlockKind::Paragraph;
            return;
        }

        // Blank lines end the current block
        if stripped.is_empty() {
            self.flush();
            self.kind = BlockKind::Paragraph;
            return;
        }

        // Plain text continues whatever block is open
        self.lines.push(line.to_string());
    }

    /// Emit the current accumulation as a block, if it has content.
    /// Whitespace-only accumulations are silently dropped.
    fn flush(&mut self) -> Option<&RawBlock> {
        if self.lines.is_empty() {
            return None;
        }
        let content = self.lines.join("\n").trim().to_string();
        self.lines.clear();
        if content.is_empty() {
            return None;
        }
        self.blocks.push(RawBlock::new(self.kind, content));
        self.blocks.last()
    }

    fn finish(mut self) -> Vec<RawBlock> {
        self.flush();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(blocks: &[RawBlock]) -> Vec<BlockKind> {
        blocks.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn test_headings_by_level() {
        let blocks = tokenize("# One\n## Two\n### Three\n#### Four");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::Heading1,
                BlockKind::Heading2,
                BlockKind::Heading3,
                BlockKind::Heading3,
            ]
        );
        assert_eq!(blocks[0].text, "One");
        assert_eq!(blocks[3].text, "Four");
    }

    #[test]
    fn test_paragraph_accumulation() {
        let blocks = tokenize("line one\nline two\n\nsecond para");
        assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph, BlockKind::Paragraph]);
        assert_eq!(blocks[0].text, "line one\nline two");
    }

    #[test]
    fn test_heading_inside_fence_is_code() {
        let blocks = tokenize("```\n# not a heading\n- not a list\n```");
        assert_eq!(kinds(&blocks), vec![BlockKind::Code]);
        assert!(blocks[0].text.contains("# not a heading"));
        assert!(blocks[0].text.contains("- not a list"));
    }

    #[test]
    fn test_fence_interrupts_paragraph() {
        let blocks = tokenize("before\n```rust\nfn main() {}\n```\nafter");
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Paragraph, BlockKind::Code, BlockKind::Paragraph]
        );
    }

    #[test]
    fn test_list_marker_forms() {
        let blocks = tokenize("- dash\n* star\n1. numbered\n  - nested");
        assert_eq!(kinds(&blocks), vec![BlockKind::List]);
        let text = &blocks[0].text;
        assert!(text.contains("- dash"));
        assert!(text.contains("* star"));
        assert!(text.contains("1. numbered"));
        assert!(text.contains("  - nested"));
    }

    #[test]
    fn test_list_ends_at_blank_line() {
        let blocks = tokenize("- a\n- b\n\n- c");
        assert_eq!(kinds(&blocks), vec![BlockKind::List, BlockKind::List]);
    }

    #[test]
    fn test_plain_line_continues_list_block() {
        // A non-blank, non-marker line after list items stays in the
        // same accumulation rather than opening a paragraph.
        let blocks = tokenize("- a\n  continuation text");
        assert_eq!(kinds(&blocks), vec![BlockKind::List]);
    }

    #[test]
    fn test_image_is_standalone() {
        let blocks = tokenize("before\n![logo](https://x/y.png)\nafter");
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Paragraph, BlockKind::Image, BlockKind::Paragraph]
        );
        assert_eq!(blocks[1].text, "![logo](https://x/y.png)");
    }

    #[test]
    fn test_empty_flush_produces_no_block() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n   \n").is_empty());
        assert!(tokenize("##").is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let blocks = tokenize("# Title\r\n\r\nbody\r\n");
        assert_eq!(kinds(&blocks), vec![BlockKind::Heading1, BlockKind::Paragraph]);
        assert_eq!(blocks[1].text, "body");
    }

    #[test]
    fn test_unclosed_fence_flushes_at_eof() {
        let blocks = tokenize("```\ncode line");
        assert_eq!(kinds(&blocks), vec![BlockKind::Code]);
    }
}
