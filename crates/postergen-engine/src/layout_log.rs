//! Plain-text layout log.
//!
//! One line per processed block (slide index, kind, height, running
//! height before/after, content snippet) plus explicit lines when a
//! slide closes due to overflow or orphan protection. A debugging
//! artifact, not part of the functional contract; the paginator
//! buffers it in memory and the caller decides where to write it.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use postergen_model::Block;

/// In-memory buffer of layout decisions.
#[derive(Debug, Clone)]
pub struct LayoutLog {
    max_height: f32,
    lines: Vec<String>,
}

impl LayoutLog {
    pub fn new(max_height: f32) -> Self {
        Self {
            max_height,
            lines: vec![
                "=== Layout Debug Log ===".to_string(),
                format!("MAX_HEIGHT: {max_height}"),
                String::new(),
            ],
        }
    }

    /// Record a block about to be placed.
    pub fn block(&mut self, slide_index: usize, block: &Block, current_height: f32) {
        self.lines.push(format!(
            "[Slide {slide_index:02}] Type: {kind:<5} | H: {h:<5.1} | CurH: {cur:<5.1} -> {new:<5.1} / {max} | Content: {snippet}",
            kind = block.kind.label(),
            h = block.height,
            cur = current_height,
            new = current_height + block.height,
            max = self.max_height,
            snippet = block.snippet(),
        ));
    }

    /// Record a slide closing because the next block would overflow.
    pub fn overflow(&mut self, required: f32) {
        self.lines.push(format!(
            "---> NEW SLIDE (Overflow: {required:.1} > {max})",
            max = self.max_height
        ));
    }

    /// Record a slide closing to keep a heading with its content.
    pub fn protection(&mut self, slide_index: usize, required: f32) {
        self.lines.push(format!(
            "[Slide {slide_index}] [PROTECTION] Moving orphan content next slide (Req: {required:.1})"
        ));
    }

    /// Record a list being split across slides.
    pub fn split(&mut self, slide_index: usize, head_height: f32) {
        self.lines.push(format!(
            "[Slide {slide_index}] [SPLIT] List head placed (H: {head_height:.1}), tail re-queued"
        ));
    }

    /// Write the log under `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for LayoutLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postergen_model::BlockKind;

    fn sample_block() -> Block {
        Block {
            kind: BlockKind::Paragraph,
            raw: "hello".to_string(),
            markup: "hello".to_string(),
            height: 25.5,
        }
    }

    #[test]
    fn test_header_and_block_line() {
        let mut log = LayoutLog::new(420.0);
        log.block(2, &sample_block(), 100.0);

        let text = log.to_string();
        assert!(text.starts_with("=== Layout Debug Log ===\nMAX_HEIGHT: 420\n"));
        assert!(text.contains("[Slide 02] Type: p"));
        assert!(text.contains("25.5"));
        assert!(text.contains("/ 420"));
        assert!(text.contains("Content: hello"));
    }

    #[test]
    fn test_close_markers() {
        let mut log = LayoutLog::new(420.0);
        log.overflow(455.2);
        log.protection(3, 430.0);
        log.split(4, 120.0);

        let text = log.to_string();
        assert!(text.contains("---> NEW SLIDE (Overflow: 455.2 > 420)"));
        assert!(text.contains("[Slide 3] [PROTECTION]"));
        assert!(text.contains("[Slide 4] [SPLIT]"));
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.log");
        LayoutLog::new(420.0).write_to(&path).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("MAX_HEIGHT"));
    }
}
