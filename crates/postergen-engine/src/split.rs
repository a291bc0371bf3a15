//! List splitter.
//!
//! Divides an oversized list block into a head part that fits a
//! height budget and a tail part holding the remainder. The split
//! point respects the sticky-parent rule: a parent bullet is never
//! separated from the start of its own children unless keeping them
//! together would empty the head part entirely.

use postergen_model::{Block, BlockKind};

use crate::estimate::Estimator;

/// Try to split `block` so the head fits within `available_height`.
///
/// Returns `None` when no safe split point exists: the very first
/// item already overflows, or either resulting part would be empty.
/// Both parts are re-run through the estimator, so their markup and
/// heights are fresh.
pub fn split_list(
    block: &Block,
    available_height: f32,
    estimator: &Estimator,
) -> Option<(Block, Block)> {
    debug_assert_eq!(block.kind, BlockKind::List);

    let items: Vec<&str> = block.raw.lines().collect();

    // Walk items accumulating height from the block's base padding;
    // split_index is the last item that still fits.
    let mut current = estimator.metrics().list_padding;
    let mut split_index: Option<usize> = None;
    for (i, item) in items.iter().enumerate() {
        let h = estimator.list_item_height(item);
        if current + h > available_height {
            break;
        }
        current += h;
        split_index = Some(i);
    }
    let mut split_index = split_index?;

    // Sticky-parent rule: if the last fitting item is indented,
    // backtrack to its nearest less-indented ancestor and move that
    // ancestor (with everything after it) into the tail, so a parent
    // is not stranded away from the start of its children.
    if split_index > 0 {
        let split_indent = indent_width(items[split_index]);
        for i in (0..=split_index).rev() {
            if indent_width(items[i]) < split_indent {
                if i > 0 {
                    split_index = i - 1;
                }
                break;
            }
        }
    }

    let head_items = &items[..=split_index];
    let tail_items = &items[split_index + 1..];
    if head_items.is_empty() || tail_items.is_empty() {
        return None;
    }

    // Dedent the tail so it re-tokenizes as a top-level list instead
    // of a nested block or code.
    let head = head_items.join("\n");
    let tail = dedent(&tail_items.join("\n"));

    Some((
        estimator.estimate(postergen_model::RawBlock::new(BlockKind::List, head)),
        estimator.estimate(postergen_model::RawBlock::new(BlockKind::List, tail)),
    ))
}

/// Leading whitespace of a line, in characters. Indentation is
/// compared and stripped character-wise, never by byte offset:
/// whitespace like U+00A0 is multi-byte in UTF-8.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Strip the longest common leading-whitespace prefix of all
/// non-empty lines.
fn dedent(text: &str) -> String {
    let prefix_len = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(indent_width)
        .min()
        .unwrap_or(0);
    text.lines()
        .map(|l| {
            let mut rest = l;
            for _ in 0..prefix_len {
                match rest.strip_prefix(|c: char| c.is_whitespace()) {
                    Some(stripped) => rest = stripped,
                    None => break,
                }
            }
            rest
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::StaticDimensions;
    use crate::metrics::ThemeMetrics;
    use postergen_model::RawBlock;

    fn make_list(text: &str, metrics: &ThemeMetrics, images: &StaticDimensions) -> Block {
        Estimator::new(metrics, images).estimate(RawBlock::new(BlockKind::List, text))
    }

    #[test]
    fn test_dedent() {
        assert_eq!(dedent("  - a\n  - b"), "- a\n- b");
        assert_eq!(dedent("  - a\n    - b"), "- a\n  - b");
        assert_eq!(dedent("- a\n  - b"), "- a\n  - b");
    }

    #[test]
    fn test_dedent_multibyte_whitespace() {
        // U+00A0 is two bytes in UTF-8; stripping must go by
        // characters, not byte offsets.
        assert_eq!(dedent("\u{a0}- a\n - b"), "- a\n- b");
        assert_eq!(dedent("\u{a0}\u{a0}- a\n  - b"), "- a\n- b");
    }

    #[test]
    fn test_split_with_multibyte_indentation() {
        let metrics = ThemeMetrics::default();
        let images = StaticDimensions::new();
        let estimator = Estimator::new(&metrics, &images);

        // Budget fits one item (10 + 32 = 42); the tail lines are
        // indented with a mix of U+00A0 and a plain space.
        let block = make_list("- a\n\u{a0}- b\n - c", &metrics, &images);
        let (head, tail) = split_list(&block, 45.0, &estimator).unwrap();

        assert_eq!(head.raw, "- a");
        assert_eq!(tail.raw, "- b\n- c");
    }

    #[test]
    fn test_flat_list_splits_at_budget() {
        let metrics = ThemeMetrics::default();
        let images = StaticDimensions::new();
        let estimator = Estimator::new(&metrics, &images);

        // Each short item costs 32 units; padding is 10. Budget 80
        // fits two items (10 + 32 + 32 = 74).
        let block = make_list("- a\n- b\n- c\n- d", &metrics, &images);
        let (head, tail) = split_list(&block, 80.0, &estimator).unwrap();

        assert_eq!(head.raw, "- a\n- b");
        assert_eq!(tail.raw, "- c\n- d");
        assert!(head.height <= 80.0);
        assert_eq!(tail.kind, BlockKind::List);
    }

    #[test]
    fn test_no_split_when_first_item_overflows() {
        let metrics = ThemeMetrics::default();
        let images = StaticDimensions::new();
        let estimator = Estimator::new(&metrics, &images);

        let block = make_list("- a\n- b", &metrics, &images);
        // Padding alone is 10; one item needs 42.
        assert!(split_list(&block, 20.0, &estimator).is_none());
    }

    #[test]
    fn test_no_split_when_everything_fits() {
        let metrics = ThemeMetrics::default();
        let images = StaticDimensions::new();
        let estimator = Estimator::new(&metrics, &images);

        // All items fit, so the tail would be empty.
        let block = make_list("- a\n- b", &metrics, &images);
        assert!(split_list(&block, 400.0, &estimator).is_none());
    }

    #[test]
    fn test_sticky_parent_moves_with_children() {
        let metrics = ThemeMetrics::default();
        let images = StaticDimensions::new();
        let estimator = Estimator::new(&metrics, &images);

        // Budget fits three items (10 + 3*32 = 106 <= 112). The third
        // item is a child of the second, so the parent is pulled into
        // the tail to stay with its children.
        let block = make_list("- a\n- parent\n  - kid1\n  - kid2", &metrics, &images);
        let (head, tail) = split_list(&block, 112.0, &estimator).unwrap();

        assert_eq!(head.raw, "- a");
        assert_eq!(tail.raw, "- parent\n  - kid1\n  - kid2");
    }

    #[test]
    fn test_sticky_parent_kept_when_head_would_empty() {
        let metrics = ThemeMetrics::default();
        let images = StaticDimensions::new();
        let estimator = Estimator::new(&metrics, &images);

        // The parent is the first item; excluding it would leave an
        // empty head, so the original split point is kept.
        let block = make_list("- parent\n  - kid1\n  - kid2\n  - kid3", &metrics, &images);
        let (head, tail) = split_list(&block, 112.0, &estimator).unwrap();

        assert_eq!(head.raw, "- parent\n  - kid1\n  - kid2");
        assert_eq!(tail.raw, "- kid3");
    }

    #[test]
    fn test_tail_is_dedented() {
        let metrics = ThemeMetrics::default();
        let images = StaticDimensions::new();
        let estimator = Estimator::new(&metrics, &images);

        // Split lands on "- b" (top level), so no backtrack happens;
        // the indented children move to the tail and are dedented to
        // a valid top-level list.
        let block = make_list("- a\n- b\n  - c1\n  - c2\n  - c3", &metrics, &images);
        let (head, tail) = split_list(&block, 80.0, &estimator).unwrap();
        assert_eq!(head.raw, "- a\n- b");
        assert_eq!(tail.raw, "- c1\n- c2\n- c3");
    }
}
