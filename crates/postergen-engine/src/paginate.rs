//! Paginator and slide assembler.
//!
//! A single left-to-right sweep over the heighted block sequence,
//! greedily packing blocks into slides under the height budget.
//! Split results are re-inserted through a queue, so a divided list
//! continues on the next iteration. After the sweep, the assembler
//! rewrites every slide's `footer_right` with the final numbering.

use std::collections::VecDeque;

use postergen_model::{Block, BlockKind, Chrome, Deck, Slide};

use crate::estimate::Estimator;
use crate::layout_log::LayoutLog;
use crate::metrics::ThemeMetrics;
use crate::split::split_list;

/// Pagination strategy switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginateOptions {
    /// Split oversized lists across slides instead of moving them
    /// whole onto a fresh slide. Off by default: splitting changes
    /// user-visible pagination results.
    pub split_lists: bool,
}

/// Packs heighted blocks into slides.
pub struct Paginator<'a> {
    metrics: &'a ThemeMetrics,
    chrome: &'a Chrome,
    options: PaginateOptions,
}

impl<'a> Paginator<'a> {
    pub fn new(metrics: &'a ThemeMetrics, chrome: &'a Chrome) -> Self {
        Self::with_options(metrics, chrome, PaginateOptions::default())
    }

    pub fn with_options(
        metrics: &'a ThemeMetrics,
        chrome: &'a Chrome,
        options: PaginateOptions,
    ) -> Self {
        Self {
            metrics,
            chrome,
            options,
        }
    }

    /// Run the pagination sweep.
    ///
    /// The estimator is needed only when list splitting is enabled,
    /// to re-measure the two halves of a divided list.
    pub fn paginate(&self, blocks: Vec<Block>, estimator: &Estimator) -> (Deck, LayoutLog) {
        let max = self.metrics.max_height;
        let mut deck = Deck::new();
        let mut log = LayoutLog::new(max);

        // The first Heading1 becomes the cover; every Heading1 is
        // elided from the flow.
        let cover = blocks.iter().find(|b| b.kind == BlockKind::Heading1);
        if let Some(cover) = cover {
            deck.push(Slide::cover(cover.raw.clone(), self.chrome));
        }
        let mut slide_index = if deck.is_empty() { 1 } else { 2 };

        let mut queue: VecDeque<Block> = blocks
            .into_iter()
            .filter(|b| b.kind != BlockKind::Heading1)
            .collect();

        let mut fragments: Vec<String> = Vec::new();
        let mut current_height = 0.0f32;

        let mut close_slide = |fragments: &mut Vec<String>,
                               current_height: &mut f32,
                               slide_index: &mut usize,
                               deck: &mut Deck| {
            deck.push(Slide::content(fragments, *slide_index, self.chrome));
            fragments.clear();
            *current_height = 0.0;
            *slide_index += 1;
        };

        while let Some(block) = queue.pop_front() {
            // Orphan-header protection: a section heading must not be
            // the last thing on a slide when its first follower can't
            // also fit.
            if block.kind.is_section_heading() && !fragments.is_empty() {
                if let Some(next) = queue.front() {
                    let required = current_height + block.height + next.height;
                    if required > max {
                        log.protection(slide_index, required);
                        close_slide(&mut fragments, &mut current_height, &mut slide_index, &mut deck);
                    }
                }
            }

            log.block(slide_index, &block, current_height);

            if current_height + block.height > max {
                if self.options.split_lists && block.kind == BlockKind::List {
                    let available = max - current_height;
                    if let Some((head, tail)) = split_list(&block, available, estimator) {
                        log.split(slide_index, head.height);
                        fragments.push(head.markup);
                        current_height += head.height;
                        queue.push_front(tail);
                        continue;
                    }
                }
                // A lone block may overflow its slide; only close when
                // something is already placed.
                if !fragments.is_empty() {
                    log.overflow(current_height + block.height);
                    close_slide(&mut fragments, &mut current_height, &mut slide_index, &mut deck);
                }
            }

            fragments.push(block.markup);
            current_height += block.height;
        }

        if !fragments.is_empty() {
            close_slide(&mut fragments, &mut current_height, &mut slide_index, &mut deck);
        }

        finalize_footers(&mut deck);
        (deck, log)
    }
}

/// Rewrite every slide's `footer_right` to `SLIDE i/N` (1-indexed).
///
/// Must run after pagination completes: individual slide closures do
/// not know the eventual total.
pub fn finalize_footers(deck: &mut Deck) {
    let total = deck.len();
    for (i, slide) in deck.slides.iter_mut().enumerate() {
        slide.footer_right = format!("SLIDE {:02}/{total:02}", i + 1);
    }
}
