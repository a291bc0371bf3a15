//! Smart pagination engine.
//!
//! Converts a flat Markdown document into a sequence of fixed-size
//! slide layouts: the tokenizer produces typed blocks, the estimator
//! resolves each block's rendered markup and height in virtual
//! layout units, and the paginator greedily packs blocks into slides
//! under a strict height budget with orphan-header protection.
//!
//! # Example
//!
//! ```
//! use postergen_engine::{Engine, StaticDimensions};
//!
//! let images = StaticDimensions::new();
//! let engine = Engine::new(&images);
//! let (deck, _log) = engine.build("# Title\n\nHello world.");
//! assert_eq!(deck.len(), 2);
//! assert!(deck.cover().is_some());
//! ```

pub mod error;
pub mod estimate;
pub mod images;
pub mod inline;
pub mod layout_log;
pub mod metrics;
pub mod paginate;
pub mod split;
pub mod tokenize;

pub use error::{EngineError, Result};
pub use estimate::Estimator;
pub use images::{HttpImageCache, ImageMetadata, StaticDimensions};
pub use layout_log::LayoutLog;
pub use metrics::ThemeMetrics;
pub use paginate::{finalize_footers, PaginateOptions, Paginator};
pub use split::split_list;
pub use tokenize::tokenize;

use postergen_model::{Chrome, Deck};

/// End-to-end pipeline: tokenize, estimate, paginate, assemble.
pub struct Engine<'a> {
    metrics: ThemeMetrics,
    chrome: Chrome,
    options: PaginateOptions,
    images: &'a dyn ImageMetadata,
}

impl<'a> Engine<'a> {
    /// Engine with default theme metrics and chrome.
    pub fn new(images: &'a dyn ImageMetadata) -> Self {
        Self::with_config(
            ThemeMetrics::default(),
            Chrome::default(),
            PaginateOptions::default(),
            images,
        )
    }

    pub fn with_config(
        metrics: ThemeMetrics,
        chrome: Chrome,
        options: PaginateOptions,
        images: &'a dyn ImageMetadata,
    ) -> Self {
        Self {
            metrics,
            chrome,
            options,
            images,
        }
    }

    /// Build a deck from Markdown text, along with the layout log.
    ///
    /// Always succeeds: image failures degrade to fallback heights
    /// and malformed content is dropped at tokenization.
    pub fn build(&self, markdown: &str) -> (Deck, LayoutLog) {
        let estimator = Estimator::new(&self.metrics, self.images);
        let blocks = tokenize(markdown)
            .into_iter()
            .map(|raw| estimator.estimate(raw))
            .collect();
        Paginator::with_options(&self.metrics, &self.chrome, self.options)
            .paginate(blocks, &estimator)
    }
}
