//! Data model for PosterGen slide generation.
//!
//! This crate defines the types shared between the pagination engine
//! and the output renderers: typed content [`Block`]s extracted from a
//! Markdown document, and the [`Slide`]/[`Deck`] records they are
//! packed into.

pub mod block;
pub mod chrome;
pub mod slide;

pub use block::{Block, BlockKind, RawBlock};
pub use chrome::Chrome;
pub use slide::{Deck, Slide};
