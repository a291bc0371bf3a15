//! Slide and deck records, the output contract of the paginator.

use serde::{Deserialize, Serialize};

use crate::chrome::Chrome;

/// One page of output: either a cover page or an ordered
/// concatenation of rendered block fragments.
///
/// A slide is created empty by the paginator, accumulates block
/// markup until overflow closes it, and is immutable afterwards
/// except for the final `footer_right` renumbering pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Whether this is the cover slide
    pub is_cover: bool,

    /// Cover title (cover slides only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_title: Option<String>,

    /// Cover subtitle (cover slides only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_subtitle: Option<String>,

    /// Joined markup of the constituent blocks (content slides only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Left header text
    pub header_left: String,
    /// Right header text
    pub header_right: String,
    /// Left footer text
    pub footer_left: String,
    /// Right footer text, rewritten to `SLIDE i/N` by the assembler
    pub footer_right: String,
}

impl Slide {
    /// Create the cover slide.
    pub fn cover(title: impl Into<String>, chrome: &Chrome) -> Self {
        Self {
            is_cover: true,
            cover_title: Some(title.into()),
            cover_subtitle: Some(chrome.cover_subtitle.clone()),
            content: None,
            header_left: chrome.header_left.clone(),
            header_right: chrome.header_cover.clone(),
            footer_left: chrome.footer_cover.clone(),
            footer_right: "SLIDE 01".to_string(),
        }
    }

    /// Create a content slide from the accumulated block markup.
    pub fn content(fragments: &[String], index: usize, chrome: &Chrome) -> Self {
        Self {
            is_cover: false,
            cover_title: None,
            cover_subtitle: None,
            content: Some(fragments.join("\n")),
            header_left: chrome.header_left.clone(),
            header_right: chrome.header_content.clone(),
            footer_left: chrome.footer_content.clone(),
            footer_right: format!("SLIDE {index:02}"),
        }
    }
}

/// An ordered collection of slides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Deck {
    /// All slides in presentation order
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide.
    pub fn push(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The cover slide, if the deck has one.
    pub fn cover(&self) -> Option<&Slide> {
        self.slides.first().filter(|s| s.is_cover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_slide_fields() {
        let slide = Slide::cover("Title", &Chrome::default());
        assert!(slide.is_cover);
        assert_eq!(slide.cover_title.as_deref(), Some("Title"));
        assert_eq!(slide.cover_subtitle.as_deref(), Some("Generated by PosterGen"));
        assert!(slide.content.is_none());
        assert_eq!(slide.header_right, "COVER");
    }

    #[test]
    fn test_content_slide_fields() {
        let fragments = vec!["<p>a</p>".to_string(), "<p>b</p>".to_string()];
        let slide = Slide::content(&fragments, 2, &Chrome::default());
        assert!(!slide.is_cover);
        assert_eq!(slide.content.as_deref(), Some("<p>a</p>\n<p>b</p>"));
        assert!(slide.cover_title.is_none());
        assert_eq!(slide.footer_right, "SLIDE 02");
    }

    #[test]
    fn test_deck_push_and_cover() {
        let mut deck = Deck::new();
        assert!(deck.is_empty());

        deck.push(Slide::cover("T", &Chrome::default()));
        deck.push(Slide::content(&["<p>x</p>".to_string()], 2, &Chrome::default()));

        assert_eq!(deck.len(), 2);
        assert!(deck.cover().is_some());
    }

    #[test]
    fn test_deck_without_cover() {
        let mut deck = Deck::new();
        deck.push(Slide::content(&["<p>x</p>".to_string()], 1, &Chrome::default()));
        assert!(deck.cover().is_none());
    }

    #[test]
    fn test_slide_serializes_without_empty_fields() {
        let slide = Slide::content(&["<p>x</p>".to_string()], 1, &Chrome::default());
        let json = serde_json::to_string(&slide).unwrap();
        assert!(!json.contains("cover_title"));
        assert!(json.contains("\"content\""));
    }
}
