//! Self-contained HTML preview for a paginated deck.
//!
//! Produces one standalone document with the stylesheet inlined, so
//! the preview opens from disk with no asset directory next to it.
//! Each slide is a `.slide` element, which keeps the file friendly to
//! headless-browser screenshot tooling that locates slides by class.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use postergen_model::{Deck, Slide};

mod template;

/// Render a deck as one self-contained HTML document.
pub fn render_preview(deck: &Deck) -> String {
    let mut slides_html = String::new();
    for slide in &deck.slides {
        slides_html.push_str(&format_slide(slide));
    }

    let title = deck
        .cover()
        .and_then(|s| s.cover_title.as_deref())
        .unwrap_or("PosterGen Preview");

    template::page(&escape_html(title), &slides_html)
}

/// Render the deck and write it as `preview.html` under `output_dir`,
/// creating the directory if needed. Returns the written path.
pub fn write_preview(deck: &Deck, output_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("preview.html");
    fs::write(&path, render_preview(deck))?;
    Ok(path)
}

fn format_slide(slide: &Slide) -> String {
    let body = if slide.is_cover {
        format!(
            r#"            <div class="cover-title">{title}</div>
            <div class="cover-subtitle">{subtitle}</div>
"#,
            title = escape_html(slide.cover_title.as_deref().unwrap_or("")),
            subtitle = escape_html(slide.cover_subtitle.as_deref().unwrap_or("")),
        )
    } else {
        // Content is block markup produced upstream, inserted as-is.
        format!("{}\n", slide.content.as_deref().unwrap_or(""))
    };

    let class = if slide.is_cover { "slide cover" } else { "slide" };

    format!(
        r#"    <div class="{class}">
        <div class="slide-header">
            <span>{header_left}</span>
            <span>{header_right}</span>
        </div>
        <div class="slide-body">
{body}        </div>
        <div class="slide-footer">
            <span>{footer_left}</span>
            <span>{footer_right}</span>
        </div>
    </div>
"#,
        header_left = escape_html(&slide.header_left),
        header_right = escape_html(&slide.header_right),
        footer_left = escape_html(&slide.footer_left),
        footer_right = escape_html(&slide.footer_right),
    )
}

/// Escape text destined for an HTML context.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
