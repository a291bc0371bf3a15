//! Inline markup renderer.
//!
//! Turns inline Markdown spans (bold, italic, code, links) into HTML
//! fragments. The conversion is an earliest-match scan over a small
//! set of patterns; unmatched text passes through HTML-escaped.
//!
//! The paragraph contract: a single wrapping `<p>` container is
//! removed when the whole input was exactly one paragraph, so
//! callers can embed the fragment in their own containers.

use regex::Regex;

/// Escape text for safe embedding in HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render an inline Markdown span to an HTML fragment.
///
/// Newlines inside the span are treated as soft breaks (spaces).
pub fn render_inline(text: &str) -> String {
    let bold = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    let italic_star = Regex::new(r"\*([^*]+)\*").unwrap();
    let italic_under = Regex::new(r"_([^_]+)_").unwrap();
    let code = Regex::new(r"`([^`]+)`").unwrap();
    let link = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();

    let flat = text.replace('\n', " ");
    let mut remaining = flat.as_str();
    let mut out = String::new();

    while !remaining.is_empty() {
        // Earliest match wins; bold is listed before italic so that
        // `**x**` is not consumed as italic at the same offset.
        let candidates = [
            bold.find(remaining).map(|m| (m.start(), m.end(), Span::Bold)),
            italic_star
                .find(remaining)
                .map(|m| (m.start(), m.end(), Span::Italic)),
            italic_under
                .find(remaining)
                .map(|m| (m.start(), m.end(), Span::Italic)),
            code.find(remaining).map(|m| (m.start(), m.end(), Span::Code)),
            link.find(remaining).map(|m| (m.start(), m.end(), Span::Link)),
        ];
        let earliest = candidates
            .into_iter()
            .flatten()
            .min_by_key(|(start, _, _)| *start);

        match earliest {
            Some((start, end, span)) => {
                out.push_str(&escape_html(&remaining[..start]));
                let matched = &remaining[start..end];
                match span {
                    Span::Bold => {
                        let inner = &matched[2..matched.len() - 2];
                        out.push_str(&format!("<strong>{}</strong>", escape_html(inner)));
                    }
                    Span::Italic => {
                        let inner = &matched[1..matched.len() - 1];
                        out.push_str(&format!("<em>{}</em>", escape_html(inner)));
                    }
                    Span::Code => {
                        let inner = &matched[1..matched.len() - 1];
                        out.push_str(&format!("<code>{}</code>", escape_html(inner)));
                    }
                    Span::Link => {
                        let caps = link.captures(matched).expect("find implies captures");
                        out.push_str(&format!(
                            "<a href=\"{}\">{}</a>",
                            escape_html(&caps[2]),
                            escape_html(&caps[1])
                        ));
                    }
                }
                remaining = &remaining[end..];
            }
            None => {
                out.push_str(&escape_html(remaining));
                break;
            }
        }
    }

    out
}

#[derive(Clone, Copy)]
enum Span {
    Bold,
    Italic,
    Code,
    Link,
}

/// Render a paragraph, stripping the wrapping `<p>` container when
/// the whole fragment is exactly one paragraph.
pub fn render_paragraph(text: &str) -> String {
    strip_paragraph(&format!("<p>{}</p>", render_inline(text)))
}

/// Remove a single wrapping `<p>...</p>` pair; fragments holding
/// more than one paragraph are returned unchanged.
pub fn strip_paragraph(markup: &str) -> String {
    if let Some(inner) = markup
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        if !inner.contains("<p>") {
            return inner.to_string();
        }
    }
    markup.to_string()
}

/// Render an accumulated run of list lines to `<ul>`/`<ol>` markup,
/// nesting sub-lists by indentation.
pub fn render_list(text: &str) -> String {
    let numbered = Regex::new(r"^(\d+)\.\s*(.*)$").unwrap();

    let mut items: Vec<ListLine> = Vec::new();
    for line in text.lines() {
        let indent = line.len() - line.trim_start().len();
        let stripped = line.trim();
        if let Some(rest) = stripped.strip_prefix("- ").or_else(|| stripped.strip_prefix("* ")) {
            items.push(ListLine {
                indent,
                ordered: false,
                text: rest.to_string(),
            });
        } else if let Some(caps) = numbered.captures(stripped) {
            items.push(ListLine {
                indent,
                ordered: true,
                text: caps[2].to_string(),
            });
        } else if let Some(last) = items.last_mut() {
            // Continuation line: joins the previous item
            last.text.push(' ');
            last.text.push_str(stripped);
        }
    }

    // A level breaks off when it meets a shallower item, so a run
    // whose first line is indented deeper than a later line leaves
    // items behind; keep rendering runs until all are consumed.
    let mut out = String::new();
    let mut pos = 0;
    while pos < items.len() {
        out.push_str(&render_level(&items, &mut pos));
    }
    out
}

struct ListLine {
    indent: usize,
    ordered: bool,
    text: String,
}

fn render_level(items: &[ListLine], pos: &mut usize) -> String {
    let level_indent = items[*pos].indent;
    let tag = if items[*pos].ordered { "ol" } else { "ul" };
    let mut out = format!("<{tag}>");

    while *pos < items.len() {
        let item = &items[*pos];
        if item.indent < level_indent {
            break;
        }
        if item.indent > level_indent {
            let nested = render_level(items, pos);
            // A nested list belongs inside the preceding item
            if out.ends_with("</li>") {
                out.truncate(out.len() - "</li>".len());
                out.push_str(&nested);
                out.push_str("</li>");
            } else {
                out.push_str(&nested);
            }
            continue;
        }
        out.push_str(&format!("<li>{}</li>", render_inline(&item.text)));
        *pos += 1;
    }

    out.push_str(&format!("</{tag}>"));
    out
}
