//! Snippet markup rendering
//!
//! The book-search API returns snippets with lightweight HTML: match terms
//! wrapped in `<b>` tags plus the occasional entity. The original client
//! rendered these through an HTML formatter; here they become styled spans.
//! Unknown tags are dropped, unterminated tags render literally.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme;

/// A run of snippet text, either plain or an emphasized match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

/// Split snippet markup into plain/emphasized segments.
pub fn segments(snippet: &str) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;
    let mut rest = snippet;

    let flush = |text: &mut String, emphasized: bool, out: &mut Vec<Segment>| {
        if !text.is_empty() {
            out.push(Segment {
                text: std::mem::take(text),
                emphasized,
            });
        }
    };

    while let Some(pos) = rest.find(['<', '&']) {
        current.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('<') {
            match rest.find('>') {
                Some(end) => {
                    let tag = &rest[1..end];
                    match tag_kind(tag) {
                        TagKind::Open => {
                            flush(&mut current, depth > 0, &mut out);
                            depth += 1;
                        }
                        TagKind::Close => {
                            flush(&mut current, depth > 0, &mut out);
                            depth = depth.saturating_sub(1);
                        }
                        TagKind::Other => {}
                    }
                    rest = &rest[end + 1..];
                }
                None => {
                    // No closing '>': take the rest literally
                    current.push_str(rest);
                    rest = "";
                }
            }
        } else {
            let (decoded, consumed) = decode_entity(rest);
            current.push_str(&decoded);
            rest = &rest[consumed..];
        }
    }

    current.push_str(rest);
    flush(&mut current, depth > 0, &mut out);

    out
}

/// Render a snippet as a styled line.
pub fn snippet_line(snippet: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = segments(snippet)
        .into_iter()
        .map(|seg| {
            if seg.emphasized {
                Span::styled(
                    seg.text,
                    Style::default()
                        .fg(theme::RESULT_MATCH)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(seg.text, Style::default().fg(theme::TEXT_SECONDARY))
            }
        })
        .collect();

    Line::from(spans)
}

enum TagKind {
    Open,
    Close,
    Other,
}

fn tag_kind(tag: &str) -> TagKind {
    let (name, closing) = match tag.strip_prefix('/') {
        Some(rest) => (rest, true),
        None => (tag, false),
    };
    let name = name
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "b" | "strong" | "i" | "em" if closing => TagKind::Close,
        "b" | "strong" | "i" | "em" => TagKind::Open,
        _ => TagKind::Other,
    }
}

/// Decode one entity at the start of `rest` (which begins with '&').
/// Returns the decoded text and the number of bytes consumed.
fn decode_entity(rest: &str) -> (String, usize) {
    const ENTITIES: &[(&str, &str)] = &[
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
        ("&nbsp;", " "),
    ];

    for (entity, decoded) in ENTITIES {
        if rest.starts_with(entity) {
            return ((*decoded).to_string(), entity.len());
        }
    }

    // Not a recognized entity: keep the '&' literally
    ("&".to_string(), 1)
}
