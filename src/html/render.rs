//! Document tree to HTML serialization.
//!
//! Pure string accumulation, no I/O. All literal text is escaped here; the
//! only unescaped path is an explicit [`Block::RawHtml`] passthrough node.

use std::fmt::Write;

use crate::model::{Block, Document, HeadingLevel, Inline, ListItem};
use crate::parse::parse_document;

use super::escape::escape_html;

/// Render source text straight to an HTML fragment.
///
/// Convenience for `render_document(&parse_document(source))`. Deterministic:
/// identical input yields byte-identical output.
pub fn render_html(source: &str) -> String {
    render_document(&parse_document(source))
}

/// Serialize a document tree to an HTML fragment.
///
/// Blocks are joined with single newlines. The fragment has no enclosing
/// element; callers insert it into their own container.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    for (i, block) in doc.blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, spans } => {
            let depth = level.depth();
            write!(out, "<h{depth}>").unwrap();
            // Level-2 headings carry a decorative marker glyph.
            if *level == HeadingLevel::H2 {
                out.push_str("<span class=\"marker\">#</span>");
            }
            write_spans(out, spans);
            write!(out, "</h{depth}>").unwrap();
        }

        Block::Paragraph(spans) => {
            out.push_str("<p>");
            write_spans(out, spans);
            out.push_str("</p>");
        }

        Block::CodeBlock { code, .. } => {
            // The language tag stays in the model; it is not used to pick
            // a highlighter.
            out.push_str("<pre><code>");
            out.push_str(&escape_html(code));
            out.push_str("</code></pre>");
        }

        Block::OrderedList { start, items } => {
            if *start == 1 {
                out.push_str("<ol>");
            } else {
                write!(out, "<ol start=\"{start}\">").unwrap();
            }
            for item in items {
                out.push_str("<li>");
                write_spans(out, &item.spans);
                out.push_str("</li>");
            }
            out.push_str("</ol>");
        }

        Block::UnorderedList(items) => {
            out.push_str("<ul>");
            for item in items {
                write_unordered_item(out, item);
            }
            out.push_str("</ul>");
        }

        Block::RawHtml(html) => out.push_str(html),
    }
}

/// Unordered items get a decorative arrow glyph before the item text.
fn write_unordered_item(out: &mut String, item: &ListItem) {
    out.push_str("<li><span class=\"arrow\">\u{2192}</span><span>");
    write_spans(out, &item.spans);
    out.push_str("</span></li>");
}

fn write_spans(out: &mut String, spans: &[Inline]) {
    for span in spans {
        match span {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Strong(inner) => {
                out.push_str("<strong>");
                write_spans(out, inner);
                out.push_str("</strong>");
            }
            Inline::Emphasis(inner) => {
                out.push_str("<em>");
                write_spans(out, inner);
                out.push_str("</em>");
            }
            Inline::Code(code) => {
                out.push_str("<code>");
                out.push_str(&escape_html(code));
                out.push_str("</code>");
            }
        }
    }
}
