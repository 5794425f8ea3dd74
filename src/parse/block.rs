//! Block-level parsing: fences, headings, lists, paragraphs.
//!
//! Fenced code blocks are carved out before anything else, so no inline or
//! heading rule can fire inside a fence. The remaining text splits into
//! segments on blank-line runs, and each segment is scanned line by line.

use crate::model::{Block, Document, HeadingLevel, ListItem};

use super::inline::parse_inline;

/// Parse source text into a document tree.
///
/// Never fails: malformed markup degrades to literal text.
pub fn parse_document(source: &str) -> Document {
    let mut blocks = Vec::new();

    for segment in split_fences(source) {
        match segment {
            Segment::Code { language, code } => {
                blocks.push(Block::CodeBlock {
                    language: language.map(str::to_string),
                    code: code.to_string(),
                });
            }
            Segment::Text(text) => parse_text(text, &mut blocks),
        }
    }

    Document { blocks }
}

enum Segment<'a> {
    Text(&'a str),
    Code {
        language: Option<&'a str>,
        code: &'a str,
    },
}

/// Split source into plain-text and fenced-code segments.
///
/// An opening fence with no closing fence fails open: the fence line and
/// everything after it are returned as ordinary text.
fn split_fences(source: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = source;

    while let Some(open) = find_fence_line(rest) {
        let info_end = line_end(rest, open + 3);
        let info = rest[open + 3..info_end].trim();

        // Closing fence: a line that is exactly ``` (modulo whitespace).
        let body_start = (info_end + 1).min(rest.len());
        let Some(close) = find_closing_fence(&rest[body_start..]) else {
            break;
        };

        if open > 0 {
            segments.push(Segment::Text(&rest[..open]));
        }
        let code = &rest[body_start..body_start + close];
        segments.push(Segment::Code {
            language: if info.is_empty() { None } else { Some(info) },
            code,
        });

        let close_line_end = line_end(&rest[body_start..], close) + body_start;
        rest = &rest[(close_line_end + 1).min(rest.len())..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    segments
}

/// Find the byte offset of a line starting with ``` in `text`.
fn find_fence_line(text: &str) -> Option<usize> {
    for (offset, _) in text.match_indices("```") {
        if offset == 0 || text.as_bytes()[offset - 1] == b'\n' {
            return Some(offset);
        }
    }
    None
}

/// Find the start offset of the closing fence line within `body`.
///
/// Returns the offset where the code content ends (the closing line's
/// start), or `None` when the fence is unterminated.
fn find_closing_fence(body: &str) -> Option<usize> {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.trim() == "```" {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

fn line_end(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}

/// Parse a fence-free stretch of text into blocks.
fn parse_text(text: &str, blocks: &mut Vec<Block>) {
    for segment in split_blank_runs(text) {
        // Starts-with-< passthrough: the block is already markup. Leading
        // whitespace does not defeat the check.
        if segment.trim_start().starts_with('<') {
            blocks.push(Block::RawHtml(segment.to_string()));
            continue;
        }
        parse_segment(segment, blocks);
    }
}

/// Split on runs of two-or-more newlines, dropping empty segments.
fn split_blank_runs(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    for piece in text.split("\n\n") {
        let piece = piece.trim_matches('\n');
        if !piece.trim().is_empty() {
            segments.push(piece);
        }
    }
    segments
}

/// Pending list being accumulated during a segment scan.
enum PendingList {
    Ordered { start: u64, items: Vec<ListItem> },
    Unordered(Vec<ListItem>),
}

impl PendingList {
    fn into_block(self) -> Block {
        match self {
            PendingList::Ordered { start, items } => Block::OrderedList { start, items },
            PendingList::Unordered(items) => Block::UnorderedList(items),
        }
    }
}

/// Scan one blank-line-delimited segment line by line.
fn parse_segment(segment: &str, blocks: &mut Vec<Block>) {
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Option<PendingList> = None;

    let flush_paragraph = |lines: &mut Vec<&str>, blocks: &mut Vec<Block>| {
        if !lines.is_empty() {
            // Soft line breaks collapse to single spaces.
            let joined = lines.join(" ");
            blocks.push(Block::Paragraph(parse_inline(&joined)));
            lines.clear();
        }
    };

    for line in segment.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some((level, rest)) = heading_line(line) {
            flush_paragraph(&mut paragraph, blocks);
            if let Some(pending) = list.take() {
                blocks.push(pending.into_block());
            }
            blocks.push(Block::Heading {
                level,
                spans: parse_inline(rest),
            });
        } else if let Some((number, rest)) = ordered_item_line(line) {
            flush_paragraph(&mut paragraph, blocks);
            let item = ListItem::new(parse_inline(rest));
            match &mut list {
                Some(PendingList::Ordered { items, .. }) => items.push(item),
                _ => {
                    if let Some(pending) = list.take() {
                        blocks.push(pending.into_block());
                    }
                    list = Some(PendingList::Ordered {
                        start: number,
                        items: vec![item],
                    });
                }
            }
        } else if let Some(rest) = line.strip_prefix("- ") {
            flush_paragraph(&mut paragraph, blocks);
            let item = ListItem::new(parse_inline(rest));
            match &mut list {
                Some(PendingList::Unordered(items)) => items.push(item),
                _ => {
                    if let Some(pending) = list.take() {
                        blocks.push(pending.into_block());
                    }
                    list = Some(PendingList::Unordered(vec![item]));
                }
            }
        } else {
            if let Some(pending) = list.take() {
                blocks.push(pending.into_block());
            }
            paragraph.push(line);
        }
    }

    flush_paragraph(&mut paragraph, blocks);
    if let Some(pending) = list.take() {
        blocks.push(pending.into_block());
    }
}

/// Match `# `, `## `, or `### ` at line start (deepest first).
fn heading_line(line: &str) -> Option<(HeadingLevel, &str)> {
    if let Some(rest) = line.strip_prefix("### ") {
        Some((HeadingLevel::H3, rest))
    } else if let Some(rest) = line.strip_prefix("## ") {
        Some((HeadingLevel::H2, rest))
    } else if let Some(rest) = line.strip_prefix("# ") {
        Some((HeadingLevel::H1, rest))
    } else {
        None
    }
}

/// Match `N. text` where N is a run of ASCII digits.
fn ordered_item_line(line: &str) -> Option<(u64, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(". ")?;
    let number = line[..digits].parse().ok()?;
    Some((number, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Inline;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn test_single_paragraph() {
        let doc = parse_document("just some text");
        assert_eq!(doc.blocks, vec![Block::Paragraph(vec![text("just some text")])]);
    }

    #[test]
    fn test_soft_breaks_collapse() {
        let doc = parse_document("line one\nline two");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![text("line one line two")])]
        );
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let doc = parse_document("one\n\ntwo");
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_headings() {
        let doc = parse_document("# A\n## B\n### C");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading {
                    level: HeadingLevel::H1,
                    spans: vec![text("A")],
                },
                Block::Heading {
                    level: HeadingLevel::H2,
                    spans: vec![text("B")],
                },
                Block::Heading {
                    level: HeadingLevel::H3,
                    spans: vec![text("C")],
                },
            ]
        );
    }

    #[test]
    fn test_heading_requires_space() {
        let doc = parse_document("#nope");
        assert_eq!(doc.blocks, vec![Block::Paragraph(vec![text("#nope")])]);
    }

    #[test]
    fn test_unordered_list_groups_items() {
        let doc = parse_document("- a\n- b\n- c");
        assert_eq!(
            doc.blocks,
            vec![Block::UnorderedList(vec![
                ListItem::new(vec![text("a")]),
                ListItem::new(vec![text("b")]),
                ListItem::new(vec![text("c")]),
            ])]
        );
    }

    #[test]
    fn test_ordered_list_keeps_start() {
        let doc = parse_document("3. a\n4. b");
        assert_eq!(
            doc.blocks,
            vec![Block::OrderedList {
                start: 3,
                items: vec![
                    ListItem::new(vec![text("a")]),
                    ListItem::new(vec![text("b")]),
                ],
            }]
        );
    }

    #[test]
    fn test_list_kind_change_starts_new_list() {
        let doc = parse_document("- a\n1. b");
        assert_eq!(doc.blocks.len(), 2);
        assert!(matches!(doc.blocks[0], Block::UnorderedList(_)));
        assert!(matches!(doc.blocks[1], Block::OrderedList { .. }));
    }

    #[test]
    fn test_fenced_code_block() {
        let doc = parse_document("```rust\nlet x = 1;\n```");
        assert_eq!(
            doc.blocks,
            vec![Block::CodeBlock {
                language: Some("rust".to_string()),
                code: "let x = 1;\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_fence_without_language() {
        let doc = parse_document("```\ncode\n```");
        assert_eq!(
            doc.blocks,
            vec![Block::CodeBlock {
                language: None,
                code: "code\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_inline_rules_do_not_fire_in_fence() {
        let doc = parse_document("```\n# not a heading\n**not bold**\n```");
        assert_eq!(
            doc.blocks,
            vec![Block::CodeBlock {
                language: None,
                code: "# not a heading\n**not bold**\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_fails_open() {
        let doc = parse_document("```rust\nlet x = 1;");
        // No code block; the fence line is ordinary text.
        assert!(doc.blocks.iter().all(|b| !matches!(b, Block::CodeBlock { .. })));
    }

    #[test]
    fn test_text_around_fence() {
        let doc = parse_document("before\n\n```\ncode\n```\nafter");
        assert_eq!(doc.blocks.len(), 3);
        assert!(matches!(doc.blocks[1], Block::CodeBlock { .. }));
    }

    #[test]
    fn test_raw_html_passthrough() {
        let doc = parse_document("<div>already html</div>");
        assert_eq!(
            doc.blocks,
            vec![Block::RawHtml("<div>already html</div>".to_string())]
        );
    }

    #[test]
    fn test_raw_html_with_leading_whitespace_passes_through() {
        let doc = parse_document("  <div>indented</div>");
        assert_eq!(
            doc.blocks,
            vec![Block::RawHtml("  <div>indented</div>".to_string())]
        );
    }

    #[test]
    fn test_heading_interrupts_paragraph() {
        let doc = parse_document("text\n# Head\nmore");
        assert_eq!(doc.blocks.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("   \n\n  \n").is_empty());
    }
}
