//! Span-level parsing: emphasis, strong, strong+emphasis, inline code.
//!
//! Delimiters are matched left to right with priority `***` > `**` > `*` >
//! `` ` ``. An opening delimiter with no matching close is literal text
//! (fail open), never an error.

use crate::model::Inline;

/// Parse a run of span-level text into inline nodes.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        let matched = match_delimiter(rest);

        let Some((delim, open_len)) = matched else {
            // No delimiter starts here; consume one char of literal text.
            let c = rest.chars().next().unwrap();
            literal.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        };

        let body = &rest[open_len..];
        let Some(close) = body.find(delim.close()) else {
            // Unmatched delimiter: keep it as literal text.
            literal.push_str(&rest[..open_len]);
            rest = body;
            continue;
        };

        // An empty span (e.g. `**` read as two empty emphases) is not a
        // construct; treat the delimiter as literal.
        if close == 0 {
            literal.push_str(&rest[..open_len]);
            rest = body;
            continue;
        }

        flush_literal(&mut literal, &mut spans);
        let inner = &body[..close];
        spans.push(delim.build(inner));
        rest = &body[close + delim.close().len()..];
    }

    flush_literal(&mut literal, &mut spans);
    spans
}

#[derive(Clone, Copy)]
enum Delimiter {
    StrongEmphasis,
    Strong,
    Emphasis,
    Code,
}

impl Delimiter {
    fn close(self) -> &'static str {
        match self {
            Delimiter::StrongEmphasis => "***",
            Delimiter::Strong => "**",
            Delimiter::Emphasis => "*",
            Delimiter::Code => "`",
        }
    }

    fn build(self, inner: &str) -> Inline {
        match self {
            Delimiter::StrongEmphasis => {
                Inline::Strong(vec![Inline::Emphasis(parse_inline(inner))])
            }
            Delimiter::Strong => Inline::Strong(parse_inline(inner)),
            Delimiter::Emphasis => Inline::Emphasis(parse_inline(inner)),
            // Code content is literal: nested delimiters never fire.
            Delimiter::Code => Inline::Code(inner.to_string()),
        }
    }
}

/// Check which delimiter, if any, opens at the start of `rest`.
fn match_delimiter(rest: &str) -> Option<(Delimiter, usize)> {
    if rest.starts_with("***") {
        Some((Delimiter::StrongEmphasis, 3))
    } else if rest.starts_with("**") {
        Some((Delimiter::Strong, 2))
    } else if rest.starts_with('*') {
        Some((Delimiter::Emphasis, 1))
    } else if rest.starts_with('`') {
        Some((Delimiter::Code, 1))
    } else {
        None
    }
}

fn flush_literal(literal: &mut String, spans: &mut Vec<Inline>) {
    if !literal.is_empty() {
        spans.push(Inline::Text(std::mem::take(literal)));
    }
}
