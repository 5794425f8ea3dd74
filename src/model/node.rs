/// Heading depth. The dialect recognizes three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric depth (1-3), matching the HTML element name.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Span-level content inside a heading, paragraph, or list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text. Escaped at serialization, never trusted as markup.
    Text(String),
    /// Strong emphasis (`**text**`). `***text***` parses as
    /// `Strong(vec![Emphasis(..)])`.
    Strong(Vec<Inline>),
    /// Emphasis (`*text*`).
    Emphasis(Vec<Inline>),
    /// Inline code. Content is literal; no nested spans.
    Code(String),
}

/// One item of an ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub spans: Vec<Inline>,
}

impl ListItem {
    pub fn new(spans: Vec<Inline>) -> Self {
        Self { spans }
    }
}

/// Block-level content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        spans: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    /// Fenced code block. The language tag is retained but not used to
    /// select highlighting.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// Ordered list. `start` is the number on the first item as written.
    OrderedList {
        start: u64,
        items: Vec<ListItem>,
    },
    UnorderedList(Vec<ListItem>),
    /// A segment whose first character is `<`: passed through verbatim,
    /// with no paragraph wrapper and no escaping.
    RawHtml(String),
}

/// A parsed article: an ordered sequence of blocks.
///
/// The tree is an immutable value. Parsing the same source text always
/// produces an equal `Document`, and serializing an equal `Document` always
/// produces byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
