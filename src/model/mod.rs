//! Document tree for parsed article content.
//!
//! The parser builds this tree from source text and the HTML serializer
//! walks it. Keeping an explicit typed tree (rather than chained string
//! substitution) means literal text can be escaped by construction and
//! block recognition is independent of rule ordering.

mod node;

pub use node::{Block, Document, HeadingLevel, Inline, ListItem};
