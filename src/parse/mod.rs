//! Dialect parser: source text to document tree.
//!
//! The dialect is line oriented and deliberately small: three heading
//! levels, emphasis/strong/strong+emphasis, inline code, fenced code
//! blocks, ordered and unordered list items, and blank-line-separated
//! paragraphs. Anything else is literal text.
//!
//! Parsing never fails and never panics; malformed markup degrades to
//! literal text (fail open).

mod block;
mod inline;

pub use block::parse_document;
pub use inline::parse_inline;
