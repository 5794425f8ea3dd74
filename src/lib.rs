//! # folio
//!
//! A small, pure library for an article content pipeline: a restricted
//! markdown-like dialect in, HTML fragments and reading-time estimates out.
//!
//! ## Features
//!
//! - Parse the dialect into a typed document tree ([`parse`], [`model`])
//! - Serialize the tree to HTML with literal text escaped by construction
//!   ([`html`])
//! - Estimate reading time from source text ([`readtime`])
//! - Load article files fail-soft, with a commit guard for superseded
//!   loads ([`content`])
//!
//! ## Quick Start
//!
//! ```
//! use folio::render_html;
//!
//! let html = render_html("# Hello\n\nSome **bold** text.");
//! assert_eq!(html, "<h1>Hello</h1>\n<p>Some <strong>bold</strong> text.</p>");
//! ```
//!
//! ## Loading content
//!
//! ```no_run
//! use folio::{ContentCell, DirSource};
//!
//! let source = DirSource::new("content/articles");
//! let mut cell = ContentCell::new();
//! cell.load_from(&source, "first-post.md");
//!
//! if let Some(article) = cell.article() {
//!     let html = article.render_html();
//!     let minutes = article.reading_time();
//! }
//! ```

pub mod content;
pub mod error;
pub mod html;
pub mod model;
pub mod parse;
pub mod readtime;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use content::{Article, ContentCell, ContentSource, DirSource, MemorySource};
pub use error::{Error, Result};
pub use html::{render_document, render_html};
pub use model::{Block, Document, HeadingLevel, Inline, ListItem};
pub use parse::parse_document;
pub use readtime::{estimate_reading_time, word_count};
