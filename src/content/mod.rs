//! Content loading and lifecycle.
//!
//! Articles come from an external source (a content directory on disk, or
//! memory in tests) addressed by filename. Retrieval is fail-soft: failures
//! surface as empty content plus a log record, never as a panic in the
//! rendering path. [`ContentCell`] guards against the stale-result race
//! when a newer load supersedes an unresolved one.

mod article;
mod cell;
mod source;

pub use article::Article;
pub use cell::{ContentCell, LoadTicket};
pub use source::{ContentSource, DirSource, MemorySource};
