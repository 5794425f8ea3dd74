//! Error types for content loading.

use thiserror::Error;

/// Errors that can occur while loading article content.
///
/// Parsing, rendering, and reading-time estimation are infallible; only
/// the content source returns `Result`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("content not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
