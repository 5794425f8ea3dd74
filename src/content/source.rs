use std::collections::HashMap;
use std::path::PathBuf;

use tracing::warn;

use crate::error::{Error, Result};

/// A source of raw article text, keyed by filename.
pub trait ContentSource {
    /// Retrieve the raw text for `filename`.
    fn load(&self, filename: &str) -> Result<String>;

    /// Fail-soft retrieval: any failure becomes an empty string plus a
    /// diagnostic log record.
    ///
    /// Callers must treat `""` as "content unavailable", not as a
    /// legitimately empty document.
    fn load_or_empty(&self, filename: &str) -> String {
        match self.load(filename) {
            Ok(text) => text,
            Err(e) => {
                warn!(filename, error = %e, "content load failed");
                String::new()
            }
        }
    }
}

/// Loads article files from a content directory on disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for DirSource {
    fn load(&self, filename: &str) -> Result<String> {
        let path = self.root.join(filename);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(filename.to_string()));
            }
            Err(e) => return Err(Error::Io(e)),
        };
        Ok(String::from_utf8(bytes)?)
    }
}

/// In-memory source, for tests and embedded content.
#[derive(Default)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, filename: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(filename.into(), text.into());
    }
}

impl ContentSource for MemorySource {
    fn load(&self, filename: &str) -> Result<String> {
        self.entries
            .get(filename)
            .cloned()
            .ok_or_else(|| Error::NotFound(filename.to_string()))
    }
}
