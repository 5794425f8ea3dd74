use std::sync::OnceLock;

use crate::html::render_html;
use crate::readtime::estimate_reading_time;

/// One loaded piece of content at a fixed revision.
///
/// The text is immutable for the lifetime of the value, so derived
/// attributes are computed at most once per revision: reading time is a
/// lazy cell, not a recompute-per-display.
#[derive(Debug)]
pub struct Article {
    filename: String,
    revision: u64,
    text: String,
    reading_time: OnceLock<u32>,
}

impl Article {
    pub fn new(filename: impl Into<String>, revision: u64, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            revision,
            text: text.into(),
            reading_time: OnceLock::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Revision token this text was loaded under.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether content was actually retrieved. Under the fail-soft load
    /// policy an empty string means "unavailable".
    pub fn is_available(&self) -> bool {
        !self.text.is_empty()
    }

    /// Reading time in minutes, computed once per revision.
    pub fn reading_time(&self) -> u32 {
        *self
            .reading_time
            .get_or_init(|| estimate_reading_time(&self.text))
    }

    /// Render the article text to an HTML fragment.
    pub fn render_html(&self) -> String {
        render_html(&self.text)
    }
}

impl Clone for Article {
    fn clone(&self) -> Self {
        Self {
            filename: self.filename.clone(),
            revision: self.revision,
            text: self.text.clone(),
            reading_time: self.reading_time.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_time_is_cached() {
        let article = Article::new("a.md", 1, "one two three");
        let first = article.reading_time();
        assert_eq!(first, 1);
        // Same revision, same cached value.
        assert_eq!(article.reading_time(), first);
    }

    #[test]
    fn test_empty_article_is_unavailable() {
        let article = Article::new("a.md", 1, "");
        assert!(!article.is_available());
        assert_eq!(article.reading_time(), 0);
    }

    #[test]
    fn test_render() {
        let article = Article::new("a.md", 1, "# Title");
        assert_eq!(article.render_html(), "<h1>Title</h1>");
    }
}
