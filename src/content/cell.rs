use super::article::Article;
use super::source::ContentSource;

/// Ticket handed out by [`ContentCell::begin`], identifying one load
/// request. Only the ticket from the most recent `begin` can commit.
#[must_use = "a ticket that is never committed leaves the cell unchanged"]
#[derive(Debug)]
pub struct LoadTicket {
    generation: u64,
    filename: String,
}

impl LoadTicket {
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// Holder for the currently displayed article, with a commit guard.
///
/// Loads have no cancellation: a superseding request does not stop an
/// in-flight one. Without a guard, whichever load resolves last would win,
/// even when a newer request is already pending. The cell therefore stamps
/// each request with a generation and rejects commits from superseded
/// tickets.
#[derive(Debug, Default)]
pub struct ContentCell {
    generation: u64,
    current: Option<Article>,
}

impl ContentCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load for `filename`, superseding any outstanding request.
    pub fn begin(&mut self, filename: &str) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
            filename: filename.to_string(),
        }
    }

    /// Install the resolved text for a request.
    ///
    /// Returns `false` (and leaves the cell unchanged) when the ticket has
    /// been superseded by a newer `begin`.
    pub fn commit(&mut self, ticket: LoadTicket, text: String) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.current = Some(Article::new(ticket.filename, ticket.generation, text));
        true
    }

    /// Begin, load fail-soft, and commit in one step.
    pub fn load_from(&mut self, source: &dyn ContentSource, filename: &str) -> bool {
        let ticket = self.begin(filename);
        let text = source.load_or_empty(filename);
        self.commit(ticket, text)
    }

    /// The currently committed article, if any.
    pub fn article(&self) -> Option<&Article> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemorySource;

    #[test]
    fn test_commit_installs_article() {
        let mut cell = ContentCell::new();
        let ticket = cell.begin("a.md");
        assert!(cell.commit(ticket, "text".to_string()));
        assert_eq!(cell.article().unwrap().text(), "text");
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut cell = ContentCell::new();
        let stale = cell.begin("a.md");
        let fresh = cell.begin("b.md");

        // The newer request resolves first.
        assert!(cell.commit(fresh, "newer".to_string()));
        // The superseded one resolves late and must not clobber it.
        assert!(!cell.commit(stale, "older".to_string()));

        let article = cell.article().unwrap();
        assert_eq!(article.filename(), "b.md");
        assert_eq!(article.text(), "newer");
    }

    #[test]
    fn test_load_from_source() {
        let mut source = MemorySource::new();
        source.insert("post.md", "# Post");

        let mut cell = ContentCell::new();
        assert!(cell.load_from(&source, "post.md"));
        assert!(cell.article().unwrap().is_available());

        // Missing content commits an empty (unavailable) article.
        assert!(cell.load_from(&source, "gone.md"));
        assert!(!cell.article().unwrap().is_available());
    }

    #[test]
    fn test_revision_advances_per_load() {
        let mut cell = ContentCell::new();
        let t1 = cell.begin("a.md");
        cell.commit(t1, "one".to_string());
        let r1 = cell.article().unwrap().revision();

        let t2 = cell.begin("a.md");
        cell.commit(t2, "two".to_string());
        assert!(cell.article().unwrap().revision() > r1);
    }
}
