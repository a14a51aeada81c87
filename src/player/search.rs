//! Title and tag search with a deferred "play one of these?" selection.

use tracing::debug;

use super::error::PlayerResult;
use super::notice::Notice;
use super::session::PlayerSession;
use crate::domain::Video;

/// Snapshot of the hits of a search, numbered from 1 when displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    term: String,
    hits: Vec<Video>,
}

impl SearchResults {
    fn new(term: &str, hits: Vec<&Video>) -> Self {
        Self {
            term: term.to_string(),
            hits: hits.into_iter().cloned().collect(),
        }
    }

    /// The search term as given
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Hits sorted by title
    pub fn hits(&self) -> &[Video] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Interpret a reply to the selection prompt.
    ///
    /// Only a 1-based index within range selects a video; anything else is a
    /// decline.
    pub fn select(&self, input: Option<&str>) -> Option<&Video> {
        let choice: usize = input?.trim().parse().ok()?;
        choice.checked_sub(1).and_then(|idx| self.hits.get(idx))
    }
}

impl PlayerSession {
    /// Unflagged videos whose title contains `term`, case-insensitively
    pub fn search_by_title(&self, term: &str) -> SearchResults {
        SearchResults::new(term, self.catalog.search_title(term))
    }

    /// Unflagged videos tagged exactly `tag`, case-insensitively
    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        SearchResults::new(tag, self.catalog.search_tag(tag))
    }

    /// Apply the reply to a search prompt. A decline changes nothing and
    /// produces no notices.
    pub fn play_selection(
        &mut self,
        results: &SearchResults,
        input: Option<&str>,
    ) -> PlayerResult<Vec<Notice>> {
        match results.select(input) {
            Some(video) => self.play(video.id.as_str()),
            None => {
                debug!(term = results.term(), ?input, "Search selection declined");
                Ok(Vec::new())
            }
        }
    }
}
