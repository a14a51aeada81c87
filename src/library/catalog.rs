//! Catalog of all videos known to the player.
//!
//! Fixed set of videos that can be looked up by id and searched. Only the
//! moderation flag of an entry may change after construction.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, instrument};

use super::loader::{self, CatalogFormat};
use crate::domain::{Video, VideoId};

/// Catalog construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate video id in catalog: {0}")]
    DuplicateId(VideoId),

    #[error("Malformed catalog line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Catalog of videos, in the order they were supplied
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: Vec<Video>,
}

impl VideoCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_videos(videos: Vec<Video>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for video in &videos {
            if !seen.insert(video.id.clone()) {
                return Err(CatalogError::DuplicateId(video.id.clone()));
            }
        }
        Ok(Self { videos })
    }

    /// The default catalog shipped with the player
    pub fn builtin() -> Self {
        Self {
            videos: loader::builtin_videos(),
        }
    }

    /// Load a catalog file, picking the format from its extension
    #[instrument]
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let format = CatalogFormat::from_path(path);
        let videos = loader::parse(&content, format)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
        debug!(count = videos.len(), ?format, "Loaded catalog");

        Self::from_videos(videos)
            .with_context(|| format!("Invalid catalog: {}", path.display()))
    }

    /// All videos in supplied order
    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    /// Get a video by id
    pub fn find_by_id(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id.as_str() == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.iter_mut().find(|v| v.id.as_str() == id)
    }

    /// Unflagged videos whose title contains `term` (case-insensitive),
    /// sorted by title
    pub fn search_title(&self, term: &str) -> Vec<&Video> {
        self.search(|video| video.title_contains(term))
    }

    /// Unflagged videos carrying `tag` (case-insensitive exact match),
    /// sorted by title
    pub fn search_tag(&self, tag: &str) -> Vec<&Video> {
        self.search(|video| video.has_tag(tag))
    }

    fn search(&self, matches: impl Fn(&Video) -> bool) -> Vec<&Video> {
        let mut hits: Vec<_> = self
            .videos
            .iter()
            .filter(|video| !video.is_flagged() && matches(video))
            .collect();
        hits.sort_by(|a, b| a.title.cmp(&b.title));
        hits
    }

    /// All videos sorted by title, flagged ones included
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut items: Vec<_> = self.videos.iter().collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        items
    }

    /// Unflagged videos in catalog order
    pub fn playable(&self) -> Vec<&Video> {
        self.videos.iter().filter(|v| !v.is_flagged()).collect()
    }

    /// Get the number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
