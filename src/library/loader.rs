//! Catalog file parsing.
//!
//! Supported formats:
//!
//! ```text
//! # pipe format (default), one video per line, tags optional
//! Amazing Cats | amazing_cats_video_id | #cat , #animal
//! Video about nothing | nothing_video_id |
//! ```
//!
//! YAML (`.yaml`, `.yml`) and JSON (`.json`) files hold a list of
//! `{id, title, tags}` records.

use std::path::Path;

use anyhow::{Context, Result};

use super::catalog::CatalogError;
use crate::domain::Video;

/// Default catalog used when no catalog file is configured
pub fn builtin_videos() -> Vec<Video> {
    vec![
        Video::new("amazing_cats_video_id", "Amazing Cats").with_tags(["#cat", "#animal"]),
        Video::new("another_cat_video_id", "Another Cat Video").with_tags(["#cat", "#animal"]),
        Video::new("funny_dogs_video_id", "Funny Dogs").with_tags(["#dog", "#animal"]),
        Video::new("life_at_google_video_id", "Life at Google").with_tags(["#google", "#career"]),
        Video::new("nothing_video_id", "Video about nothing"),
    ]
}

/// On-disk catalog format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Pipe,
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            Some("json") => CatalogFormat::Json,
            _ => CatalogFormat::Pipe,
        }
    }
}

/// Parse catalog content in the given format
pub fn parse(content: &str, format: CatalogFormat) -> Result<Vec<Video>> {
    match format {
        CatalogFormat::Pipe => Ok(parse_pipe_format(content)?),
        CatalogFormat::Yaml => {
            serde_yaml::from_str(content).context("Failed to parse catalog YAML")
        }
        CatalogFormat::Json => {
            serde_json::from_str(content).context("Failed to parse catalog JSON")
        }
    }
}

/// Parse `Title | id | tag , tag` lines
pub fn parse_pipe_format(content: &str) -> Result<Vec<Video>, CatalogError> {
    let mut videos = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let malformed = || CatalogError::MalformedLine {
            line: idx + 1,
            content: line.to_string(),
        };

        let mut fields = line.split('|').map(str::trim);
        let title = fields.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
        let id = fields.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
        let tags: Vec<&str> = fields
            .next()
            .map(|t| t.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        if fields.next().is_some() {
            return Err(malformed());
        }

        videos.push(Video::new(id, title).with_tags(tags));
    }

    Ok(videos)
}
