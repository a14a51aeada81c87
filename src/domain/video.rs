//! Video records held by the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Stable, unique video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A catalog entry.
///
/// Everything but the flag is fixed once the catalog is built. The flag is
/// only ever changed by the player session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier
    pub id: VideoId,

    /// Display title
    pub title: String,

    /// Tags in catalog order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Moderation flag reason (absent = not flagged)
    #[serde(skip)]
    flag: Option<String>,
}

impl Video {
    /// Create an unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: VideoId::new(id),
            title: title.into(),
            tags: Vec::new(),
            flag: None,
        }
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    pub(crate) fn set_flag(&mut self, reason: impl Into<String>) {
        self.flag = Some(reason.into());
    }

    pub(crate) fn clear_flag(&mut self) -> Option<String> {
        self.flag.take()
    }

    /// Case-insensitive exact match against any tag
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_uppercase();
        self.tags.iter().any(|t| t.to_uppercase() == wanted)
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_uppercase().contains(&term.to_uppercase())
    }
}

/// `Title (id) [tag1 tag2]`
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}
