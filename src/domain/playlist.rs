//! Named, ordered, duplicate-free video queues.

use super::video::VideoId;

/// Fold a playlist name into its case-insensitive lookup key
pub fn playlist_key(name: &str) -> String {
    name.to_uppercase()
}

/// A user-created playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Display name as given at creation
    name: String,

    /// Video ids in insertion order, no duplicates
    queue: Vec<VideoId>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queue: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Video ids in queue order
    pub fn videos(&self) -> &[VideoId] {
        &self.queue
    }

    pub fn contains(&self, id: &VideoId) -> bool {
        self.queue.contains(id)
    }

    /// Append a video. Returns false (and leaves the queue alone) if it is
    /// already present.
    pub fn push(&mut self, id: VideoId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.queue.push(id);
        true
    }

    /// Remove a video. Returns false if it was not in the queue.
    pub fn remove(&mut self, id: &VideoId) -> bool {
        match self.queue.iter().position(|v| v == id) {
            Some(pos) => {
                self.queue.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Empty the queue, returning how many entries were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.queue.len();
        self.queue.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_rejects_duplicates() {
        let mut playlist = Playlist::new("fun");

        assert!(playlist.push(VideoId::new("v1")));
        assert!(playlist.push(VideoId::new("v2")));
        assert!(!playlist.push(VideoId::new("v1")));

        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.videos(), &[VideoId::new("v1"), VideoId::new("v2")]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut playlist = Playlist::new("fun");
        playlist.push(VideoId::new("v1"));
        playlist.push(VideoId::new("v2"));
        playlist.push(VideoId::new("v3"));

        assert!(playlist.remove(&VideoId::new("v2")));
        assert!(!playlist.remove(&VideoId::new("v2")));
        assert_eq!(playlist.videos(), &[VideoId::new("v1"), VideoId::new("v3")]);

        assert_eq!(playlist.clear(), 2);
        assert!(playlist.is_empty());
        assert_eq!(playlist.clear(), 0);
    }

    #[test]
    fn test_key_folds_case() {
        assert_eq!(playlist_key("My_Playlist"), playlist_key("my_PLAYLIST"));
        assert_ne!(playlist_key("fun"), playlist_key("fun2"));
    }
}
