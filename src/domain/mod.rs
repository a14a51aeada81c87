//! Domain types for the video player.
//!
//! This module contains the core data structures:
//! - Video: Catalog entries and their moderation flag
//! - Playlist: Named, ordered video queues
//! - PlaybackState: Stopped / Playing / Paused

pub mod playback;
pub mod playlist;
pub mod video;

// Re-export commonly used types
pub use playback::PlaybackState;
pub use playlist::{playlist_key, Playlist};
pub use video::{Video, VideoId, DEFAULT_FLAG_REASON};
