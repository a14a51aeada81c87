//! The player session.
//!
//! This module contains:
//! - PlayerSession: Playback state machine and flag handling
//! - Playlists: Create, fill, clear and delete user playlists
//! - Search: Title/tag search with deferred selection
//! - PlayerError / Notice: The outcome of every operation

pub mod error;
pub mod notice;
pub mod playlists;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use error::{Action, ErrorKind, PlayerError, PlayerResult};
pub use notice::Notice;
pub use playlists::PlaylistView;
pub use search::SearchResults;
pub use session::{NowPlaying, PlayerSession, SessionOptions};
