//! vidplay - command-driven video player
//!
//! An in-memory video player: a fixed catalog of videos, a playback state
//! machine, user playlists and content flagging, driven by text commands.
//!
//! # Architecture
//!
//! A single [`PlayerSession`] owns all mutable state:
//! - Playback is Stopped, Playing or Paused
//! - Playlists are keyed case-insensitively by name
//! - Flagged videos cannot be played, queued or found by search
//!
//! Every operation returns either ordered [`Notice`]s or one classified
//! [`PlayerError`]; nothing aborts the session.
//!
//! # Modules
//!
//! - `domain`: Data structures (Video, Playlist, PlaybackState)
//! - `library`: Video catalog and catalog file loading
//! - `player`: Session, playlists, search, errors and notices
//! - `cli`: Command shell and command-line interface
//! - `config`: Layered configuration
//!
//! # Usage
//!
//! ```bash
//! # Interactive shell with the built-in catalog
//! vidplay
//!
//! # Run a command script, echoing each command
//! vidplay run demos/demo.txt --echo
//!
//! # List a custom catalog
//! vidplay --catalog demos/videos.yaml videos
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;
pub mod player;

// Re-export main types at crate root for convenience
pub use domain::{PlaybackState, Playlist, Video, VideoId};
pub use library::{CatalogError, VideoCatalog};
pub use player::{ErrorKind, Notice, PlayerError, PlayerResult, PlayerSession, SearchResults, SessionOptions};
