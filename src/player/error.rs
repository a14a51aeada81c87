//! Classified failures of player operations.
//!
//! Every failure is recoverable: the session state is left untouched and the
//! error's `Display` is the line shown to the user.

use std::fmt;

use thiserror::Error;

use crate::domain::VideoId;

/// The operation a failure is reported against.
///
/// Playlist actions carry the playlist name exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Play,
    Stop,
    Pause,
    Continue,
    Flag,
    Unflag,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play => write!(f, "play video"),
            Action::Stop => write!(f, "stop video"),
            Action::Pause => write!(f, "pause video"),
            Action::Continue => write!(f, "continue video"),
            Action::Flag => write!(f, "flag video"),
            Action::Unflag => write!(f, "remove flag from video"),
            Action::CreatePlaylist => write!(f, "create playlist"),
            Action::AddToPlaylist(name) => write!(f, "add video to {}", name),
            Action::RemoveFromPlaylist(name) => write!(f, "remove video from {}", name),
            Action::ClearPlaylist(name) => write!(f, "clear playlist {}", name),
            Action::DeletePlaylist(name) => write!(f, "delete playlist {}", name),
            Action::ShowPlaylist(name) => write!(f, "show playlist {}", name),
        }
    }
}

/// Bare failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    PlaylistNotFound,
    DuplicateName,
    DuplicateEntry,
    NotInPlaylist,
    AlreadyFlagged,
    NotFlagged,
    Flagged,
    NothingPlaying,
    NotPaused,
    Unavailable,
}

/// Player operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Cannot {action}: Video does not exist")]
    NotFound { action: Action, id: VideoId },

    #[error("Cannot {action}: Playlist does not exist")]
    PlaylistNotFound { action: Action, name: String },

    #[error("Cannot create playlist: A playlist with the same name already exists")]
    DuplicateName { name: String },

    #[error("Cannot add video to {playlist}: Video already added")]
    DuplicateEntry { playlist: String, id: VideoId },

    #[error("Cannot remove video from {playlist}: Video is not in playlist")]
    NotInPlaylist { playlist: String, id: VideoId },

    #[error("Cannot flag video: Video is already flagged")]
    AlreadyFlagged { id: VideoId },

    #[error("Cannot remove flag from video: Video is not flagged")]
    NotFlagged { id: VideoId },

    #[error("Cannot {action}: Video is currently flagged (reason: {reason})")]
    Flagged {
        action: Action,
        id: VideoId,
        reason: String,
    },

    #[error("Cannot {action}: No video is currently playing")]
    NothingPlaying { action: Action },

    #[error("Cannot continue video: Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    Unavailable,
}

impl PlayerError {
    /// Classification without context
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::NotFound { .. } => ErrorKind::NotFound,
            PlayerError::PlaylistNotFound { .. } => ErrorKind::PlaylistNotFound,
            PlayerError::DuplicateName { .. } => ErrorKind::DuplicateName,
            PlayerError::DuplicateEntry { .. } => ErrorKind::DuplicateEntry,
            PlayerError::NotInPlaylist { .. } => ErrorKind::NotInPlaylist,
            PlayerError::AlreadyFlagged { .. } => ErrorKind::AlreadyFlagged,
            PlayerError::NotFlagged { .. } => ErrorKind::NotFlagged,
            PlayerError::Flagged { .. } => ErrorKind::Flagged,
            PlayerError::NothingPlaying { .. } => ErrorKind::NothingPlaying,
            PlayerError::NotPaused => ErrorKind::NotPaused,
            PlayerError::Unavailable => ErrorKind::Unavailable,
        }
    }
}

/// Result type for player operations
pub type PlayerResult<T> = std::result::Result<T, PlayerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_action() {
        let err = PlayerError::NotFound {
            action: Action::Play,
            id: VideoId::new("nope"),
        };
        assert_eq!(err.to_string(), "Cannot play video: Video does not exist");

        let err = PlayerError::PlaylistNotFound {
            action: Action::ShowPlaylist("My_List".to_string()),
            name: "My_List".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot show playlist My_List: Playlist does not exist");

        let err = PlayerError::Flagged {
            action: Action::AddToPlaylist("fun".to_string()),
            id: VideoId::new("v1"),
            reason: "dont_like_cats".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot add video to fun: Video is currently flagged (reason: dont_like_cats)"
        );

        let err = PlayerError::NothingPlaying {
            action: Action::Continue,
        };
        assert_eq!(err.to_string(), "Cannot continue video: No video is currently playing");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(PlayerError::Unavailable.kind(), ErrorKind::Unavailable);
        assert_eq!(PlayerError::NotPaused.kind(), ErrorKind::NotPaused);
        assert_eq!(
            PlayerError::NotFlagged {
                id: VideoId::new("v1")
            }
            .kind(),
            ErrorKind::NotFlagged
        );
    }
}
