//! Success notices emitted by player operations.

use std::fmt;

/// One line of feedback from a successful operation.
///
/// Operations return their notices in the order they happened, so an implicit
/// stop is always reported before the play that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Playing { title: String },
    Stopping { title: String },
    Pausing { title: String },
    AlreadyPaused { title: String },
    Continuing { title: String },
    Flagged { title: String, reason: String },
    Unflagged { title: String },
    PlaylistCreated { name: String },
    AddedToPlaylist { playlist: String, title: String },
    RemovedFromPlaylist { playlist: String, title: String },
    PlaylistCleared { playlist: String },
    PlaylistAlreadyEmpty { playlist: String },
    PlaylistDeleted { playlist: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Playing { title } => write!(f, "Playing video: {}", title),
            Notice::Stopping { title } => write!(f, "Stopping video: {}", title),
            Notice::Pausing { title } => write!(f, "Pausing video: {}", title),
            Notice::AlreadyPaused { title } => write!(f, "Video already paused: {}", title),
            Notice::Continuing { title } => write!(f, "Continuing video: {}", title),
            Notice::Flagged { title, reason } => {
                write!(f, "Successfully flagged video: {} (reason: {})", title, reason)
            }
            Notice::Unflagged { title } => {
                write!(f, "Successfully removed flag from video: {}", title)
            }
            Notice::PlaylistCreated { name } => {
                write!(f, "Successfully created new playlist: {}", name)
            }
            Notice::AddedToPlaylist { playlist, title } => {
                write!(f, "Added video to {}: {}", playlist, title)
            }
            Notice::RemovedFromPlaylist { playlist, title } => {
                write!(f, "Removed video from {}: {}", playlist, title)
            }
            Notice::PlaylistCleared { playlist } => {
                write!(f, "Successfully removed all videos from {}", playlist)
            }
            Notice::PlaylistAlreadyEmpty { playlist } => {
                write!(f, "Playlist {} is already empty", playlist)
            }
            Notice::PlaylistDeleted { playlist } => write!(f, "Deleted playlist: {}", playlist),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_lines() {
        let notice = Notice::Flagged {
            title: "Funny Dogs".to_string(),
            reason: "Not supplied".to_string(),
        };
        assert_eq!(notice.to_string(), "Successfully flagged video: Funny Dogs (reason: Not supplied)");

        let notice = Notice::AddedToPlaylist {
            playlist: "my_PLAYlist".to_string(),
            title: "Amazing Cats".to_string(),
        };
        assert_eq!(notice.to_string(), "Added video to my_PLAYlist: Amazing Cats");
    }
}
