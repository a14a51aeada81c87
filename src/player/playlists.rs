//! Playlist operations of the player session.
//!
//! Playlist names are matched case-insensitively but displayed as created.
//! Messages echo the name the user typed.

use std::collections::HashMap;

use tracing::debug;

use super::error::{Action, PlayerError, PlayerResult};
use super::notice::Notice;
use super::session::PlayerSession;
use crate::domain::{playlist_key, Playlist, Video, VideoId};

/// Contents of a playlist resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView<'a> {
    /// Name as requested
    pub name: String,
    /// Videos in queue order, flagged ones included
    pub videos: Vec<&'a Video>,
}

fn lookup<'a>(
    playlists: &'a mut HashMap<String, Playlist>,
    name: &str,
    action: Action,
) -> PlayerResult<&'a mut Playlist> {
    playlists
        .get_mut(&playlist_key(name))
        .ok_or_else(|| PlayerError::PlaylistNotFound {
            action,
            name: name.to_string(),
        })
}

impl PlayerSession {
    /// Create an empty playlist
    pub fn create_playlist(&mut self, name: &str) -> PlayerResult<Vec<Notice>> {
        let key = playlist_key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::DuplicateName {
                name: name.to_string(),
            });
        }

        debug!(playlist = name, "Creating playlist");
        self.playlists.insert(key, Playlist::new(name));
        Ok(vec![Notice::PlaylistCreated {
            name: name.to_string(),
        }])
    }

    /// Append a video to a playlist
    pub fn add_to_playlist(&mut self, playlist: &str, id: &str) -> PlayerResult<Vec<Notice>> {
        let action = Action::AddToPlaylist(playlist.to_string());
        let list = lookup(&mut self.playlists, playlist, action.clone())?;

        let video = self
            .catalog
            .find_by_id(id)
            .ok_or_else(|| PlayerError::NotFound {
                action: action.clone(),
                id: VideoId::new(id),
            })?;

        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::Flagged {
                action,
                id: video.id.clone(),
                reason: reason.to_string(),
            });
        }

        if !list.push(video.id.clone()) {
            return Err(PlayerError::DuplicateEntry {
                playlist: playlist.to_string(),
                id: video.id.clone(),
            });
        }

        debug!(playlist, video = %video.id, "Added to playlist");
        Ok(vec![Notice::AddedToPlaylist {
            playlist: playlist.to_string(),
            title: video.title.clone(),
        }])
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(&mut self, playlist: &str, id: &str) -> PlayerResult<Vec<Notice>> {
        let action = Action::RemoveFromPlaylist(playlist.to_string());
        let list = lookup(&mut self.playlists, playlist, action.clone())?;

        let video = self
            .catalog
            .find_by_id(id)
            .ok_or_else(|| PlayerError::NotFound {
                action,
                id: VideoId::new(id),
            })?;

        if !list.remove(&video.id) {
            return Err(PlayerError::NotInPlaylist {
                playlist: playlist.to_string(),
                id: video.id.clone(),
            });
        }

        debug!(playlist, video = %video.id, "Removed from playlist");
        Ok(vec![Notice::RemovedFromPlaylist {
            playlist: playlist.to_string(),
            title: video.title.clone(),
        }])
    }

    /// Remove every video from a playlist.
    ///
    /// Clearing an already-empty playlist succeeds without a notice unless
    /// `announce_empty_clear` is set.
    pub fn clear_playlist(&mut self, playlist: &str) -> PlayerResult<Vec<Notice>> {
        let list = lookup(
            &mut self.playlists,
            playlist,
            Action::ClearPlaylist(playlist.to_string()),
        )?;

        let removed = list.clear();
        debug!(playlist, removed, "Cleared playlist");

        let notices = if removed > 0 {
            vec![Notice::PlaylistCleared {
                playlist: playlist.to_string(),
            }]
        } else if self.options.announce_empty_clear {
            vec![Notice::PlaylistAlreadyEmpty {
                playlist: playlist.to_string(),
            }]
        } else {
            Vec::new()
        };

        Ok(notices)
    }

    /// Delete a playlist
    pub fn delete_playlist(&mut self, playlist: &str) -> PlayerResult<Vec<Notice>> {
        self.playlists
            .remove(&playlist_key(playlist))
            .ok_or_else(|| PlayerError::PlaylistNotFound {
                action: Action::DeletePlaylist(playlist.to_string()),
                name: playlist.to_string(),
            })?;

        debug!(playlist, "Deleted playlist");
        Ok(vec![Notice::PlaylistDeleted {
            playlist: playlist.to_string(),
        }])
    }

    /// Playlist display names in ordinary (case-sensitive) order
    pub fn playlist_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.playlists.values().map(Playlist::name).collect();
        names.sort_unstable();
        names
    }

    /// Get a playlist by name (case-insensitive)
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&playlist_key(name))
    }

    /// Resolve a playlist's videos for display
    pub fn show_playlist(&self, name: &str) -> PlayerResult<PlaylistView<'_>> {
        let list = self
            .playlist(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound {
                action: Action::ShowPlaylist(name.to_string()),
                name: name.to_string(),
            })?;

        let videos = list
            .videos()
            .iter()
            .filter_map(|id| self.catalog.find_by_id(id.as_str()))
            .collect();

        Ok(PlaylistView {
            name: name.to_string(),
            videos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::VideoCatalog;
    use crate::player::{ErrorKind, SessionOptions};

    fn session(options: SessionOptions) -> PlayerSession {
        let catalog = VideoCatalog::from_videos(vec![
            Video::new("v1", "Amazing Cat Video").with_tags(["cat", "funny"]),
            Video::new("v2", "Another Cat Video").with_tag("cat"),
        ])
        .unwrap();
        PlayerSession::with_options(catalog, options)
    }

    #[test]
    fn test_error_precedence_for_add() {
        let mut session = session(SessionOptions::default());

        // Missing playlist is reported before a missing video
        let err = session.add_to_playlist("nope", "missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlaylistNotFound);

        session.create_playlist("fun").unwrap();
        let err = session.add_to_playlist("fun", "missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Cannot add video to fun: Video does not exist");

        session.flag("v1", Some("spam")).unwrap();
        let err = session.add_to_playlist("FUN", "v1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Flagged);
        assert_eq!(
            err.to_string(),
            "Cannot add video to FUN: Video is currently flagged (reason: spam)"
        );
    }

    #[test]
    fn test_remove_precedence() {
        let mut session = session(SessionOptions::default());
        session.create_playlist("fun").unwrap();

        assert_eq!(
            session.remove_from_playlist("other", "v1").unwrap_err().kind(),
            ErrorKind::PlaylistNotFound
        );
        assert_eq!(
            session.remove_from_playlist("fun", "missing").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            session.remove_from_playlist("fun", "v1").unwrap_err().kind(),
            ErrorKind::NotInPlaylist
        );

        session.add_to_playlist("fun", "v1").unwrap();
        session.remove_from_playlist("Fun", "v1").unwrap();
        assert!(session.playlist("fun").unwrap().is_empty());
    }

    #[test]
    fn test_clear_empty_playlist_is_silent_by_default() {
        let mut session = session(SessionOptions::default());
        session.create_playlist("fun").unwrap();

        assert!(session.clear_playlist("fun").unwrap().is_empty());

        session.add_to_playlist("fun", "v1").unwrap();
        assert_eq!(
            session.clear_playlist("fun").unwrap(),
            vec![Notice::PlaylistCleared {
                playlist: "fun".to_string()
            }]
        );
    }

    #[test]
    fn test_clear_empty_playlist_can_be_announced() {
        let mut session = session(SessionOptions {
            announce_empty_clear: true,
            ..Default::default()
        });
        session.create_playlist("fun").unwrap();

        let notices = session.clear_playlist("FUN").unwrap();
        assert_eq!(notices[0].to_string(), "Playlist FUN is already empty");
    }

    #[test]
    fn test_names_sorted_case_sensitively() {
        let mut session = session(SessionOptions::default());
        for name in ["beta", "Alpha", "gamma", "Zeta"] {
            session.create_playlist(name).unwrap();
        }

        assert_eq!(session.playlist_names(), vec!["Alpha", "Zeta", "beta", "gamma"]);
    }

    #[test]
    fn test_show_playlist_keeps_queue_order() {
        let mut session = session(SessionOptions::default());
        session.create_playlist("fun").unwrap();
        session.add_to_playlist("fun", "v2").unwrap();
        session.add_to_playlist("fun", "v1").unwrap();
        session.flag("v1", None).unwrap();

        let view = session.show_playlist("FUN").unwrap();
        assert_eq!(view.name, "FUN");
        let ids: Vec<_> = view.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v2", "v1"]);
        assert!(view.videos[1].is_flagged());
    }

    #[test]
    fn test_delete_playlist() {
        let mut session = session(SessionOptions::default());
        session.create_playlist("fun").unwrap();

        session.delete_playlist("FUN").unwrap();
        assert!(session.playlist("fun").is_none());
        assert_eq!(
            session.delete_playlist("fun").unwrap_err().to_string(),
            "Cannot delete playlist fun: Playlist does not exist"
        );
    }
}
