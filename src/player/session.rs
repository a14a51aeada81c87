//! Player session: playback state machine and moderation flags.
//!
//! The session owns the catalog, the playback state and every playlist. It is
//! the only thing allowed to change any of them.

use std::collections::HashMap;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use super::error::{Action, PlayerError, PlayerResult};
use super::notice::Notice;
use crate::domain::{PlaybackState, Playlist, Video, VideoId, DEFAULT_FLAG_REASON};
use crate::library::VideoCatalog;

/// Tunables for a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Emit a notice when clearing a playlist that is already empty
    /// (default: clear silently)
    pub announce_empty_clear: bool,

    /// Fixed seed for random play (default: OS entropy)
    pub seed: Option<u64>,
}

/// What is on screen right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlaying<'a> {
    pub video: &'a Video,
    pub paused: bool,
}

impl fmt::Display for NowPlaying<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currently playing: {}", self.video)?;
        if self.paused {
            write!(f, " - PAUSED")?;
        }
        Ok(())
    }
}

/// A single-user player session
pub struct PlayerSession {
    pub(super) catalog: VideoCatalog,
    pub(super) state: PlaybackState,
    /// Keyed by `playlist_key(name)`
    pub(super) playlists: HashMap<String, Playlist>,
    pub(super) options: SessionOptions,
    rng: StdRng,
}

impl fmt::Debug for PlayerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerSession")
            .field("videos", &self.catalog.len())
            .field("state", &self.state)
            .field("playlists", &self.playlists.len())
            .field("options", &self.options)
            .finish()
    }
}

impl PlayerSession {
    /// Create a session with default options
    pub fn new(catalog: VideoCatalog) -> Self {
        Self::with_options(catalog, SessionOptions::default())
    }

    pub fn with_options(catalog: VideoCatalog, options: SessionOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            state: PlaybackState::default(),
            playlists: HashMap::new(),
            options,
            rng,
        }
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Number of videos in the catalog
    pub fn video_count(&self) -> usize {
        self.catalog.len()
    }

    /// Every catalog video sorted by title, flagged ones included
    pub fn all_videos(&self) -> Vec<&Video> {
        self.catalog.sorted_by_title()
    }

    /// The selected video and whether it is paused; `None` when stopped
    pub fn now_playing(&self) -> Option<NowPlaying<'_>> {
        let id = self.state.selected()?;
        let video = self.catalog.find_by_id(id.as_str())?;
        Some(NowPlaying {
            video,
            paused: self.state.is_paused(),
        })
    }

    /// Play a video, stopping whatever is currently selected first
    pub fn play(&mut self, id: &str) -> PlayerResult<Vec<Notice>> {
        let video = self
            .catalog
            .find_by_id(id)
            .ok_or_else(|| PlayerError::NotFound {
                action: Action::Play,
                id: VideoId::new(id),
            })?;

        if let Some(reason) = video.flag_reason() {
            return Err(PlayerError::Flagged {
                action: Action::Play,
                id: video.id.clone(),
                reason: reason.to_string(),
            });
        }

        let (target, title) = (video.id.clone(), video.title.clone());

        let mut notices = Vec::new();
        notices.extend(self.halt());

        debug!(video = %target, "Playing");
        self.state = PlaybackState::Playing(target);
        notices.push(Notice::Playing { title });

        Ok(notices)
    }

    /// Stop the current video
    pub fn stop(&mut self) -> PlayerResult<Vec<Notice>> {
        self.halt()
            .map(|notice| vec![notice])
            .ok_or(PlayerError::NothingPlaying {
                action: Action::Stop,
            })
    }

    /// Play a uniformly random unflagged video
    pub fn play_random(&mut self) -> PlayerResult<Vec<Notice>> {
        let chosen = self
            .catalog
            .playable()
            .choose(&mut self.rng)
            .map(|video| video.id.clone())
            .ok_or(PlayerError::Unavailable)?;

        debug!(video = %chosen, "Random pick");
        self.play(chosen.as_str())
    }

    /// Pause the current video. Pausing twice is reported, not an error.
    pub fn pause(&mut self) -> PlayerResult<Vec<Notice>> {
        match &self.state {
            PlaybackState::Playing(id) => {
                let id = id.clone();
                let title = self.title_of(&id);
                debug!(video = %id, "Pausing");
                self.state = PlaybackState::Paused(id);
                Ok(vec![Notice::Pausing { title }])
            }
            PlaybackState::Paused(id) => Ok(vec![Notice::AlreadyPaused {
                title: self.title_of(id),
            }]),
            PlaybackState::Stopped { .. } => Err(PlayerError::NothingPlaying {
                action: Action::Pause,
            }),
        }
    }

    /// Continue a paused video
    pub fn resume(&mut self) -> PlayerResult<Vec<Notice>> {
        match &self.state {
            PlaybackState::Paused(id) => {
                let id = id.clone();
                let title = self.title_of(&id);
                debug!(video = %id, "Continuing");
                self.state = PlaybackState::Playing(id);
                Ok(vec![Notice::Continuing { title }])
            }
            PlaybackState::Playing(_) => Err(PlayerError::NotPaused),
            PlaybackState::Stopped { .. } => Err(PlayerError::NothingPlaying {
                action: Action::Continue,
            }),
        }
    }

    /// Flag a video. Flagging the selected video stops it.
    ///
    /// The reason is stored trimmed of surrounding whitespace. A missing
    /// reason, or one that is blank after trimming, is recorded as
    /// `"Not supplied"`.
    pub fn flag(&mut self, id: &str, reason: Option<&str>) -> PlayerResult<Vec<Notice>> {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON)
            .to_string();

        let video = self
            .catalog
            .find_by_id_mut(id)
            .ok_or_else(|| PlayerError::NotFound {
                action: Action::Flag,
                id: VideoId::new(id),
            })?;

        if video.is_flagged() {
            return Err(PlayerError::AlreadyFlagged {
                id: video.id.clone(),
            });
        }

        video.set_flag(reason.clone());
        let (target, title) = (video.id.clone(), video.title.clone());
        debug!(video = %target, %reason, "Flagged");

        let mut notices = Vec::new();
        if self.state.selected() == Some(&target) {
            notices.extend(self.halt());
        }
        notices.push(Notice::Flagged { title, reason });

        Ok(notices)
    }

    /// Remove a video's flag
    pub fn unflag(&mut self, id: &str) -> PlayerResult<Vec<Notice>> {
        let video = self
            .catalog
            .find_by_id_mut(id)
            .ok_or_else(|| PlayerError::NotFound {
                action: Action::Unflag,
                id: VideoId::new(id),
            })?;

        if video.clear_flag().is_none() {
            return Err(PlayerError::NotFlagged {
                id: video.id.clone(),
            });
        }

        debug!(video = %video.id, "Flag removed");
        Ok(vec![Notice::Unflagged {
            title: video.title.clone(),
        }])
    }

    /// Transition to Stopped if anything is selected
    fn halt(&mut self) -> Option<Notice> {
        let id = self.state.selected()?.clone();
        let title = self.title_of(&id);
        debug!(video = %id, "Stopping");
        self.state = PlaybackState::Stopped { last: Some(id) };
        Some(Notice::Stopping { title })
    }

    pub(super) fn title_of(&self, id: &VideoId) -> String {
        self.catalog
            .find_by_id(id.as_str())
            .map(|video| video.title.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
