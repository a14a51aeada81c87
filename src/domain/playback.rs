//! Playback status of a player session.

use super::video::VideoId;

/// Playback state machine.
///
/// `Stopped` remembers the last selected video for display purposes only;
/// nothing is considered selected while stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing playing
    Stopped { last: Option<VideoId> },

    /// Actively playing a video
    Playing(VideoId),

    /// Playing video on hold
    Paused(VideoId),
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped { last: None }
    }
}

impl PlaybackState {
    /// The video being played or paused
    pub fn selected(&self) -> Option<&VideoId> {
        match self {
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
            PlaybackState::Stopped { .. } => None,
        }
    }

    /// The most recently selected video, even after a stop
    pub fn last_selected(&self) -> Option<&VideoId> {
        match self {
            PlaybackState::Stopped { last } => last.as_ref(),
            _ => self.selected(),
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, PlaybackState::Stopped { .. })
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stopped_without_selection() {
        let state = PlaybackState::default();
        assert!(state.is_stopped());
        assert!(state.selected().is_none());
        assert!(state.last_selected().is_none());
    }

    #[test]
    fn test_stopped_keeps_last_video_but_selects_nothing() {
        let state = PlaybackState::Stopped {
            last: Some(VideoId::new("v1")),
        };
        assert!(state.selected().is_none());
        assert_eq!(state.last_selected(), Some(&VideoId::new("v1")));
    }

    #[test]
    fn test_selected_while_active() {
        let playing = PlaybackState::Playing(VideoId::new("v1"));
        let paused = PlaybackState::Paused(VideoId::new("v2"));

        assert_eq!(playing.selected(), Some(&VideoId::new("v1")));
        assert_eq!(paused.selected(), Some(&VideoId::new("v2")));
        assert!(playing.is_playing() && !playing.is_paused());
        assert!(paused.is_paused() && !paused.is_stopped());
    }
}
