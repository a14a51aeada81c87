//! Text rendering of player output.

use crate::domain::Video;
use crate::player::{Notice, NowPlaying, PlayerResult, PlaylistView, SearchResults};

use super::command::COMMANDS;

/// Prompt shown after non-empty search results
pub const SELECTION_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

/// `Title (id) [tags]`, with a flag annotation when flagged
pub fn video_line(video: &Video) -> String {
    match video.flag_reason() {
        Some(reason) => format!("{} - FLAGGED (reason: {})", video, reason),
        None => video.to_string(),
    }
}

/// Lines for the outcome of a state-changing operation
pub fn outcome(result: PlayerResult<Vec<Notice>>) -> Vec<String> {
    match result {
        Ok(notices) => notices.iter().map(ToString::to_string).collect(),
        Err(err) => vec![err.to_string()],
    }
}

pub fn video_count(count: usize) -> String {
    format!("{} videos in the library", count)
}

pub fn catalog_listing(videos: &[&Video]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(videos.iter().map(|video| format!("  {}", video_line(video))));
    lines
}

pub fn now_playing(now: Option<NowPlaying<'_>>) -> String {
    match now {
        Some(now) => now.to_string(),
        None => "No video is currently playing".to_string(),
    }
}

pub fn playlist_names(names: &[&str]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }

    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names.iter().map(|name| format!("  {}", name)));
    lines
}

pub fn playlist(view: &PlaylistView<'_>) -> Vec<String> {
    let mut lines = vec![format!("Showing playlist: {}", view.name)];
    if view.videos.is_empty() {
        lines.push("No videos here yet".to_string());
    } else {
        lines.extend(view.videos.iter().map(|video| format!("  {}", video_line(video))));
    }
    lines
}

/// Numbered hits followed by the selection prompt
pub fn search_results(results: &SearchResults) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No search results for {}", results.term())];
    }

    let mut lines = vec![format!("Here are the results for {}:", results.term())];
    lines.extend(
        results
            .hits()
            .iter()
            .enumerate()
            .map(|(idx, video)| format!("{}) {}", idx + 1, video)),
    );
    lines.extend(SELECTION_PROMPT.iter().map(|line| line.to_string()));
    lines
}

pub fn help() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|(usage, description)| format!("    {} - {}", usage, description)),
    );
    lines
}
