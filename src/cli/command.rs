//! Shell command grammar.
//!
//! One command per line: a case-insensitive command word followed by
//! whitespace-separated arguments.

use thiserror::Error;

/// Usage and description of every command, in help order
pub const COMMANDS: &[(&str, &str)] = &[
    ("NUMBER_OF_VIDEOS", "Shows how many videos are in the library."),
    ("SHOW_ALL_VIDEOS", "Lists all videos from the library."),
    ("PLAY <video_id>", "Plays specified video."),
    ("PLAY_RANDOM", "Plays a random video from the library."),
    ("STOP", "Stop the current video."),
    ("PAUSE", "Pause the current video."),
    ("CONTINUE", "Resume the current paused video."),
    (
        "SHOW_PLAYING",
        "Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).",
    ),
    (
        "CREATE_PLAYLIST <playlist_name>",
        "Creates a new (empty) playlist with the provided name.",
    ),
    (
        "ADD_TO_PLAYLIST <playlist_name> <video_id>",
        "Adds the requested video to the playlist.",
    ),
    (
        "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>",
        "Removes the specified video from the specified playlist.",
    ),
    ("CLEAR_PLAYLIST <playlist_name>", "Removes all the videos from the playlist."),
    ("DELETE_PLAYLIST <playlist_name>", "Deletes the playlist."),
    ("SHOW_PLAYLIST <playlist_name>", "Displays videos in the playlist."),
    ("SHOW_ALL_PLAYLISTS", "Displays all the available playlists."),
    (
        "SEARCH_VIDEOS <search_term>",
        "Displays all videos whose titles contain the search_term.",
    ),
    (
        "SEARCH_VIDEOS_WITH_TAG <tag_name>",
        "Displays all videos whose tags contains the provided tag.",
    ),
    ("FLAG_VIDEO <video_id> [flag_reason]", "Mark a video as flagged."),
    ("ALLOW_VIDEO <video_id>", "Removes a flag from a video."),
    ("HELP", "Displays help."),
    ("EXIT", "Terminates the program execution."),
];

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video: String },
    RemoveFromPlaylist { playlist: String, video: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// Command line parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Please supply the correct arguments. Usage: {usage}")]
    Arity { usage: String },
}

fn usage_of(name: &str) -> String {
    COMMANDS
        .iter()
        .map(|(usage, _)| *usage)
        .find(|usage| usage.split_whitespace().next() == Some(name))
        .map(str::to_string)
        .unwrap_or_else(|| name.to_string())
}

/// Require exactly `N` arguments
fn exact<'a, const N: usize>(name: &str, args: &[&'a str]) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::Arity {
        usage: usage_of(name),
    })
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let name = head.to_uppercase();
    let name = name.as_str();

    let command = match name {
        "NUMBER_OF_VIDEOS" => exact::<0>(name, &args).map(|_| Command::NumberOfVideos)?,
        "SHOW_ALL_VIDEOS" => exact::<0>(name, &args).map(|_| Command::ShowAllVideos)?,
        "PLAY" => {
            let [id] = exact::<1>(name, &args)?;
            Command::Play(id.to_string())
        }
        "PLAY_RANDOM" => exact::<0>(name, &args).map(|_| Command::PlayRandom)?,
        "STOP" => exact::<0>(name, &args).map(|_| Command::Stop)?,
        "PAUSE" => exact::<0>(name, &args).map(|_| Command::Pause)?,
        "CONTINUE" => exact::<0>(name, &args).map(|_| Command::Continue)?,
        "SHOW_PLAYING" => exact::<0>(name, &args).map(|_| Command::ShowPlaying)?,
        "CREATE_PLAYLIST" => {
            let [playlist] = exact::<1>(name, &args)?;
            Command::CreatePlaylist(playlist.to_string())
        }
        "ADD_TO_PLAYLIST" => {
            let [playlist, video] = exact::<2>(name, &args)?;
            Command::AddToPlaylist {
                playlist: playlist.to_string(),
                video: video.to_string(),
            }
        }
        "REMOVE_FROM_PLAYLIST" => {
            let [playlist, video] = exact::<2>(name, &args)?;
            Command::RemoveFromPlaylist {
                playlist: playlist.to_string(),
                video: video.to_string(),
            }
        }
        "CLEAR_PLAYLIST" => {
            let [playlist] = exact::<1>(name, &args)?;
            Command::ClearPlaylist(playlist.to_string())
        }
        "DELETE_PLAYLIST" => {
            let [playlist] = exact::<1>(name, &args)?;
            Command::DeletePlaylist(playlist.to_string())
        }
        "SHOW_PLAYLIST" => {
            let [playlist] = exact::<1>(name, &args)?;
            Command::ShowPlaylist(playlist.to_string())
        }
        "SHOW_ALL_PLAYLISTS" => exact::<0>(name, &args).map(|_| Command::ShowAllPlaylists)?,
        // Multi-word search terms are joined with single spaces
        "SEARCH_VIDEOS" if !args.is_empty() => Command::SearchVideos(args.join(" ")),
        "SEARCH_VIDEOS_WITH_TAG" => {
            let [tag] = exact::<1>(name, &args)?;
            Command::SearchVideosWithTag(tag.to_string())
        }
        "FLAG_VIDEO" => match args.as_slice() {
            [video] => Command::FlagVideo {
                video: video.to_string(),
                reason: None,
            },
            [video, reason @ ..] => Command::FlagVideo {
                video: video.to_string(),
                reason: Some(reason.join(" ")),
            },
            _ => {
                return Err(ParseError::Arity {
                    usage: usage_of(name),
                })
            }
        },
        "ALLOW_VIDEO" => {
            let [video] = exact::<1>(name, &args)?;
            Command::AllowVideo(video.to_string())
        }
        "HELP" => Command::Help,
        "EXIT" | "QUIT" => Command::Exit,
        "SEARCH_VIDEOS" => {
            return Err(ParseError::Arity {
                usage: usage_of(name),
            })
        }
        _ => return Err(ParseError::Unknown(head.to_string())),
    };

    Ok(Some(command))
}
