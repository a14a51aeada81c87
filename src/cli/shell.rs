//! Line-oriented command shell driving a player session.
//!
//! Reads commands from any async line source (stdin or a script file) and
//! writes the rendered output to any writer. After a search with hits, the
//! next input line is taken as the reply to the selection prompt.

use std::io::Write;
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

use super::command::{parse_line, Command};
use super::render;
use crate::player::{PlayerSession, SearchResults};

const PROMPT: &str = "YT> ";
const GREETING: [&str; 2] = [
    "Hello and welcome to YouTube, what would you like to do?",
    "Enter HELP for list of available commands or EXIT to terminate.",
];
const FAREWELL: &str = "YouTube has now terminated its execution. Thank you and goodbye!";

/// Command shell bound to one session
pub struct Shell<W> {
    session: PlayerSession,
    out: W,
    interactive: bool,
    echo: bool,
}

impl<W: Write> Shell<W> {
    /// Non-interactive shell: no greeting, no prompt
    pub fn new(session: PlayerSession, out: W) -> Self {
        Self {
            session,
            out,
            interactive: false,
            echo: false,
        }
    }

    /// Greet, show a prompt before every command and say goodbye on exit
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Echo each command before its output
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Give back the session and the writer
    pub fn into_parts(self) -> (PlayerSession, W) {
        (self.session, self.out)
    }

    /// Run until EXIT or end of input
    pub async fn run<R>(&mut self, reader: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();

        if self.interactive {
            self.emit(GREETING)?;
        }

        loop {
            if self.interactive {
                write!(self.out, "{}", PROMPT)?;
                self.out.flush()?;
            }

            let Some(line) = lines.next_line().await.context("Failed to read command")? else {
                debug!("End of input");
                break;
            };

            if self.echo && !line.trim().is_empty() {
                self.emit([format!("> {}", line.trim())])?;
            }

            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    warn!(%line, "Rejected command");
                    self.emit([err.to_string()])?;
                    continue;
                }
            };

            if self.execute(command, &mut lines).await?.is_break() {
                break;
            }
        }

        if self.interactive {
            self.emit([FAREWELL])?;
        }
        Ok(())
    }

    /// Dispatch one command to the session
    pub async fn execute<R>(&mut self, command: Command, lines: &mut Lines<R>) -> Result<ControlFlow<()>>
    where
        R: AsyncBufRead + Unpin,
    {
        debug!(?command, "Dispatching");
        let session = &mut self.session;

        let output = match command {
            Command::NumberOfVideos => vec![render::video_count(session.video_count())],
            Command::ShowAllVideos => render::catalog_listing(&session.all_videos()),
            Command::Play(id) => render::outcome(session.play(&id)),
            Command::PlayRandom => render::outcome(session.play_random()),
            Command::Stop => render::outcome(session.stop()),
            Command::Pause => render::outcome(session.pause()),
            Command::Continue => render::outcome(session.resume()),
            Command::ShowPlaying => vec![render::now_playing(session.now_playing())],
            Command::CreatePlaylist(name) => render::outcome(session.create_playlist(&name)),
            Command::AddToPlaylist { playlist, video } => {
                render::outcome(session.add_to_playlist(&playlist, &video))
            }
            Command::RemoveFromPlaylist { playlist, video } => {
                render::outcome(session.remove_from_playlist(&playlist, &video))
            }
            Command::ClearPlaylist(name) => render::outcome(session.clear_playlist(&name)),
            Command::DeletePlaylist(name) => render::outcome(session.delete_playlist(&name)),
            Command::ShowAllPlaylists => render::playlist_names(&session.playlist_names()),
            Command::ShowPlaylist(name) => match session.show_playlist(&name) {
                Ok(view) => render::playlist(&view),
                Err(err) => vec![err.to_string()],
            },
            Command::SearchVideos(term) => {
                let results = session.search_by_title(&term);
                return self.search(results, lines).await;
            }
            Command::SearchVideosWithTag(tag) => {
                let results = session.search_by_tag(&tag);
                return self.search(results, lines).await;
            }
            Command::FlagVideo { video, reason } => {
                render::outcome(session.flag(&video, reason.as_deref()))
            }
            Command::AllowVideo(video) => render::outcome(session.unflag(&video)),
            Command::Help => render::help(),
            Command::Exit => return Ok(ControlFlow::Break(())),
        };

        self.emit(output)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Show hits, then read one line as the reply to the selection prompt
    async fn search<R>(&mut self, results: SearchResults, lines: &mut Lines<R>) -> Result<ControlFlow<()>>
    where
        R: AsyncBufRead + Unpin,
    {
        self.emit(render::search_results(&results))?;
        if results.is_empty() {
            return Ok(ControlFlow::Continue(()));
        }
        self.out.flush()?;

        let reply = lines.next_line().await.context("Failed to read selection")?;
        let outcome = self.session.play_selection(&results, reply.as_deref());
        self.emit(render::outcome(outcome))?;
        Ok(ControlFlow::Continue(()))
    }

    fn emit<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            writeln!(self.out, "{}", line.as_ref())?;
        }
        Ok(())
    }
}
