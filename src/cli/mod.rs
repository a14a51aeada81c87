//! Command-line interface for vidplay.
//!
//! Provides the interactive player shell, script execution, a catalog
//! listing and a configuration dump.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::info;

use crate::config::{self, ResolvedConfig};
use crate::library::VideoCatalog;
use crate::player::PlayerSession;

pub mod command;
pub mod render;
pub mod shell;

pub use command::{parse_line, Command, ParseError};
pub use shell::Shell;

/// vidplay - command-driven video player
#[derive(Parser, Debug)]
#[command(name = "vidplay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file (overrides config and VIDPLAY_CATALOG)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive player shell (default)
    Shell,

    /// Execute player commands from a file
    Run {
        /// Script with one command per line
        script: PathBuf,

        /// Echo each command before its output
        #[arg(long)]
        echo: bool,
    },

    /// List the catalog and exit
    Videos,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = config::config()?.clone().with_catalog(self.catalog);

        match self.command.unwrap_or(Commands::Shell) {
            Commands::Shell => run_shell(&config).await,
            Commands::Run { script, echo } => run_script(&config, &script, echo).await,
            Commands::Videos => list_videos(&config).await,
            Commands::Config => show_config(&config),
        }
    }
}

/// Build a session from the configured catalog
pub async fn open_session(config: &ResolvedConfig) -> Result<PlayerSession> {
    let catalog = match &config.catalog {
        Some(path) => VideoCatalog::load(path).await?,
        None => VideoCatalog::builtin(),
    };
    info!(videos = catalog.len(), "Catalog ready");

    Ok(PlayerSession::with_options(catalog, config.session_options()))
}

/// Interactive shell on stdin/stdout
async fn run_shell(config: &ResolvedConfig) -> Result<()> {
    let session = open_session(config).await?;
    let stdin = BufReader::new(tokio::io::stdin());

    Shell::new(session, io::stdout())
        .interactive()
        .run(stdin)
        .await
}

/// Run a command script
async fn run_script(config: &ResolvedConfig, script: &Path, echo: bool) -> Result<()> {
    let session = open_session(config).await?;
    let file = tokio::fs::File::open(script)
        .await
        .with_context(|| format!("Failed to open script: {}", script.display()))?;

    Shell::new(session, io::stdout())
        .echo(echo)
        .run(BufReader::new(file))
        .await
}

/// Print the catalog listing
async fn list_videos(config: &ResolvedConfig) -> Result<()> {
    let session = open_session(config).await?;

    println!("{}", render::video_count(session.video_count()));
    for line in render::catalog_listing(&session.all_videos()) {
        println!("{}", line);
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("vidplay configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!(
        "Catalog:     {}",
        cfg.catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    println!();
    println!("Playlists:");
    println!("  Announce empty clear: {}", cfg.announce_empty_clear);
    println!();
    println!("Playback:");
    println!(
        "  Random seed: {}",
        cfg.seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(entropy)".to_string())
    );

    Ok(())
}
