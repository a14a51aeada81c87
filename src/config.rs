//! Configuration for vidplay.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (`--catalog`)
//! 2. Environment variables (VIDPLAY_CATALOG, VIDPLAY_SEED)
//! 3. Config file (.vidplay/config.yaml)
//! 4. Defaults (built-in catalog, silent empty clears, random seed)
//!
//! Config file discovery:
//! - Searches current directory and parents for .vidplay/config.yaml
//! - Falls back to ~/.vidplay/config.yaml
//! - Paths in config file are relative to the config file's project root
//!   (the parent of .vidplay/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::player::SessionOptions;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const ENV_CATALOG: &str = "VIDPLAY_CATALOG";
pub const ENV_SEED: &str = "VIDPLAY_SEED";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub playlists: PlaylistsConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (relative to the project root)
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistsConfig {
    /// Report clears of already-empty playlists
    #[serde(default)]
    pub announce_empty_clear: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaybackConfig {
    /// Seed for random play
    pub seed: Option<u64>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Catalog file; `None` means the built-in catalog
    pub catalog: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    pub announce_empty_clear: bool,
    pub seed: Option<u64>,
}

impl ResolvedConfig {
    /// Options for a new player session
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            announce_empty_clear: self.announce_empty_clear,
            seed: self.seed,
        }
    }

    /// Apply a command-line catalog override
    pub fn with_catalog(mut self, catalog: Option<PathBuf>) -> Self {
        if catalog.is_some() {
            self.catalog = catalog;
        }
        self
    }
}

/// Find config file by searching the given directory and its parents
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".vidplay").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Find config file from the working directory, then the home directory
fn find_config_file() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_file_from(&cwd))
        .or_else(|| {
            let user = dirs::home_dir()?.join(".vidplay").join("config.yaml");
            user.exists().then_some(user)
        })
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Overrides taken from the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EnvOverrides {
    catalog: Option<PathBuf>,
    seed: Option<u64>,
}

impl EnvOverrides {
    fn from_env() -> Result<Self> {
        let seed = match std::env::var(ENV_SEED) {
            Ok(raw) => Some(parse_seed(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            catalog: std::env::var(ENV_CATALOG).ok().map(PathBuf::from),
            seed,
        })
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid {}: {}", ENV_SEED, raw))
}

/// Merge a parsed config file with environment overrides
fn resolve(config: Option<(&Path, ConfigFile)>, env: EnvOverrides) -> ResolvedConfig {
    let EnvOverrides {
        catalog: env_catalog,
        seed,
    } = env;

    match config {
        Some((config_path, file)) => {
            // Base directory is the parent of .vidplay/ (i.e., grandparent of config.yaml)
            let base_dir = config_path
                .parent() // .vidplay/
                .and_then(|p| p.parent()) // project root
                .unwrap_or(Path::new("."));

            let catalog = env_catalog.or_else(|| {
                file.catalog
                    .path
                    .as_deref()
                    .map(|p| resolve_path(base_dir, p))
            });

            ResolvedConfig {
                catalog,
                config_file: Some(config_path.to_path_buf()),
                announce_empty_clear: file.playlists.announce_empty_clear,
                seed: seed.or(file.playback.seed),
            }
        }
        None => ResolvedConfig {
            catalog: env_catalog,
            config_file: None,
            announce_empty_clear: false,
            seed,
        },
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let env = EnvOverrides::from_env()?;

    match find_config_file() {
        Some(path) => {
            let file = load_config_file(&path)?;
            Ok(resolve(Some((&path, file)), env))
        }
        None => Ok(resolve(None, env)),
    }
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let vidplay_dir = dir.join(".vidplay");
        std::fs::create_dir_all(&vidplay_dir).unwrap();

        let config_path = vidplay_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            temp.path(),
            r#"
version: "1.0"
catalog:
  path: videos.txt
playlists:
  announce_empty_clear: true
playback:
  seed: 42
"#,
        );

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.catalog.path, Some("videos.txt".to_string()));
        assert!(config.playlists.announce_empty_clear);
        assert_eq!(config.playback.seed, Some(42));
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "version: \"1.0\"");

        let config = load_config_file(&config_path).unwrap();
        assert!(config.catalog.path.is_none());
        assert!(!config.playlists.announce_empty_clear);
        assert!(config.playback.seed.is_none());
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "version: \"1.0\"");
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file_from(&nested), Some(config_path));
    }

    fn sample_file() -> ConfigFile {
        ConfigFile {
            version: "1.0".to_string(),
            catalog: CatalogConfig {
                path: Some("videos.txt".to_string()),
            },
            playlists: PlaylistsConfig {
                announce_empty_clear: true,
            },
            playback: PlaybackConfig { seed: Some(9) },
        }
    }

    #[test]
    fn test_resolve_catalog_relative_to_project_root() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "");

        let resolved = resolve(Some((&config_path, sample_file())), EnvOverrides::default());
        assert_eq!(resolved.catalog, Some(temp.path().join("videos.txt")));
        assert_eq!(resolved.config_file, Some(config_path));
        assert_eq!(resolved.seed, Some(9));
        assert!(resolved.announce_empty_clear);
    }

    #[test]
    fn test_environment_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "");
        let env = EnvOverrides {
            catalog: Some(PathBuf::from("/data/other.yaml")),
            seed: Some(1),
        };

        let resolved = resolve(Some((&config_path, sample_file())), env);
        assert_eq!(resolved.catalog, Some(PathBuf::from("/data/other.yaml")));
        assert_eq!(resolved.seed, Some(1));
        assert!(resolved.announce_empty_clear);
    }

    #[test]
    fn test_resolve_without_config_file() {
        let resolved = resolve(None, EnvOverrides::default());
        assert!(resolved.catalog.is_none());
        assert!(resolved.config_file.is_none());
        assert!(!resolved.announce_empty_clear);

        let env = EnvOverrides {
            catalog: Some(PathBuf::from("videos.txt")),
            seed: None,
        };
        assert_eq!(resolve(None, env).catalog, Some(PathBuf::from("videos.txt")));
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
        assert!(parse_seed("soon").is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }

    #[test]
    fn test_session_options_and_override() {
        let config = ResolvedConfig {
            announce_empty_clear: true,
            seed: Some(3),
            ..Default::default()
        };
        assert_eq!(
            config.session_options(),
            SessionOptions {
                announce_empty_clear: true,
                seed: Some(3),
            }
        );

        let config = config.with_catalog(Some(PathBuf::from("other.yaml")));
        assert_eq!(config.catalog, Some(PathBuf::from("other.yaml")));
        let config = config.with_catalog(None);
        assert_eq!(config.catalog, Some(PathBuf::from("other.yaml")));
    }
}
