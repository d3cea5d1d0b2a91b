//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.reading-list/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReadingListConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
    pub default_genre: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub page_step: Option<u32>,
    pub card_width: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PAGE_STEP: u32 = 10;
pub const DEFAULT_CARD_WIDTH: u16 = 30;
/// Narrower cards can't fit a title and both badges.
pub const MIN_CARD_WIDTH: u16 = 16;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `None` means the embedded catalog.
    pub catalog_path: Option<PathBuf>,
    pub default_genre: Option<String>,
    pub page_step: u32,
    pub card_width: u16,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub catalog_path: Option<PathBuf>,
    pub genre: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.reading-list/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reading-list").join("config.toml"))
}

/// Load config from `~/.reading-list/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReadingListConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ReadingListConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ReadingListConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit location.
pub fn load_config_from(path: &Path) -> Result<ReadingListConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ReadingListConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ReadingListConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Reading List Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [catalog]
# path = "/path/to/books.json"       # Or set READING_LIST_CATALOG; omit for the bundled catalog
# default_genre = "Fantasía"         # Or set READING_LIST_GENRE; omit for "All"

# [display]
# page_step = 10                     # Pages moved per key press on the range control
# card_width = 30                    # Width of a catalog card in columns
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ReadingListConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an explicit environment lookup.
pub fn resolve_with_env<F>(config: &ReadingListConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Catalog: CLI → env → config → embedded
    let catalog_path = cli
        .catalog_path
        .clone()
        .or_else(|| env("READING_LIST_CATALOG").map(PathBuf::from))
        .or_else(|| config.catalog.path.clone());

    // Genre: CLI → env → config → All
    let default_genre = cli
        .genre
        .clone()
        .or_else(|| env("READING_LIST_GENRE"))
        .or_else(|| config.catalog.default_genre.clone())
        .filter(|g| !g.is_empty());

    let page_step = match config.display.page_step {
        Some(0) => {
            warn!("page_step = 0 would freeze the range control, using {}", DEFAULT_PAGE_STEP);
            DEFAULT_PAGE_STEP
        }
        Some(step) => step,
        None => DEFAULT_PAGE_STEP,
    };

    let card_width = config
        .display
        .card_width
        .unwrap_or(DEFAULT_CARD_WIDTH)
        .max(MIN_CARD_WIDTH);

    ResolvedConfig {
        catalog_path,
        default_genre,
        page_step,
        card_width,
    }
}
