//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stockroom/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolving happen before the file logger exists, so neither
//! logs. What they would have said comes back as `notes`, and `main` logs
//! them once the logger is up.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::navigation::Screen;
use crate::core::state::DEFAULT_CURRENCY_SYMBOL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StockroomConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub currency_symbol: Option<String>,
    pub notice_duration_ms: Option<u64>,
    pub start_route: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub currency_symbol: Option<String>,
    pub start_route: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_NOTICE_DURATION_MS: u64 = 2000;
pub const DEFAULT_LOG_FILE: &str = "stockroom.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub currency_symbol: String,
    pub notice_duration_ms: u64,
    pub start_screen: Screen,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Values that were ignored in favor of a default, one line each.
    pub notes: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            start_screen: Screen::Registration,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL,
            notes: Vec::new(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Where the file-level settings came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file existed; a commented default was written here.
    Generated(PathBuf),
    /// No file was read.
    #[default]
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "config file {}", path.display()),
            ConfigSource::Generated(path) => {
                write!(f, "built-in defaults (generated {})", path.display())
            }
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: StockroomConfig,
    pub source: ConfigSource,
    /// Problems met while loading that did not stop it.
    pub notes: Vec<String>,
}

/// Returns the path to `~/.stockroom/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stockroom").join("config.toml"))
}

/// Load config from `path`, or `~/.stockroom/config.toml` when `None`.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit path is an error. A malformed file is
/// `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match path {
        Some(p) => load_file(p),
        None => load_default(config_path()),
    }
}

fn load_default(default_path: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    let Some(path) = default_path else {
        return Ok(LoadedConfig {
            notes: vec!["Could not determine home directory, using default config".to_string()],
            ..LoadedConfig::default()
        });
    };
    if path.exists() {
        return load_file(&path);
    }

    let mut loaded = LoadedConfig::default();
    match generate_default_config(&path) {
        Ok(()) => loaded.source = ConfigSource::Generated(path),
        Err(e) => loaded.notes.push(format!(
            "Failed to write default config to {}: {e}",
            path.display()
        )),
    }
    Ok(loaded)
}

fn load_file(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(LoadedConfig {
        config: parse_config(&contents)?,
        source: ConfigSource::File(path.to_path_buf()),
        notes: Vec::new(),
    })
}

pub fn parse_config(contents: &str) -> Result<StockroomConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Stockroom Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# currency_symbol = "$"            # Or STOCKROOM_CURRENCY, --currency
# notice_duration_ms = 2000        # How long messages stay up (STOCKROOM_NOTICE_MS)
# start_route = "registration"     # registration | listing | statistics | detail/<name>

# [logging]
# file = "stockroom.log"           # Or STOCKROOM_LOG_FILE
# level = "info"                   # off | error | warn | info | debug | trace
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StockroomConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with the environment lookup injected.
pub fn resolve_with_env<F>(config: &StockroomConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut notes = Vec::new();

    // Currency: CLI → env → config → default
    let currency_symbol = cli
        .currency_symbol
        .clone()
        .or_else(|| env("STOCKROOM_CURRENCY"))
        .or_else(|| config.general.currency_symbol.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

    // Notice duration: env → config → default
    let notice_duration_ms = env("STOCKROOM_NOTICE_MS")
        .and_then(|raw| match raw.trim().parse() {
            Ok(ms) => Some(ms),
            Err(_) => {
                notes.push(format!("Ignoring STOCKROOM_NOTICE_MS={raw:?}: not a number"));
                None
            }
        })
        .or(config.general.notice_duration_ms)
        .unwrap_or(DEFAULT_NOTICE_DURATION_MS);

    // Start route: CLI → env → config → default
    let start_screen = cli
        .start_route
        .clone()
        .or_else(|| env("STOCKROOM_START"))
        .or_else(|| config.general.start_route.clone())
        .map(|route| {
            route.parse().unwrap_or_else(|e| {
                notes.push(format!("Ignoring start route: {e}"));
                Screen::Registration
            })
        })
        .unwrap_or(Screen::Registration);

    // Log file: env → config → default
    let log_file = env("STOCKROOM_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("STOCKROOM_LOG_LEVEL"))
        .or_else(|| config.logging.level.clone())
        .map(|level| {
            level.trim().parse().unwrap_or_else(|_| {
                notes.push(format!("Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"));
                DEFAULT_LOG_LEVEL
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        currency_symbol,
        notice_duration_ms,
        start_screen,
        log_file,
        log_level,
        notes,
    }
}
