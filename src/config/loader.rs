//! Configuration file loading with precedence handling.

use crate::model::fields::MAX_DISPLAY_INDEX;
use crate::model::PaletteSize;
use crate::replay::PlaybackRate;
use crate::view_state::RenderOrder;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ANKIVIZ_CONFIG";

/// Environment variable overriding the playback rate.
pub const RATE_ENV: &str = "ANKIVIZ_RATE";

/// Collection path used when none is configured, relative to the working directory.
pub const DEFAULT_COLLECTION: &str = "collection.anki2";

/// Default inclusion threshold: notes of the vocabulary deck have 25+ fields.
pub const DEFAULT_MIN_FIELD_COUNT: usize = 25;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting has a value outside its allowed range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as written in the config file.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/ankiviz/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Collection or export file to replay.
    #[serde(default)]
    pub collection: Option<PathBuf>,

    /// Ticks per second.
    #[serde(default)]
    pub playback_rate: Option<u32>,

    /// Minimum number of note fields for a review to be replayed.
    #[serde(default)]
    pub min_field_count: Option<usize>,

    /// Number of intensity colors.
    #[serde(default)]
    pub palette_size: Option<u8>,

    /// Render order (`"first-seen"` or `"newest-first"`).
    #[serde(default)]
    pub order: Option<RenderOrder>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args. Every
/// value is validated, so holders never re-check ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Collection or export file to replay.
    pub collection: PathBuf,
    /// Ticks per second.
    pub playback_rate: PlaybackRate,
    /// Minimum number of note fields for a review to be replayed.
    pub min_field_count: usize,
    /// Number of intensity colors.
    pub palette_size: PaletteSize,
    /// Render order.
    pub order: RenderOrder,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            collection: PathBuf::from(DEFAULT_COLLECTION),
            playback_rate: PlaybackRate::default(),
            min_field_count: DEFAULT_MIN_FIELD_COUNT,
            palette_size: PaletteSize::default(),
            order: RenderOrder::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides taken from command-line flags.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Positional collection path.
    pub collection: Option<PathBuf>,
    /// `--rate`.
    pub playback_rate: Option<u32>,
    /// `--min-fields`.
    pub min_field_count: Option<usize>,
    /// `--palette-size`.
    pub palette_size: Option<u8>,
    /// `--order`.
    pub order: Option<RenderOrder>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/ankiviz/ankiviz.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("ankiviz").join("ankiviz.log")
    } else {
        PathBuf::from("ankiviz.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/ankiviz/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ankiviz").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ANKIVIZ_CONFIG` environment variable
/// 3. Default path `~/.config/ankiviz/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an out-of-range setting.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    Ok(ResolvedConfig {
        collection: config.collection.unwrap_or(defaults.collection),
        playback_rate: config
            .playback_rate
            .map(parse_rate)
            .transpose()?
            .unwrap_or(defaults.playback_rate),
        min_field_count: config
            .min_field_count
            .map(check_min_field_count)
            .transpose()?
            .unwrap_or(defaults.min_field_count),
        palette_size: config
            .palette_size
            .map(parse_palette_size)
            .transpose()?
            .unwrap_or(defaults.palette_size),
        order: config.order.unwrap_or(defaults.order),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ANKIVIZ_RATE`: Override playback rate
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is not a positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(RATE_ENV) {
        let rate = raw
            .trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidValue {
                field: RATE_ENV,
                reason: format!("{raw:?} is not a number ({e})"),
            })?;
        config.playback_rate = parse_rate(rate)?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an out-of-range flag value.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(collection) = overrides.collection {
        config.collection = collection;
    }
    if let Some(rate) = overrides.playback_rate {
        config.playback_rate = parse_rate(rate)?;
    }
    if let Some(count) = overrides.min_field_count {
        config.min_field_count = check_min_field_count(count)?;
    }
    if let Some(size) = overrides.palette_size {
        config.palette_size = parse_palette_size(size)?;
    }
    if let Some(order) = overrides.order {
        config.order = order;
    }

    Ok(config)
}

fn parse_rate(rate: u32) -> Result<PlaybackRate, ConfigError> {
    PlaybackRate::new(rate).map_err(|e| ConfigError::InvalidValue {
        field: "playback_rate",
        reason: e.to_string(),
    })
}

fn parse_palette_size(size: u8) -> Result<PaletteSize, ConfigError> {
    PaletteSize::new(size).map_err(|e| ConfigError::InvalidValue {
        field: "palette_size",
        reason: e.to_string(),
    })
}

/// The renderer reads field positions up to [`MAX_DISPLAY_INDEX`], so the
/// threshold must guarantee they exist.
fn check_min_field_count(count: usize) -> Result<usize, ConfigError> {
    if count > MAX_DISPLAY_INDEX {
        Ok(count)
    } else {
        Err(ConfigError::InvalidValue {
            field: "min_field_count",
            reason: format!(
                "must be greater than {MAX_DISPLAY_INDEX} so displayed fields exist (got {count})"
            ),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
