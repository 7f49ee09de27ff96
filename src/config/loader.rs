//! Configuration file loading with precedence handling.

use crate::state::debounce::DEFAULT_QUIET_PERIOD;
use crate::state::pagination::{OutOfRangePolicy, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "ROSTER_CONFIG";
/// Environment variable overriding the page size.
pub const ENV_PAGE_SIZE: &str = "ROSTER_PAGE_SIZE";
/// Environment variable overriding the debounce quiet period.
pub const ENV_DEBOUNCE_MS: &str = "ROSTER_DEBOUNCE_MS";

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

    /// Config file contains invalid TOML syntax or an unknown value.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/roster/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Records per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Quiet period before a typed query is applied, in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Out-of-range page handling: "clamp" or "empty".
    #[serde(default)]
    pub page_policy: Option<OutOfRangePolicy>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom key bindings (reserved).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Records per page.
    pub page_size: NonZeroUsize,
    /// Debounce quiet period in milliseconds.
    pub debounce_ms: u64,
    /// Out-of-range page handling.
    pub page_policy: OutOfRangePolicy,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_QUIET_PERIOD.as_millis() as u64,
            page_policy: OutOfRangePolicy::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/roster/roster.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("roster").join("roster.log")
    } else {
        PathBuf::from("roster.log")
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
/// Returns `~/.config/roster/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROSTER_CONFIG` environment variable
/// 3. Default path `~/.config/roster/config.toml`
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// A `page_size` of 0 in the file is ignored.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config
            .page_size
            .and_then(NonZeroUsize::new)
            .unwrap_or(defaults.page_size),
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        page_policy: config.page_policy.unwrap_or(defaults.page_policy),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ROSTER_PAGE_SIZE`: positive integer
/// - `ROSTER_DEBOUNCE_MS`: non-negative integer
///
/// Values that do not parse are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(page_size) = std::env::var(ENV_PAGE_SIZE)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .and_then(NonZeroUsize::new)
    {
        config.page_size = page_size;
    }

    if let Some(debounce_ms) = std::env::var(ENV_DEBOUNCE_MS)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        config.debounce_ms = debounce_ms;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<NonZeroUsize>,
    debounce_override: Option<u64>,
    policy_override: Option<OutOfRangePolicy>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(debounce_ms) = debounce_override {
        config.debounce_ms = debounce_ms;
    }

    if let Some(policy) = policy_override {
        config.page_policy = policy;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
