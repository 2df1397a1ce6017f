//! Chroma configuration system
//!
//! User-level configuration lives in `~/.config/chroma/config.toml`
//! (or `$XDG_CONFIG_HOME/chroma/config.toml`). Every field has a default,
//! so a partial file is fine.
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. User-level (~/.config/chroma/config.toml)
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma::util::config::{load_user_config, UserConfig};
//!
//! let config = load_user_config().unwrap_or_default();
//! assert!(config.runtime.max_depth > 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::frontend::lexer::DEFAULT_MAX_NESTING;

/// User-level configuration for Chroma
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// REPL settings
    #[serde(default)]
    pub repl: ReplConfig,
    /// Evaluator limits
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplConfig {
    /// History size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// History file path
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Paint results in their type colors
    #[serde(default = "default_colors")]
    pub colors: bool,
    /// Use vi key bindings
    #[serde(default)]
    pub vi_mode: bool,
}

fn default_history_size() -> usize {
    1000
}

fn default_prompt() -> String {
    "chroma> ".to_string()
}

fn default_colors() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            history_file: None,
            prompt: default_prompt(),
            colors: default_colors(),
            vi_mode: false,
        }
    }
}

/// Evaluator limits
///
/// Custom words may call themselves; these ceilings turn runaway recursion
/// into an error instead of a hang.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Maximum nesting of word bodies (`CALL`, `IF` branches, custom words)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Maximum tokens dispatched per `execute`; unbounded when absent
    #[serde(default)]
    pub max_steps: Option<u64>,
    /// Maximum bracket nesting of a vector, in source or built by `CONS`
    #[serde(default = "default_max_nesting")]
    pub max_nesting: usize,
}

fn default_max_depth() -> usize {
    256
}

fn default_max_nesting() -> usize {
    DEFAULT_MAX_NESTING
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_steps: None,
            max_nesting: default_max_nesting(),
        }
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("chroma"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("chroma"));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("chroma"));
    }

    None
}

/// Get the user config file path (~/.config/chroma/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit path, defaulting when it is absent
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = fs::read_to_string(path).map_err(ConfigError::IoError)?;

    toml::from_str(&content).map_err(ConfigError::ParseError)
}

/// Save user-level configuration
pub fn save_user_config(config: &UserConfig) -> Result<(), ConfigError> {
    let dir = get_config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_config_to(config, &dir.join("config.toml"))
}

/// Write configuration to `path`, creating parent directories
pub fn save_config_to(
    config: &UserConfig,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(ConfigError::IoError)?;
        }
    }

    let content = toml::to_string_pretty(config).map_err(ConfigError::SerializeError)?;
    fs::write(path, content).map_err(ConfigError::IoError)?;

    Ok(())
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),

    #[error("Config parse error: {0}")]
    ParseError(toml::de::Error),

    #[error("Config serialize error: {0}")]
    SerializeError(toml::ser::Error),

    #[error("Cannot determine config directory")]
    NoConfigDir,
}
