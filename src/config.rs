//! Configuration for gitmaster
//!
//! Loaded from `<config_dir>/gitmaster/config.toml`. Every field has a
//! default, so a partial (or missing) file is always valid. The
//! `GITMASTER_CONFIG` environment variable points at a different file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::Timing;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "GITMASTER_CONFIG";

/// Errors from loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub clipboard: ClipboardConfig,
    pub ui: UiConfig,
}

/// Typing animation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Milliseconds between typed characters
    pub typing_interval_ms: u64,
    /// Milliseconds between the end of typing and the output reveal
    pub reveal_delay_ms: u64,
    /// Milliseconds autoplay waits after a reveal before the next turn
    pub autoplay_pause_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let timing = Timing::default();
        Self {
            typing_interval_ms: timing.typing_interval.as_millis() as u64,
            reveal_delay_ms: timing.reveal_delay.as_millis() as u64,
            autoplay_pause_ms: timing.autoplay_pause.as_millis() as u64,
        }
    }
}

/// Clipboard feedback settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// How long the "copied" marker stays visible, in milliseconds
    pub indicator_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            indicator_ms: crate::clipboard::DEFAULT_WINDOW.as_millis() as u64,
        }
    }
}

/// TUI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme: `default`, `classic` or `ocean`
    pub theme: String,
    /// Whether the lesson sidebar is shown on start
    pub show_sidebar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_sidebar: true,
        }
    }
}

impl Config {
    /// Load the config from its default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the config to its default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = self.to_toml()?;
        fs::write(path, content).map_err(write_err)
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("gitmaster").join("config.toml"))
    }

    /// Player timing derived from the `[player]` section.
    pub fn timing(&self) -> Timing {
        Timing {
            typing_interval: Duration::from_millis(self.player.typing_interval_ms),
            reveal_delay: Duration::from_millis(self.player.reveal_delay_ms),
            autoplay_pause: Duration::from_millis(self.player.autoplay_pause_ms),
        }
    }

    /// How long the copied marker stays on.
    pub fn indicator_window(&self) -> Duration {
        Duration::from_millis(self.clipboard.indicator_ms)
    }
}
