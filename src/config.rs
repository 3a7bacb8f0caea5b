//! Configuration
//!
//! Settings live in TOML at `~/.skypebot/config.toml`, or wherever
//! `SKYPEBOT_CONFIG` points. A missing file means defaults; the file is
//! never written for you.
//!
//! ```toml
//! log_level = "warn"
//! default_user = "defaultUser"
//! lorem_default_count = 10
//! lorem_max_count = 1000
//! ```

use crate::error::{BotError, Result};
use crate::session::state::DEFAULT_USER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "SKYPEBOT_CONFIG";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Bot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// tracing filter used when `RUST_LOG` is unset
    pub log_level: String,

    /// Key the saved song is stored under
    pub default_user: String,

    /// Words produced by a bare `lorem`
    pub lorem_default_count: usize,

    /// Upper bound on `lorem <count>`
    pub lorem_max_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            default_user: DEFAULT_USER.to_string(),
            lorem_default_count: 10,
            lorem_max_count: 1000,
        }
    }
}

impl Config {
    /// Load from `SKYPEBOT_CONFIG` or the default path, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a specific file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Where the config file is expected, if a home directory exists
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::home_dir().map(|home| home.join(".skypebot").join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        if self.default_user.trim().is_empty() {
            return Err(BotError::Config("default_user must not be empty".to_string()));
        }

        if self.lorem_default_count > self.lorem_max_count {
            return Err(BotError::Config(format!(
                "lorem_default_count ({}) is larger than lorem_max_count ({})",
                self.lorem_default_count, self.lorem_max_count
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(BotError::Config(format!(
                "unknown log_level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
