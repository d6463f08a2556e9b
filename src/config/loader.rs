use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

use crate::config::types::{AuthBackend, Config};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `custom-lock/config.toml` under `dirs::config_dir()`, falling
    /// back to the current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("custom-lock").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns the defaults.
    /// - Otherwise parses it as TOML and validates it.
    ///
    /// `~/` prefixes in paths are expanded either way.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default().with_expanded_paths());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config.with_expanded_paths())
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The quote timeout is non-zero
    /// - A forced command authenticator has a command to run
    /// - Clock formats are valid strftime strings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quote.timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "quote.timeout_ms must be greater than zero".to_string(),
            });
        }

        if self.auth.backend == AuthBackend::Command && self.auth.command.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "auth.command must not be empty when auth.backend = \"command\""
                    .to_string(),
            });
        }

        for (field, format) in [
            ("clock.date_format", &self.clock.date_format),
            ("clock.hour_format", &self.clock.hour_format),
            ("clock.minute_format", &self.clock.minute_format),
        ] {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(ConfigError::ValidationError {
                    message: format!("{} '{}' is not a valid time format", field, format),
                });
            }
        }

        Ok(())
    }

    /// Expand `~/` in every configured path against the home directory.
    pub fn with_expanded_paths(mut self) -> Self {
        self.battery.capacity_path = expand_home(&self.battery.capacity_path);
        self.quote.script = expand_home(&self.quote.script);
        self.wallpaper.source = expand_home(&self.wallpaper.source);
        self.wallpaper.cache = expand_home(&self.wallpaper.cache);
        self.logging.file = self.logging.file.as_deref().map(expand_home);
        self
    }
}

/// Expand a leading `~/` against `dirs::home_dir()`.
///
/// Paths without the prefix, and all paths when there is no home
/// directory, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
