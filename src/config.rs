//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::Roster;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default display name of the first player (X).
    #[serde(default = "default_first_player_name")]
    first_player_name: String,

    /// Default display name of the second player (O).
    #[serde(default = "default_second_player_name")]
    second_player_name: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_first_player_name() -> String {
    "X".to_string()
}

fn default_second_player_name() -> String {
    "O".to_string()
}

fn default_log_filter() -> String {
    "warn,noughts=info,noughts_engine=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first_player_name: default_first_player_name(),
            second_player_name: default_second_player_name(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.first_player_name = config.first_player_name.trim().to_string();
        config.second_player_name = config.second_player_name.trim().to_string();

        if config.first_player_name.is_empty() || config.second_player_name.is_empty() {
            return Err(ConfigError::new("Player names must not be blank".to_string()));
        }

        info!(
            first = %config.first_player_name,
            second = %config.second_player_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The roster a new game starts with.
    pub fn roster(&self) -> Roster {
        Roster::new(&self.first_player_name, &self.second_player_name)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
