//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timetravel_engine::BoardSize;
use tracing::{debug, info, instrument};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "timetravel_tictactoe.toml";

/// User-configurable settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Side length of the opening board (clamped to 3-9).
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// List moves newest first.
    #[serde(default)]
    reverse_move_order: bool,

    /// File receiving log output while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// How long the UI waits for input before polling again.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
}

#[instrument]
fn default_board_size() -> usize {
    BoardSize::MIN
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("timetravel_tictactoe.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

#[instrument]
fn default_poll_interval_ms() -> u64 {
    250
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            reverse_move_order: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            poll_interval_ms: default_poll_interval_ms(),
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

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the default file is used
    /// when present and built-in defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Overrides the board size when one is given.
    #[instrument(skip(self))]
    pub fn with_board_size(mut self, board_size: Option<usize>) -> Self {
        if let Some(board_size) = board_size {
            self.board_size = board_size;
        }
        self
    }

    /// Forces newest-first move order when `reverse` is set.
    #[instrument(skip(self))]
    pub fn with_reverse_move_order(mut self, reverse: bool) -> Self {
        self.reverse_move_order |= reverse;
        self
    }

    /// Board size after clamping to the supported range.
    pub fn clamped_board_size(&self) -> BoardSize {
        BoardSize::new(self.board_size)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
