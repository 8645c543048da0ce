//! Display configuration for the terminal host.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_gomoku::MarkKind;
use tracing::{debug, info, instrument};

/// How the board is drawn in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HostConfig {
    /// Symbol for crosses.
    #[serde(default = "default_first_symbol")]
    first_symbol: char,

    /// Symbol for rings.
    #[serde(default = "default_second_symbol")]
    second_symbol: char,

    /// Symbol for empty cells.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: char,

    /// Symbol for crosses outside the winning line once the game ended.
    #[serde(default = "default_faded_first_symbol")]
    faded_first_symbol: char,

    /// Symbol for rings outside the winning line once the game ended.
    #[serde(default = "default_faded_second_symbol")]
    faded_second_symbol: char,

    /// Empty cells drawn around the occupied area.
    #[serde(default = "default_margin")]
    margin: u8,
}

fn default_first_symbol() -> char {
    'X'
}

fn default_second_symbol() -> char {
    'O'
}

fn default_empty_symbol() -> char {
    '.'
}

fn default_faded_first_symbol() -> char {
    'x'
}

fn default_faded_second_symbol() -> char {
    'o'
}

fn default_margin() -> u8 {
    1
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            first_symbol: default_first_symbol(),
            second_symbol: default_second_symbol(),
            empty_symbol: default_empty_symbol(),
            faded_first_symbol: default_faded_first_symbol(),
            faded_second_symbol: default_faded_second_symbol(),
            margin: default_margin(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(margin = config.margin, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Symbol for a mark, faded or not.
    pub fn symbol(&self, kind: MarkKind, faded: bool) -> char {
        match (kind, faded) {
            (MarkKind::First, false) => self.first_symbol,
            (MarkKind::Second, false) => self.second_symbol,
            (MarkKind::First, true) => self.faded_first_symbol,
            (MarkKind::Second, true) => self.faded_second_symbol,
        }
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
