//! Board display configuration.

use crate::components::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Display settings, loaded from TOML. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Show 1-based positions in empty cells.
    #[serde(default)]
    show_numbers: bool,

    /// Color name for X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color name for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Color name for placeholders and grid lines.
    #[serde(default = "default_hint_color")]
    hint_color: String,

    /// Log file for interactive mode.
    #[serde(default = "default_log_file")]
    log_file: String,
}

#[instrument]
fn default_x_color() -> String {
    "blue".to_string()
}

#[instrument]
fn default_o_color() -> String {
    "red".to_string()
}

#[instrument]
fn default_hint_color() -> String {
    "darkgray".to_string()
}

#[instrument]
fn default_log_file() -> String {
    "board_row.log".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            show_numbers: false,
            x_color: default_x_color(),
            o_color: default_o_color(),
            hint_color: default_hint_color(),
            log_file: default_log_file(),
        }
    }
}

impl BoardConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(show_numbers = config.show_numbers, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise uses defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Sets whether empty cells show their position.
    pub fn with_show_numbers(mut self, show_numbers: bool) -> Self {
        self.show_numbers = show_numbers;
        self
    }

    /// Builds the widget theme, validating the color names.
    #[instrument(skip(self))]
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme::new(
            parse_color(&self.x_color)?,
            parse_color(&self.o_color)?,
            parse_color(&self.hint_color)?,
            self.show_numbers,
        ))
    }
}

#[track_caller]
fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::new(format!("Unknown color: {}", name)))
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
