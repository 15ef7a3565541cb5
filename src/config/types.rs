use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::board::BoardState;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values of the snapshot created when the board mounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub input: String,
    /// Color tag (e.g. "react-blue"). Empty means the default style.
    #[serde(default)]
    pub color: String,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

/// Presentation settings. None of these affect state transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Shown instead of the echo when the trimmed input is empty.
    #[serde(default = "default_input_placeholder")]
    pub input_placeholder: String,
    /// Shown instead of the counter when it is zero. Empty shows "0".
    #[serde(default)]
    pub count_placeholder: String,
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Reject unrecognized action kinds instead of skipping them.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_dark_mode() -> bool {
    true
}

fn default_input_placeholder() -> String {
    "output".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            count: 0,
            input: String::new(),
            color: String::new(),
            dark_mode: default_dark_mode(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            input_placeholder: default_input_placeholder(),
            count_placeholder: String::new(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Defaults {
    /// Fresh snapshot for a newly mounted board.
    pub fn initial_state(&self) -> BoardState {
        BoardState {
            count: self.count,
            input: self.input.clone(),
            color: self.color.clone(),
            dark_mode: self.dark_mode,
        }
    }
}
