//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input translation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Drop mouse button presses and only forward releases
    pub filter_mouse_pressed: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            filter_mouse_pressed: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    pub level: String,

    /// Output format ("pretty", "compact", "json")
    pub format: String,

    /// Also write logs to this file (None = console only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            log_file: None,
        }
    }
}

/// Accepted values for [`LoggingConfig::level`]
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Accepted values for [`LoggingConfig::format`]
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];
