// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub sensor: SensorConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub keep_alive: bool,
}

/// Static page route
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Exact request path, e.g. `/ui`
    pub route: String,
    /// File served verbatim, relative to the working directory
    pub file: String,
}

/// Sensor route and the command that produces the reading
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SensorConfig {
    pub route: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}
