// Configuration module entry point
// Loads startup configuration and holds the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, SensorConfig, UiConfig};

/// Config file looked up in the working directory (extension optional)
const DEFAULT_CONFIG_PATH: &str = "config";

/// Prefix of override variables, e.g. `THERMO__SERVER__PORT`
const ENV_PREFIX: &str = "THERMO";

impl Config {
    /// Load configuration from `config.*` in the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path
    ///
    /// The file is optional; defaults reproduce the stock appliance setup
    /// (port 8090 on all interfaces, `ui.html`, `sysctl` temperature key).
    /// `THERMO__SECTION__KEY` environment variables override both.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, environment())
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8090)?
            .set_default("server.keep_alive", true)?
            .set_default("ui.route", "/ui")?
            .set_default("ui.file", "ui.html")?
            .set_default("sensor.route", "/hello")?
            .set_default("sensor.program", "sysctl")?
            .set_default("sensor.args", vec!["-n", "dev.iicdts.0.temperature"])?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "combined")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Environment override source
///
/// `sensor.args` is split on spaces, so
/// `THERMO__SENSOR__ARGS="-n hw.acpi.thermal.tz0.temperature"` yields two args.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(" ")
        .with_list_parse_key("sensor.args")
}
