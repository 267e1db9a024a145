//! Sensor reading responder
//!
//! Runs the configured query command (by default
//! `sysctl -n dev.iicdts.0.temperature`) and relays its stdout untouched.

use crate::config::SensorConfig;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fmt;
use std::process::ExitStatus;
use tokio::process::Command;

/// Body sent when no reading could be obtained
pub const FALLBACK_BODY: &str = "Don't know!\n";

/// Why a sensor query produced no reading
#[derive(Debug)]
pub enum SensorError {
    /// The command could not be started (missing binary, permissions)
    Spawn(std::io::Error),
    /// The command ran but exited unsuccessfully
    Exit(ExitStatus),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "failed to run sensor command: {e}"),
            Self::Exit(status) => write!(f, "sensor command exited with {status}"),
        }
    }
}

impl std::error::Error for SensorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            Self::Exit(_) => None,
        }
    }
}

/// Run the sensor command and capture its standard output
///
/// Stdin is closed and stderr is captured and discarded. There is no timeout.
pub async fn read_sensor(cfg: &SensorConfig) -> Result<Vec<u8>, SensorError> {
    let output = Command::new(&cfg.program)
        .args(&cfg.args)
        .output()
        .await
        .map_err(SensorError::Spawn)?;

    if !output.status.success() {
        return Err(SensorError::Exit(output.status));
    }
    Ok(output.stdout)
}

/// Serve the current sensor reading as plain text
pub async fn serve_sensor(cfg: &SensorConfig) -> Response<Full<Bytes>> {
    match read_sensor(cfg).await {
        Ok(reading) => {
            logger::log_sensor_reading(&reading);
            http::build_text_response(reading)
        }
        Err(e) => {
            logger::log_error(&format!("Sensor query '{}' failed: {e}", cfg.program));
            http::build_text_response(FALLBACK_BODY)
        }
    }
}
