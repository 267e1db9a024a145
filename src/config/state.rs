// Application state module
// Read-only state shared by every connection

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_log_follows_config() {
        let mut cfg = Config::load_from("/nonexistent/thermo-config").unwrap();
        assert!(!AppState::new(cfg.clone()).access_log_enabled());

        cfg.logging.access_log = true;
        assert!(AppState::new(cfg).access_log_enabled());
    }
}
