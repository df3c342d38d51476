//! Configuration management for the todo web service
//!
//! Supports loading configuration from environment variables with fallback to defaults.

use std::path::PathBuf;

/// Runtime settings for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: PathBuf,
}

/// Load ServerConfig from environment variables
///
/// Environment variables:
/// - `APP_PORT`: Listen port (default: 3001)
/// - `TODO_DATA_DIR`: Directory holding save records (default: "data")
pub fn load_server_config() -> ServerConfig {
    ServerConfig {
        port: std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3001),
        data_dir: std::env::var("TODO_DATA_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_has_sensible_defaults() {
        let config = load_server_config();
        assert!(config.port > 0);
        assert!(!config.data_dir.as_os_str().is_empty());
    }
}
