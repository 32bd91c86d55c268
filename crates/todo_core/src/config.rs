use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API, e.g. `http://localhost:5001/api`.
    pub api_base: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Directory for the persisted session identifier. `None` keeps the
    /// session in memory only.
    pub storage_dir: Option<PathBuf>,
}

const CONFIG_FILE_PATH: &str = "config.toml";

const DEFAULT_API_BASE: &str = "http://localhost:5001/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

fn parse_timeout_env(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            storage_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();

        //detect the config file exists
        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            // Try to read from config.toml first
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables if they exist
        if let Ok(api_base) = std::env::var("TODO_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(timeout) = std::env::var("TODO_REQUEST_TIMEOUT_SECS") {
            if let Some(secs) = parse_timeout_env(&timeout) {
                config.request_timeout_secs = secs;
            }
        }
        if let Ok(storage_dir) = std::env::var("TODO_STORAGE_DIR") {
            config.storage_dir = Some(PathBuf::from(storage_dir));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_timeout_env_accepts_positive_seconds() {
        assert_eq!(parse_timeout_env("30"), Some(30));
        assert_eq!(parse_timeout_env(" 5 "), Some(5));
    }

    #[test]
    fn parse_timeout_env_rejects_invalid_values() {
        for value in ["0", "-1", "abc", "", "  "] {
            assert_eq!(parse_timeout_env(value), None, "value {value:?}");
        }
    }

    #[test]
    fn default_points_at_local_api() {
        let config = Config::default();
        assert_eq!(config.api_base, "http://localhost:5001/api");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.storage_dir.is_none());
    }
}
