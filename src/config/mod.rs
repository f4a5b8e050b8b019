use crate::error::ChessError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

pub mod paths;
pub mod validation;

use paths::get_config_path;
use validation::validate_config;

/// Environment variable overriding [`Config::api_base_url`]
pub const ENV_API_BASE_URL: &str = "CHESSCOM_API_BASE_URL";
/// Environment variable overriding [`Config::http_timeout_seconds`]
pub const ENV_HTTP_TIMEOUT: &str = "CHESSCOM_HTTP_TIMEOUT";
/// Environment variable overriding [`Config::user_agent`]
pub const ENV_USER_AGENT: &str = "CHESSCOM_USER_AGENT";
/// Environment variable overriding [`Config::log_file_path`]
pub const ENV_LOG_FILE: &str = "CHESSCOM_LOG_FILE";

/// Client configuration.
/// Every field has a default, so a partial (or missing) config file is valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Path to the log file. If not specified, logs go to the default log directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_base_url() -> String {
    crate::constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    crate::constants::DEFAULT_USER_AGENT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            http_timeout_seconds: default_http_timeout(),
            user_agent: default_user_agent(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// Falls back to defaults when no config file exists, then applies
    /// environment overrides and validates the result.
    ///
    /// # Environment Variables
    /// - `CHESSCOM_API_BASE_URL` - Override the API base URL
    /// - `CHESSCOM_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `CHESSCOM_USER_AGENT` - Override the user agent
    /// - `CHESSCOM_LOG_FILE` - Override log file path
    pub fn load() -> Result<Self, ChessError> {
        Self::load_with_overrides(&get_config_path())
    }

    /// Same as [`Config::load`] but reading the file at `path`.
    pub fn load_with_overrides(path: &str) -> Result<Self, ChessError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a file without environment overrides or
    /// validation.
    pub fn load_from_path(path: &str) -> Result<Self, ChessError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Replaces fields with values from the `CHESSCOM_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_base_url) = std::env::var(ENV_API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(timeout) = std::env::var(ENV_HTTP_TIMEOUT) {
            match timeout.parse::<u64>() {
                Ok(timeout) => self.http_timeout_seconds = timeout,
                Err(_) => warn!("Ignoring {ENV_HTTP_TIMEOUT}={timeout:?}: not a number of seconds"),
            }
        }

        if let Ok(user_agent) = std::env::var(ENV_USER_AGENT) {
            self.user_agent = user_agent;
        }

        if let Ok(log_file_path) = std::env::var(ENV_LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    pub fn validate(&self) -> Result<(), ChessError> {
        validate_config(
            &self.api_base_url,
            self.http_timeout_seconds,
            &self.user_agent,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), ChessError> {
        self.save_to_path(&get_config_path())
    }

    /// Saves configuration as TOML to `path`, creating the parent directory
    /// if it doesn't exist.
    ///
    /// # Errors
    /// * `ChessError::Config` - If the provided path has no parent directory
    /// * `ChessError::Io` - If creating directories or writing the file fails
    /// * `ChessError::TomlSerialize` - If the configuration cannot be serialized
    pub fn save_to_path(&self, path: &str) -> Result<(), ChessError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            ChessError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(ENV_API_BASE_URL);
            std::env::remove_var(ENV_HTTP_TIMEOUT);
            std::env::remove_var(ENV_USER_AGENT);
            std::env::remove_var(ENV_LOG_FILE);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.chess.com/pub");
        assert_eq!(config.http_timeout_seconds, 30);
        assert!(config.user_agent.starts_with("chesscom-rs/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_partial_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "http_timeout_seconds = 5\n").unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy()).unwrap();
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.api_base_url, "https://api.chess.com/pub");
        assert_eq!(config.log_file_path, None);
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("chesscom").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let original = Config {
            api_base_url: "http://127.0.0.1:9000".to_string(),
            http_timeout_seconds: 10,
            user_agent: "my-bot/1.0 (contact@example.com)".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
        };
        original.save_to_path(&config_path_str).unwrap();
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("api_base_url = \"http://127.0.0.1:9000\""));

        let loaded = Config::load_from_path(&config_path_str).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_none_log_path_not_serialized() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "api_base_url = \"https://x\n[broken").unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy());
        assert!(matches!(result, Err(ChessError::TomlDeserialize(_))));
    }

    #[test]
    fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(ChessError::Io(_))));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "api_base_url = \"https://file.example.com\"\nhttp_timeout_seconds = 12\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var(ENV_API_BASE_URL, "https://env.example.com");
            std::env::set_var(ENV_USER_AGENT, "env-agent/1.0");
        }

        let config = Config::load_with_overrides(&config_path.to_string_lossy()).unwrap();
        assert_eq!(config.api_base_url, "https://env.example.com");
        assert_eq!(config.user_agent, "env-agent/1.0");
        assert_eq!(config.http_timeout_seconds, 12);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_timeout_override_is_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_HTTP_TIMEOUT, "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.http_timeout_seconds, 30);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_override_fails_validation() {
        clear_env();
        unsafe {
            std::env::set_var(ENV_HTTP_TIMEOUT, "0");
        }

        let result = Config::load_with_overrides("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(ChessError::Config(_))));

        clear_env();
    }
}
