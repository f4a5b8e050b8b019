use crate::error::ChessError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - HTTP timeout must be at least one second
/// - User agent cannot be empty
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    http_timeout_seconds: u64,
    user_agent: &str,
    log_file_path: &Option<String>,
) -> Result<(), ChessError> {
    if api_base_url.is_empty() {
        return Err(ChessError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(ChessError::config_error(format!(
            "API base URL must start with http:// or https://, got '{api_base_url}'"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(ChessError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if user_agent.trim().is_empty() {
        return Err(ChessError::config_error("User agent cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(ChessError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ChessError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BASE: &str = "https://api.chess.com/pub";
    const AGENT: &str = "chesscom-rs/test";

    #[test]
    fn test_valid_config() {
        assert!(validate_config(BASE, 30, AGENT, &None).is_ok());
        assert!(validate_config("http://127.0.0.1:8080", 1, AGENT, &None).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            validate_config("", 30, AGENT, &None),
            Err(ChessError::Config(_))
        ));
        assert!(validate_config("api.chess.com/pub", 30, AGENT, &None).is_err());
    }

    #[test]
    fn test_zero_timeout() {
        assert!(validate_config(BASE, 0, AGENT, &None).is_err());
    }

    #[test]
    fn test_empty_user_agent() {
        assert!(validate_config(BASE, 30, "  ", &None).is_err());
    }

    #[test]
    fn test_log_path() {
        assert!(validate_config(BASE, 30, AGENT, &Some(String::new())).is_err());

        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("chesscom.log");
        let log_path = Some(log_path.to_string_lossy().to_string());
        assert!(validate_config(BASE, 30, AGENT, &log_path).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
