use std::path::{Path, PathBuf};

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("chesscom")
}

/// Returns the platform-specific path for the config file.
///
/// Falls back to the current directory if the platform has no config
/// directory.
pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().to_string()
}

/// Returns the platform-specific directory for log files.
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_app_dir() {
        let config = get_config_path();
        let logs = get_log_dir_path();
        assert!(config.ends_with("config.toml"));
        assert!(config.contains("chesscom"));
        assert!(logs.contains("chesscom"));
        assert!(logs.ends_with("logs"));
    }
}
