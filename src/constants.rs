//! Crate-wide constants
//!
//! Endpoint defaults, the reserved key names the normalizer looks for, and the
//! fixed mode names used to classify player statistics.

/// Base URL of the public Chess.com API
pub const DEFAULT_API_BASE_URL: &str = "https://api.chess.com/pub";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// User agent sent with every request unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = concat!("chesscom-rs/", env!("CARGO_PKG_VERSION"));

/// Key names used by the identifier rewrite
pub mod keys {
    /// Self-referencing URL key as sent by the API
    pub const RESERVED_ID: &str = "@id";

    /// Key the self reference is exposed under
    pub const ID: &str = "id";
}

/// Stat mode names
pub mod stats {
    /// Substring marking a full rated chess mode (e.g. `chess_blitz`)
    pub const CHESS_MODE_MARKER: &str = "chess";

    /// Non-chess modes that only report highest/lowest ratings
    pub const RATING_ONLY_MODES: [&str; 3] = ["tactics", "lessons", "puzzle_rush"];
}

/// Default log file name for the command-line tool
pub const LOG_FILE_NAME: &str = "chesscom.log";
