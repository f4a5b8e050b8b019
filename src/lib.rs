//! Typed, validating client for the public Chess.com API
//!
//! Every response is normalized (the `@id` self reference becomes `id`,
//! grouped lists are split into typed buckets, per-mode statistics are
//! tagged) and then validated field by field into plain Rust records.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chesscom::{ChessCom, Config, ChessError};
//!
//! fn main() -> Result<(), ChessError> {
//!     let client = ChessCom::new(&Config::load()?)?;
//!
//!     // Profile with the self reference exposed as `id`
//!     let profile = client.players().profile("erik")?;
//!     println!("{} ({})", profile.username, profile.id);
//!
//!     // Games finished in May 2020
//!     for game in client.players().monthly_archive("erik", 2020, 5)? {
//!         println!("{} vs {}", game.white.username, game.black.username);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod normalize;
pub mod pgn;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use api::{ChessCom, HttpTransport, Transport};
pub use config::Config;
pub use error::ChessError;
pub use models::*;
pub use normalize::{Schema, construct, from_raw};
pub use pgn::{PgnGame, PgnGames};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
