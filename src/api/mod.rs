pub mod http_client;
pub mod params;
pub mod transport;
pub mod urls;

mod client;
mod clubs;
mod countries;
mod fetch_utils;
mod leaderboards;
mod matches;
mod players;
mod puzzles;
mod streamers;
mod titled;
mod tournaments;

// Re-export URL utilities
pub use urls::*;
// Re-export the client and its accessor groups
pub use client::ChessCom;
pub use clubs::ClubsApi;
pub use countries::CountriesApi;
pub use leaderboards::LeaderboardsApi;
pub use matches::MatchesApi;
pub use players::PlayersApi;
pub use puzzles::PuzzlesApi;
pub use streamers::StreamersApi;
pub use titled::TitledApi;
pub use tournaments::TournamentsApi;
pub use transport::{HttpTransport, Transport};
