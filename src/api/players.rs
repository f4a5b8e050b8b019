use serde_json::Value;
use tracing::{debug, instrument};

use super::client::{ChessCom, take_envelope};
use super::params::{validate_identifier, validate_month, validate_year};
use super::transport::Transport;
use super::urls::{
    build_monthly_archive_url, build_monthly_pgn_url, build_player_archives_url,
    build_player_clubs_url, build_player_current_games_url, build_player_is_online_url,
    build_player_matches_url, build_player_stats_url, build_player_to_move_games_url,
    build_player_tournaments_url, build_player_url,
};
use crate::error::ChessError;
use crate::models::{
    ArchivedGame, CurrentDailyGame, PlayerClub, PlayerMatches, PlayerProfile, PlayerStats,
    PlayerTournaments, ToMoveDailyGame,
};
use crate::normalize::dispatch_stats;
use crate::pgn::PgnGames;

/// Player endpoints, addressed by username.
pub struct PlayersApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> PlayersApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    fn base(&self) -> &str {
        self.client.base_url()
    }

    #[instrument(skip(self))]
    pub fn profile(&self, username: &str) -> Result<PlayerProfile, ChessError> {
        validate_identifier("username", username)?;
        self.client.fetch(&build_player_url(self.base(), username))
    }

    #[instrument(skip(self))]
    pub fn clubs(&self, username: &str) -> Result<Vec<PlayerClub>, ChessError> {
        validate_identifier("username", username)?;
        self.client
            .fetch_list(&build_player_clubs_url(self.base(), username), "clubs")
    }

    /// Tournaments the player finished, is playing or is registered for.
    #[instrument(skip(self))]
    pub fn tournaments(&self, username: &str) -> Result<PlayerTournaments, ChessError> {
        validate_identifier("username", username)?;
        self.client
            .fetch(&build_player_tournaments_url(self.base(), username))
    }

    /// Team matches the player finished, is playing or is registered for.
    #[instrument(skip(self))]
    pub fn matches(&self, username: &str) -> Result<PlayerMatches, ChessError> {
        validate_identifier("username", username)?;
        self.client
            .fetch(&build_player_matches_url(self.base(), username))
    }

    /// Whether the player was online in the last five minutes.
    #[instrument(skip(self))]
    pub fn is_online(&self, username: &str) -> Result<bool, ChessError> {
        validate_identifier("username", username)?;
        let value = self
            .client
            .get_json(&build_player_is_online_url(self.base(), username))?;
        match take_envelope(value, "online", "PlayerOnline")? {
            Value::Bool(online) => Ok(online),
            other => Err(ChessError::type_coercion(
                "PlayerOnline",
                "online",
                "a boolean",
                other.to_string(),
            )),
        }
    }

    /// Ratings and records of every mode the player has played.
    #[instrument(skip(self))]
    pub fn stats(&self, username: &str) -> Result<PlayerStats, ChessError> {
        validate_identifier("username", username)?;
        let value = self
            .client
            .get_json(&build_player_stats_url(self.base(), username))?;
        dispatch_stats(value)
    }

    /// Daily games the player is currently playing.
    #[instrument(skip(self))]
    pub fn current_games(&self, username: &str) -> Result<Vec<CurrentDailyGame>, ChessError> {
        validate_identifier("username", username)?;
        self.client
            .fetch_list(&build_player_current_games_url(self.base(), username), "games")
    }

    /// Daily games where it is the player's turn to move.
    #[instrument(skip(self))]
    pub fn to_move_games(&self, username: &str) -> Result<Vec<ToMoveDailyGame>, ChessError> {
        validate_identifier("username", username)?;
        self.client
            .fetch_list(&build_player_to_move_games_url(self.base(), username), "games")
    }

    /// URLs of every monthly archive available for the player.
    #[instrument(skip(self))]
    pub fn archive_urls(&self, username: &str) -> Result<Vec<String>, ChessError> {
        validate_identifier("username", username)?;
        self.client.fetch_strings(
            &build_player_archives_url(self.base(), username),
            "archives",
            "PlayerArchives",
        )
    }

    /// Games the player finished in the given month.
    #[instrument(skip(self))]
    pub fn monthly_archive(
        &self,
        username: &str,
        year: u32,
        month: u32,
    ) -> Result<Vec<ArchivedGame>, ChessError> {
        validate_identifier("username", username)?;
        validate_year(year)?;
        validate_month(month)?;
        self.client.fetch_list(
            &build_monthly_archive_url(self.base(), username, year, month),
            "games",
        )
    }

    /// Games the player finished in the given month, as PGN.
    #[instrument(skip(self))]
    pub fn monthly_pgn(
        &self,
        username: &str,
        year: u32,
        month: u32,
    ) -> Result<PgnGames, ChessError> {
        validate_identifier("username", username)?;
        validate_year(year)?;
        validate_month(month)?;
        let text = self
            .client
            .get_text(&build_monthly_pgn_url(self.base(), username, year, month))?;
        debug!("Received {} bytes of PGN", text.len());
        Ok(PgnGames::new(text))
    }
}
