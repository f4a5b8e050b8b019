use tracing::instrument;

use super::client::ChessCom;
use super::params::{validate_identifier, validate_ordinal};
use super::transport::Transport;
use super::urls::{
    build_tournament_round_group_url, build_tournament_round_url, build_tournament_url,
};
use crate::error::ChessError;
use crate::models::{Tournament, TournamentRound, TournamentRoundGroup};

/// Tournament endpoints. `tournament_id` is the URL slug of the tournament.
pub struct TournamentsApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> TournamentsApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub fn details(&self, tournament_id: &str) -> Result<Tournament, ChessError> {
        validate_identifier("tournament_id", tournament_id)?;
        self.client
            .fetch(&build_tournament_url(self.client.base_url(), tournament_id))
    }

    #[instrument(skip(self))]
    pub fn round(&self, tournament_id: &str, round: u32) -> Result<TournamentRound, ChessError> {
        validate_identifier("tournament_id", tournament_id)?;
        validate_ordinal("round", round)?;
        self.client.fetch(&build_tournament_round_url(
            self.client.base_url(),
            tournament_id,
            round,
        ))
    }

    #[instrument(skip(self))]
    pub fn round_group(
        &self,
        tournament_id: &str,
        round: u32,
        group: u32,
    ) -> Result<TournamentRoundGroup, ChessError> {
        validate_identifier("tournament_id", tournament_id)?;
        validate_ordinal("round", round)?;
        validate_ordinal("group", group)?;
        self.client.fetch(&build_tournament_round_group_url(
            self.client.base_url(),
            tournament_id,
            round,
            group,
        ))
    }
}
