use tracing::instrument;

use super::client::ChessCom;
use super::params::{validate_identifier, validate_ordinal};
use super::transport::Transport;
use super::urls::{
    build_daily_match_board_url, build_daily_match_url, build_live_match_board_url,
    build_live_match_url,
};
use crate::error::ChessError;
use crate::models::{DailyMatch, LiveMatch, MatchBoard};

/// Team match endpoints.
pub struct MatchesApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> MatchesApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub fn daily(&self, match_id: &str) -> Result<DailyMatch, ChessError> {
        validate_identifier("match_id", match_id)?;
        self.client
            .fetch(&build_daily_match_url(self.client.base_url(), match_id))
    }

    /// One board of a daily team match; boards are numbered from 1.
    #[instrument(skip(self))]
    pub fn board(&self, match_id: &str, board: u32) -> Result<MatchBoard, ChessError> {
        validate_identifier("match_id", match_id)?;
        validate_ordinal("board", board)?;
        self.client.fetch(&build_daily_match_board_url(
            self.client.base_url(),
            match_id,
            board,
        ))
    }

    #[instrument(skip(self))]
    pub fn live(&self, match_id: &str) -> Result<LiveMatch, ChessError> {
        validate_identifier("match_id", match_id)?;
        self.client
            .fetch(&build_live_match_url(self.client.base_url(), match_id))
    }

    #[instrument(skip(self))]
    pub fn live_board(&self, match_id: &str, board: u32) -> Result<MatchBoard, ChessError> {
        validate_identifier("match_id", match_id)?;
        validate_ordinal("board", board)?;
        self.client.fetch(&build_live_match_board_url(
            self.client.base_url(),
            match_id,
            board,
        ))
    }
}
