use tracing::instrument;

use super::client::ChessCom;
use super::transport::Transport;
use super::urls::build_leaderboards_url;
use crate::error::ChessError;
use crate::models::Leaderboards;

pub struct LeaderboardsApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> LeaderboardsApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    /// Top 50 players of every leaderboard.
    #[instrument(skip(self))]
    pub fn all(&self) -> Result<Leaderboards, ChessError> {
        self.client
            .fetch(&build_leaderboards_url(self.client.base_url()))
    }
}
