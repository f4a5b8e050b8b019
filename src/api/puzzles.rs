use tracing::instrument;

use super::client::ChessCom;
use super::transport::Transport;
use super::urls::{build_daily_puzzle_url, build_random_puzzle_url};
use crate::error::ChessError;
use crate::models::Puzzle;

pub struct PuzzlesApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> PuzzlesApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    /// Today's daily puzzle.
    #[instrument(skip(self))]
    pub fn daily(&self) -> Result<Puzzle, ChessError> {
        self.client
            .fetch(&build_daily_puzzle_url(self.client.base_url()))
    }

    /// A random daily puzzle; the API caches this response for 15 seconds.
    #[instrument(skip(self))]
    pub fn random(&self) -> Result<Puzzle, ChessError> {
        self.client
            .fetch(&build_random_puzzle_url(self.client.base_url()))
    }
}
