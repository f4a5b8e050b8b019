use tracing::instrument;

use super::client::ChessCom;
use super::transport::Transport;
use super::urls::build_streamers_url;
use crate::error::ChessError;
use crate::models::Streamer;

pub struct StreamersApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> StreamersApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub fn all(&self) -> Result<Vec<Streamer>, ChessError> {
        self.client
            .fetch_list(&build_streamers_url(self.client.base_url()), "streamers")
    }
}
