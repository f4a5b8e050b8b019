use tracing::instrument;

use super::client::ChessCom;
use super::transport::Transport;
use super::urls::build_titled_url;
use crate::error::ChessError;
use crate::models::{ApiEnum, Title};

pub struct TitledApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> TitledApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    /// Usernames of every player holding `title`.
    #[instrument(skip(self))]
    pub fn usernames(&self, title: Title) -> Result<Vec<String>, ChessError> {
        self.client.fetch_strings(
            &build_titled_url(self.client.base_url(), title.as_str()),
            "players",
            "TitledPlayers",
        )
    }

    /// Usernames per title, one request per title, in the order given.
    ///
    /// Stops at the first failing request.
    pub fn usernames_for(&self, titles: &[Title]) -> Result<Vec<(Title, Vec<String>)>, ChessError> {
        titles
            .iter()
            .map(|&title| Ok((title, self.usernames(title)?)))
            .collect()
    }
}
