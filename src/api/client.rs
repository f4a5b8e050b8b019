//! The API client and the response plumbing shared by every accessor.

use serde_json::Value;
use tracing::debug;

use super::clubs::ClubsApi;
use super::countries::CountriesApi;
use super::leaderboards::LeaderboardsApi;
use super::matches::MatchesApi;
use super::players::PlayersApi;
use super::puzzles::PuzzlesApi;
use super::streamers::StreamersApi;
use super::titled::TitledApi;
use super::tournaments::TournamentsApi;
use super::transport::{HttpTransport, Transport};
use crate::config::Config;
use crate::error::ChessError;
use crate::normalize::{Schema, from_raw, list_from_raw};

/// Client for the public Chess.com API.
///
/// Operations are grouped by resource:
///
/// ```rust,no_run
/// use chesscom::{ChessCom, Config};
///
/// # fn main() -> Result<(), chesscom::ChessError> {
/// let client = ChessCom::new(&Config::default())?;
/// let profile = client.players().profile("erik")?;
/// println!("{} joined {:?}", profile.username, profile.joined_at());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChessCom<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
}

impl ChessCom<HttpTransport> {
    /// Creates a client over HTTP using the base URL, timeout and user agent
    /// from `config`.
    pub fn new(config: &Config) -> Result<Self, ChessError> {
        Ok(Self::with_transport(
            HttpTransport::from_config(config)?,
            &config.api_base_url,
        ))
    }
}

impl<T: Transport> ChessCom<T> {
    pub fn with_transport(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn clubs(&self) -> ClubsApi<'_, T> {
        ClubsApi::new(self)
    }

    pub fn countries(&self) -> CountriesApi<'_, T> {
        CountriesApi::new(self)
    }

    pub fn leaderboards(&self) -> LeaderboardsApi<'_, T> {
        LeaderboardsApi::new(self)
    }

    pub fn matches(&self) -> MatchesApi<'_, T> {
        MatchesApi::new(self)
    }

    pub fn players(&self) -> PlayersApi<'_, T> {
        PlayersApi::new(self)
    }

    pub fn puzzles(&self) -> PuzzlesApi<'_, T> {
        PuzzlesApi::new(self)
    }

    pub fn streamers(&self) -> StreamersApi<'_, T> {
        StreamersApi::new(self)
    }

    pub fn titled(&self) -> TitledApi<'_, T> {
        TitledApi::new(self)
    }

    pub fn tournaments(&self) -> TournamentsApi<'_, T> {
        TournamentsApi::new(self)
    }

    pub(crate) fn get_json(&self, url: &str) -> Result<Value, ChessError> {
        self.transport.get_json(url)
    }

    pub(crate) fn get_text(&self, url: &str) -> Result<String, ChessError> {
        self.transport.get_text(url)
    }

    /// Fetches one record.
    pub(crate) fn fetch<S: Schema>(&self, url: &str) -> Result<S, ChessError> {
        from_raw(self.get_json(url)?)
    }

    /// Fetches a list of records wrapped under `key`.
    pub(crate) fn fetch_list<S: Schema>(&self, url: &str, key: &str) -> Result<Vec<S>, ChessError> {
        let items = take_envelope(self.get_json(url)?, key, S::NAME)?;
        let records = list_from_raw(items)?;
        debug!("Parsed {} {} records from {url}", records.len(), S::NAME);
        Ok(records)
    }

    /// Fetches a list of strings wrapped under `key`.
    pub(crate) fn fetch_strings(
        &self,
        url: &str,
        key: &str,
        schema: &'static str,
    ) -> Result<Vec<String>, ChessError> {
        let items = take_envelope(self.get_json(url)?, key, schema)?;
        serde_json::from_value(items).map_err(|e| {
            ChessError::unexpected_shape(schema, format!("`{key}` is not a list of strings: {e}"))
        })
    }
}

/// Removes and returns the value stored under `key` of an envelope object.
pub(crate) fn take_envelope(
    value: Value,
    key: &str,
    schema: &'static str,
) -> Result<Value, ChessError> {
    match value {
        Value::Object(mut map) => map.remove(key).ok_or_else(|| {
            ChessError::unexpected_shape(schema, format!("response has no `{key}` key"))
        }),
        _ => Err(ChessError::unexpected_shape(
            schema,
            "response is not a JSON object",
        )),
    }
}
