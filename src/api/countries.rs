use tracing::instrument;

use super::client::ChessCom;
use super::params::validate_country_code;
use super::transport::Transport;
use super::urls::{build_country_clubs_url, build_country_players_url, build_country_url};
use crate::error::ChessError;
use crate::models::CountryDetails;

/// Country endpoints, addressed by two-letter ISO code.
pub struct CountriesApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> CountriesApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub fn details(&self, code: &str) -> Result<CountryDetails, ChessError> {
        let code = validate_country_code(code)?;
        self.client
            .fetch(&build_country_url(self.client.base_url(), &code))
    }

    /// Usernames of players identifying with the country.
    #[instrument(skip(self))]
    pub fn players(&self, code: &str) -> Result<Vec<String>, ChessError> {
        let code = validate_country_code(code)?;
        self.client.fetch_strings(
            &build_country_players_url(self.client.base_url(), &code),
            "players",
            "CountryPlayers",
        )
    }

    /// API URLs of the clubs associated with the country.
    #[instrument(skip(self))]
    pub fn clubs(&self, code: &str) -> Result<Vec<String>, ChessError> {
        let code = validate_country_code(code)?;
        self.client.fetch_strings(
            &build_country_clubs_url(self.client.base_url(), &code),
            "clubs",
            "CountryClubs",
        )
    }
}
