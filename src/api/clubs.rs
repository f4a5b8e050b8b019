use tracing::instrument;

use super::client::ChessCom;
use super::params::validate_identifier;
use super::transport::Transport;
use super::urls::{build_club_matches_url, build_club_members_url, build_club_url};
use crate::error::ChessError;
use crate::models::{ClubDetails, ClubMatches, ClubMembers};

/// Club endpoints. `club_id` is the URL slug of the club (e.g.
/// `chess-com-developer-community`).
pub struct ClubsApi<'a, T: Transport> {
    client: &'a ChessCom<T>,
}

impl<'a, T: Transport> ClubsApi<'a, T> {
    pub(crate) fn new(client: &'a ChessCom<T>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub fn details(&self, club_id: &str) -> Result<ClubDetails, ChessError> {
        validate_identifier("club_id", club_id)?;
        self.client
            .fetch(&build_club_url(self.client.base_url(), club_id))
    }

    /// Members grouped by activity (weekly, monthly, all time).
    #[instrument(skip(self))]
    pub fn members(&self, club_id: &str) -> Result<ClubMembers, ChessError> {
        validate_identifier("club_id", club_id)?;
        self.client
            .fetch(&build_club_members_url(self.client.base_url(), club_id))
    }

    /// Team matches of the club, split into finished, in progress and registered.
    #[instrument(skip(self))]
    pub fn matches(&self, club_id: &str) -> Result<ClubMatches, ChessError> {
        validate_identifier("club_id", club_id)?;
        self.client
            .fetch(&build_club_matches_url(self.client.base_url(), club_id))
    }
}
