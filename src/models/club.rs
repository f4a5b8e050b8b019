use crate::error::ChessError;
use crate::normalize::{Fields, Schema, StatusBuckets};
use serde::Serialize;

/// Profile of a club.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubDetails {
    /// Self-referencing API URL of this profile
    pub id: String,
    pub name: String,
    /// Non-changing Chess.com id of the club
    pub club_id: i64,
    /// URL of a 200x200 image
    pub icon: Option<String>,
    /// API URL of the club's country profile
    pub country: String,
    pub average_daily_rating: i64,
    pub members_count: i64,
    pub created: i64,
    pub last_activity: i64,
    /// `public` or `private`
    pub visibility: String,
    pub join_request: String,
    /// Profile URLs of the club admins
    pub admin: Vec<String>,
    pub description: String,
}

impl Schema for ClubDetails {
    const NAME: &'static str = "ClubDetails";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            id: fields.string("id")?,
            name: fields.string("name")?,
            club_id: fields.int("club_id")?,
            icon: fields.opt_string("icon")?,
            country: fields.string("country")?,
            average_daily_rating: fields.int("average_daily_rating")?,
            members_count: fields.int("members_count")?,
            created: fields.int("created")?,
            last_activity: fields.int("last_activity")?,
            visibility: fields.string("visibility")?,
            join_request: fields.string("join_request")?,
            admin: fields.strings("admin")?,
            description: fields.string("description")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubMember {
    pub username: String,
    /// Timestamp the member joined the club
    pub joined: i64,
}

impl Schema for ClubMember {
    const NAME: &'static str = "ClubMember";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            username: fields.string("username")?,
            joined: fields.int("joined")?,
        })
    }
}

/// Club members grouped by how recently they joined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubMembers {
    pub weekly: Vec<ClubMember>,
    pub monthly: Vec<ClubMember>,
    pub all_time: Vec<ClubMember>,
}

impl ClubMembers {
    pub fn total(&self) -> usize {
        self.weekly.len() + self.monthly.len() + self.all_time.len()
    }
}

impl Schema for ClubMembers {
    const NAME: &'static str = "ClubMembers";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            weekly: fields.records("weekly")?,
            monthly: fields.records("monthly")?,
            all_time: fields.records("all_time")?,
        })
    }
}

/// One team match a club took part in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubMatch {
    pub name: String,
    /// API URL of the team match
    pub id: String,
    /// API URL of the opposing club
    pub opponent: String,
    pub result: Option<String>,
    pub start_time: Option<i64>,
    pub time_class: String,
}

impl Schema for ClubMatch {
    const NAME: &'static str = "ClubMatch";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            name: fields.string("name")?,
            id: fields.string("id")?,
            opponent: fields.string("opponent")?,
            result: fields.opt_string("result")?,
            start_time: fields.opt_int("start_time")?,
            time_class: fields.string("time_class")?,
        })
    }
}

pub type ClubMatches = StatusBuckets<ClubMatch>;
