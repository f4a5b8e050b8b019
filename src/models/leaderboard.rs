use super::enums::AccountStatus;
use crate::error::ChessError;
use crate::normalize::{Fields, Schema};
use serde::Serialize;
use serde_json::{Map, Value};

/// Leaderboards parsed into typed lists.
///
/// The API also publishes a `lessons` board; it is left in
/// [`Leaderboards::unparsed`] together with any board added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderboardKind {
    Daily,
    Daily960,
    LiveRapid,
    LiveBlitz,
    LiveBullet,
    LiveBughouse,
    LiveBlitz960,
    LiveThreecheck,
    LiveCrazyhouse,
    LiveKingOfTheHill,
    Tactics,
}

impl LeaderboardKind {
    pub const ALL: [LeaderboardKind; 11] = [
        LeaderboardKind::Daily,
        LeaderboardKind::Daily960,
        LeaderboardKind::LiveRapid,
        LeaderboardKind::LiveBlitz,
        LeaderboardKind::LiveBullet,
        LeaderboardKind::LiveBughouse,
        LeaderboardKind::LiveBlitz960,
        LeaderboardKind::LiveThreecheck,
        LeaderboardKind::LiveCrazyhouse,
        LeaderboardKind::LiveKingOfTheHill,
        LeaderboardKind::Tactics,
    ];

    /// Key of this board in the leaderboards payload
    pub fn key(&self) -> &'static str {
        match self {
            LeaderboardKind::Daily => "daily",
            LeaderboardKind::Daily960 => "daily960",
            LeaderboardKind::LiveRapid => "live_rapid",
            LeaderboardKind::LiveBlitz => "live_blitz",
            LeaderboardKind::LiveBullet => "live_bullet",
            LeaderboardKind::LiveBughouse => "live_bughouse",
            LeaderboardKind::LiveBlitz960 => "live_blitz960",
            LeaderboardKind::LiveThreecheck => "live_threecheck",
            LeaderboardKind::LiveCrazyhouse => "live_crazyhouse",
            LeaderboardKind::LiveKingOfTheHill => "live_kingofthehill",
            LeaderboardKind::Tactics => "tactics",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// Direction and size of a recent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trend {
    /// 1 for up, 0 or -1 for down
    pub direction: i64,
    pub delta: i64,
}

impl Schema for Trend {
    const NAME: &'static str = "Trend";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            direction: fields.int("direction")?,
            delta: fields.int("delta")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub player_id: i64,
    /// API URL of the player's profile
    pub id: String,
    pub username: String,
    pub score: i64,
    pub rank: i64,
    /// Web URL of the player's profile
    pub url: String,
    pub country: String,
    pub status: AccountStatus,
    pub avatar: String,
    pub trend_score: Option<Trend>,
    pub trend_rank: Option<Trend>,
    pub flair_code: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
}

impl Schema for LeaderboardEntry {
    const NAME: &'static str = "LeaderboardEntry";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            player_id: fields.int("player_id")?,
            id: fields.string("id")?,
            username: fields.string("username")?,
            score: fields.int("score")?,
            rank: fields.int("rank")?,
            url: fields.string("url")?,
            country: fields.string("country")?,
            status: fields.enumeration("status")?,
            avatar: fields.string("avatar")?,
            trend_score: fields.opt_nested("trend_score")?,
            trend_rank: fields.opt_nested("trend_rank")?,
            flair_code: fields.opt_string("flair_code")?,
            title: fields.opt_string("title")?,
            name: fields.opt_string("name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboards {
    pub daily: Vec<LeaderboardEntry>,
    pub daily960: Vec<LeaderboardEntry>,
    pub live_rapid: Vec<LeaderboardEntry>,
    pub live_blitz: Vec<LeaderboardEntry>,
    pub live_bullet: Vec<LeaderboardEntry>,
    pub live_bughouse: Vec<LeaderboardEntry>,
    pub live_blitz960: Vec<LeaderboardEntry>,
    pub live_threecheck: Vec<LeaderboardEntry>,
    pub live_crazyhouse: Vec<LeaderboardEntry>,
    pub live_kingofthehill: Vec<LeaderboardEntry>,
    pub tactics: Vec<LeaderboardEntry>,
    /// Boards that are not parsed (`lessons`, new ones), as sent
    pub unparsed: Map<String, Value>,
}

impl Leaderboards {
    pub fn board(&self, kind: LeaderboardKind) -> &[LeaderboardEntry] {
        match kind {
            LeaderboardKind::Daily => &self.daily,
            LeaderboardKind::Daily960 => &self.daily960,
            LeaderboardKind::LiveRapid => &self.live_rapid,
            LeaderboardKind::LiveBlitz => &self.live_blitz,
            LeaderboardKind::LiveBullet => &self.live_bullet,
            LeaderboardKind::LiveBughouse => &self.live_bughouse,
            LeaderboardKind::LiveBlitz960 => &self.live_blitz960,
            LeaderboardKind::LiveThreecheck => &self.live_threecheck,
            LeaderboardKind::LiveCrazyhouse => &self.live_crazyhouse,
            LeaderboardKind::LiveKingOfTheHill => &self.live_kingofthehill,
            LeaderboardKind::Tactics => &self.tactics,
        }
    }

    /// Raw payload of the `lessons` board, if the API sent one
    pub fn lessons(&self) -> Option<&Value> {
        self.unparsed.get("lessons")
    }
}

impl Schema for Leaderboards {
    const NAME: &'static str = "Leaderboards";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        let daily = fields.records(LeaderboardKind::Daily.key())?;
        let daily960 = fields.records(LeaderboardKind::Daily960.key())?;
        let live_rapid = fields.records(LeaderboardKind::LiveRapid.key())?;
        let live_blitz = fields.records(LeaderboardKind::LiveBlitz.key())?;
        let live_bullet = fields.records(LeaderboardKind::LiveBullet.key())?;
        let live_bughouse = fields.records(LeaderboardKind::LiveBughouse.key())?;
        let live_blitz960 = fields.records(LeaderboardKind::LiveBlitz960.key())?;
        let live_threecheck = fields.records(LeaderboardKind::LiveThreecheck.key())?;
        let live_crazyhouse = fields.records(LeaderboardKind::LiveCrazyhouse.key())?;
        let live_kingofthehill = fields.records(LeaderboardKind::LiveKingOfTheHill.key())?;
        let tactics = fields.records(LeaderboardKind::Tactics.key())?;

        let unparsed = fields.take_remaining();

        Ok(Self {
            daily,
            daily960,
            live_rapid,
            live_blitz,
            live_bullet,
            live_bughouse,
            live_blitz960,
            live_threecheck,
            live_crazyhouse,
            live_kingofthehill,
            tactics,
            unparsed,
        })
    }
}
