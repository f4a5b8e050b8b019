use super::enums::{AccountStatus, GameResult};
use crate::error::ChessError;
use crate::normalize::{Fields, Schema};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public profile of a player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    /// Self-referencing API URL of this profile
    pub id: String,
    /// Web URL of the profile
    pub url: String,
    pub username: String,
    /// Non-changing Chess.com id of the player
    pub player_id: i64,
    /// Abbreviated title (e.g. `GM`), if any
    pub title: Option<String>,
    pub status: AccountStatus,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    /// API URL of the player's country profile
    pub country: Option<String>,
    pub joined: i64,
    pub last_online: i64,
    pub followers: i64,
    pub is_streamer: bool,
    pub twitch_url: Option<String>,
    pub fide: Option<i64>,
    pub verified: Option<bool>,
    pub league: Option<String>,
}

impl PlayerProfile {
    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.joined, 0)
    }

    pub fn last_online_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_online, 0)
    }
}

impl Schema for PlayerProfile {
    const NAME: &'static str = "PlayerProfile";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            id: fields.string("id")?,
            url: fields.string("url")?,
            username: fields.string("username")?,
            player_id: fields.int("player_id")?,
            title: fields.opt_string("title")?,
            status: fields.enumeration("status")?,
            name: fields.opt_string("name")?,
            avatar: fields.opt_string("avatar")?,
            location: fields.opt_string("location")?,
            country: fields.opt_string("country")?,
            joined: fields.int("joined")?,
            last_online: fields.int("last_online")?,
            followers: fields.int("followers")?,
            is_streamer: fields.bool("is_streamer")?,
            twitch_url: fields.opt_string("twitch_url")?,
            fide: fields.opt_int("fide")?,
            verified: fields.opt_bool("verified")?,
            league: fields.opt_string("league")?,
        })
    }
}

/// A club as listed on a player's club memberships.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerClub {
    /// API URL of the club profile
    pub id: String,
    pub name: String,
    pub last_activity: i64,
    pub icon: String,
    /// Web URL of the club
    pub url: String,
    pub joined: i64,
}

impl Schema for PlayerClub {
    const NAME: &'static str = "PlayerClub";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            id: fields.string("id")?,
            name: fields.string("name")?,
            last_activity: fields.int("last_activity")?,
            icon: fields.string("icon")?,
            url: fields.string("url")?,
            joined: fields.int("joined")?,
        })
    }
}

/// A daily game the player is currently playing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentDailyGame {
    /// API URL of the white player's profile
    pub white: String,
    /// API URL of the black player's profile
    pub black: String,
    pub url: String,
    pub fen: String,
    pub pgn: String,
    /// `white` or `black`
    pub turn: String,
    /// Timestamp of the move deadline
    pub move_by: i64,
    /// Player who offered a draw, if any
    pub draw_offer: Option<String>,
    pub last_activity: i64,
    pub start_time: i64,
    pub time_control: String,
    pub time_class: String,
    pub rules: String,
    pub tournament: Option<String>,
    #[serde(rename = "match")]
    pub match_url: Option<String>,
}

impl Schema for CurrentDailyGame {
    const NAME: &'static str = "CurrentDailyGame";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            white: fields.string("white")?,
            black: fields.string("black")?,
            url: fields.string("url")?,
            fen: fields.string("fen")?,
            pgn: fields.string("pgn")?,
            turn: fields.string("turn")?,
            move_by: fields.int("move_by")?,
            draw_offer: fields.opt_string("draw_offer")?,
            last_activity: fields.int("last_activity")?,
            start_time: fields.int("start_time")?,
            time_control: fields.string("time_control")?,
            time_class: fields.string("time_class")?,
            rules: fields.string("rules")?,
            tournament: fields.opt_string("tournament")?,
            match_url: fields.opt_string("match")?,
        })
    }
}

/// A daily game where it is the player's turn to move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToMoveDailyGame {
    pub url: String,
    pub move_by: i64,
    pub draw_offer: Option<bool>,
    pub last_activity: i64,
}

impl Schema for ToMoveDailyGame {
    const NAME: &'static str = "ToMoveDailyGame";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            url: fields.string("url")?,
            move_by: fields.int("move_by")?,
            draw_offer: fields.opt_bool("draw_offer")?,
            last_activity: fields.int("last_activity")?,
        })
    }
}

/// One side of an archived game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamePlayer {
    pub username: String,
    pub rating: i64,
    pub result: GameResult,
    /// API URL of the player's profile
    pub id: String,
    pub uuid: Option<String>,
}

impl Schema for GamePlayer {
    const NAME: &'static str = "GamePlayer";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            username: fields.string("username")?,
            rating: fields.int("rating")?,
            result: fields.enumeration("result")?,
            id: fields.string("id")?,
            uuid: fields.opt_string("uuid")?,
        })
    }
}

/// A finished game from a player's monthly archive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchivedGame {
    pub white: GamePlayer,
    pub black: GamePlayer,
    pub url: String,
    /// Final position
    pub fen: String,
    pub pgn: String,
    /// Only reported for daily games
    pub start_time: Option<i64>,
    pub end_time: i64,
    pub time_control: String,
    pub time_class: String,
    pub rules: String,
    pub rated: Option<bool>,
    pub eco: Option<String>,
    pub tournament: Option<String>,
    #[serde(rename = "match")]
    pub match_url: Option<String>,
    pub uuid: Option<String>,
}

impl ArchivedGame {
    /// Result of the game for the given username, if that player took part.
    pub fn result_for(&self, username: &str) -> Option<GameResult> {
        if self.white.username.eq_ignore_ascii_case(username) {
            Some(self.white.result)
        } else if self.black.username.eq_ignore_ascii_case(username) {
            Some(self.black.result)
        } else {
            None
        }
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end_time, 0)
    }
}

impl Schema for ArchivedGame {
    const NAME: &'static str = "ArchivedGame";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            white: fields.nested("white")?,
            black: fields.nested("black")?,
            url: fields.string("url")?,
            fen: fields.string("fen")?,
            pgn: fields.string("pgn")?,
            start_time: fields.opt_int("start_time")?,
            end_time: fields.int("end_time")?,
            time_control: fields.string("time_control")?,
            time_class: fields.string("time_class")?,
            rules: fields.string("rules")?,
            rated: fields.opt_bool("rated")?,
            eco: fields.opt_string("eco")?,
            tournament: fields.opt_string("tournament")?,
            match_url: fields.opt_string("match")?,
            uuid: fields.opt_string("uuid")?,
        })
    }
}
