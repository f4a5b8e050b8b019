use crate::error::ChessError;
use crate::normalize::{Fields, Schema};
use serde::Serialize;

/// A Chess.com streamer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Streamer {
    pub username: String,
    pub avatar: String,
    pub twitch_url: Option<String>,
    /// Web URL of the member profile
    pub url: String,
    pub is_live: Option<bool>,
    pub is_community_streamer: Option<bool>,
}

impl Schema for Streamer {
    const NAME: &'static str = "Streamer";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            username: fields.string("username")?,
            avatar: fields.string("avatar")?,
            twitch_url: fields.opt_string("twitch_url")?,
            url: fields.string("url")?,
            is_live: fields.opt_bool("is_live")?,
            is_community_streamer: fields.opt_bool("is_community_streamer")?,
        })
    }
}
