use crate::error::ChessError;
use crate::normalize::{Fields, Schema};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Puzzle {
    pub title: String,
    pub url: String,
    pub publish_time: i64,
    pub fen: String,
    pub pgn: String,
    /// URL of the rendered puzzle position
    pub image: String,
}

impl Schema for Puzzle {
    const NAME: &'static str = "Puzzle";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            title: fields.string("title")?,
            url: fields.string("url")?,
            publish_time: fields.int("publish_time")?,
            fen: fields.string("fen")?,
            pgn: fields.string("pgn")?,
            image: fields.string("image")?,
        })
    }
}
