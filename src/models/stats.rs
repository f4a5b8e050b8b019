//! Per-mode rating statistics of a player.

use crate::error::ChessError;
use crate::normalize::{Fields, Schema};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingLog {
    pub rating: i64,
    pub date: i64,
}

impl Schema for RatingLog {
    const NAME: &'static str = "RatingLog";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            rating: fields.int("rating")?,
            date: fields.int("date")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LastRating {
    pub date: i64,
    pub rating: i64,
    /// Glicko RD
    pub rd: i64,
}

impl Schema for LastRating {
    const NAME: &'static str = "LastRating";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            date: fields.int("date")?,
            rating: fields.int("rating")?,
            rd: fields.int("rd")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestRating {
    pub date: i64,
    pub rating: i64,
    /// URL of the game where the best rating was reached
    pub game: String,
}

impl Schema for BestRating {
    const NAME: &'static str = "BestRating";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            date: fields.int("date")?,
            rating: fields.int("rating")?,
            game: fields.string("game")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GamesRecord {
    pub win: i64,
    pub loss: i64,
    pub draw: i64,
    /// Average seconds per daily move
    pub time_per_move: Option<i64>,
    pub timeout_percent: Option<f64>,
}

impl GamesRecord {
    pub fn games(&self) -> i64 {
        self.win + self.loss + self.draw
    }
}

impl Schema for GamesRecord {
    const NAME: &'static str = "GamesRecord";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            win: fields.int("win")?,
            loss: fields.int("loss")?,
            draw: fields.int("draw")?,
            time_per_move: fields.opt_int("time_per_move")?,
            timeout_percent: fields.opt_float("timeout_percent")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TournamentsSummary {
    pub count: i64,
    pub withdraw: i64,
    pub points: i64,
    pub highest_finish: i64,
}

impl Schema for TournamentsSummary {
    const NAME: &'static str = "TournamentsSummary";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            count: fields.int("count")?,
            withdraw: fields.int("withdraw")?,
            points: fields.int("points")?,
            highest_finish: fields.int("highest_finish")?,
        })
    }
}

/// Statistics of a rated chess mode (`chess_blitz`, `chess960_daily`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChessModeStats {
    pub last: LastRating,
    pub best: BestRating,
    pub record: GamesRecord,
    pub tournament: Option<TournamentsSummary>,
}

impl Schema for ChessModeStats {
    const NAME: &'static str = "ChessModeStats";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            last: fields.nested("last")?,
            best: fields.nested("best")?,
            record: fields.nested("record")?,
            tournament: fields.opt_nested("tournament")?,
        })
    }
}

/// Highest and lowest ratings of a mode without games (`tactics`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingOnlyStats {
    pub highest: Option<RatingLog>,
    pub lowest: Option<RatingLog>,
}

impl Schema for RatingOnlyStats {
    const NAME: &'static str = "RatingOnlyStats";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            highest: fields.opt_nested("highest")?,
            lowest: fields.opt_nested("lowest")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModeStats {
    Chess(ChessModeStats),
    RatingOnly(RatingOnlyStats),
    /// Modes without a typed record, as the API sent them
    Untyped(Value),
}

impl ModeStats {
    pub fn as_chess(&self) -> Option<&ChessModeStats> {
        match self {
            ModeStats::Chess(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_rating_only(&self) -> Option<&RatingOnlyStats> {
        match self {
            ModeStats::RatingOnly(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Statistics of every mode a player has, keyed by mode name in payload order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerStats {
    modes: Vec<(String, ModeStats)>,
}

impl PlayerStats {
    pub fn new(modes: Vec<(String, ModeStats)>) -> Self {
        Self { modes }
    }

    pub fn get(&self, name: &str) -> Option<&ModeStats> {
        self.modes
            .iter()
            .find(|(mode, _)| mode == name)
            .map(|(_, stats)| stats)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(|(mode, _)| mode.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModeStats)> {
        self.modes.iter().map(|(mode, stats)| (mode.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl Serialize for PlayerStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.modes.len()))?;
        for (mode, stats) in &self.modes {
            map.serialize_entry(mode, stats)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::dispatch_stats;
    use crate::testing_utils::fixtures;
    use serde_json::json;

    #[test]
    fn test_player_stats_fixture() {
        let stats = dispatch_stats(fixtures::player_stats()).unwrap();

        let blitz = stats.get("chess_blitz").and_then(ModeStats::as_chess).unwrap();
        assert_eq!(blitz.last.rating, 1500);
        assert_eq!(blitz.record.games(), 16);
        assert_eq!(blitz.tournament, None);

        let tactics = stats.get("tactics").and_then(ModeStats::as_rating_only).unwrap();
        assert_eq!(tactics.highest.map(|log| log.rating), Some(2000));
        assert_eq!(tactics.lowest, None);

        assert!(matches!(stats.get("fide"), Some(ModeStats::Untyped(_))));
        assert_eq!(stats.get("chess_bullet"), None);
    }

    #[test]
    fn test_player_stats_serializes_as_map_in_order() {
        let stats = dispatch_stats(fixtures::player_stats()).unwrap();
        let json = serde_json::to_value(&stats).unwrap();

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        let names: Vec<&str> = stats.names().collect();
        assert_eq!(keys, names);
        assert_eq!(json["fide"], json!(2100));
    }
}
