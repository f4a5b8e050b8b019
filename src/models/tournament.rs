use super::enums::GameResult;
use crate::error::ChessError;
use crate::normalize::{Fields, Schema, StatusBuckets};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentSettings {
    /// `round_robin` or `swiss`
    #[serde(rename = "type")]
    pub tournament_type: String,
    pub rules: String,
    pub time_class: String,
    pub time_control: String,
    pub is_rated: bool,
    pub is_official: bool,
    pub is_invite_only: bool,
    pub initial_group_size: Option<i64>,
    pub user_advance_count: Option<i64>,
    pub use_tiebreak: bool,
    pub allow_vacation: bool,
    pub winner_places: Option<i64>,
    pub registered_user_count: i64,
    pub games_per_opponent: Option<i64>,
    pub total_rounds: i64,
    pub concurrent_games_per_opponent: Option<i64>,
}

impl Schema for TournamentSettings {
    const NAME: &'static str = "TournamentSettings";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            tournament_type: fields.string("type")?,
            rules: fields.string("rules")?,
            time_class: fields.string("time_class")?,
            time_control: fields.string("time_control")?,
            is_rated: fields.bool("is_rated")?,
            is_official: fields.bool("is_official")?,
            is_invite_only: fields.bool("is_invite_only")?,
            initial_group_size: fields.opt_int("initial_group_size")?,
            user_advance_count: fields.opt_int("user_advance_count")?,
            use_tiebreak: fields.bool("use_tiebreak")?,
            allow_vacation: fields.bool("allow_vacation")?,
            winner_places: fields.opt_int("winner_places")?,
            registered_user_count: fields.int("registered_user_count")?,
            games_per_opponent: fields.opt_int("games_per_opponent")?,
            total_rounds: fields.int("total_rounds")?,
            concurrent_games_per_opponent: fields.opt_int("concurrent_games_per_opponent")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentPlayer {
    pub username: String,
    pub status: String,
}

impl Schema for TournamentPlayer {
    const NAME: &'static str = "TournamentPlayer";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            username: fields.string("username")?,
            status: fields.string("status")?,
        })
    }
}

/// A daily tournament.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    /// Username of the creator
    pub creator: String,
    /// `finished`, `in_progress` or `registration`
    pub status: String,
    pub finish_time: Option<i64>,
    pub settings: TournamentSettings,
    pub players: Vec<TournamentPlayer>,
    /// API URLs of the rounds
    pub rounds: Vec<String>,
}

impl Schema for Tournament {
    const NAME: &'static str = "Tournament";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            name: fields.string("name")?,
            url: fields.string("url")?,
            description: fields.opt_string("description")?,
            creator: fields.string("creator")?,
            status: fields.string("status")?,
            finish_time: fields.opt_int("finish_time")?,
            settings: fields.nested("settings")?,
            players: fields.records("players")?,
            rounds: fields.strings("rounds")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentRoundPlayer {
    pub username: String,
    pub is_advancing: Option<bool>,
}

impl Schema for TournamentRoundPlayer {
    const NAME: &'static str = "TournamentRoundPlayer";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            username: fields.string("username")?,
            is_advancing: fields.opt_bool("is_advancing")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentRound {
    /// API URLs of the groups in this round
    pub groups: Vec<String>,
    pub players: Vec<TournamentRoundPlayer>,
}

impl Schema for TournamentRound {
    const NAME: &'static str = "TournamentRound";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            groups: fields.strings("groups")?,
            players: fields.records("players")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupGamePlayer {
    pub rating: i64,
    pub result: GameResult,
    /// API URL of the player's profile
    pub id: String,
    pub username: String,
}

impl Schema for GroupGamePlayer {
    const NAME: &'static str = "GroupGamePlayer";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            rating: fields.int("rating")?,
            result: fields.enumeration("result")?,
            id: fields.string("id")?,
            username: fields.string("username")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupGame {
    pub white: GroupGamePlayer,
    pub black: GroupGamePlayer,
    pub url: String,
    pub fen: String,
    pub pgn: String,
    pub turn: Option<String>,
    pub move_by: Option<i64>,
    pub draw_offer: Option<String>,
    pub last_activity: Option<i64>,
    pub start_time: i64,
    pub time_control: String,
    pub time_class: String,
    pub rules: String,
    pub eco: Option<String>,
    pub tournament: Option<String>,
}

impl Schema for GroupGame {
    const NAME: &'static str = "GroupGame";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            white: fields.nested("white")?,
            black: fields.nested("black")?,
            url: fields.string("url")?,
            fen: fields.string("fen")?,
            pgn: fields.string("pgn")?,
            turn: fields.opt_string("turn")?,
            move_by: fields.opt_int("move_by")?,
            draw_offer: fields.opt_string("draw_offer")?,
            last_activity: fields.opt_int("last_activity")?,
            start_time: fields.int("start_time")?,
            time_control: fields.string("time_control")?,
            time_class: fields.string("time_class")?,
            rules: fields.string("rules")?,
            eco: fields.opt_string("eco")?,
            tournament: fields.opt_string("tournament")?,
        })
    }
}

/// Standing of one player inside a round group.
///
/// The API sends `points` and `tie_break` as strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupPlayer {
    pub username: String,
    pub points: Option<f64>,
    pub tie_break: Option<f64>,
    pub is_advancing: Option<bool>,
}

impl Schema for GroupPlayer {
    const NAME: &'static str = "GroupPlayer";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            username: fields.string("username")?,
            points: fields.opt_float("points")?,
            tie_break: fields.opt_float("tie_break")?,
            is_advancing: fields.opt_bool("is_advancing")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentRoundGroup {
    pub fair_play_removals: Vec<String>,
    pub games: Vec<GroupGame>,
    pub players: Vec<GroupPlayer>,
}

impl TournamentRoundGroup {
    /// Players ordered by points then tie-break, best first.
    pub fn standings(&self) -> Vec<&GroupPlayer> {
        let mut players: Vec<&GroupPlayer> = self.players.iter().collect();
        players.sort_by(|a, b| {
            let key = |p: &GroupPlayer| (p.points.unwrap_or(0.0), p.tie_break.unwrap_or(0.0));
            key(*b).partial_cmp(&key(*a)).unwrap_or(std::cmp::Ordering::Equal)
        });
        players
    }
}

impl Schema for TournamentRoundGroup {
    const NAME: &'static str = "TournamentRoundGroup";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            fair_play_removals: fields.strings("fair_play_removals")?,
            games: fields.records("games")?,
            players: fields.records("players")?,
        })
    }
}

/// A finished tournament on a player's tournament history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentResult {
    /// Web URL of the tournament
    pub url: String,
    /// API URL of the tournament
    pub id: String,
    pub status: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub points_awarded: Option<i64>,
    pub placement: Option<i64>,
    pub total_players: Option<i64>,
}

impl Schema for TournamentResult {
    const NAME: &'static str = "TournamentResult";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            url: fields.string("url")?,
            id: fields.string("id")?,
            status: fields.string("status")?,
            wins: fields.int("wins")?,
            losses: fields.int("losses")?,
            draws: fields.int("draws")?,
            points_awarded: fields.opt_int("points_awarded")?,
            placement: fields.opt_int("placement")?,
            total_players: fields.opt_int("total_players")?,
        })
    }
}

/// A tournament the player is registered for or still playing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentEntry {
    pub url: String,
    pub id: String,
    pub status: String,
}

impl Schema for TournamentEntry {
    const NAME: &'static str = "TournamentEntry";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            url: fields.string("url")?,
            id: fields.string("id")?,
            status: fields.string("status")?,
        })
    }
}

pub type PlayerTournaments = StatusBuckets<TournamentResult, TournamentEntry>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{from_raw, transform_buckets};
    use crate::testing_utils::fixtures;
    use serde_json::json;

    #[test]
    fn test_tournament_settings_type_key() {
        let tournament: Tournament = from_raw(fixtures::tournament()).unwrap();
        assert_eq!(tournament.settings.tournament_type, "round_robin");
        assert_eq!(tournament.settings.total_rounds, 1);
        assert_eq!(tournament.players.len(), 2);
        assert_eq!(tournament.rounds.len(), 1);

        let json = serde_json::to_value(&tournament.settings).unwrap();
        assert_eq!(json["type"], "round_robin");
        assert!(json.get("tournament_type").is_none());
    }

    #[test]
    fn test_group_standings_coerce_string_scores() {
        let group: TournamentRoundGroup = from_raw(fixtures::round_group()).unwrap();

        assert_eq!(group.players[0].tie_break, Some(12.5));
        assert_eq!(group.players[1].points, Some(2.0));
        assert_eq!(group.games[0].white.id, "https://api.chess.com/pub/player/erik");

        let standings: Vec<&str> = group
            .standings()
            .iter()
            .map(|p| p.username.as_str())
            .collect();
        assert_eq!(standings, ["hikaru", "erik"]);
    }

    #[test]
    fn test_group_player_rejects_non_numeric_points() {
        let err = from_raw::<GroupPlayer>(json!({
            "username": "erik",
            "points": "abc"
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ChessError::TypeCoercion { schema: "GroupPlayer", ref field, .. } if field == "points"
        ));
    }

    #[test]
    fn test_player_tournaments_bucket_types() {
        let tournaments: PlayerTournaments = transform_buckets(json!({
            "finished": [{
                "url": "https://www.chess.com/tournament/t1",
                "@id": "https://api.chess.com/pub/tournament/t1",
                "wins": 3, "losses": 1, "draws": 0,
                "placement": 1, "status": "winner", "total_players": 8
            }],
            "in_progress": [{
                "url": "https://www.chess.com/tournament/t2",
                "@id": "https://api.chess.com/pub/tournament/t2",
                "status": "active"
            }],
            "registered": []
        }))
        .unwrap();

        assert_eq!(tournaments.counts(), (1, 1, 0));
        assert_eq!(tournaments.finished[0].placement, Some(1));
        assert_eq!(tournaments.finished[0].points_awarded, None);
        assert_eq!(
            tournaments.in_progress[0].id,
            "https://api.chess.com/pub/tournament/t2"
        );
    }
}
