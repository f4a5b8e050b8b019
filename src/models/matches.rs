use super::enums::GameResult;
use crate::error::ChessError;
use crate::normalize::{Fields, Schema, StatusBuckets, coerce_board_scores};
use serde::Serialize;
use serde_json::Value;

/// Settings shared by daily and live team matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSettings {
    pub time_class: String,
    pub time_control: String,
    pub initial_setup: Option<String>,
    /// Game variant (e.g. `chess960`)
    pub rules: String,
    pub min_team_players: Option<i64>,
    pub max_team_players: Option<i64>,
    pub min_required_games: Option<i64>,
    pub min_rating: Option<i64>,
    pub max_rating: Option<i64>,
    pub autostart: Option<bool>,
}

impl Schema for MatchSettings {
    const NAME: &'static str = "MatchSettings";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            time_class: fields.string("time_class")?,
            time_control: fields.string("time_control")?,
            initial_setup: fields.opt_string("initial_setup")?,
            rules: fields.string("rules")?,
            min_team_players: fields.opt_int("min_team_players")?,
            max_team_players: fields.opt_int("max_team_players")?,
            min_required_games: fields.opt_int("min_required_games")?,
            min_rating: fields.opt_int("min_rating")?,
            max_rating: fields.opt_int("max_rating")?,
            autostart: fields.opt_bool("autostart")?,
        })
    }
}

/// A player listed on a team, with the results of both board games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchTeamPlayer {
    pub username: String,
    /// API URL of the player's board
    pub board: String,
    pub rating: Option<i64>,
    /// Glicko RD
    pub rd: Option<f64>,
    pub timeout_percent: Option<f64>,
    pub status: String,
    pub stats: Option<String>,
    pub played_as_white: Option<GameResult>,
    pub played_as_black: Option<GameResult>,
}

impl Schema for MatchTeamPlayer {
    const NAME: &'static str = "MatchTeamPlayer";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            username: fields.string("username")?,
            board: fields.string("board")?,
            rating: fields.opt_int("rating")?,
            rd: fields.opt_float("rd")?,
            timeout_percent: fields.opt_float("timeout_percent")?,
            status: fields.string("status")?,
            stats: fields.opt_string("stats")?,
            played_as_white: fields.opt_enumeration("played_as_white")?,
            played_as_black: fields.opt_enumeration("played_as_black")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchTeam {
    /// API URL of the club profile
    pub id: String,
    /// Web URL of the club profile
    pub url: Option<String>,
    pub name: String,
    /// Team score, adjusted after fair play recalculations
    pub score: f64,
    pub players: Vec<MatchTeamPlayer>,
    pub fair_play_removals: Option<Vec<String>>,
}

impl Schema for MatchTeam {
    const NAME: &'static str = "MatchTeam";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            id: fields.string("id")?,
            url: fields.opt_string("url")?,
            name: fields.string("name")?,
            score: fields.float("score")?,
            players: fields.records("players")?,
            fair_play_removals: fields.opt_strings("fair_play_removals")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchTeams {
    pub team1: MatchTeam,
    pub team2: MatchTeam,
    pub fair_play_removals: Option<Vec<String>>,
}

impl Schema for MatchTeams {
    const NAME: &'static str = "MatchTeams";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            team1: fields.nested("team1")?,
            team2: fields.nested("team2")?,
            fair_play_removals: fields.opt_strings("fair_play_removals")?,
        })
    }
}

/// A daily team match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMatch {
    /// API URL of this match, when the payload carries one
    pub id: Option<String>,
    pub name: String,
    /// Web URL of this match
    pub url: String,
    pub description: Option<String>,
    /// Manual or automatic start time; absent while registration is open
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub settings: MatchSettings,
    /// `registration`, `in_progress` or `finished`
    pub status: String,
    pub boards: i64,
    pub teams: MatchTeams,
}

impl Schema for DailyMatch {
    const NAME: &'static str = "DailyMatch";
    const OPTIONALLY_IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            id: fields.opt_string("id")?,
            name: fields.string("name")?,
            url: fields.string("url")?,
            description: fields.opt_string("description")?,
            start_time: fields.opt_int("start_time")?,
            end_time: fields.opt_int("end_time")?,
            settings: fields.nested("settings")?,
            status: fields.string("status")?,
            boards: fields.int("boards")?,
            teams: fields.nested("teams")?,
        })
    }
}

/// A live team match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveMatch {
    pub id: String,
    pub name: String,
    pub url: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub status: String,
    pub boards: i64,
    pub settings: MatchSettings,
    pub teams: MatchTeams,
}

impl Schema for LiveMatch {
    const NAME: &'static str = "LiveMatch";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            id: fields.string("id")?,
            name: fields.string("name")?,
            url: fields.string("url")?,
            start_time: fields.int("start_time")?,
            end_time: fields.opt_int("end_time")?,
            status: fields.string("status")?,
            boards: fields.int("boards")?,
            settings: fields.nested("settings")?,
            teams: fields.nested("teams")?,
        })
    }
}

/// Scores of the two players on one board, in payload order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoardScore {
    pub player1: f64,
    pub player2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBoardPlayer {
    pub username: String,
    /// Rating at the start of the game
    pub rating: i64,
    /// Present once the game is finished
    pub result: Option<GameResult>,
    /// API URL of the player's profile
    pub id: String,
    /// API URL of the player's club
    pub team: Option<String>,
}

impl Schema for MatchBoardPlayer {
    const NAME: &'static str = "MatchBoardPlayer";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            username: fields.string("username")?,
            rating: fields.int("rating")?,
            result: fields.opt_enumeration("result")?,
            id: fields.string("id")?,
            team: fields.opt_string("team")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBoardGame {
    pub white: MatchBoardPlayer,
    pub black: MatchBoardPlayer,
    pub url: String,
    pub fen: String,
    pub pgn: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub time_control: String,
    pub time_class: String,
    pub rules: String,
    /// URL of the ECO opening
    pub eco: Option<String>,
    /// API URL of the team match
    #[serde(rename = "match")]
    pub match_url: Option<String>,
    pub rated: Option<bool>,
}

impl Schema for MatchBoardGame {
    const NAME: &'static str = "MatchBoardGame";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            white: fields.nested("white")?,
            black: fields.nested("black")?,
            url: fields.string("url")?,
            fen: fields.string("fen")?,
            pgn: fields.opt_string("pgn")?,
            start_time: fields.opt_int("start_time")?,
            end_time: fields.opt_int("end_time")?,
            time_control: fields.string("time_control")?,
            time_class: fields.string("time_class")?,
            rules: fields.string("rules")?,
            eco: fields.opt_string("eco")?,
            match_url: fields.opt_string("match")?,
            rated: fields.opt_bool("rated")?,
        })
    }
}

/// One board of a team match: the two games and the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBoard {
    pub board_scores: BoardScore,
    pub games: Vec<MatchBoardGame>,
}

impl Schema for MatchBoard {
    const NAME: &'static str = "MatchBoard";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        let board_scores = match fields.raw("board_scores")? {
            Value::Object(scores) => coerce_board_scores(scores.into_iter().collect())?,
            other => {
                return Err(ChessError::type_coercion(
                    Self::NAME,
                    "board_scores",
                    "an object",
                    other.to_string(),
                ));
            }
        };

        Ok(Self {
            board_scores,
            games: fields.records("games")?,
        })
    }
}

/// A player's results in one team match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    pub played_as_white: Option<GameResult>,
    pub played_as_black: Option<GameResult>,
}

impl Schema for MatchResult {
    const NAME: &'static str = "MatchResult";

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            played_as_white: fields.opt_enumeration("played_as_white")?,
            played_as_black: fields.opt_enumeration("played_as_black")?,
        })
    }
}

/// A team match as listed on a player's match history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMatch {
    pub name: String,
    /// Web URL of the match
    pub url: String,
    /// API URL of the match
    pub id: String,
    /// API URL of the player's club
    pub club: String,
    pub results: Option<MatchResult>,
    /// API URL of the player's board
    pub board: Option<String>,
}

impl Schema for PlayerMatch {
    const NAME: &'static str = "PlayerMatch";
    const IDENTIFIED: bool = true;

    fn build(fields: &mut Fields) -> Result<Self, ChessError> {
        Ok(Self {
            name: fields.string("name")?,
            url: fields.string("url")?,
            id: fields.string("id")?,
            club: fields.string("club")?,
            results: fields.opt_nested("results")?,
            board: fields.opt_string("board")?,
        })
    }
}

pub type PlayerMatches = StatusBuckets<PlayerMatch>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::from_raw;
    use crate::testing_utils::fixtures;
    use serde_json::json;

    #[test]
    fn test_daily_match_inlines_teams_and_players() {
        let daily: DailyMatch = from_raw(fixtures::daily_match()).unwrap();

        assert_eq!(
            daily.id.as_deref(),
            Some("https://api.chess.com/pub/match/12803")
        );
        assert_eq!(daily.settings.rules, "chess");
        assert_eq!(daily.settings.autostart, Some(false));
        assert_eq!(daily.settings.min_rating, None);

        let team1 = &daily.teams.team1;
        assert_eq!(team1.id, "https://api.chess.com/pub/club/team-australia");
        assert_eq!(team1.score, 1.5);
        assert_eq!(team1.players.len(), 1);
        assert_eq!(team1.players[0].played_as_white, Some(GameResult::Win));
        assert_eq!(team1.players[0].played_as_black, Some(GameResult::Agreed));

        assert_eq!(daily.teams.team2.players[0].played_as_white, None);
    }

    #[test]
    fn test_daily_match_without_self_reference() {
        let mut payload = fixtures::daily_match();
        payload.as_object_mut().unwrap().remove("@id");

        let daily: DailyMatch = from_raw(payload).unwrap();
        assert_eq!(daily.id, None);
        assert_eq!(daily.name, "Friendly 5|2");
        assert_eq!(
            daily.teams.team1.id,
            "https://api.chess.com/pub/club/team-australia"
        );
    }

    #[test]
    fn test_team_without_identifier_fails() {
        let mut payload = fixtures::daily_match();
        payload["teams"]["team2"]
            .as_object_mut()
            .unwrap()
            .remove("@id");
        assert!(matches!(
            from_raw::<DailyMatch>(payload),
            Err(ChessError::MissingIdentifier { schema: "MatchTeam" })
        ));
    }

    #[test]
    fn test_unknown_game_result_rejected() {
        let mut payload = fixtures::daily_match();
        payload["teams"]["team1"]["players"][0]["played_as_white"] = json!("flagged");
        assert!(matches!(
            from_raw::<DailyMatch>(payload),
            Err(ChessError::InvalidEnumValue { schema: "MatchTeamPlayer", .. })
        ));
    }

    #[test]
    fn test_match_board_collapses_scores() {
        let board: MatchBoard = from_raw(fixtures::match_board()).unwrap();

        assert_eq!(board.board_scores, BoardScore { player1: 1.5, player2: 0.5 });
        assert_eq!(board.games.len(), 2);

        let game = &board.games[0];
        assert_eq!(game.white.id, "https://api.chess.com/pub/player/erik");
        assert_eq!(game.black.result, Some(GameResult::Resigned));
        assert_eq!(
            game.match_url.as_deref(),
            Some("https://api.chess.com/pub/match/12803")
        );

        let json = serde_json::to_value(game).unwrap();
        assert!(json.get("match").is_some());
        assert!(json["white"].get("@id").is_none());
    }

    #[test]
    fn test_match_board_with_three_scores() {
        let mut payload = fixtures::match_board();
        payload["board_scores"]["third"] = json!(0);
        assert!(matches!(
            from_raw::<MatchBoard>(payload),
            Err(ChessError::ShapeMismatch { found: 3, .. })
        ));
    }

    #[test]
    fn test_player_match_optional_results() {
        let finished: PlayerMatch = from_raw(json!({
            "name": "Friendly",
            "url": "https://www.chess.com/club/matches/1",
            "@id": "https://api.chess.com/pub/match/1",
            "club": "https://api.chess.com/pub/club/x",
            "results": {"played_as_white": "win"},
            "board": "https://api.chess.com/pub/match/1/3"
        }))
        .unwrap();
        let results = finished.results.unwrap();
        assert_eq!(results.played_as_white, Some(GameResult::Win));
        assert_eq!(results.played_as_black, None);

        let registered: PlayerMatch = from_raw(json!({
            "name": "Friendly",
            "url": "https://www.chess.com/club/matches/2",
            "@id": "https://api.chess.com/pub/match/2",
            "club": "https://api.chess.com/pub/club/x"
        }))
        .unwrap();
        assert_eq!(registered.results, None);
        assert_eq!(registered.board, None);
    }
}
