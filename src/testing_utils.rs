use crate::api::Transport;
use crate::error::ChessError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [`Transport`] serving canned responses keyed by full URL.
///
/// Every requested URL is recorded, so tests can assert both what was asked
/// for and that invalid input never reached the network. URLs without a
/// canned response fail with [`ChessError::ApiNotFound`].
#[derive(Debug, Default)]
pub struct FakeTransport {
    json: HashMap<String, Value>,
    text: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: impl Into<String>, value: Value) -> Self {
        self.json.insert(url.into(), value);
        self
    }

    pub fn with_text(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.text.insert(url.into(), text.into());
        self
    }

    /// URLs requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn record(&self, url: &str) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
    }
}

impl Transport for FakeTransport {
    fn get_json(&self, url: &str) -> Result<Value, ChessError> {
        self.record(url);
        self.json
            .get(url)
            .cloned()
            .ok_or_else(|| ChessError::api_not_found(url))
    }

    fn get_text(&self, url: &str) -> Result<String, ChessError> {
        self.record(url);
        self.text
            .get(url)
            .cloned()
            .ok_or_else(|| ChessError::api_not_found(url))
    }
}

/// Raw payloads shaped like real API responses.
pub mod fixtures {
    use serde_json::{Value, json};

    pub fn club_details() -> Value {
        json!({
            "@id": "https://api.chess.com/pub/club/chess-com-developer-community",
            "name": "Chess.com Developer Community",
            "club_id": 57796,
            "country": "https://api.chess.com/pub/country/US",
            "average_daily_rating": 1376,
            "members_count": 3364,
            "created": 1511368280,
            "last_activity": 1700830511,
            "visibility": "public",
            "join_request": "https://www.chess.com/club/join/chess-com-developer-community",
            "admin": [
                "https://api.chess.com/pub/player/erik",
                "https://api.chess.com/pub/player/danny"
            ],
            "description": "Public API discussion"
        })
    }

    pub fn club_matches() -> Value {
        json!({
            "finished": [
                {
                    "name": "Team Australia vs Chess.com Developers",
                    "@id": "https://api.chess.com/pub/match/12803",
                    "opponent": "https://api.chess.com/pub/club/team-australia",
                    "result": "win",
                    "start_time": 1500000000,
                    "time_class": "daily"
                },
                {
                    "name": "Rematch",
                    "@id": "https://api.chess.com/pub/match/12804",
                    "opponent": "https://api.chess.com/pub/club/team-australia",
                    "result": "lose",
                    "start_time": 1510000000,
                    "time_class": "daily"
                }
            ],
            "in_progress": [],
            "registered": [
                {
                    "name": "Open Registration",
                    "@id": "https://api.chess.com/pub/match/13000",
                    "opponent": "https://api.chess.com/pub/club/team-usa",
                    "time_class": "daily"
                }
            ]
        })
    }

    fn leaderboard_entry() -> Value {
        json!({
            "player_id": 15448422,
            "@id": "https://api.chess.com/pub/player/hikaru",
            "url": "https://www.chess.com/member/Hikaru",
            "username": "Hikaru",
            "score": 3300,
            "rank": 1,
            "country": "https://api.chess.com/pub/country/US",
            "title": "GM",
            "name": "Hikaru Nakamura",
            "status": "premium",
            "avatar": "https://images.chesscomfiles.com/uploads/v1/user/15448422.jpg",
            "trend_score": {"direction": 1, "delta": 12},
            "flair_code": "diamond_traditional"
        })
    }

    /// Every board empty except `live_blitz`, plus a `lessons` board.
    pub fn leaderboards() -> Value {
        json!({
            "daily": [],
            "daily960": [],
            "live_rapid": [],
            "live_blitz": [leaderboard_entry()],
            "live_bullet": [],
            "live_bughouse": [],
            "live_blitz960": [],
            "live_threecheck": [],
            "live_crazyhouse": [],
            "live_kingofthehill": [],
            "tactics": [],
            "lessons": [{"username": "someone", "score": 1800}]
        })
    }

    fn match_settings() -> Value {
        json!({
            "rules": "chess",
            "time_class": "daily",
            "time_control": "1/259200",
            "min_team_players": 1,
            "min_required_games": 0,
            "autostart": false
        })
    }

    pub fn daily_match() -> Value {
        json!({
            "@id": "https://api.chess.com/pub/match/12803",
            "name": "Friendly 5|2",
            "url": "https://www.chess.com/club/matches/12803",
            "description": "",
            "start_time": 1500000000,
            "settings": match_settings(),
            "status": "finished",
            "boards": 1,
            "teams": {
                "team1": {
                    "@id": "https://api.chess.com/pub/club/team-australia",
                    "url": "https://www.chess.com/club/team-australia",
                    "name": "Team Australia",
                    "score": 1.5,
                    "players": [{
                        "username": "erik",
                        "board": "https://api.chess.com/pub/match/12803/1",
                        "rating": 1500,
                        "rd": 42.3,
                        "timeout_percent": 0,
                        "status": "premium",
                        "played_as_white": "win",
                        "played_as_black": "agreed"
                    }],
                    "fair_play_removals": []
                },
                "team2": {
                    "@id": "https://api.chess.com/pub/club/chess-com-developer-community",
                    "url": "https://www.chess.com/club/chess-com-developer-community",
                    "name": "Chess.com Developer Community",
                    "score": "0.5",
                    "players": [{
                        "username": "hikaru",
                        "board": "https://api.chess.com/pub/match/12803/1",
                        "status": "premium"
                    }]
                }
            }
        })
    }

    fn board_player(username: &str, rating: i64, result: &str) -> Value {
        json!({
            "username": username,
            "rating": rating,
            "result": result,
            "@id": format!("https://api.chess.com/pub/player/{username}"),
            "team": "https://api.chess.com/pub/club/team-australia"
        })
    }

    pub fn match_board() -> Value {
        json!({
            "board_scores": {"erik": 1.5, "hikaru": "0.5"},
            "games": [
                {
                    "white": board_player("erik", 1500, "win"),
                    "black": board_player("hikaru", 1600, "resigned"),
                    "url": "https://www.chess.com/game/daily/1001",
                    "fen": "6k1/5ppp/8/8/8/8/5PPP/3R2K1 b - -",
                    "pgn": "[Event \"Friendly\"]\n\n1. e4 e5 1-0",
                    "start_time": 1500000000,
                    "end_time": 1500500000,
                    "time_control": "1/259200",
                    "time_class": "daily",
                    "rules": "chess",
                    "match": "https://api.chess.com/pub/match/12803",
                    "rated": true
                },
                {
                    "white": board_player("hikaru", 1600, "agreed"),
                    "black": board_player("erik", 1500, "agreed"),
                    "url": "https://www.chess.com/game/daily/1002",
                    "fen": "8/8/8/8/8/8/8/K6k w - -",
                    "time_control": "1/259200",
                    "time_class": "daily",
                    "rules": "chess"
                }
            ]
        })
    }

    pub fn player_profile() -> Value {
        json!({
            "@id": "https://api.chess.com/pub/player/erik",
            "url": "https://www.chess.com/member/erik",
            "username": "erik",
            "player_id": 41,
            "status": "staff",
            "name": "Erik",
            "avatar": "https://images.chesscomfiles.com/uploads/v1/user/41.jpg",
            "location": "Bay Area, CA",
            "country": "https://api.chess.com/pub/country/US",
            "joined": 1178556600,
            "last_online": 1700000000,
            "followers": 5000,
            "is_streamer": true,
            "twitch_url": "https://twitch.tv/erik",
            "verified": false,
            "league": "Legend"
        })
    }

    pub fn archived_game() -> Value {
        json!({
            "white": {
                "rating": 1492,
                "result": "timeout",
                "@id": "https://api.chess.com/pub/player/erik",
                "username": "erik",
                "uuid": "b2b4b9a0-0000-0000-0000-000000000041"
            },
            "black": {
                "rating": 2900,
                "result": "win",
                "@id": "https://api.chess.com/pub/player/hikaru",
                "username": "Hikaru"
            },
            "url": "https://www.chess.com/game/live/5000000",
            "fen": "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq -",
            "pgn": "[Event \"Live Chess\"]\n[White \"erik\"]\n[Black \"Hikaru\"]\n[Result \"0-1\"]\n\n1. e4 e5 2. Nf3 Nc6 0-1",
            "end_time": 1588888888,
            "time_control": "180",
            "time_class": "blitz",
            "rules": "chess",
            "rated": true,
            "eco": "https://www.chess.com/openings/Kings-Pawn-Opening"
        })
    }

    pub fn monthly_archive() -> Value {
        json!({"games": [archived_game()]})
    }

    pub fn player_stats() -> Value {
        json!({
            "chess_daily": {
                "last": {"rating": 1400, "date": 1600000000, "rd": 80},
                "best": {
                    "rating": 1450,
                    "date": 1590000000,
                    "game": "https://www.chess.com/game/daily/1"
                },
                "record": {"win": 4, "loss": 2, "draw": 1, "time_per_move": 6000, "timeout_percent": 0},
                "tournament": {"count": 2, "withdraw": 0, "points": 3, "highest_finish": 1}
            },
            "chess_blitz": {
                "last": {"rating": 1500, "date": 1700000000, "rd": 45},
                "best": {
                    "rating": 1620,
                    "date": 1650000000,
                    "game": "https://www.chess.com/game/live/2"
                },
                "record": {"win": 10, "loss": 5, "draw": 1}
            },
            "fide": 2100,
            "tactics": {
                "highest": {"rating": 2000, "date": 1600000000}
            }
        })
    }

    fn tournament_settings() -> Value {
        json!({
            "type": "round_robin",
            "rules": "chess",
            "time_class": "daily",
            "time_control": "1/172800",
            "is_rated": true,
            "is_official": false,
            "is_invite_only": false,
            "initial_group_size": 2,
            "user_advance_count": 1,
            "use_tiebreak": true,
            "allow_vacation": false,
            "winner_places": 1,
            "registered_user_count": 2,
            "games_per_opponent": 2,
            "total_rounds": 1,
            "concurrent_games_per_opponent": 1
        })
    }

    pub fn tournament() -> Value {
        json!({
            "name": "-33rd Chess.com Quick Knockouts 1401-1600",
            "url": "https://www.chess.com/tournament/-33rd-chesscom-quick-knockouts-1401-1600",
            "description": "",
            "creator": "erik",
            "status": "finished",
            "finish_time": 1700000000,
            "settings": tournament_settings(),
            "players": [
                {"username": "erik", "status": "eliminated"},
                {"username": "hikaru", "status": "winner"}
            ],
            "rounds": [
                "https://api.chess.com/pub/tournament/-33rd-chesscom-quick-knockouts-1401-1600/1"
            ]
        })
    }

    fn group_game_player(username: &str, rating: i64, result: &str) -> Value {
        json!({
            "rating": rating,
            "result": result,
            "@id": format!("https://api.chess.com/pub/player/{username}"),
            "username": username
        })
    }

    pub fn round_group() -> Value {
        json!({
            "fair_play_removals": [],
            "games": [
                {
                    "white": group_game_player("erik", 1500, "resigned"),
                    "black": group_game_player("hikaru", 1580, "win"),
                    "url": "https://www.chess.com/game/daily/2001",
                    "fen": "8/8/8/8/8/8/8/K6k w - -",
                    "pgn": "[Event \"Quick Knockouts\"]\n\n1. d4 d5 0-1",
                    "start_time": 1690000000,
                    "time_control": "1/172800",
                    "time_class": "daily",
                    "rules": "chess",
                    "tournament": "https://api.chess.com/pub/tournament/-33rd-chesscom-quick-knockouts-1401-1600"
                }
            ],
            "players": [
                {"username": "erik", "points": 1, "tie_break": "12.5", "is_advancing": false},
                {"username": "hikaru", "points": "2", "tie_break": 4, "is_advancing": true}
            ]
        })
    }
}
