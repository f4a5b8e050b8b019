//! URL building utilities for API endpoints
//!
//! Every builder takes the API base (normally [`DEFAULT_API_BASE_URL`]) and
//! expects already-validated path segments.
//!
//! [`DEFAULT_API_BASE_URL`]: crate::constants::DEFAULT_API_BASE_URL

/// Builds the URL of a club profile.
///
/// # Example
/// ```
/// use chesscom::api::build_club_url;
///
/// let url = build_club_url("https://api.chess.com/pub", "chess-com-developer-community");
/// assert_eq!(url, "https://api.chess.com/pub/club/chess-com-developer-community");
/// ```
pub fn build_club_url(base: &str, club_id: &str) -> String {
    format!("{base}/club/{club_id}")
}

pub fn build_club_members_url(base: &str, club_id: &str) -> String {
    format!("{base}/club/{club_id}/members")
}

pub fn build_club_matches_url(base: &str, club_id: &str) -> String {
    format!("{base}/club/{club_id}/matches")
}

/// Builds the URL of a country profile.
///
/// # Example
/// ```
/// use chesscom::api::build_country_url;
///
/// let url = build_country_url("https://api.chess.com/pub", "AU");
/// assert_eq!(url, "https://api.chess.com/pub/country/AU");
/// ```
pub fn build_country_url(base: &str, code: &str) -> String {
    format!("{base}/country/{code}")
}

pub fn build_country_players_url(base: &str, code: &str) -> String {
    format!("{base}/country/{code}/players")
}

pub fn build_country_clubs_url(base: &str, code: &str) -> String {
    format!("{base}/country/{code}/clubs")
}

pub fn build_leaderboards_url(base: &str) -> String {
    format!("{base}/leaderboards")
}

/// Builds the URL of a daily team match.
///
/// # Example
/// ```
/// use chesscom::api::{build_daily_match_board_url, build_daily_match_url};
///
/// let base = "https://api.chess.com/pub";
/// assert_eq!(build_daily_match_url(base, "12803"), "https://api.chess.com/pub/match/12803");
/// assert_eq!(
///     build_daily_match_board_url(base, "12803", 1),
///     "https://api.chess.com/pub/match/12803/1"
/// );
/// ```
pub fn build_daily_match_url(base: &str, match_id: &str) -> String {
    format!("{base}/match/{match_id}")
}

pub fn build_daily_match_board_url(base: &str, match_id: &str, board: u32) -> String {
    format!("{base}/match/{match_id}/{board}")
}

pub fn build_live_match_url(base: &str, match_id: &str) -> String {
    format!("{base}/match/live/{match_id}")
}

pub fn build_live_match_board_url(base: &str, match_id: &str, board: u32) -> String {
    format!("{base}/match/live/{match_id}/{board}")
}

/// Builds the URL of a player profile.
///
/// # Example
/// ```
/// use chesscom::api::build_player_url;
///
/// let url = build_player_url("https://api.chess.com/pub", "erik");
/// assert_eq!(url, "https://api.chess.com/pub/player/erik");
/// ```
pub fn build_player_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}")
}

pub fn build_player_clubs_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}/clubs")
}

pub fn build_player_tournaments_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}/tournaments")
}

pub fn build_player_matches_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}/matches")
}

pub fn build_player_is_online_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}/is-online")
}

pub fn build_player_stats_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}/stats")
}

pub fn build_player_current_games_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}/games")
}

pub fn build_player_to_move_games_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}/games/to-move")
}

pub fn build_player_archives_url(base: &str, username: &str) -> String {
    format!("{base}/player/{username}/games/archives")
}

/// Builds the URL of a monthly game archive; year and month are zero padded.
///
/// # Example
/// ```
/// use chesscom::api::build_monthly_archive_url;
///
/// let url = build_monthly_archive_url("https://api.chess.com/pub", "erik", 2020, 5);
/// assert_eq!(url, "https://api.chess.com/pub/player/erik/games/2020/05");
/// ```
pub fn build_monthly_archive_url(base: &str, username: &str, year: u32, month: u32) -> String {
    format!("{base}/player/{username}/games/{year:04}/{month:02}")
}

pub fn build_monthly_pgn_url(base: &str, username: &str, year: u32, month: u32) -> String {
    format!("{}/pgn", build_monthly_archive_url(base, username, year, month))
}

pub fn build_daily_puzzle_url(base: &str) -> String {
    format!("{base}/puzzle")
}

pub fn build_random_puzzle_url(base: &str) -> String {
    format!("{base}/puzzle/random")
}

pub fn build_streamers_url(base: &str) -> String {
    format!("{base}/streamers")
}

/// Builds the URL listing every player holding a title.
///
/// # Example
/// ```
/// use chesscom::api::build_titled_url;
///
/// let url = build_titled_url("https://api.chess.com/pub", "GM");
/// assert_eq!(url, "https://api.chess.com/pub/titled/GM");
/// ```
pub fn build_titled_url(base: &str, title: &str) -> String {
    format!("{base}/titled/{title}")
}

pub fn build_tournament_url(base: &str, tournament_id: &str) -> String {
    format!("{base}/tournament/{tournament_id}")
}

pub fn build_tournament_round_url(base: &str, tournament_id: &str, round: u32) -> String {
    format!("{base}/tournament/{tournament_id}/{round}")
}

/// Builds the URL of one group inside a tournament round.
///
/// # Example
/// ```
/// use chesscom::api::build_tournament_round_group_url;
///
/// let url = build_tournament_round_group_url("https://api.chess.com/pub", "-33rd-chesscom-quick-knockouts-1401-1600", 1, 2);
/// assert_eq!(
///     url,
///     "https://api.chess.com/pub/tournament/-33rd-chesscom-quick-knockouts-1401-1600/1/2"
/// );
/// ```
pub fn build_tournament_round_group_url(
    base: &str,
    tournament_id: &str,
    round: u32,
    group: u32,
) -> String {
    format!("{base}/tournament/{tournament_id}/{round}/{group}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.chess.com/pub";

    #[test]
    fn test_player_game_urls() {
        assert_eq!(
            build_player_to_move_games_url(BASE, "erik"),
            "https://api.chess.com/pub/player/erik/games/to-move"
        );
        assert_eq!(
            build_player_archives_url(BASE, "erik"),
            "https://api.chess.com/pub/player/erik/games/archives"
        );
        assert_eq!(
            build_monthly_pgn_url(BASE, "erik", 2009, 10),
            "https://api.chess.com/pub/player/erik/games/2009/10/pgn"
        );
    }

    #[test]
    fn test_year_is_four_digits() {
        assert_eq!(
            build_monthly_archive_url(BASE, "erik", 999, 1),
            "https://api.chess.com/pub/player/erik/games/0999/01"
        );
    }

    #[test]
    fn test_live_match_urls() {
        assert_eq!(
            build_live_match_url(BASE, "5833"),
            "https://api.chess.com/pub/match/live/5833"
        );
        assert_eq!(
            build_live_match_board_url(BASE, "5833", 5),
            "https://api.chess.com/pub/match/live/5833/5"
        );
    }

    #[test]
    fn test_custom_base() {
        assert_eq!(
            build_streamers_url("http://127.0.0.1:8080"),
            "http://127.0.0.1:8080/streamers"
        );
        assert_eq!(
            build_random_puzzle_url("http://127.0.0.1:8080"),
            "http://127.0.0.1:8080/puzzle/random"
        );
    }
}
