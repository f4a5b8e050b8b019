//! Typed records for every resource the public API serves.

pub mod club;
pub mod country;
pub mod enums;
pub mod leaderboard;
pub mod matches;
pub mod player;
pub mod puzzle;
pub mod stats;
pub mod streamer;
pub mod tournament;

pub use club::{ClubDetails, ClubMatch, ClubMatches, ClubMember, ClubMembers};
pub use country::CountryDetails;
pub use enums::{AccountStatus, ApiEnum, GameResult, Title};
pub use leaderboard::{LeaderboardEntry, LeaderboardKind, Leaderboards, Trend};
pub use matches::{
    BoardScore, DailyMatch, LiveMatch, MatchBoard, MatchBoardGame, MatchBoardPlayer, MatchResult,
    MatchSettings, MatchTeam, MatchTeamPlayer, MatchTeams, PlayerMatch, PlayerMatches,
};
pub use player::{
    ArchivedGame, CurrentDailyGame, GamePlayer, PlayerClub, PlayerProfile, ToMoveDailyGame,
};
pub use puzzle::Puzzle;
pub use stats::{
    BestRating, ChessModeStats, GamesRecord, LastRating, ModeStats, PlayerStats, RatingLog,
    RatingOnlyStats, TournamentsSummary,
};
pub use streamer::Streamer;
pub use tournament::{
    GroupGame, GroupGamePlayer, GroupPlayer, PlayerTournaments, Tournament, TournamentEntry,
    TournamentPlayer, TournamentResult, TournamentRound, TournamentRoundGroup,
    TournamentRoundPlayer, TournamentSettings,
};
