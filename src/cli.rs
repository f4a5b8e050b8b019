use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Command-line client for the public Chess.com API
///
/// Every command prints the validated response as pretty JSON, except PGN
/// downloads which print each game's headers and moves.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Override the API base URL for this run
    #[arg(long = "base-url", global = true, help_heading = "Connection")]
    pub base_url: Option<String>,

    /// Override the HTTP timeout in seconds for this run
    #[arg(long = "timeout", global = true, help_heading = "Connection")]
    pub timeout: Option<u64>,

    /// Also write logs to stderr
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Club profiles, members and team matches
    #[command(subcommand)]
    Club(ClubCommand),

    /// Country profiles and their players and clubs
    #[command(subcommand)]
    Country(CountryCommand),

    /// Top players of every leaderboard
    Leaderboards,

    /// Daily and live team matches
    #[command(name = "match", subcommand)]
    Match(MatchCommand),

    /// Player profiles, games and statistics
    #[command(subcommand)]
    Player(PlayerCommand),

    /// Daily and random puzzles
    #[command(subcommand)]
    Puzzle(PuzzleCommand),

    /// Chess.com streamers
    Streamers,

    /// Usernames of titled players
    Titled {
        /// One or more titles (GM, WGM, IM, WIM, FM, WFM, NM, WNM, CM, WCM)
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Daily tournaments, rounds and groups
    #[command(subcommand)]
    Tournament(TournamentCommand),

    /// Show or change the stored configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ClubCommand {
    Details { club_id: String },
    Members { club_id: String },
    Matches { club_id: String },
}

#[derive(Subcommand, Debug)]
pub enum CountryCommand {
    Details { code: String },
    Players { code: String },
    Clubs { code: String },
}

#[derive(Subcommand, Debug)]
pub enum MatchCommand {
    Daily { match_id: String },
    Board { match_id: String, board: u32 },
    Live { match_id: String },
    LiveBoard { match_id: String, board: u32 },
}

#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
    Profile { username: String },
    Clubs { username: String },
    Tournaments { username: String },
    Matches { username: String },
    Online { username: String },
    Stats { username: String },
    Games { username: String },
    ToMove { username: String },
    Archives { username: String },
    /// Games finished in one month
    Archive {
        username: String,
        year: u32,
        month: u32,
    },
    /// Games finished in one month, decoded from PGN
    Pgn {
        username: String,
        year: u32,
        month: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum PuzzleCommand {
    Daily,
    Random,
}

#[derive(Subcommand, Debug)]
pub enum TournamentCommand {
    Details { tournament_id: String },
    Round { tournament_id: String, round: u32 },
    Group {
        tournament_id: String,
        round: u32,
        group: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file location and current settings
    Show,
    /// Update stored settings
    Set {
        #[arg(long = "api-base-url")]
        api_base_url: Option<String>,
        #[arg(long = "http-timeout")]
        http_timeout: Option<u64>,
        #[arg(long = "user-agent")]
        user_agent: Option<String>,
        /// Persistent log file location
        #[arg(long = "log-path", conflicts_with = "clear_log_path")]
        log_path: Option<String>,
        /// Revert to the default log location
        #[arg(long = "clear-log-path")]
        clear_log_path: bool,
    },
}
