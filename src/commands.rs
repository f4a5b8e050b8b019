use crate::cli::{
    ClubCommand, Command, ConfigCommand, CountryCommand, MatchCommand, PlayerCommand,
    PuzzleCommand, TournamentCommand,
};
use chesscom::api::{ChessCom, Transport};
use chesscom::config::Config;
use chesscom::error::ChessError;
use chesscom::models::Title;
use chesscom::pgn::PgnGames;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{self, Write};
use tracing::info;

fn print_json<T: Serialize>(value: &T) -> Result<(), ChessError> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{text}");
    Ok(())
}

fn print_pgn(games: &PgnGames) -> Result<(), ChessError> {
    let mut out = io::stdout().lock();
    let mut count = 0usize;
    for game in games {
        let game = game?;
        for (key, value) in &game.headers {
            writeln!(out, "[{key} \"{value}\"]")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", game.moves.join(" "))?;
        writeln!(out, "{}", game.outcome.as_deref().unwrap_or("*"))?;
        writeln!(out)?;
        count += 1;
    }
    info!("Printed {count} PGN games");
    Ok(())
}

/// Runs one API command and prints its result to stdout.
pub fn run_api_command<T: Transport>(
    client: &ChessCom<T>,
    command: &Command,
) -> Result<(), ChessError> {
    match command {
        Command::Club(op) => {
            let clubs = client.clubs();
            match op {
                ClubCommand::Details { club_id } => print_json(&clubs.details(club_id)?),
                ClubCommand::Members { club_id } => print_json(&clubs.members(club_id)?),
                ClubCommand::Matches { club_id } => print_json(&clubs.matches(club_id)?),
            }
        }
        Command::Country(op) => {
            let countries = client.countries();
            match op {
                CountryCommand::Details { code } => print_json(&countries.details(code)?),
                CountryCommand::Players { code } => print_json(&countries.players(code)?),
                CountryCommand::Clubs { code } => print_json(&countries.clubs(code)?),
            }
        }
        Command::Leaderboards => print_json(&client.leaderboards().all()?),
        Command::Match(op) => {
            let matches = client.matches();
            match op {
                MatchCommand::Daily { match_id } => print_json(&matches.daily(match_id)?),
                MatchCommand::Board { match_id, board } => {
                    print_json(&matches.board(match_id, *board)?)
                }
                MatchCommand::Live { match_id } => print_json(&matches.live(match_id)?),
                MatchCommand::LiveBoard { match_id, board } => {
                    print_json(&matches.live_board(match_id, *board)?)
                }
            }
        }
        Command::Player(op) => {
            let players = client.players();
            match op {
                PlayerCommand::Profile { username } => print_json(&players.profile(username)?),
                PlayerCommand::Clubs { username } => print_json(&players.clubs(username)?),
                PlayerCommand::Tournaments { username } => {
                    print_json(&players.tournaments(username)?)
                }
                PlayerCommand::Matches { username } => print_json(&players.matches(username)?),
                PlayerCommand::Online { username } => print_json(&players.is_online(username)?),
                PlayerCommand::Stats { username } => print_json(&players.stats(username)?),
                PlayerCommand::Games { username } => {
                    print_json(&players.current_games(username)?)
                }
                PlayerCommand::ToMove { username } => {
                    print_json(&players.to_move_games(username)?)
                }
                PlayerCommand::Archives { username } => {
                    print_json(&players.archive_urls(username)?)
                }
                PlayerCommand::Archive {
                    username,
                    year,
                    month,
                } => print_json(&players.monthly_archive(username, *year, *month)?),
                PlayerCommand::Pgn {
                    username,
                    year,
                    month,
                } => print_pgn(&players.monthly_pgn(username, *year, *month)?),
            }
        }
        Command::Puzzle(op) => {
            let puzzles = client.puzzles();
            match op {
                PuzzleCommand::Daily => print_json(&puzzles.daily()?),
                PuzzleCommand::Random => print_json(&puzzles.random()?),
            }
        }
        Command::Streamers => print_json(&client.streamers().all()?),
        Command::Titled { titles } => {
            let titles = titles
                .iter()
                .map(|title| title.parse::<Title>())
                .collect::<Result<Vec<_>, _>>()?;
            let usernames: Map<String, Value> = client
                .titled()
                .usernames_for(&titles)?
                .into_iter()
                .map(|(title, players)| (title.to_string(), Value::from(players)))
                .collect();
            print_json(&usernames)
        }
        Command::Tournament(op) => {
            let tournaments = client.tournaments();
            match op {
                TournamentCommand::Details { tournament_id } => {
                    print_json(&tournaments.details(tournament_id)?)
                }
                TournamentCommand::Round {
                    tournament_id,
                    round,
                } => print_json(&tournaments.round(tournament_id, *round)?),
                TournamentCommand::Group {
                    tournament_id,
                    round,
                    group,
                } => print_json(&tournaments.round_group(tournament_id, *round, *group)?),
            }
        }
        Command::Config(_) => Err(ChessError::config_error(
            "configuration commands do not call the API",
        )),
    }
}

/// Handles `config show` and `config set`.
pub fn handle_config_command(command: &ConfigCommand) -> Result<(), ChessError> {
    let config_path = Config::get_config_path();

    match command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Base URL:       {}", config.api_base_url);
            println!("HTTP Timeout:       {} seconds", config.http_timeout_seconds);
            println!("User Agent:         {}", config.user_agent);
            match &config.log_file_path {
                Some(path) => println!("Log File Location:  {path}"),
                None => println!(
                    "Log File Location:  {}/{} (default)",
                    Config::get_log_dir_path(),
                    chesscom::constants::LOG_FILE_NAME
                ),
            }
            Ok(())
        }
        ConfigCommand::Set {
            api_base_url,
            http_timeout,
            user_agent,
            log_path,
            clear_log_path,
        } => {
            // Start from the file alone so environment overrides are not persisted
            let mut config = if std::path::Path::new(&config_path).exists() {
                Config::load_from_path(&config_path)?
            } else {
                Config::default()
            };

            if let Some(url) = api_base_url {
                config.api_base_url = url.trim_end_matches('/').to_string();
            }
            if let Some(timeout) = http_timeout {
                config.http_timeout_seconds = *timeout;
            }
            if let Some(agent) = user_agent {
                config.user_agent = agent.clone();
            }
            if let Some(path) = log_path {
                config.log_file_path = Some(path.clone());
            }
            if *clear_log_path {
                config.log_file_path = None;
            }

            config.validate()?;
            config.save_to_path(&config_path)?;
            println!("Configuration saved to {config_path}");
            Ok(())
        }
    }
}
