mod cli;
mod commands;
mod logging;

use chesscom::{ChessCom, ChessError, Config};
use clap::Parser;
use cli::{Args, Command};
use commands::{handle_config_command, run_api_command};
use tracing::{error, info};

fn main() -> Result<(), ChessError> {
    let args = Args::parse();

    if let Command::Config(config_command) = &args.command {
        return handle_config_command(config_command);
    }

    let mut config = Config::load()?;
    if let Some(base_url) = &args.base_url {
        config.api_base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.http_timeout_seconds = timeout;
    }
    config.validate()?;

    let (log_file_path, _guard) = logging::setup_logging(&args, config.log_file_path.as_deref())?;
    info!("Logs are being written to: {log_file_path}");

    let client = ChessCom::new(&config)?;
    run_api_command(&client, &args.command).inspect_err(|e| error!("Command failed: {e}"))
}
