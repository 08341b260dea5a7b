//! Time-travel tic-tac-toe CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use timetravel_tictactoe::{AppConfig, Cli, Command, init_stderr_logging, run_replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command_or_default() {
        Command::Play(args) => {
            let config = config
                .with_board_size(args.board_size)
                .with_reverse_move_order(args.reverse);
            run_tui(&config)
        }
        Command::Replay {
            board_size,
            jump_to,
            json,
            moves,
        } => {
            init_stderr_logging(config.log_filter());
            info!(board_size, moves = moves.len(), "Replaying moves");
            run_replay(board_size, &moves, jump_to, json)
        }
    }
}
