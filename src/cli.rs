//! Command-line interface for timetravel_tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Time-travel tic-tac-toe on boards from 3×3 to 9×9
#[derive(Parser, Debug)]
#[command(name = "timetravel_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Side length of the board (clamped to 3-9)
        #[arg(short, long, default_value = "3")]
        board_size: usize,

        /// Move the cursor to this step after applying the moves
        #[arg(long)]
        jump_to: Option<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Square indices to play, in row-major order
        moves: Vec<usize>,
    },
}

/// Options for the terminal UI.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Side length of the opening board (overrides the config file)
    #[arg(short, long)]
    pub board_size: Option<usize>,

    /// List moves newest first
    #[arg(long)]
    pub reverse: bool,
}

impl Cli {
    /// Returns the command to run, falling back to `play` with defaults.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}
