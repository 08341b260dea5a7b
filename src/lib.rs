//! Time-travel tic-tac-toe: a terminal front end over [`timetravel_engine`].
//!
//! # Architecture
//!
//! - **Engine**: pure game state, win detection and history (`timetravel_engine`)
//! - **TUI**: ratatui front end that dispatches actions to a `GameStore`
//! - **Replay**: headless command that applies moves and prints the result
//! - **Config**: TOML settings, overridden by command-line flags
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::replay;
//! use timetravel_engine::{GameStatus, Player};
//!
//! let report = replay(3, &[0, 1, 4, 2, 8], None);
//! assert_eq!(report.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;
mod view;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayReport, replay, run_replay};
pub use tui::{App, AppTransition, Focus, draw, move_cursor, run_tui};
pub use view::{MoveEntry, move_entries};
