//! Headless replay: apply moves and report the resulting game.

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use timetravel_engine::{Action, BoardSize, GameState, GameStatus, Winner};
use tracing::{debug, info, instrument};

use crate::view::move_entries;

/// Outcome of a replay, as printed by `replay --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    status: GameStatus,
    status_text: String,
    winner: Option<Winner>,
    ignored_moves: Vec<usize>,
    state: GameState,
}

impl ReplayReport {
    /// Returns the final game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the status of the board at the final cursor.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves that left the state unchanged (occupied square, decided game,
    /// or off the board).
    pub fn ignored_moves(&self) -> &[usize] {
        &self.ignored_moves
    }
}

/// Board, status line, winning line, move list, and ignored moves as plain
/// text.
impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.state.board())?;
        writeln!(f)?;
        writeln!(f, "{}", self.status_text)?;
        if let Some(winner) = &self.winner {
            writeln!(f, "Winning line: {:?}", winner.line())?;
        }
        writeln!(f)?;
        for entry in move_entries(&self.state, false) {
            let marker = if entry.current { ">" } else { " " };
            writeln!(f, "{} {}. {}", marker, entry.step, entry.label)?;
        }
        if !self.ignored_moves.is_empty() {
            writeln!(f)?;
            writeln!(f, "Ignored moves: {:?}", self.ignored_moves)?;
        }
        Ok(())
    }
}

/// Plays `moves` on a fresh board, then optionally jumps to a step.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(board_size: usize, moves: &[usize], jump_to: Option<usize>) -> ReplayReport {
    let mut state = GameState::with_size(BoardSize::new(board_size));
    let mut ignored_moves = Vec::new();

    for &index in moves {
        let next = state.apply(Action::Play(index));
        if next == state {
            debug!(index, "Move ignored");
            ignored_moves.push(index);
        }
        state = next;
    }
    if let Some(step) = jump_to {
        state = state.apply(Action::JumpTo(step));
    }

    let status = state.status();
    ReplayReport {
        status,
        status_text: status.to_string(),
        winner: state.winner(),
        ignored_moves,
        state,
    }
}

/// Runs the `replay` command, printing to stdout.
#[instrument(skip(moves))]
pub fn run_replay(board_size: usize, moves: &[usize], jump_to: Option<usize>, json: bool) -> Result<()> {
    let report = replay(board_size, moves, jump_to);
    info!(status = %report.status, ignored = report.ignored_moves.len(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
