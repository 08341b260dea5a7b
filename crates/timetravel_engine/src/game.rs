//! Game state machine with time travel.
//!
//! Every operation takes `&self` and returns the next state; the previous
//! value is never mutated. Invalid requests return an equal state rather
//! than an error.

use crate::history::{History, Move};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::rules::Winner;
use crate::types::{Board, BoardSize, Coordinates, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of the board at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Board is full with no winner.
    #[display("Tie game")]
    Tie,
    /// Game continues with the given player to move.
    #[display("Next player: {_0}")]
    InProgress(Player),
}

impl GameStatus {
    /// Checks if no further moves are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Complete game state: history, cursor, and board size.
///
/// Deserialization rejects any state that breaks the game invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step_number: usize,
    pub(crate) board_size: BoardSize,
}

/// Unvalidated wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRepr {
    history: History,
    step_number: usize,
    board_size: BoardSize,
}

/// A deserialized state that breaks one or more game invariants.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid game state: {violations}")]
pub struct InvalidStateError {
    /// Descriptions of the violated invariants, joined with `; `.
    pub violations: String,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = InvalidStateError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let state = Self {
            history: repr.history,
            step_number: repr.step_number,
            board_size: repr.board_size,
        };
        match GameInvariants::check_all(&state) {
            Ok(()) => Ok(state),
            Err(violations) => {
                let error = InvalidStateError {
                    violations: describe(&violations),
                };
                warn!(%error, "Rejected deserialized state");
                Err(error)
            }
        }
    }
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl GameState {
    /// Creates a new 3×3 game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_size(BoardSize::default())
    }

    /// Creates a new game on a board of the given size.
    #[instrument]
    pub fn with_size(board_size: BoardSize) -> Self {
        Self {
            history: History::new(board_size),
            step_number: 0,
            board_size,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the cursor into history.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns the board size.
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Returns the player to move, derived from step parity.
    pub fn active_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Returns the history entry at the cursor.
    pub fn current(&self) -> &Move {
        self.history.at(self.step_number)
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns the winner on the current board, if any.
    pub fn winner(&self) -> Option<Winner> {
        self.board().winner()
    }

    /// Derives the status of the current board.
    ///
    /// A winner takes priority over a full board.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(winner) = board.winner() {
            GameStatus::Won(winner.player())
        } else if board.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::InProgress(self.active_player())
        }
    }

    /// Checks if the cursor can move back.
    pub fn can_step_back(&self) -> bool {
        self.step_number > 0
    }

    /// Checks if the cursor can move forward.
    pub fn can_step_forward(&self) -> bool {
        self.step_number < self.history.last_step()
    }

    /// Plays the active player's mark at `index`.
    ///
    /// Ignored when the index is off the board, the square is taken, or the
    /// current board already has a winner. Playing the move already stored
    /// after the cursor replays it; any other move discards the stored future.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.active_player()))]
    pub fn apply_move(&self, index: usize) -> Self {
        let board = self.board();

        if !board.is_empty(index) {
            debug!("Square unavailable, ignoring move");
            return self.clone();
        }
        if board.winner().is_some() {
            debug!("Game already decided, ignoring move");
            return self.clone();
        }

        let mut next_board = board.clone();
        if let Err(e) = next_board.set(index, Square::Occupied(self.active_player())) {
            warn!(error = %e, "Failed to place mark");
            return self.clone();
        }
        let coordinates = Coordinates::from_index(index, self.board_size);

        let mut next = self.clone();
        let changed = next
            .history
            .record(self.step_number, Move::played(next_board, coordinates));
        next.step_number = self.step_number + 1;
        debug!(%coordinates, history_changed = changed, len = next.history.len(), "Move applied");

        next.checked()
    }

    /// Moves the cursor to `step`, clamped to the recorded history.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&self, step: usize) -> Self {
        let last = self.history.last_step();
        if step > last {
            debug!(last, "Clamping jump past end of history");
        }

        let mut next = self.clone();
        next.step_number = step.min(last);
        next.checked()
    }

    /// Moves the cursor one entry back, if possible.
    pub fn step_back(&self) -> Self {
        self.jump_to(self.step_number.saturating_sub(1))
    }

    /// Moves the cursor one entry forward, if possible.
    pub fn step_forward(&self) -> Self {
        self.jump_to(self.step_number + 1)
    }

    /// Starts over on a board of `new_size`, clamped to the supported range.
    ///
    /// Ignored when the clamped size equals the current size.
    #[instrument(skip(self), fields(current = %self.board_size))]
    pub fn resize(&self, new_size: usize) -> Self {
        let board_size = BoardSize::new(new_size);
        if board_size == self.board_size {
            debug!("Board size unchanged");
            return self.clone();
        }

        debug!(%board_size, "Resetting game for new board size");
        Self::with_size(board_size).checked()
    }

    /// Verifies invariants in debug builds.
    fn checked(self) -> Self {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(&self)
        {
            panic!("Invariant violation: {}", describe(&violations));
        }
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
