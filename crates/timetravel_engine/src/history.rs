//! Move history with branch discard.
//!
//! History is a single linear timeline. Playing from an earlier step either
//! replays the stored continuation (when the move is identical) or discards
//! it and starts a new branch.

use crate::types::{Board, BoardSize, Coordinates};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A history entry: the board after a play and where the play happened.
///
/// The opening entry has no coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub(crate) board: Board,
    pub(crate) coordinates: Option<Coordinates>,
}

impl Move {
    /// The empty opening board.
    #[instrument]
    pub fn start(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            coordinates: None,
        }
    }

    /// A board reached by playing at `coordinates`.
    pub fn played(board: Board, coordinates: Coordinates) -> Self {
        Self {
            board,
            coordinates: Some(coordinates),
        }
    }

    /// Returns the resulting board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns where the move was played, or `None` for the opening entry.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Label for the jump-to control of this entry at position `step`.
    pub fn label(&self, step: usize) -> String {
        match self.coordinates {
            Some(coordinates) => format!("Go to move #{} {}", step, coordinates),
            None => "Go to game start".to_string(),
        }
    }
}

/// Ordered moves, opening entry first.
///
/// The opening entry is stored apart from the later moves, so a history is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct History {
    pub(crate) start: Move,
    pub(crate) later: Vec<Move>,
}

impl History {
    /// Creates a history holding only the empty opening board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            start: Move::start(size),
            later: Vec::new(),
        }
    }

    /// Number of entries, including the opening board.
    pub fn len(&self) -> usize {
        self.later.len() + 1
    }

    /// A history always holds its opening entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Gets the entry at `step`.
    pub fn get(&self, step: usize) -> Option<&Move> {
        match step {
            0 => Some(&self.start),
            _ => self.later.get(step - 1),
        }
    }

    /// Gets the entry at `step`, or the last entry when `step` is past the end.
    pub fn at(&self, step: usize) -> &Move {
        self.get(step).unwrap_or_else(|| self.last())
    }

    /// Returns the opening entry.
    pub fn first(&self) -> &Move {
        &self.start
    }

    /// Returns the most recent entry.
    pub fn last(&self) -> &Move {
        self.later.last().unwrap_or(&self.start)
    }

    /// Index of the last entry.
    pub fn last_step(&self) -> usize {
        self.later.len()
    }

    /// Iterates over entries in play order.
    pub fn iter(&self) -> Iter<'_> {
        std::iter::once(&self.start).chain(self.later.iter())
    }

    /// Records `next` as the continuation of `step`.
    ///
    /// Keeps the stored continuation when it equals `next`; otherwise drops
    /// everything after `step` and appends `next`. Returns whether history
    /// changed.
    #[instrument(skip(self, next), fields(len = self.len()))]
    pub(crate) fn record(&mut self, step: usize, next: Move) -> bool {
        if self.get(step + 1) == Some(&next) {
            debug!("Replaying stored continuation");
            return false;
        }

        let discarded = self.later.len().saturating_sub(step);
        if discarded > 0 {
            debug!(discarded, "Discarding future branch");
        }
        self.later.truncate(step);
        self.later.push(next);
        true
    }
}

/// Iterator over history entries.
pub type Iter<'a> = std::iter::Chain<std::iter::Once<&'a Move>, std::slice::Iter<'a, Move>>;

impl<'a> IntoIterator for &'a History {
    type Item = &'a Move;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
