//! Core domain types for N×N tic-tac-toe.

use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

use crate::rules::{self, Winner};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (moves on even steps).
    X,
    /// Player O (moves on odd steps).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is after `step` plies.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// Side length of the board, always within `[BoardSize::MIN, BoardSize::MAX]`.
///
/// Every constructor clamps, so a `BoardSize` never needs validating after
/// the fact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct BoardSize(u8);

impl BoardSize {
    /// Smallest supported board.
    pub const MIN: usize = 3;
    /// Largest supported board.
    pub const MAX: usize = 9;

    /// Creates a board size, clamping to the supported range.
    #[instrument]
    pub fn new(size: usize) -> Self {
        // Clamped to 3..=9, so the cast is lossless.
        Self(size.clamp(Self::MIN, Self::MAX) as u8)
    }

    /// Parses text typed into a board-size field.
    ///
    /// Accepts exactly one ASCII digit and clamps it; anything else is
    /// rejected.
    #[instrument]
    pub fn parse_input(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|digit| Self::new(digit as usize)),
            _ => None,
        }
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Returns the number of squares on a board of this size.
    pub fn area(self) -> usize {
        self.get() * self.get()
    }

    /// Next size up, saturating at [`BoardSize::MAX`].
    pub fn grow(self) -> Self {
        Self::new(self.get() + 1)
    }

    /// Next size down, saturating at [`BoardSize::MIN`].
    pub fn shrink(self) -> Self {
        Self::new(self.get().saturating_sub(1))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::new(Self::MIN)
    }
}

impl From<u8> for BoardSize {
    fn from(size: u8) -> Self {
        Self::new(usize::from(size))
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Row and column of a square, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, new)]
#[display("(row {row}, col {col})")]
pub struct Coordinates {
    row: usize,
    col: usize,
}

impl Coordinates {
    /// Converts a row-major index into coordinates.
    pub fn from_index(index: usize, size: BoardSize) -> Self {
        Self {
            row: index / size.get(),
            col: index % size.get(),
        }
    }

    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Converts back into a row-major index.
    pub fn to_index(self, size: BoardSize) -> usize {
        self.row * size.get() + self.col
    }
}

/// Errors raised when building a board from raw squares.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index does not address a square on this board.
    #[display("Index {index} is out of bounds for a board of {len} squares")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of squares on the board.
        len: usize,
    },
    /// Square count does not match the board size.
    #[display("Expected {expected} squares, got {actual}")]
    ShapeMismatch {
        /// Squares required by the board size.
        expected: usize,
        /// Squares supplied.
        actual: usize,
    },
}

/// N×N board with squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.area()],
        }
    }

    /// Builds a board from raw squares.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(size: BoardSize, squares: Vec<Square>) -> Result<Self, BoardError> {
        if squares.len() != size.area() {
            return Err(BoardError::ShapeMismatch {
                expected: size.area(),
                actual: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Returns the side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let len = self.squares.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfBounds { index, len })?;
        *slot = square;
        Ok(())
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every square is empty.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| s.is_empty())
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Returns the winning player and line, if any.
    pub fn winner(&self) -> Option<Winner> {
        rules::compute_winner(&self.squares, self.size.get())
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.squares)
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.get())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(Square::to_string).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
