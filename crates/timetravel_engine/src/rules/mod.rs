//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a slice of squares and a side length. Rules are
//! separated from board storage so the UI can evaluate any board in the
//! history without going through the state machine.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{Line, Winner, compute_winner, lines};
