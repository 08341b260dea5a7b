//! Board shape invariant: every board in history matches the board size.

use super::Invariant;
use crate::game::GameState;

/// Invariant: every history entry holds `size²` squares of the current size.
///
/// Resizing replaces the whole history, so no entry may carry a stale size.
pub struct BoardShapeInvariant;

impl Invariant<GameState> for BoardShapeInvariant {
    fn holds(state: &GameState) -> bool {
        let size = state.board_size();
        state.history().iter().all(|entry| {
            entry.board().size() == size && entry.board().squares().len() == size.area()
        })
    }

    fn description() -> &'static str {
        "Every board in history matches the current board size"
    }
}
