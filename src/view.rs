//! Presentation model shared by the terminal UI and the replay command.

use timetravel_engine::GameState;

/// One jump-to entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Text shown for the entry.
    pub label: String,
    /// Whether the cursor is at this step.
    pub current: bool,
}

/// Builds the move list in display order.
pub fn move_entries(state: &GameState, reversed: bool) -> Vec<MoveEntry> {
    let mut entries: Vec<_> = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveEntry {
            step,
            label: entry.label(step),
            current: step == state.step_number(),
        })
        .collect();

    if reversed {
        entries.reverse();
    }
    entries
}
