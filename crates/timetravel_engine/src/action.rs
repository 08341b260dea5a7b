//! First-class actions for the game state machine.
//!
//! Every user input maps to one `Action`. Actions are values: they can be
//! logged, replayed, and applied to any state.

use crate::game::GameState;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request to change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    /// Play the active player's mark at a square index.
    #[display("play {_0}")]
    Play(usize),
    /// Move the cursor to a history step.
    #[display("jump to {_0}")]
    JumpTo(usize),
    /// Move the cursor one step back.
    #[display("step back")]
    StepBack,
    /// Move the cursor one step forward.
    #[display("step forward")]
    StepForward,
    /// Start over on a board of the given side length.
    #[display("resize to {_0}")]
    Resize(usize),
}

impl GameState {
    /// Applies an action, returning the next state.
    #[instrument(skip(self), fields(step = self.step_number()))]
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::Play(index) => self.apply_move(index),
            Action::JumpTo(step) => self.jump_to(step),
            Action::StepBack => self.step_back(),
            Action::StepForward => self.step_forward(),
            Action::Resize(size) => self.resize(size),
        }
    }

    /// Applies actions in order, starting from this state.
    pub fn apply_all(&self, actions: impl IntoIterator<Item = Action>) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action))
    }
}
