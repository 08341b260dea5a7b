//! Observable container for the current game state.
//!
//! The store owns the single current [`GameState`]. Dispatching an action
//! replaces it with the next state and notifies every observer, so a
//! renderer only has to subscribe and redraw.

use crate::action::Action;
use crate::game::GameState;
use std::fmt;
use tracing::{debug, instrument};

/// Receives every new state published by a [`GameStore`].
pub trait Observer {
    /// Called after the store replaces its state.
    fn on_state_changed(&mut self, state: &GameState);
}

impl<F> Observer for F
where
    F: FnMut(&GameState),
{
    fn on_state_changed(&mut self, state: &GameState) {
        self(state)
    }
}

/// Handle returned by [`GameStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Holds the current state and publishes replacements.
pub struct GameStore {
    state: GameState,
    observers: Vec<(SubscriptionId, Box<dyn Observer>)>,
    next_id: usize,
}

impl GameStore {
    /// Creates a store holding `state`.
    #[instrument(skip(state), fields(board_size = %state.board_size()))]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers an observer, called in subscription order.
    #[instrument(skip(self, observer))]
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(?id, observers = self.observers.len(), "Observer subscribed");
        id
    }

    /// Removes an observer. Returns whether it was registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        before != self.observers.len()
    }

    /// Applies `action` and publishes the result.
    ///
    /// Returns whether the state changed. Observers are not called when the
    /// action was a no-op.
    #[instrument(skip(self), fields(step = self.state.step_number()))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.state.apply(action);
        if next == self.state {
            debug!(%action, "Action left state unchanged");
            return false;
        }

        self.state = next;
        debug!(
            %action,
            step = self.state.step_number(),
            history = self.state.history().len(),
            "State replaced"
        );
        for (_, observer) in &mut self.observers {
            observer.on_state_changed(&self.state);
        }
        true
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}

impl fmt::Debug for GameStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
