//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::Cell;
use std::rc::Rc;
use strum::{EnumIter, IntoEnumIterator};
use timetravel_engine::{Action, BoardSize, GameState, GameStore};
use tracing::{debug, info, instrument};

use super::input::move_cursor;
use crate::config::AppConfig;
use crate::view::{MoveEntry, move_entries};

/// Panel receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The jump-to move list.
    Moves,
    /// The board-size field.
    BoardSize,
}

impl Focus {
    /// Returns the display label for this panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::Moves => "Moves",
            Self::BoardSize => "Board size",
        }
    }

    /// Next panel in tab order, wrapping around.
    pub fn next(self) -> Self {
        Self::iter()
            .cycle()
            .skip_while(|focus| *focus != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// Previous panel in tab order, wrapping around.
    pub fn previous(self) -> Self {
        Self::iter()
            .rev()
            .cycle()
            .skip_while(|focus| *focus != self)
            .nth(1)
            .unwrap_or_default()
    }
}

/// The result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTransition {
    /// Keep running.
    Stay,
    /// Exit the application.
    Quit,
}

/// Main application state.
///
/// Game state lives in a [`GameStore`]; the app subscribes to it and marks
/// itself for redraw whenever the store publishes a new state.
#[derive(Debug)]
pub struct App {
    store: GameStore,
    cursor: usize,
    focus: Focus,
    reverse_moves: bool,
    selected_step: usize,
    redraw: Rc<Cell<bool>>,
}

impl App {
    /// Creates an application around an initial game state.
    #[instrument(skip(state), fields(board_size = %state.board_size()))]
    pub fn new(state: GameState, reverse_moves: bool) -> Self {
        let redraw = Rc::new(Cell::new(true));
        let mut store = GameStore::new(state);
        let flag = Rc::clone(&redraw);
        store.subscribe(move |_: &GameState| flag.set(true));

        let cursor = center(store.state().board_size());
        let selected_step = store.state().step_number();
        Self {
            store,
            cursor,
            focus: Focus::default(),
            reverse_moves,
            selected_step,
            redraw,
        }
    }

    /// Creates an application from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            GameState::with_size(config.clamped_board_size()),
            *config.reverse_move_order(),
        )
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// Index of the square under the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Panel receiving input.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the move list is shown newest first.
    pub fn reverse_moves(&self) -> bool {
        self.reverse_moves
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Move list in display order.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        move_entries(self.state(), self.reverse_moves)
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    /// Marks the screen as stale.
    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppTransition {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("User interrupted");
            return AppTransition::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                info!("User quit");
                return AppTransition::Quit;
            }
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Char('[') => self.dispatch(Action::StepBack),
            KeyCode::Char(']') => self.dispatch(Action::StepForward),
            KeyCode::Char('r') => {
                self.reverse_moves = !self.reverse_moves;
                debug!(reverse = self.reverse_moves, "Toggled move order");
                self.request_redraw();
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
                Focus::BoardSize => self.handle_size_key(code),
            },
        }
        AppTransition::Stay
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::Play(self.cursor)),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, self.state().board_size(), code);
                self.request_redraw();
            }
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let steps: Vec<usize> = self.move_entries().iter().map(|e| e.step).collect();
        let position = steps
            .iter()
            .position(|step| *step == self.selected_step)
            .unwrap_or(0);

        let target = match code {
            KeyCode::Up => position.saturating_sub(1),
            KeyCode::Down => (position + 1).min(steps.len().saturating_sub(1)),
            KeyCode::Home => 0,
            KeyCode::End => steps.len().saturating_sub(1),
            KeyCode::Enter => {
                self.dispatch(Action::JumpTo(self.selected_step));
                return;
            }
            _ => return,
        };

        if let Some(step) = steps.get(target) {
            self.selected_step = *step;
            self.request_redraw();
        }
    }

    fn handle_size_key(&mut self, code: KeyCode) {
        let size = self.state().board_size();
        match code {
            KeyCode::Char('+') | KeyCode::Up => self.dispatch(Action::Resize(size.grow().get())),
            KeyCode::Char('-') | KeyCode::Down => {
                self.dispatch(Action::Resize(size.shrink().get()))
            }
            KeyCode::Char(c) => {
                let mut buf = [0; 4];
                match BoardSize::parse_input(c.encode_utf8(&mut buf)) {
                    Some(size) => self.dispatch(Action::Resize(size.get())),
                    None => debug!(input = %c, "Rejected board size input"),
                }
            }
            _ => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        debug!(focus = focus.label(), "Focus changed");
        self.focus = focus;
        self.request_redraw();
    }

    /// Sends an action to the store and syncs view state with the result.
    fn dispatch(&mut self, action: Action) {
        let previous_size = self.state().board_size();
        if !self.store.dispatch(action) {
            return;
        }

        let state = self.store.state();
        self.selected_step = state.step_number();
        if state.board_size() != previous_size {
            self.cursor = center(state.board_size());
        }
    }
}

/// Index of the middle square.
fn center(size: BoardSize) -> usize {
    let n = size.get();
    (n / 2) * n + n / 2
}
