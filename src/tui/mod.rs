//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod terminal;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;
use crate::logging::init_file_logging;
use terminal::TerminalGuard;

pub use app::{App, AppTransition, Focus};
pub use input::move_cursor;
pub use ui::draw;

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored on every exit path, including setup failures
/// and panics.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    init_file_logging(config.log_file(), config.log_filter())?;
    info!(
        board_size = %config.clamped_board_size(),
        reverse = *config.reverse_move_order(),
        "Starting time-travel tic-tac-toe"
    );

    let res = {
        let _guard = TerminalGuard::enter(io::stdout())?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut app = App::from_config(config);
        let poll_interval = Duration::from_millis(*config.poll_interval_ms());
        run_app(&mut terminal, &mut app, poll_interval)
    };

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Draws on demand and feeds key presses to the app.
#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|f| draw(f, app))?;
        }

        if !event::poll(poll_interval)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Only handle key press events, ignore key release
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                debug!(code = ?key.code, "Key pressed");
                if app.handle_key(key) == AppTransition::Quit {
                    return Ok(());
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                app.request_redraw();
            }
            _ => {}
        }
    }
}
