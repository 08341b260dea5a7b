//! Stateless UI rendering for time-travel tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetravel_engine::{BoardSize, GameStatus, Player, Square};

use super::app::{App, Focus};

/// Width of one rendered square, in columns.
const CELL_WIDTH: u16 = 3;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board and side panel
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Time-Travel Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_side_panel(frame, body[1], app);
    draw_status(frame, chunks[2], app);
    draw_help(frame, chunks[3], app);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let board = state.board();
    let size = board.size();
    let winner = state.winner();
    let show_cursor = app.focus() == Focus::Board;

    let mut lines = Vec::new();
    for (row, squares) in board.rows().enumerate() {
        if row > 0 {
            lines.push(separator(size));
        }
        let mut spans = Vec::new();
        for (col, square) in squares.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let index = row * size.get() + col;
            let winning = winner.as_ref().is_some_and(|w| w.contains(index));
            let cursor = show_cursor && index == app.cursor();
            spans.push(cell(*square, winning, cursor));
        }
        lines.push(Line::from(spans));
    }

    let block = focus_block(Focus::Board.label(), show_cursor);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, board_width(size), board_height(size));
    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell(square: Square, winning: bool, cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match square {
        Square::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    Span::styled(symbol, style)
}

fn separator(size: BoardSize) -> Line<'static> {
    let segment = "─".repeat(usize::from(CELL_WIDTH));
    let text = vec![segment; size.get()].join("┼");
    Line::styled(text, Style::default().fg(Color::DarkGray))
}

fn board_width(size: BoardSize) -> u16 {
    let n = size.get() as u16;
    n * CELL_WIDTH + n.saturating_sub(1)
}

fn board_height(size: BoardSize) -> u16 {
    let n = size.get() as u16;
    2 * n - 1
}

fn draw_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let size = app.state().board_size();
    let size_focused = app.focus() == Focus::BoardSize;
    let size_text = Line::from(vec![
        Span::raw(format!("{} × {}", size, size)),
        Span::styled(
            format!("  ({}-{})", BoardSize::MIN, BoardSize::MAX),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let size_field = Paragraph::new(size_text)
        .alignment(Alignment::Center)
        .block(focus_block(Focus::BoardSize.label(), size_focused));
    frame.render_widget(size_field, chunks[0]);

    draw_moves(frame, chunks[1], app);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let entries = app.move_entries();
    let focused = app.focus() == Focus::Moves;

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let (marker, style) = if entry.current {
                (
                    "● ",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(entry.label.as_str(), style),
            ]))
        })
        .collect();

    let order = if app.reverse_moves() {
        "newest first"
    } else {
        "oldest first"
    };
    let title = format!("{} ({})", Focus::Moves.label(), order);

    let mut list_state = ListState::default();
    if focused {
        list_state.select(entries.iter().position(|e| e.step == app.selected_step()));
    }

    let list = List::new(items)
        .block(focus_block(&title, focused))
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.state().status();
    let color = match status {
        GameStatus::Won(_) => Color::Green,
        GameStatus::Tie => Color::Magenta,
        GameStatus::InProgress(_) => Color::Yellow,
    };

    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let enabled = Style::default().fg(Color::Gray);
    let disabled = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
    let key = |active: bool| if active { enabled } else { disabled };

    let hint = match app.focus() {
        Focus::Board => "Arrows: move | Enter: play",
        Focus::Moves => "Up/Down: select | Enter: jump",
        Focus::BoardSize => "3-9, +/-: resize",
    };

    let line = Line::from(vec![
        Span::styled(hint, enabled),
        Span::styled(" | ", disabled),
        Span::styled("[: prev", key(state.can_step_back())),
        Span::styled(" | ", disabled),
        Span::styled("]: next", key(state.can_step_forward())),
        Span::styled(" | Tab: focus | r: reverse | q: quit", enabled),
    ]);

    let help = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
