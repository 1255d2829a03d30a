//! Game board card: status badge and the 3x3 grid.

use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{GameStatus, Player, Position, Snapshot, Square, WinningLine};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the board card.
///
/// `cursor` is `Some` while the board has focus.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Option<Position>,
    palette: &Palette,
) {
    let border = if cursor.is_some() {
        palette.accent
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            " Game Board ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(status_badge(&snapshot.status, palette)).alignment(Alignment::Center),
        chunks[0],
    );

    let grid = center_rect(chunks[2], CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        render_row(frame, rows[row], snapshot, cursor, start, palette);
    }
    render_separator(frame, rows[1], palette);
    render_separator(frame, rows[3], palette);
}

/// Coloured status line: green for a winner, orange for a draw, blue while
/// the game runs.
fn status_badge(status: &GameStatus, palette: &Palette) -> Line<'static> {
    let color = match status {
        GameStatus::Winner(_) => palette.badge_winner,
        GameStatus::Draw => palette.badge_draw,
        GameStatus::InProgress(_) => palette.badge_in_progress,
    };
    Line::from(Span::styled(
        format!(" {} ", status),
        Style::default()
            .fg(palette.background)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Option<Position>,
    start: usize,
    palette: &Palette,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (offset, col) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(start + offset) {
            render_cell(
                frame,
                cols[col],
                snapshot,
                pos,
                cursor == Some(pos),
                palette,
            );
        }
    }
    render_vertical_sep(frame, cols[1], palette);
    render_vertical_sep(frame, cols[3], palette);
}

fn render_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    pos: Position,
    is_cursor: bool,
    palette: &Palette,
) {
    let (symbol, mut style) = match snapshot.board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(palette.border),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    if is_winning_cell(snapshot.winning_line.as_ref(), pos) {
        style = style.bg(palette.winning_bg);
    } else if is_cursor {
        style = style.bg(palette.cursor_bg);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let text = Text::from(vec![Line::from(""), Line::from(symbol), Line::from("")]);
    frame.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        area,
    );
}

fn is_winning_cell(line: Option<&WinningLine>, pos: Position) -> bool {
    line.is_some_and(|line| line.contains(pos))
}

fn render_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.border));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(palette.border));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
