//! Key-to-intent mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tictactoe_core::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Leave the application.
    Quit,
    /// Start a new game, keeping scores.
    NewGame,
    /// Zero the scores (and the board).
    ResetScores,
    /// Switch light/dark palette.
    ToggleTheme,
    /// Switch focus between board and history.
    SwitchFocus,
    /// Place a mark directly on a cell (0-8).
    PlaceAt(usize),
    /// Arrow key.
    Navigate(KeyCode),
    /// Enter or Space on the focused widget.
    Activate,
}

/// Maps a key event to an intent. Releases and unbound keys map to `None`.
pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Intent::NewGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::ResetScores),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Intent::ToggleTheme),
        KeyCode::Tab | KeyCode::BackTab => Some(Intent::SwitchFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Intent::PlaceAt(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Activate),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Intent::Navigate(code))
        }
        _ => None,
    }
}

/// Moves the board cursor one cell with arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}
