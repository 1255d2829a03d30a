//! Application state: the engine plus presentation-only UI state.

use crate::input::{self, Intent};
use crate::theme::ThemeMode;
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use tictactoe_core::{GameEngine, GameStatus, Position};
use tracing::{debug, info, instrument};

/// Widget receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Footer message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Neutral feedback.
    Info(String),
    /// A rejected action.
    Rejected(String),
}

/// Main application state.
///
/// The engine is the only authority on game state. Everything else here
/// (cursor, focus, theme, notice) exists for rendering.
#[derive(Debug, Getters)]
pub struct App {
    /// Game state authority.
    engine: GameEngine,
    /// Highlighted board cell.
    cursor: Position,
    /// Widget receiving navigation keys.
    focus: Focus,
    /// Highlighted row of the move list.
    history_cursor: usize,
    /// Active palette.
    theme: ThemeMode,
    /// Feedback from the last action.
    notice: Option<Notice>,
}

impl App {
    /// Creates an application with a fresh engine.
    #[instrument]
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            theme,
            notice: None,
        }
    }

    /// Handles a key event and reports whether to keep running.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(intent) = input::intent_for(key) else {
            return AppAction::Continue;
        };
        debug!(?intent, "Handling intent");

        match intent {
            Intent::Quit => {
                info!("User quit");
                return AppAction::Quit;
            }
            Intent::NewGame => self.new_game(),
            Intent::ResetScores => self.reset_scores(),
            Intent::ToggleTheme => {
                self.theme = self.theme.toggle();
                debug!(theme = %self.theme, "Theme toggled");
            }
            Intent::SwitchFocus => self.switch_focus(),
            Intent::PlaceAt(cell) => self.place(cell),
            Intent::Navigate(code) => self.navigate(code),
            Intent::Activate => match self.focus {
                Focus::Board => self.place(self.cursor.to_index()),
                Focus::History => self.jump(self.history_cursor),
            },
        }
        AppAction::Continue
    }

    /// Forwards a cell selection to the engine.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: usize) {
        match self.engine.apply_move(cell) {
            Ok(status) => {
                self.history_cursor = self.engine.current_move();
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.notice = match status {
                    GameStatus::InProgress(_) => None,
                    decided => Some(Notice::Info(format!(
                        "{}  Press n for a new game.",
                        decided
                    ))),
                };
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.notice = Some(Notice::Rejected(e.to_string()));
            }
        }
    }

    /// Forwards a history selection to the engine.
    #[instrument(skip(self))]
    pub fn jump(&mut self, move_index: usize) {
        match self.engine.jump_to(move_index) {
            Ok(()) => {
                self.history_cursor = move_index;
                self.notice = Some(Notice::Info(if move_index == 0 {
                    "Back at game start.".to_string()
                } else {
                    format!("Showing move #{}.", move_index)
                }));
            }
            Err(e) => self.notice = Some(Notice::Rejected(e.to_string())),
        }
    }

    /// Clears the board; scores stay.
    pub fn new_game(&mut self) {
        self.engine.reset_game();
        self.history_cursor = 0;
        self.notice = Some(Notice::Info("New game started.".to_string()));
    }

    /// Zeroes scores, which also clears the board.
    pub fn reset_scores(&mut self) {
        self.engine.reset_scores();
        self.history_cursor = 0;
        self.notice = Some(Notice::Info("Scores reset.".to_string()));
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.history_cursor = self.engine.current_move();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn navigate(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = input::move_cursor(self.cursor, code),
            Focus::History => {
                let last = self.engine.history().len() - 1;
                self.history_cursor = match code {
                    KeyCode::Up => self.history_cursor.saturating_sub(1),
                    KeyCode::Down => (self.history_cursor + 1).min(last),
                    _ => self.history_cursor,
                };
            }
        }
    }
}
