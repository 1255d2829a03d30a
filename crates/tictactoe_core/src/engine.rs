//! Game engine: board history with time travel, and session scores.
//!
//! The engine is the only owner of game state. Front-ends hold a
//! [`Snapshot`] at most and relay user intents back through
//! [`GameEngine::apply_move`], [`GameEngine::reset_game`],
//! [`GameEngine::reset_scores`] and [`GameEngine::jump_to`].

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{self, WinningLine};
use crate::{Board, EngineError, GameStatus, Player, Position, Scores};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine with move history and score tracking.
///
/// `history[k]` is the board after `k` plies; `history[0]` is always the
/// empty board. `current_move` selects the active board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
    pub(crate) scores: Scores,
}

/// A mark placed by one ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMark {
    /// Player who moved.
    pub player: Player,
    /// Where the mark went.
    pub position: Position,
}

/// One row of the move list offered for time travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// History index to pass to [`GameEngine::jump_to`].
    pub index: usize,
    /// "Go to game start" or "Go to move #N".
    pub label: String,
    /// Whether this entry is the active board.
    pub is_current: bool,
    /// The mark that produced this entry; `None` for the start.
    pub placed: Option<PlacedMark>,
}

/// Read-only view of the engine for rendering and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the current history index.
    pub board: Board,
    /// Derived status of that board.
    pub status: GameStatus,
    /// Line to highlight when the board has a winner.
    pub winning_line: Option<WinningLine>,
    /// Active history index.
    pub current_move: usize,
    /// Every recorded position, oldest first.
    pub history: Vec<HistoryEntry>,
    /// Session scores.
    pub scores: Scores,
}

impl GameEngine {
    /// Creates an engine with an empty board and zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            scores: Scores::new(),
        }
    }

    /// Places the active player's mark at `cell` (0-8).
    ///
    /// Any history recorded after the current index is discarded before the
    /// new board is appended, so a move made after [`GameEngine::jump_to`]
    /// starts a new branch. When the move decides the game the matching
    /// score counter is incremented here, exactly once.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CellOutOfRange`] if `cell > 8`
    /// - [`EngineError::GameOver`] if the current board is already decided
    /// - [`EngineError::SquareOccupied`] if the cell is taken
    ///
    /// State is unchanged on error.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell: usize) -> Result<GameStatus, EngineError> {
        let pos = Position::from_index(cell).ok_or_else(|| {
            warn!(cell, "Rejected move: cell out of range");
            EngineError::CellOutOfRange(cell)
        })?;

        if self.is_decided() {
            debug!(%pos, "Rejected move: game already decided");
            return Err(EngineError::GameOver);
        }

        let board = *self.current_board();
        if !board.is_empty(pos) {
            debug!(%pos, "Rejected move: square occupied");
            return Err(EngineError::SquareOccupied(pos));
        }

        let player = Player::for_ply(self.current_move);
        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future history for new branch");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(board.with_mark(pos, player));
        self.current_move = self.history.len() - 1;

        let status = self.status();
        match status {
            GameStatus::Winner(winner) => self.scores.record_win(winner),
            GameStatus::Draw => self.scores.record_tie(),
            GameStatus::InProgress(_) => {}
        }

        self.debug_check_invariants();
        info!(%player, %pos, %status, "Move applied");
        Ok(status)
    }

    /// Clears the board back to a single empty position. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.current_move = 0;
        info!("Game reset");
    }

    /// Zeroes all score counters and resets the board.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        self.reset_game();
        info!("Scores reset");
    }

    /// Makes history entry `move_index` the active board.
    ///
    /// History is not truncated here; that only happens when a move is
    /// applied from an earlier position.
    ///
    /// # Errors
    ///
    /// [`EngineError::HistoryIndexOutOfRange`] if `move_index` is not a
    /// recorded entry. State is unchanged on error.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), EngineError> {
        if move_index >= self.history.len() {
            warn!(move_index, "Rejected jump: index out of range");
            return Err(EngineError::HistoryIndexOutOfRange {
                index: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        debug!(move_index, "Jumped in history");
        Ok(())
    }

    /// Status of the board at the current history index.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Winner(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(Player::for_ply(self.current_move))
        }
    }

    /// The line responsible for the current winner, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.current_board())
    }

    /// Whether the current board has a winner or is full.
    pub fn is_decided(&self) -> bool {
        self.status().is_decided()
    }

    /// Player whose mark the next move places.
    ///
    /// Follows ply parity even on a decided board.
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.current_move)
    }

    /// Board at the current history index.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// All recorded boards, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Active history index.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Session scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Move list for time travel, one entry per recorded board.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(index, board)| HistoryEntry {
                index,
                label: if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", index)
                },
                is_current: index == self.current_move,
                placed: index
                    .checked_sub(1)
                    .and_then(|prev| placed_between(&self.history[prev], board)),
            })
            .collect()
    }

    /// Read-only view of the whole engine.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.current_board(),
            status: self.status(),
            winning_line: self.winning_line(),
            current_move: self.current_move,
            history: self.history_entries(),
            scores: self.scores,
        }
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            panic!("engine invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// The single cell that differs between two consecutive boards.
fn placed_between(before: &Board, after: &Board) -> Option<PlacedMark> {
    Position::ALL.iter().find_map(|&position| {
        if before.get(position) == after.get(position) {
            return None;
        }
        after.get(position).player().map(|player| PlacedMark { player, position })
    })
}
