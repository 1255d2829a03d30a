//! Derived game status.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Status of the board at the current history index.
///
/// The three states are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; holds the player to move.
    InProgress(Player),
    /// A player completed a line.
    Winner(Player),
    /// Board full with no line.
    Draw,
}

impl GameStatus {
    /// True for `Winner` and `Draw`.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "Next player: {}", player),
            GameStatus::Winner(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Game ended in a draw!"),
        }
    }
}
