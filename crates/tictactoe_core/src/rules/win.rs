//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in canonical order: rows, columns, diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three identical marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of the line.
    pub player: Player,
    /// The three cells of the line.
    pub cells: [Position; 3],
}

impl WinningLine {
    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }

    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Finds the first completed line in canonical order.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some(WinningLine {
                    player,
                    cells: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}
