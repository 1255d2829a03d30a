//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board. Rules are separated from
//! board storage so the engine and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinningLine, check_winner, winning_line};
