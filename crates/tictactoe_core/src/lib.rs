//! Pure tic-tac-toe game engine.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: win and draw detection over a single board
//! - **Engine**: [`GameEngine`] owns the board history, the active history
//!   index and the session [`Scores`]
//! - **Invariants**: properties of the history checked after every move in
//!   debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     engine.apply_move(cell)?;
//! }
//! assert_eq!(engine.status(), GameStatus::Winner(Player::X));
//! assert_eq!(engine.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
//! assert_eq!(engine.scores().x_wins(), 1);
//! # Ok::<(), tictactoe_core::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod scores;
mod status;
mod types;

pub use engine::{GameEngine, HistoryEntry, PlacedMark, Snapshot};
pub use error::EngineError;
pub use position::Position;
pub use rules::WinningLine;
pub use scores::Scores;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
