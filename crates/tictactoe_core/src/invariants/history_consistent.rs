//! History consistency invariant: entry k holds exactly k marks.

use super::Invariant;
use crate::GameEngine;

/// Invariant: history entry `k` has exactly `k` occupied squares and the
/// current index points into history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        !history.is_empty()
            && engine.current_move() < history.len()
            && history
                .iter()
                .enumerate()
                .all(|(ply, board)| board.occupied_count() == ply)
    }

    fn description() -> &'static str {
        "History entry k has exactly k occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position, Square};

    #[test]
    fn test_empty_engine_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 2, 1] {
            engine.apply_move(cell).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        engine.history[0].set(Position::Center, Square::Occupied(Player::X));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_dangling_current_move_violates() {
        let mut engine = GameEngine::new();
        engine.current_move = 1;
        assert!(!HistoryConsistentInvariant::holds(&engine));

        engine.history.clear();
        engine.current_move = 0;
        assert!(!HistoryConsistentInvariant::holds(&engine));
        engine.history.push(Board::new());
        assert!(HistoryConsistentInvariant::holds(&engine));
    }
}
