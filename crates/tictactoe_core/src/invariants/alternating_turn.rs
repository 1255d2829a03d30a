//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: for every history entry, X has placed as many marks as O or
/// exactly one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().iter().all(|board| {
            let count = |player| {
                board
                    .squares()
                    .iter()
                    .filter(|s| s.player() == Some(player))
                    .count()
            };
            let (x, o) = (count(Player::X), count(Player::O));
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_alternating_history_holds() {
        let mut engine = GameEngine::new();
        for cell in [0, 1, 2] {
            engine.apply_move(cell).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_o_first_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        engine.history[1] = crate::Board::new();
        engine.history[1].set(Position::Center, Square::Occupied(Player::O));
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
