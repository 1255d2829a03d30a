//! Monotonic board invariant: squares never change once occupied.

use super::Invariant;
use crate::{GameEngine, Square};

/// Invariant: each history entry extends the previous one by exactly one
/// newly occupied square and leaves every other square as it was.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().windows(2).all(|pair| {
            let changed: Vec<_> = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after)
                .collect();
            matches!(changed.as_slice(), [(Square::Empty, Square::Occupied(_))])
        })
    }

    fn description() -> &'static str {
        "Each ply occupies exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_legal_history_holds() {
        let mut engine = GameEngine::new();
        for cell in [8, 0, 4] {
            engine.apply_move(cell).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        engine.apply_move(0).unwrap();
        // O's mark replaces X's instead of filling an empty square.
        engine.history[2] = engine.history[1];
        engine.history[2].set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
