//! First-class invariants over the engine's history.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. They are checked in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    HistoryConsistentInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 8] {
            engine.apply_move(cell).unwrap();
        }
        engine.jump_to(1).unwrap();
        engine.apply_move(2).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        // Extra O mark with no history entry behind it.
        engine.history[1].set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == HistoryConsistentInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryConsistentInvariant, AlternatingTurnInvariant);
        let engine = GameEngine::new();
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
