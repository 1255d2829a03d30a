//! Engine error types.

use crate::Position;

/// Reason an engine operation was rejected.
///
/// Every rejection leaves the engine state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// History index outside the recorded history.
    #[display("Move #{} is not in history (length {})", index, len)]
    HistoryIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl EngineError {
    /// Argument errors come from callers offering values they should not;
    /// the rest are ordinary illegal-move rejections.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            EngineError::CellOutOfRange(_) | EngineError::HistoryIndexOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::CellOutOfRange(9).to_string(),
            "Cell 9 is out of range (must be 0-8)"
        );
        assert_eq!(
            EngineError::SquareOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(
            EngineError::HistoryIndexOutOfRange { index: 4, len: 2 }.to_string(),
            "Move #4 is not in history (length 2)"
        );
    }

    #[test]
    fn test_invalid_argument_classification() {
        assert!(EngineError::CellOutOfRange(12).is_invalid_argument());
        assert!(EngineError::HistoryIndexOutOfRange { index: 3, len: 1 }.is_invalid_argument());
        assert!(!EngineError::GameOver.is_invalid_argument());
        assert!(!EngineError::SquareOccupied(Position::TopLeft).is_invalid_argument());
    }
}
