//! Cumulative score counters across games in a session.

use crate::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per player and ties.
///
/// Counters only grow until [`Scores::reset`] zeroes all three together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Scores {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games ending in a draw.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Number of decided games counted so far.
    pub fn total_games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    #[instrument(skip(self))]
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
        debug!(x = self.x_wins, o = self.o_wins, ties = self.ties, "Win recorded");
    }

    #[instrument(skip(self))]
    pub(crate) fn record_tie(&mut self) {
        self.ties += 1;
        debug!(x = self.x_wins, o = self.o_wins, ties = self.ties, "Tie recorded");
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut scores = Scores::new();
        scores.record_win(Player::X);
        scores.record_win(Player::X);
        scores.record_win(Player::O);
        scores.record_tie();
        assert_eq!(scores.x_wins(), 2);
        assert_eq!(scores.o_wins(), 1);
        assert_eq!(scores.ties(), 1);
        assert_eq!(scores.total_games(), 4);

        scores.reset();
        assert_eq!(scores, Scores::new());
    }
}
