//! Cumulative throw and goal counters.
//!
//! [`ScoreBoard`] is mutated only by [`crate::scoring::ScoreKeeper`]; the HUD
//! reads it through [`ScoreBoard::snapshot`].

use bevy::prelude::*;
use std::fmt;

/// Process-lifetime counters.  Never decremented.
///
/// Invariant: `goals_scored <= total_throws`.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    total_throws: u32,
    goals_scored: u32,
}

impl ScoreBoard {
    #[inline]
    pub fn total_throws(&self) -> u32 {
        self.total_throws
    }

    #[inline]
    pub fn goals_scored(&self) -> u32 {
        self.goals_scored
    }

    pub fn record_throw_started(&mut self) {
        self.total_throws += 1;
    }

    /// Credit one goal.
    ///
    /// # Panics
    ///
    /// If the increment would leave more goals than throws.  That can only
    /// happen through a scoring logic defect.
    pub fn record_goal(&mut self) {
        self.goals_scored += 1;
        assert!(
            self.goals_scored <= self.total_throws,
            "goal credited without a matching throw ({} goals, {} throws)",
            self.goals_scored,
            self.total_throws
        );
    }

    #[inline]
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            total_throws: self.total_throws,
            goals_scored: self.goals_scored,
        }
    }
}

/// Read-only copy of the counters for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub total_throws: u32,
    pub goals_scored: u32,
}

impl ScoreSnapshot {
    /// `(total_throws, goals_scored)`
    #[inline]
    pub fn as_pair(self) -> (u32, u32) {
        (self.total_throws, self.goals_scored)
    }
}

impl fmt::Display for ScoreSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scored {} goals out of {} shots",
            self.goals_scored, self.total_throws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let board = ScoreBoard::default();
        assert_eq!(board.snapshot().as_pair(), (0, 0));
    }

    #[test]
    fn throws_and_goals_accumulate() {
        let mut board = ScoreBoard::default();
        board.record_throw_started();
        board.record_throw_started();
        board.record_goal();
        assert_eq!(board.total_throws(), 2);
        assert_eq!(board.goals_scored(), 1);
    }

    #[test]
    #[should_panic(expected = "goal credited without a matching throw")]
    fn goal_without_throw_is_a_logic_defect() {
        let mut board = ScoreBoard::default();
        board.record_goal();
    }

    #[test]
    fn snapshot_renders_as_hud_text() {
        let snapshot = ScoreSnapshot {
            total_throws: 5,
            goals_scored: 2,
        };
        assert_eq!(snapshot.to_string(), "Scored 2 goals out of 5 shots");
    }
}
