//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Numeric game value from X's point of view: `+1`, `0` or `-1`.
pub type Score = i8;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first, maximises).
    X,
    /// Mark O (moves second, minimises).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The value of a win for this mark.
    pub fn winning_score(self) -> Score {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

/// The content of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if nothing has been played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_parses_case_insensitive() {
        assert_eq!(Mark::from_str("x").unwrap(), Mark::X);
        assert_eq!(Mark::from_str("O").unwrap(), Mark::O);
        assert!(Mark::from_str("z").is_err());
    }

    #[test]
    fn test_winning_scores_oppose() {
        assert_eq!(Mark::X.winning_score(), -Mark::O.winning_score());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Won(Mark::O).to_string(), "O wins");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Marked(Mark::O).mark(), Some(Mark::O));
    }

    #[test]
    fn test_only_in_progress_is_undecided() {
        assert!(!Outcome::InProgress.is_decided());
        assert!(Outcome::Draw.is_decided());
        assert!(Outcome::Won(Mark::X).is_decided());
    }
}
