//! Move coordinates and their text forms.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the grid.
pub const SIZE: usize = 3;

const LABELS: [&str; SIZE * SIZE] = [
    "top-left",
    "top-center",
    "top-right",
    "middle-left",
    "center",
    "middle-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

/// A (row, column) coordinate naming the cell to mark.
///
/// Coordinates are not range-checked on construction; [`crate::apply`]
/// rejects anything outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All nine on-board moves in row-major order.
    pub const ALL: [Move; SIZE * SIZE] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Returns true if both coordinates fall on the grid.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major index (0-8), if on the grid.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * SIZE + self.col)
    }

    /// Creates a move from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable position name, e.g. `"top-left"`.
    pub fn label(self) -> Option<&'static str> {
        self.index().map(|i| LABELS[i])
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Text that does not describe a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse move from {:?}", input)]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts `"r,c"` or `"r c"` (0-based), a position number 1-9, or a
    /// label such as `"center"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Ok(Move::new(row, col));
        }
        if let [single] = parts.as_slice()
            && let Ok(number) = single.parse::<usize>()
        {
            return number
                .checked_sub(1)
                .and_then(Move::from_index)
                .ok_or_else(err);
        }

        let wanted = trimmed.to_lowercase().replace(['_', ' '], "-");
        LABELS
            .iter()
            .position(|label| *label == wanted)
            .and_then(Move::from_index)
            .ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), Some(i));
            assert_eq!(Move::from_index(i), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_out_of_bounds_has_no_index() {
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(0, 7).label(), None);
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("1,2".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!(" 2 0 ".parse::<Move>().unwrap(), Move::new(2, 0));
        // Range is checked by apply, not the parser.
        assert_eq!("5,5".parse::<Move>().unwrap(), Move::new(5, 5));
    }

    #[test]
    fn test_parse_number_and_label() {
        assert_eq!("1".parse::<Move>().unwrap(), Move::new(0, 0));
        assert_eq!("9".parse::<Move>().unwrap(), Move::new(2, 2));
        assert_eq!("Center".parse::<Move>().unwrap(), Move::new(1, 1));
        assert_eq!("bottom left".parse::<Move>().unwrap(), Move::new(2, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("0".parse::<Move>().is_err());
        assert!("10".parse::<Move>().is_err());
        assert!("a,b".parse::<Move>().is_err());
        assert!("1,2,3".parse::<Move>().is_err());
        assert!("somewhere".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }
}
