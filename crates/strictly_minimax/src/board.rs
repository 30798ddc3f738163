//! The 3x3 board value.

use super::position::{Move, SIZE};
use super::types::{Cell, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values. Every transition produces a new board and
/// leaves its input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed by `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

/// Returns the empty starting board.
#[instrument]
pub fn initial_board() -> Board {
    Board::new()
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from explicit rows.
    ///
    /// No turn-parity check is made; see [`crate::validate`].
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a move's coordinates, or `None` if off the grid.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Checks if the cell at `mv` is on the grid and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells().filter(|c| *c == Cell::Marked(mark)).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells().all(|c| !c.is_empty())
    }

    /// Copy of this board with `mark` written at `mv`.
    ///
    /// `mv` must be on the grid.
    pub(crate) fn with_mark(mut self, mv: Move, mark: Mark) -> Self {
        self.cells[mv.row][mv.col] = Cell::Marked(mark);
        self
    }
}

impl std::fmt::Display for Board {
    /// Renders rows as `X|O|3`, showing empty cells by position number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", r * SIZE + c + 1)?,
                    Cell::Marked(mark) => write!(f, "{}", mark)?,
                }
                if c + 1 < SIZE {
                    write!(f, "|")?;
                }
            }
            if r + 1 < SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Text that does not describe a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark nor an empty-cell marker.
    #[display("Unexpected character {:?} in board", found)]
    UnexpectedChar {
        /// The offending character.
        found: char,
    },
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", count)]
    WrongCellCount {
        /// Cells actually read.
        count: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and digits are empty.
    /// Whitespace, `|`, `/`, `-` and `+` are separators and are ignored, so
    /// the `Display` form parses back.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '_' | '1'..='9' => Cell::Empty,
                '|' | '/' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                found => return Err(ParseBoardError::UnexpectedChar { found }),
            };
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(ParseBoardError::WrongCellCount { count: cells.len() });
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / SIZE][i % SIZE] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_is_empty() {
        let board = initial_board();
        assert!(board.cells().all(Cell::is_empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_off_grid_is_none() {
        let board = Board::new();
        assert_eq!(board.get(Move::new(3, 0)), None);
        assert_eq!(board.get(Move::new(0, 3)), None);
        assert!(!board.is_empty(Move::new(9, 9)));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Move::new(1, 1), Mark::X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Move::new(1, 1)), Some(Cell::Marked(Mark::X)));
        assert_eq!(next.count(Mark::X), 1);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO. / .X. / ..O".parse().unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.to_string(), "X|O|3\n-+-+-\n4|X|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_display_output_parses_back() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let again: Board = board.to_string().parse().unwrap();
        assert_eq!(board, again);

        let full: Board = "xox|oxx|oxo".parse().unwrap();
        assert_eq!(full.to_string().parse::<Board>(), Ok(full));
    }

    #[test]
    fn test_separators_do_not_count_as_cells() {
        let board: Board = "X|O|_\n-+-+-\n_|X|_\n-+-+-\n_|_|O".parse().unwrap();
        assert_eq!(board, "XO./.X./..O".parse().unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount { count: 2 })
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar { found: 'Z' })
        );
    }
}
