//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Move};
use tracing::instrument;

/// Every line of three, checked rows first, then columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Marks owning a complete line, in line-check order, one entry per line.
pub fn winning_marks(board: &Board) -> impl Iterator<Item = Mark> + '_ {
    LINES.iter().filter_map(|[a, b, c]| {
        let first = board.get(*a)?;
        let mark = first.mark()?;
        (board.get(*b) == Some(first) && board.get(*c) == Some(first)).then_some(mark)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first uniform line found. On a board reached by
/// legal play at most one mark can own a line.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_marks(board).next()
}
