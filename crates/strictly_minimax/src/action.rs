//! The transition function.
//!
//! A move is checked against the board before anything is written, and the
//! caller's board is never touched: `apply` hands back a fresh value.

use crate::invariants::{Invariant, TurnParityInvariant};
use crate::{Board, Cell, Move, current_turn};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Error returned when a move is not in [`crate::legal_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMoveError {
    /// The coordinates are off the 3x3 grid.
    #[display("Move ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Returns the board that results from the side to move playing `mv`.
///
/// # Errors
///
/// Returns [`InvalidMoveError::OutOfBounds`] if `mv` is off the grid and
/// [`InvalidMoveError::Occupied`] if the cell is taken. Moves on a board that
/// already has a winner are accepted as long as the cell is empty; stopping
/// play is the caller's job.
#[instrument(skip(board), fields(mv = %mv))]
pub fn apply(board: &Board, mv: Move) -> Result<Board, InvalidMoveError> {
    let Move { row, col } = mv;
    match board.get(mv) {
        None => return Err(InvalidMoveError::OutOfBounds { row, col }),
        Some(Cell::Marked(_)) => return Err(InvalidMoveError::Occupied { row, col }),
        Some(Cell::Empty) => {}
    }

    let mark = current_turn(board);
    let next = board.with_mark(mv, mark);
    debug!(%mark, "Move applied");
    debug_assert!(
        TurnParityInvariant::holds(&next) || !TurnParityInvariant::holds(board),
        "apply broke turn parity"
    );
    Ok(next)
}
