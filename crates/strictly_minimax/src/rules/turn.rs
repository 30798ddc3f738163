//! Turn ownership and move enumeration.

use crate::{Board, Mark, Move};
use tracing::instrument;

/// Returns the mark whose turn it is.
///
/// X moves whenever the counts are level, so this always names a player,
/// even on a finished board. Callers check [`crate::is_terminal`] first.
#[instrument(level = "trace", skip(board))]
pub fn current_turn(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every empty cell as a move, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|mv| board.is_empty(*mv))
        .collect()
}
