//! Terminal detection and scoring.

use super::win::winner;
use crate::{Board, Mark, Outcome, Score};
use tracing::instrument;

/// Returns true once someone has won or no empty cell remains.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a board: `+1` if X has won, `-1` if O has won, `0` otherwise.
///
/// A draw and an unfinished board both score `0`; the search only calls this
/// on terminal boards.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Score {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Classifies the board.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Won(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
