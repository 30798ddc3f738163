//! Strictly Minimax - optimal tic-tac-toe by exhaustive game-tree search
//!
//! The engine is a set of pure functions over a `Copy` [`Board`] value.
//! Callers own the game loop; the engine answers questions about a board and
//! never mutates one in place.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s, text parsing and rendering
//! - **Rules**: turn owner, legal moves, winner, terminal test, scoring
//! - **Action**: the transition function [`apply`]
//! - **Search**: minimax with an immediate-win shortcut
//! - **Invariants**: properties every legally reached board satisfies
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{apply, best_move, initial_board, is_terminal, outcome, Outcome};
//!
//! let mut board = initial_board();
//! while let Some(mv) = best_move(&board) {
//!     board = apply(&board, mv)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(outcome(&board), Outcome::Draw);
//! # Ok::<(), strictly_minimax::InvalidMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod invariants;
mod position;
mod rules;
mod search;
mod types;

#[cfg(kani)]
mod verification;

pub use action::{InvalidMoveError, apply};
pub use board::{Board, ParseBoardError, initial_board};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, SingleWinnerInvariant,
    TurnParityInvariant, validate,
};
pub use position::{Move, ParseMoveError, SIZE};
pub use rules::{
    LINES, current_turn, evaluate, is_terminal, legal_moves, outcome, winner, winning_marks,
};
pub use search::{
    RankedMove, SearchOptions, SearchReport, Searcher, best_move, minimax_value, ranked_moves,
};
pub use types::{Cell, Mark, Outcome, Score};
