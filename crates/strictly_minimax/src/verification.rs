//! Kani proof harnesses for the transition function and scoring.
//!
//! Boards are arbitrary, so these cover malformed grids as well as
//! reachable ones.

use crate::{
    Board, Cell, Invariant, InvalidMoveError, Mark, Move, TurnParityInvariant, apply,
    current_turn, evaluate, is_terminal, legal_moves, winner,
};

impl kani::Arbitrary for Mark {
    fn any() -> Self {
        if kani::any() { Mark::X } else { Mark::O }
    }
}

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Marked(kani::any())
        }
    }
}

impl kani::Arbitrary for Move {
    fn any() -> Self {
        let row: usize = kani::any();
        let col: usize = kani::any();
        kani::assume(row < 4 && col < 4);
        Move::new(row, col)
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        let rows: [[Cell; 3]; 3] = kani::any();
        Board::from_rows(rows)
    }
}

/// Proves `apply` succeeds exactly on legal moves and touches one cell.
#[kani::proof]
#[kani::unwind(10)]
fn verify_apply_changes_only_target() {
    let board: Board = kani::any();
    let mv: Move = kani::any();

    match apply(&board, mv) {
        Ok(next) => {
            assert!(legal_moves(&board).contains(&mv));
            assert_eq!(next.get(mv), Some(Cell::Marked(current_turn(&board))));
            for other in Move::ALL {
                if other != mv {
                    assert_eq!(next.get(other), board.get(other));
                }
            }
        }
        Err(InvalidMoveError::OutOfBounds { .. }) => assert!(!mv.in_bounds()),
        Err(InvalidMoveError::Occupied { .. }) => assert!(!board.is_empty(mv)),
    }
}

/// Proves a legal move keeps turn parity on boards that already had it.
#[kani::proof]
#[kani::unwind(10)]
fn verify_apply_preserves_parity() {
    let board: Board = kani::any();
    let mv: Move = kani::any();
    kani::assume(TurnParityInvariant::holds(&board));

    if let Ok(next) = apply(&board, mv) {
        assert!(TurnParityInvariant::holds(&next));
        assert_ne!(current_turn(&next), current_turn(&board));
    }
}

/// Proves `evaluate` stays in range and agrees with `winner`.
#[kani::proof]
#[kani::unwind(10)]
fn verify_evaluate_matches_winner() {
    let board: Board = kani::any();
    let score = evaluate(&board);

    assert!((-1..=1).contains(&score));
    match winner(&board) {
        Some(Mark::X) => assert_eq!(score, 1),
        Some(Mark::O) => assert_eq!(score, -1),
        None => assert_eq!(score, 0),
    }
    assert_eq!(
        is_terminal(&board),
        winner(&board).is_some() || legal_moves(&board).is_empty()
    );
}
