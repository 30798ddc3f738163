//! Exhaustive minimax search.
//!
//! X maximises the score and O minimises it. Every position is searched to
//! the end of the game; there is no pruning, no depth limit and no cache.
//! Scores are exactly `-1`, `0` or `+1`, so a quick win and a slow win rank
//! equally.

use crate::{Board, Mark, Move, Score, current_turn, evaluate, is_terminal, legal_moves};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Knobs for [`Searcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Return a move that wins on the spot without running the full search.
    pub fast_path: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { fast_path: true }
    }
}

/// Result of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move, `None` when the board is already decided.
    pub best: Option<Move>,
    /// Minimax value of the chosen move, `None` when the board is decided.
    pub value: Option<Score>,
    /// True if the immediate-win shortcut produced the move.
    pub shortcut: bool,
}

impl SearchReport {
    fn decided() -> Self {
        Self {
            best: None,
            value: None,
            shortcut: false,
        }
    }
}

/// A legal move paired with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedMove {
    /// The move.
    pub mv: Move,
    /// Game value after playing it, assuming perfect play from both sides.
    pub value: Score,
}

/// Chooses moves by exhaustive minimax.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    options: SearchOptions,
}

impl Searcher {
    /// Creates a searcher with the given options.
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Finds the optimal move for the side to move.
    ///
    /// Ties go to the first optimal move in row-major order. A terminal
    /// board yields a report with no move.
    #[instrument(skip(self, board), fields(fast_path = self.options.fast_path))]
    pub fn search(&self, board: &Board) -> SearchReport {
        if is_terminal(board) {
            debug!("Board already decided, no move to search");
            return SearchReport::decided();
        }

        let started = Instant::now();
        let turn = current_turn(board);

        if self.options.fast_path
            && let Some(mv) = immediate_win(board, turn)
        {
            debug!(%turn, best = %mv, "Immediate win found");
            return SearchReport {
                best: Some(mv),
                value: Some(turn.winning_score()),
                shortcut: true,
            };
        }

        let mut best: Option<RankedMove> = None;
        for ranked in ranked_moves(board) {
            let improves = match best {
                None => true,
                Some(current) => match turn {
                    Mark::X => ranked.value > current.value,
                    Mark::O => ranked.value < current.value,
                },
            };
            if improves {
                best = Some(ranked);
            }
        }

        debug!(
            %turn,
            best = ?best.map(|r| r.mv),
            value = ?best.map(|r| r.value),
            elapsed_us = saturating_micros(started.elapsed()),
            "Search complete"
        );
        SearchReport {
            best: best.map(|r| r.mv),
            value: best.map(|r| r.value),
            shortcut: false,
        }
    }
}

/// Returns the optimal move for the side to move, or `None` on a terminal
/// board.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::default().search(board).best
}

/// Game value of `board` under perfect play by both sides.
#[instrument(skip(board))]
pub fn minimax_value(board: &Board) -> Score {
    match current_turn(board) {
        Mark::X => max_value(board),
        Mark::O => min_value(board),
    }
}

/// Every legal move with its minimax value, in row-major order.
#[instrument(skip(board))]
pub fn ranked_moves(board: &Board) -> Vec<RankedMove> {
    let turn = current_turn(board);
    legal_moves(board)
        .into_iter()
        .map(|mv| {
            let next = board.with_mark(mv, turn);
            let value = match turn {
                Mark::X => min_value(&next),
                Mark::O => max_value(&next),
            };
            RankedMove { mv, value }
        })
        .collect()
}

/// First move that ends the game in `turn`'s favour right now.
fn immediate_win(board: &Board, turn: Mark) -> Option<Move> {
    legal_moves(board).into_iter().find(|mv| {
        let next = board.with_mark(*mv, turn);
        is_terminal(&next) && evaluate(&next) == turn.winning_score()
    })
}

fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn successor(board: &Board, mv: Move) -> Board {
    board.with_mark(mv, current_turn(board))
}

/// Value of a board where X is to move.
fn max_value(board: &Board) -> Score {
    if is_terminal(board) {
        return evaluate(board);
    }
    legal_moves(board)
        .into_iter()
        .map(|mv| min_value(&successor(board, mv)))
        .max()
        .unwrap_or_else(|| evaluate(board))
}

/// Value of a board where O is to move.
fn min_value(board: &Board) -> Score {
    if is_terminal(board) {
        return evaluate(board);
    }
    legal_moves(board)
        .into_iter()
        .map(|mv| max_value(&successor(board, mv)))
        .min()
        .unwrap_or_else(|| evaluate(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initial_board;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board("XXX/OO./...");
        assert_eq!(best_move(&won), None);
        let report = Searcher::default().search(&won);
        assert_eq!(report, SearchReport::decided());

        let drawn = board("XOX/OXX/OXO");
        assert_eq!(best_move(&drawn), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        let b = board("XX./O../.O.");
        let report = Searcher::default().search(&b);
        assert_eq!(report.best, Some(Move::new(0, 2)));
        assert_eq!(report.value, Some(1));
        assert!(report.shortcut);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let b = board("OO./XX./X..");
        let report = Searcher::default().search(&b);
        assert_eq!(report.best, Some(Move::new(0, 2)));
        assert_eq!(report.value, Some(-1));
    }

    #[test]
    fn test_blocks_threat() {
        // O threatens the main diagonal; X has nothing better than blocking.
        let b = board("OX./XO./...");
        let report = Searcher::default().search(&b);
        assert!(!report.shortcut);
        assert_eq!(report.best, Some(Move::new(2, 2)));

        let ranked = ranked_moves(&b);
        let block = ranked.iter().find(|r| r.mv == Move::new(2, 2)).unwrap();
        assert!(ranked.iter().filter(|r| r.mv != block.mv).all(|r| r.value == -1));
        assert!(block.value > -1);
    }

    #[test]
    fn test_fast_path_off_agrees_on_value() {
        let b = board("XX./O../.O.");
        let report = Searcher::new(SearchOptions { fast_path: false }).search(&b);
        assert!(!report.shortcut);
        assert_eq!(report.value, Some(1));
    }

    #[test]
    fn test_elapsed_micros_saturate() {
        assert_eq!(saturating_micros(Duration::from_millis(3)), 3_000);
        assert_eq!(saturating_micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        assert_eq!(minimax_value(&initial_board()), 0);
    }

    #[test]
    fn test_ranked_moves_cover_legal_moves() {
        let b = board("X...O....");
        let ranked = ranked_moves(&b);
        let moves: Vec<Move> = ranked.iter().map(|r| r.mv).collect();
        assert_eq!(moves, legal_moves(&b));
        assert!(ranked.iter().all(|r| (-1..=1).contains(&r.value)));
    }

    #[test]
    fn test_only_center_answers_corner_opening() {
        let b = board("X../.../...");
        assert_eq!(current_turn(&b), Mark::O);
        for ranked in ranked_moves(&b) {
            let expected = if ranked.mv == Move::new(1, 1) { 0 } else { 1 };
            assert_eq!(ranked.value, expected, "reply {}", ranked.mv);
        }
        assert_eq!(best_move(&b), Some(Move::new(1, 1)));
    }

    #[test]
    fn test_edge_reply_loses_to_deep_search() {
        // No immediate win exists, but X forces one a few plies out.
        let b = board("XO./.../...");
        let report = Searcher::default().search(&b);
        assert!(!report.shortcut);
        assert_eq!(report.value, Some(1));
        assert_eq!(minimax_value(&b), 1);
    }
}
