//! Text rendering and board analysis.

use anyhow::{Result, bail};
use serde::Serialize;
use strictly_minimax::{
    Board, Mark, Move, Outcome, RankedMove, Score, Searcher, current_turn, is_terminal, outcome,
    ranked_moves, validate,
};
use tracing::instrument;

/// Everything the engine can say about one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analyzed board.
    pub board: Board,
    /// Side to move, `None` once the game is over.
    pub to_move: Option<Mark>,
    /// Current outcome.
    pub outcome: Outcome,
    /// Engine's choice.
    pub best: Option<Move>,
    /// Game value under perfect play.
    pub value: Option<Score>,
    /// All legal moves with their values.
    pub moves: Vec<RankedMove>,
}

/// Parses, validates and analyzes a board.
///
/// # Errors
///
/// Fails if the text is not a board or the board breaks an invariant.
#[instrument(skip(searcher))]
pub fn analyze(text: &str, searcher: &Searcher) -> Result<Analysis> {
    let board: Board = text.parse()?;
    if let Err(violations) = validate(&board) {
        let reasons = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Board cannot arise from legal play: {}", reasons);
    }

    let terminal = is_terminal(&board);
    let report = searcher.search(&board);
    Ok(Analysis {
        board,
        to_move: (!terminal).then(|| current_turn(&board)),
        outcome: outcome(&board),
        best: report.best,
        value: report.value,
        moves: if terminal { Vec::new() } else { ranked_moves(&board) },
    })
}

/// Names the result a score stands for.
pub fn verdict(value: Score) -> &'static str {
    match value {
        1 => "X wins",
        -1 => "O wins",
        0 => "draw",
        _ => "invalid score",
    }
}

/// Renders ranked moves, one per line.
pub fn render_ranked(moves: &[RankedMove]) -> String {
    moves
        .iter()
        .map(|r| {
            format!(
                "  {} {:<13} {:>2}  {}\n",
                r.mv,
                r.mv.label().unwrap_or("?"),
                r.value,
                verdict(r.value)
            )
        })
        .collect()
}

/// Renders an analysis as plain text.
pub fn render_analysis(analysis: &Analysis) -> String {
    let mut text = format!("{}\n\n", analysis.board);
    match analysis.to_move {
        Some(mark) => text.push_str(&format!("To move: {}\n", mark)),
        None => text.push_str(&format!("Game over: {}\n", analysis.outcome)),
    }
    if !analysis.moves.is_empty() {
        text.push_str("Moves:\n");
        text.push_str(&render_ranked(&analysis.moves));
    }
    if let (Some(best), Some(value)) = (analysis.best, analysis.value) {
        text.push_str(&format!("Best: {} ({})\n", best, verdict(value)));
    }
    text
}
