//! Interactive and self-play game loops.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_minimax::{
    Board, Mark, Move, Outcome, Searcher, apply, current_turn, initial_board, outcome, ranked_moves,
};
use tracing::{debug, info, instrument, warn};

use crate::render::render_ranked;

/// A human-versus-engine game over arbitrary input and output streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    searcher: Searcher,
    human: Mark,
    show_analysis: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session where the human plays `human`.
    pub fn new(input: R, output: W, searcher: Searcher, human: Mark) -> Self {
        Self {
            input,
            output,
            searcher,
            human,
            show_analysis: false,
        }
    }

    /// Prints ranked candidates before each engine move.
    pub fn with_analysis(mut self, show_analysis: bool) -> Self {
        self.show_analysis = show_analysis;
        self
    }

    /// Runs the game to completion.
    ///
    /// # Errors
    ///
    /// Fails if the input closes before the game ends or the output cannot
    /// be written.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game");
        writeln!(
            self.output,
            "You are {}. Enter moves as a number 1-9, \"row,col\", or a name like \"center\".",
            self.human
        )?;

        let mut board = initial_board();
        loop {
            writeln!(self.output, "\n{}\n", board)?;
            let result = outcome(&board);
            if result.is_decided() {
                writeln!(self.output, "Game over: {}", result)?;
                info!(%result, "Game finished");
                return Ok(result);
            }

            board = if current_turn(&board) == self.human {
                self.human_turn(&board)?
            } else {
                self.engine_turn(&board)?
            };
        }
    }

    fn human_turn(&mut self, board: &Board) -> Result<Board> {
        loop {
            write!(self.output, "Your move ({}): ", self.human)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before the game finished");
            }

            let mv: Move = match line.parse() {
                Ok(mv) => mv,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            match apply(board, mv) {
                Ok(next) => return Ok(next),
                Err(e) => {
                    warn!(error = %e, "Rejected human move");
                    writeln!(self.output, "Invalid move: {}", e)?;
                }
            }
        }
    }

    fn engine_turn(&mut self, board: &Board) -> Result<Board> {
        if self.show_analysis {
            write!(self.output, "{}", render_ranked(&ranked_moves(board)))?;
        }
        let report = self.searcher.search(board);
        let mv = report
            .best
            .context("Engine found no move on an unfinished board")?;
        debug!(best = %mv, shortcut = report.shortcut, "Engine chose move");
        writeln!(self.output, "Engine plays {}", mv)?;
        Ok(apply(board, mv)?)
    }
}

/// Plays the engine against itself from the empty board.
#[instrument(skip(output, searcher))]
pub fn selfplay<W: Write>(mut output: W, searcher: &Searcher) -> Result<Outcome> {
    let mut board = initial_board();
    while let Some(mv) = searcher.search(&board).best {
        let mark = current_turn(&board);
        board = apply(&board, mv)?;
        writeln!(output, "{} plays {}\n{}\n", mark, mv, board)?;
    }
    let result = outcome(&board);
    writeln!(output, "Result: {}", result)?;
    info!(%result, "Self-play finished");
    Ok(result)
}
