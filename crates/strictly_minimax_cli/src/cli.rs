//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::Mark;

/// Strictly Minimax - perfect tic-tac-toe by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play or analyze tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Mark the human plays (X moves first)
        #[arg(long)]
        human: Option<Mark>,

        /// Always run the full search, even when a win is one move away
        #[arg(long)]
        no_fast_path: bool,

        /// Print the engine's ranked candidates before each of its moves
        #[arg(long)]
        show_analysis: bool,
    },

    /// Analyze a board given as nine cells, e.g. "XO./.X./..O"
    Analyze {
        /// Board cells in row-major order
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from the empty board
    Selfplay,
}
