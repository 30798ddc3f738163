//! Strictly Minimax - unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_minimax::Searcher;
use strictly_minimax_cli::{Cli, Command, PlayConfig, Session, analyze, render_analysis, selfplay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            human,
            no_fast_path,
            show_analysis,
        } => run_play(config.with_overrides(human, no_fast_path, show_analysis)),
        Command::Analyze { board, json } => run_analyze(&config, &board, json),
        Command::Selfplay => run_selfplay(&config),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: PlayConfig) -> Result<()> {
    info!(human = %config.human(), fast_path = config.fast_path(), "Starting interactive game");
    let searcher = Searcher::new(config.search_options());
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), searcher, *config.human())
        .with_analysis(*config.show_analysis());
    session.run()?;
    Ok(())
}

/// Print the analysis of a single board
#[instrument(skip(config))]
fn run_analyze(config: &PlayConfig, board: &str, json: bool) -> Result<()> {
    let searcher = Searcher::new(config.search_options());
    let analysis = analyze(board, &searcher)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render_analysis(&analysis));
    }
    Ok(())
}

/// Let the engine play itself
#[instrument(skip(config))]
fn run_selfplay(config: &PlayConfig) -> Result<()> {
    let searcher = Searcher::new(config.search_options());
    selfplay(io::stdout(), &searcher)?;
    Ok(())
}
