//! Terminal front end for the strictly_minimax engine.
//!
//! Owns the interaction loop, configuration and rendering; all game logic
//! comes from [`strictly_minimax`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod play;
pub mod render;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use play::{Session, selfplay};
pub use render::{Analysis, analyze, render_analysis, render_ranked, verdict};
