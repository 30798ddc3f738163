//! State queries: whose turn, which moves, who won.

mod terminal;
mod turn;
mod win;

pub use terminal::{evaluate, is_terminal, outcome};
pub use turn::{current_turn, legal_moves};
pub use win::{LINES, winner, winning_marks};
