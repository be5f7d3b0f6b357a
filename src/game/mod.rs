//! Game state and the reducer that drives it.

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::{reduce, reduce_with_rng};
pub use state::{EndGameStatus, GameState};

/// Number of submitted guesses after which an unsolved game is lost.
pub const MAX_GUESSES: usize = 4;
