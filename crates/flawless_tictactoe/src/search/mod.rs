//! Search module for the computer player.
//!
//! Contains the exhaustive minimax search used to pick the computer's move.
//! Every search works on a private copy of the board it is given.

pub mod minimax;

pub use minimax::{SearchResult, Score, WIN_SCORE, analyze, best_computer_move, minimax};
