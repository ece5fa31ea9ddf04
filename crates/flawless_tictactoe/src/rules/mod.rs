//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the search and the session share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, has_won, winner};

use super::{Board, Outcome, Player};

/// Derives the outcome of a board.
///
/// The computer's lines are checked before the human's. Both owning a line
/// cannot happen under alternating play, so the order only matters for
/// hand-built boards.
pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, Player::Computer) {
        Outcome::Win(Player::Computer)
    } else if has_won(board, Player::Human) {
        Outcome::Win(Player::Human)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_outcome_reports_win() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Win(Player::Computer));
    }

    #[test]
    fn test_outcome_reports_draw() {
        let board: Board = "OXO OXX XOO".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Draw);
    }
}
