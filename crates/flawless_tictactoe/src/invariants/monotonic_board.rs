//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Replaying fails if any move lands on an occupied cell, so a board that
/// had a mark overwritten, or a mark added outside the history, violates it.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        for mv in session.history() {
            match replayed.place(mv.position, mv.player) {
                Ok(next) => replayed = next,
                Err(_) => return false,
            }
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Move, Player, Position};

    #[test]
    fn test_new_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut session = GameSession::new();
        session.apply_human_move(0, 0).unwrap();
        session.apply_computer_move().unwrap();
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut session = GameSession::new();
        session.apply_human_move(1, 1).unwrap();
        session.board.set(Position::Center, Cell::Occupied(Player::Computer));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_replay_onto_occupied_cell_violates() {
        let mut session = GameSession::new();
        session.apply_human_move(1, 1).unwrap();
        session
            .history
            .push(Move::new(Player::Computer, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
