//! Contract-based validation for session moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! are always checked; postconditions only in debug builds.

use super::action::{Move, PreconditionError};
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::{Board, GameSession};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PreconditionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be running.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`PreconditionError::GameOver`] on a terminal board.
    pub fn check(session: &GameSession) -> Result<(), PreconditionError> {
        let outcome = session.outcome();
        if outcome.is_terminal() {
            Err(PreconditionError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`PreconditionError::NotYourTurn`] for the wrong player.
    pub fn check(mv: &Move, session: &GameSession) -> Result<(), PreconditionError> {
        if mv.player != session.to_move() {
            Err(PreconditionError::NotYourTurn(mv.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`PreconditionError::CellOccupied`] on a marked cell.
    pub fn check(mv: &Move, session: &GameSession) -> Result<(), PreconditionError> {
        if session.board().is_occupied(mv.position) {
            Err(PreconditionError::CellOccupied(mv.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: game running, player's turn,
/// cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(mv: &Move, session: &GameSession) -> Result<(), PreconditionError> {
        GameNotOver::check(session)?;
        PlayersTurn::check(mv, session)?;
        CellIsEmpty::check(mv, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move to a session.
///
/// Postconditions:
/// - Marks present before are unchanged
/// - Exactly one mark was added
/// - All session invariants hold
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, mv: &Move) -> Result<(), PreconditionError> {
        LegalMove::check(mv, session)
    }

    #[instrument(skip_all)]
    fn post(before: &GameSession, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !extends(before.board(), after.board()) {
            violations.push(InvariantViolation::new(
                "Existing marks were changed by a move",
            ));
        }
        if marks(after.board()) != marks(before.board()) + 1 {
            violations.push(InvariantViolation::new(
                "A move must add exactly one mark",
            ));
        }
        if let Err(failed) = SessionInvariants::check_all(after) {
            violations.extend(failed);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}

/// Every marked cell of `before` holds the same mark in `after`.
fn extends(before: &Board, after: &Board) -> bool {
    before
        .cells()
        .iter()
        .zip(after.cells())
        .all(|(old, new)| old.is_empty() || old == new)
}

fn marks(board: &Board) -> usize {
    board.cells().iter().filter(|cell| !cell.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Position};

    #[test]
    fn test_precondition_empty_cell() {
        let session = GameSession::new();
        let mv = Move::new(Player::Human, Position::Center);
        assert!(MoveContract::pre(&session, &mv).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut session = GameSession::new();
        session.apply_human_move(1, 1).unwrap();
        session.apply_computer_move().unwrap();

        let mv = Move::new(Player::Human, Position::Center);
        assert_eq!(
            MoveContract::pre(&session, &mv),
            Err(PreconditionError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let session = GameSession::new();
        let mv = Move::new(Player::Computer, Position::Center);
        assert_eq!(
            MoveContract::pre(&session, &mv),
            Err(PreconditionError::NotYourTurn(Player::Computer))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut session = GameSession::new();
        for (row, col) in [(0, 0), (0, 1), (0, 2)] {
            session.board.set(
                Position::from_coords(row, col).unwrap(),
                Cell::Occupied(Player::Human),
            );
        }
        let mv = Move::new(Player::Human, Position::Center);
        assert!(matches!(
            MoveContract::pre(&session, &mv),
            Err(PreconditionError::GameOver(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.apply_human_move(1, 1).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut before = GameSession::new();
        before.apply_human_move(1, 1).unwrap();

        let mut after = before.clone();
        after.board.set(Position::Center, Cell::Occupied(Player::Computer));
        after.board.set(Position::TopLeft, Cell::Occupied(Player::Human));

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description.contains("Existing marks"))
        );
    }

    #[test]
    fn test_postcondition_detects_missing_mark() {
        let before = GameSession::new();
        let after = before.clone();
        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description.contains("exactly one mark"))
        );
    }
}
