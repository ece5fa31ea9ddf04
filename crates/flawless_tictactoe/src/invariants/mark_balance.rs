//! Mark balance invariant: players alternate, so mark counts stay close.

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: human and computer mark counts differ by at most one.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        board
            .count(Player::Human)
            .abs_diff(board.count(Player::Computer))
            <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
