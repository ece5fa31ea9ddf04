//! Alternating turn invariant: the first player, then the other, and so on.

use super::super::GameSession;
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The history must start with the session's first player and never show
/// the same player twice in a row. While the game is running, `to_move`
/// must be the player after the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.player != session.first_player()
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected_next = match history.last() {
            Some(last) => last.player.opponent(),
            None => session.first_player(),
        };
        session.outcome().is_terminal() || session.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
