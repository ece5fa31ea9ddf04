//! The authoritative game between a human and the computer.

use super::action::{Move, PreconditionError};
use super::contracts::{Contract, MoveContract};
use super::{Board, Outcome, Player, Position, search};
use tracing::{debug, info, instrument, warn};

/// One game session.
///
/// Owns the only board that reflects the real game. The search engine is
/// handed copies, never this board. Turn order lives here rather than on
/// the board: the session knows who started and whose move it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) first_player: Player,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a session where the human moves first.
    pub fn new() -> Self {
        Self::with_first_player(Player::Human)
    }

    /// Creates a session where `first_player` makes the opening move.
    #[instrument]
    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            first_player,
            to_move: first_player,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who opens each game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played so far in this game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Current outcome, derived from the board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Places the human's mark at zero-indexed `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`PreconditionError::OutOfBounds`] if the coordinates are off the board
    /// - [`PreconditionError::GameOver`] if the game has ended
    /// - [`PreconditionError::NotYourTurn`] if the computer is to move
    /// - [`PreconditionError::CellOccupied`] if the cell holds a mark
    #[instrument(skip(self))]
    pub fn apply_human_move(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Outcome, PreconditionError> {
        let position = Position::try_from((row, col)).inspect_err(|e| {
            warn!(error = %e, "Rejected human move");
        })?;
        self.apply(Move::new(Player::Human, position))
    }

    /// Lets the engine choose and play the computer's move.
    ///
    /// # Errors
    ///
    /// - [`PreconditionError::GameOver`] if the game has ended
    /// - [`PreconditionError::NotYourTurn`] if the human is to move
    #[instrument(skip(self))]
    pub fn apply_computer_move(&mut self) -> Result<Outcome, PreconditionError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            warn!(%outcome, "Computer move requested after game over");
            return Err(PreconditionError::GameOver(outcome));
        }
        if self.to_move != Player::Computer {
            warn!("Computer move requested out of turn");
            return Err(PreconditionError::NotYourTurn(Player::Computer));
        }

        let Some(position) = search::best_computer_move(&self.board) else {
            // An in-progress board always has an empty cell.
            warn!("Search found no move on an in-progress board");
            return Err(PreconditionError::GameOver(outcome));
        };
        self.apply(Move::new(Player::Computer, position))
    }

    /// Starts a fresh game with the same first player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(first_player = %self.first_player, "Resetting game");
        self.board = Board::new();
        self.history.clear();
        self.to_move = self.first_player;
    }

    fn apply(&mut self, mv: Move) -> Result<Outcome, PreconditionError> {
        MoveContract::pre(self, &mv).inspect_err(|e| {
            warn!(error = %e, %mv, "Rejected move");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board = self.board.place(mv.position, mv.player)?;
        self.history.push(mv);
        self.to_move = mv.player.opponent();
        debug!(%mv, "Move applied");

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "Move postcondition failed: {post:?}");
        }

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game over");
        }
        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_move_applied() {
        let mut session = GameSession::new();
        let outcome = session.apply_human_move(1, 1).unwrap();
        assert_eq!(outcome, Outcome::InProgress);
        assert!(session.board().is_occupied(Position::Center));
        assert_eq!(session.to_move(), Player::Computer);
        assert_eq!(
            session.last_move(),
            Some(Move::new(Player::Human, Position::Center))
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut session = GameSession::new();
        assert_eq!(
            session.apply_human_move(3, 0),
            Err(PreconditionError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut session = GameSession::new();
        session.apply_human_move(0, 0).unwrap();
        session.apply_computer_move().unwrap();
        let snapshot = session.clone();

        assert_eq!(
            session.apply_human_move(1, 1),
            Err(PreconditionError::CellOccupied(Position::Center))
        );
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_human_cannot_move_twice() {
        let mut session = GameSession::new();
        session.apply_human_move(0, 0).unwrap();
        assert_eq!(
            session.apply_human_move(2, 2),
            Err(PreconditionError::NotYourTurn(Player::Human))
        );
    }

    #[test]
    fn test_computer_waits_for_its_turn() {
        let mut session = GameSession::new();
        assert_eq!(
            session.apply_computer_move(),
            Err(PreconditionError::NotYourTurn(Player::Computer))
        );
    }

    #[test]
    fn test_computer_replies_to_corner_with_center() {
        let mut session = GameSession::new();
        session.apply_human_move(0, 0).unwrap();
        session.apply_computer_move().unwrap();
        assert_eq!(
            session.last_move(),
            Some(Move::new(Player::Computer, Position::Center))
        );
        assert_eq!(session.to_move(), Player::Human);
    }

    #[test]
    fn test_computer_can_open() {
        let mut session = GameSession::with_first_player(Player::Computer);
        session.apply_computer_move().unwrap();
        assert_eq!(
            session.last_move(),
            Some(Move::new(Player::Computer, Position::TopLeft))
        );
    }

    #[test]
    fn test_reset_restores_first_player() {
        let mut session = GameSession::with_first_player(Player::Computer);
        session.apply_computer_move().unwrap();
        session.apply_human_move(1, 1).unwrap();

        session.reset();
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert!(session.history().is_empty());
        assert_eq!(session.to_move(), Player::Computer);
        assert!(Position::ALL.iter().all(|&pos| !session.board().is_occupied(pos)));
    }
}
