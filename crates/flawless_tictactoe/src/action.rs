//! Moves and the errors raised when one cannot be applied.

use super::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// A caller asked for something the game rules forbid.
///
/// In a correct front end these indicate a bug in the caller, which should
/// filter input with [`Board::is_occupied`](crate::Board::is_occupied) and
/// turn checks before calling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PreconditionError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),

    /// It is not this player's turn.
    #[display("It's not {_0}'s turn")]
    NotYourTurn(Player),

    /// The game has already ended.
    #[display("Game is already over: {_0}")]
    GameOver(Outcome),
}

impl std::error::Error for PreconditionError {}
