//! Game outcome, derived from a board on demand.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Empty cells remain and nobody has a line.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board is full with no line.
    Draw,
}

impl Outcome {
    /// Returns true once the game can accept no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
