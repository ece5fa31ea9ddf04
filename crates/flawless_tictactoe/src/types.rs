//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A participant in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The engine.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Single-character form: `O` for the human, `X` for the computer.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::Human) => 'O',
            Cell::Occupied(Player::Computer) => 'X',
        }
    }
}
