//! The 3x3 board.

use super::action::PreconditionError;
use super::{Cell, Outcome, Player, Position, rules};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// A board has no notion of whose turn it is; turn order belongs to the
/// caller. Marks are never removed from a board handed out by this type,
/// only a fresh board starts empty again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if a cell holds a mark.
    pub fn is_occupied(&self, pos: Position) -> bool {
        !self.get(pos).is_empty()
    }

    /// Returns a board with `player`'s mark added at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&self, pos: Position, player: Player) -> Result<Board, PreconditionError> {
        if self.is_occupied(pos) {
            return Err(PreconditionError::CellOccupied(pos));
        }
        let mut next = *self;
        next.set(pos, Cell::Occupied(player));
        Ok(next)
    }

    /// Writes a cell without checks. Only search scratch boards use this,
    /// to mark and then unmark a hypothetical move.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| !self.is_occupied(pos))
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks whether `player` owns a complete line.
    pub fn has_won(&self, player: Player) -> bool {
        rules::has_won(self, player)
    }

    /// Returns the player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self)
    }

    /// Derives the current outcome.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Input did not contain exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongLength(usize),

    /// A character that is not a cell symbol.
    #[display("Unknown cell symbol {_0:?}")]
    UnknownSymbol(char),

    /// Mark counts differ by more than one, which alternating play cannot produce.
    #[display("Unbalanced marks: {human} human, {computer} computer")]
    Unbalanced {
        /// Human marks.
        human: usize,
        /// Computer marks.
        computer: usize,
    },

    /// Both players own a line.
    #[display("Both players have three in a row")]
    DoubleWin,
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cell symbols: `O` (human), `X` (computer), and `.`, `-` or
    /// `_` (empty). Whitespace, `|` and `/` are ignored so `"O.X|...|X.O"`
    /// and multi-line renderings both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let cell = match c {
                'O' | 'o' => Cell::Occupied(Player::Human),
                'X' | 'x' => Cell::Occupied(Player::Computer),
                '.' | '-' | '_' => Cell::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::UnknownSymbol(c)),
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Cell>| ParseBoardError::WrongLength(cells.len()))?;
        let board = Board { cells };

        let human = board.count(Player::Human);
        let computer = board.count(Player::Computer);
        if human.abs_diff(computer) > 1 {
            return Err(ParseBoardError::Unbalanced { human, computer });
        }
        if board.has_won(Player::Human) && board.has_won(Player::Computer) {
            return Err(ParseBoardError::DoubleWin);
        }

        Ok(board)
    }
}
