//! Bounded board coordinates.

use super::action::PreconditionError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A cell position on the 3x3 board.
///
/// Variants are declared in row-major order, so iterating them visits
/// row 0 left to right, then row 1, then row 2. Coordinates are zero-indexed
/// with row 0 at the top and column 0 at the left.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this position (0 = top).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this position (0 = left).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from zero-indexed coordinates.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses `"row col"`, `"row,col"` or a label such as `"top-left"`.
    ///
    /// Labels match case-insensitively and ignore spaces, so `"top left"`
    /// and `"TopLeft"` both resolve. Coordinates outside the board yield `None`.
    pub fn parse(s: &str) -> Option<Position> {
        let coords: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if let [row, col] = coords.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Self::from_coords(row, col);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        Position::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PreconditionError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::from_coords(row, col).ok_or(PreconditionError::OutOfBounds { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_round_trip_in_row_major_order() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.index(), index);
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(
            Position::try_from((1, 5)),
            Err(PreconditionError::OutOfBounds { row: 1, col: 5 })
        );
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(Position::parse("1 1"), Some(Position::Center));
        assert_eq!(Position::parse("2,0"), Some(Position::BottomLeft));
        assert_eq!(Position::parse(" 0 , 2 "), Some(Position::TopRight));
        assert_eq!(Position::parse("3 3"), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(Position::parse("center"), Some(Position::Center));
        assert_eq!(Position::parse("Bottom right"), Some(Position::BottomRight));
        assert_eq!(Position::parse("top-left"), Some(Position::TopLeft));
        assert_eq!(Position::parse("nowhere"), None);
        assert_eq!(Position::parse(""), None);
    }
}
