//! Exhaustive minimax search.
//!
//! The computer is the maximizing player. A position is scored from the
//! computer's point of view, relative to the number of plies played since the
//! search began:
//!
//! - computer has a line: `WIN_SCORE - depth`
//! - human has a line: `depth - WIN_SCORE`
//! - full board: `0`
//!
//! Subtracting the depth makes the engine prefer faster wins and slower
//! losses. Scores are only comparable within one search.
//!
//! # Example
//!
//! ```
//! use flawless_tictactoe::{Board, Position, best_computer_move};
//!
//! // The human threatens the top row; the computer must block.
//! let board: Board = "OO. .X. ...".parse().unwrap();
//! assert_eq!(best_computer_move(&board), Some(Position::TopRight));
//! ```

use crate::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position from the computer's point of view.
pub type Score = i32;

/// Score of a win found at depth 0.
pub const WIN_SCORE: Score = 10;

/// Result of searching one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move for the computer, if any cell is empty.
    pub best_move: Option<Position>,
    /// Score of the best move (0 if there is none).
    pub score: Score,
    /// Total positions visited.
    pub nodes: u64,
    /// Every candidate with its score, in row-major order.
    pub candidates: Vec<(Position, Score)>,
}

/// Chooses the computer's move for `board`.
///
/// Every empty cell is tried in row-major order and the first candidate with
/// the strictly greatest score wins. The board passed in is never modified.
/// Returns `None` when no cell is empty.
pub fn best_computer_move(board: &Board) -> Option<Position> {
    analyze(board).best_move
}

/// Scores every computer move on `board` and picks the best one.
///
/// Callers are expected to check that the board is not terminal first. On a
/// board that already has a winner the candidates are still scored, but the
/// result says nothing useful about the game.
#[instrument(skip(board), fields(empty = board.empty_positions().count()))]
pub fn analyze(board: &Board) -> SearchResult {
    let mut search = Minimax::new(*board);
    let mut candidates = Vec::new();
    let mut best: Option<(Position, Score)> = None;

    for pos in board.empty_positions() {
        search.scratch.set(pos, Cell::Occupied(Player::Computer));
        let score = search.score(0, false);
        search.scratch.set(pos, Cell::Empty);

        candidates.push((pos, score));
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let result = SearchResult {
        best_move: best.map(|(pos, _)| pos),
        score: best.map_or(0, |(_, score)| score),
        nodes: search.nodes,
        candidates,
    };
    debug!(
        best_move = ?result.best_move,
        score = result.score,
        nodes = result.nodes,
        "Search complete"
    );
    result
}

/// Minimax value of `board` at `depth` plies into a search.
///
/// `maximizing` selects who places the next mark: the computer when true,
/// the human otherwise. The argument is copied; the caller's board is
/// untouched.
pub fn minimax(board: &Board, depth: Score, maximizing: bool) -> Score {
    Minimax::new(*board).score(depth, maximizing)
}

/// Search state: one scratch board, marked and unmarked in place.
struct Minimax {
    scratch: Board,
    nodes: u64,
}

impl Minimax {
    fn new(board: Board) -> Self {
        Self {
            scratch: board,
            nodes: 0,
        }
    }

    fn score(&mut self, depth: Score, maximizing: bool) -> Score {
        self.nodes += 1;

        if self.scratch.has_won(Player::Computer) {
            return WIN_SCORE - depth;
        }
        if self.scratch.has_won(Player::Human) {
            return depth - WIN_SCORE;
        }
        if self.scratch.is_full() {
            return 0;
        }

        let mover = if maximizing {
            Player::Computer
        } else {
            Player::Human
        };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for pos in Position::ALL {
            if self.scratch.is_occupied(pos) {
                continue;
            }
            self.scratch.set(pos, Cell::Occupied(mover));
            let score = self.score(depth + 1, !maximizing);
            self.scratch.set(pos, Cell::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
