//! Flawless tic-tac-toe: a 3x3 board model and a computer opponent that
//! never loses.
//!
//! # Architecture
//!
//! - **Board**: cells, placement, and win/draw detection ([`Board`], [`rules`])
//! - **Search**: exhaustive minimax over every continuation ([`best_computer_move`])
//! - **Session**: the authoritative game a front end drives ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use flawless_tictactoe::{GameSession, Outcome};
//!
//! let mut session = GameSession::new();
//! assert_eq!(session.apply_human_move(1, 1).unwrap(), Outcome::InProgress);
//! assert_eq!(session.apply_computer_move().unwrap(), Outcome::InProgress);
//! assert_eq!(session.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod invariants;
mod outcome;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use action::{Move, PreconditionError};
pub use board::{Board, ParseBoardError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    MonotonicBoardInvariant, SessionInvariants,
};
pub use outcome::Outcome;
pub use position::Position;
pub use search::{SearchResult, Score, WIN_SCORE, analyze, best_computer_move, minimax};
pub use session::GameSession;
pub use types::{Cell, Player};
