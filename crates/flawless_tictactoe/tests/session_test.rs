//! Tests for driving a game through the session.

use flawless_tictactoe::{
    Board, GameSession, Move, Outcome, Player, Position, PreconditionError,
};

#[test]
fn test_human_completes_top_row() {
    // O O . / X X . / . . .  with the human to move at (0, 2).
    let board: Board = "OO. XX. ...".parse().unwrap();
    let board = board.place(Position::TopRight, Player::Human).unwrap();
    assert_eq!(board.outcome(), Outcome::Win(Player::Human));
    assert!(board.has_won(Player::Human));
    assert!(!board.has_won(Player::Computer));
}

#[test]
fn test_computer_finishes_a_game_it_can_win() {
    let mut session = GameSession::new();
    // Human wastes moves along the bottom edge.
    session.apply_human_move(2, 0).unwrap();
    session.apply_computer_move().unwrap();
    session.apply_human_move(2, 2).unwrap();
    session.apply_computer_move().unwrap();

    let mut outcome = session.outcome();
    while !outcome.is_terminal() {
        outcome = match session.to_move() {
            Player::Human => {
                let pos = session.board().empty_positions().next().unwrap();
                session.apply_human_move(pos.row(), pos.col()).unwrap()
            }
            Player::Computer => session.apply_computer_move().unwrap(),
        };
    }
    assert_eq!(outcome, Outcome::Win(Player::Computer));
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut session = GameSession::new();
    let mut outcome = session.outcome();
    while !outcome.is_terminal() {
        outcome = match session.to_move() {
            Player::Human => {
                let pos = session.board().empty_positions().next().unwrap();
                session.apply_human_move(pos.row(), pos.col()).unwrap()
            }
            Player::Computer => session.apply_computer_move().unwrap(),
        };
    }

    assert_eq!(
        session.apply_computer_move(),
        Err(PreconditionError::GameOver(outcome))
    );
    let free = session.board().empty_positions().next();
    if let Some(pos) = free {
        assert_eq!(
            session.apply_human_move(pos.row(), pos.col()),
            Err(PreconditionError::GameOver(outcome))
        );
    }
}

#[test]
fn test_history_records_both_players() {
    let mut session = GameSession::new();
    session.apply_human_move(0, 0).unwrap();
    session.apply_computer_move().unwrap();
    assert_eq!(
        session.history(),
        &[
            Move::new(Player::Human, Position::TopLeft),
            Move::new(Player::Computer, Position::Center),
        ]
    );
}

#[test]
fn test_reset_then_outcome_is_in_progress() {
    let mut session = GameSession::new();
    session.reset();
    assert_eq!(session.outcome(), Outcome::InProgress);

    session.apply_human_move(0, 0).unwrap();
    session.apply_computer_move().unwrap();
    session.apply_human_move(2, 2).unwrap();
    session.reset();

    assert_eq!(session.outcome(), Outcome::InProgress);
    for pos in Position::ALL {
        assert!(!session.board().is_occupied(pos));
    }
    assert_eq!(session.to_move(), Player::Human);
    assert_eq!(session.last_move(), None);
}

#[test]
fn test_rejected_move_leaves_session_unchanged() {
    let mut session = GameSession::new();
    session.apply_human_move(1, 1).unwrap();
    let snapshot = session.clone();

    assert!(session.apply_human_move(0, 0).is_err());
    assert!(session.apply_human_move(9, 9).is_err());
    assert_eq!(session, snapshot);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PreconditionError::OutOfBounds { row: 4, col: 1 }.to_string(),
        "Cell (4, 1) is outside the board"
    );
    assert_eq!(
        PreconditionError::CellOccupied(Position::Center).to_string(),
        "Center (1, 1) is already occupied"
    );
    assert_eq!(
        PreconditionError::NotYourTurn(Player::Human).to_string(),
        "It's not Human's turn"
    );
    assert_eq!(
        PreconditionError::GameOver(Outcome::Win(Player::Computer)).to_string(),
        "Game is already over: Computer wins"
    );
}
