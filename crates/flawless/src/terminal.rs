//! Line-based terminal front end.
//!
//! Reads moves as `row col` (zero-indexed, row 0 at the top) or cell labels,
//! and lets the engine answer after each human move. Input the rules reject is
//! reported and otherwise ignored.

use crate::config::GameConfig;
use anyhow::Result;
use flawless_tictactoe::{Board, Cell, GameSession, Outcome, Player, Position};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Finished games, by result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games the human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::Human) => self.human_wins += 1,
            Outcome::Win(Player::Computer) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// A parsed line of input during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Restart,
    Place(Position),
    Unrecognized,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "restart" => Input::Restart,
            other => Position::parse(other).map_or(Input::Unrecognized, Input::Place),
        }
    }
}

/// Plays games over any reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    human_mark: char,
    computer_mark: char,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal drawing marks as configured.
    pub fn new(input: R, output: W, config: &GameConfig) -> Self {
        Self {
            input,
            output,
            human_mark: *config.human_mark(),
            computer_mark: *config.computer_mark(),
        }
    }

    /// Runs games until the player quits or input ends.
    #[instrument(skip_all, fields(first_player = %session.first_player()))]
    pub fn run(&mut self, session: &mut GameSession) -> Result<Tally> {
        let mut tally = Tally::default();

        loop {
            self.computer_opens(session)?;
            self.render(session.board())?;

            if !self.play_one(session)? {
                return Ok(tally);
            }

            let outcome = session.outcome();
            tally.record(outcome);
            info!(%outcome, ?tally, "Game finished");
            writeln!(self.output, "{}", banner(outcome))?;
            write!(self.output, "Press Enter to play again, q to quit: ")?;
            self.output.flush()?;

            match self.read_line()? {
                Some(line) if Input::parse(&line) != Input::Quit => session.reset(),
                _ => return Ok(tally),
            }
        }
    }

    /// Plays until the game ends. Returns false if the player quit instead.
    fn play_one(&mut self, session: &mut GameSession) -> Result<bool> {
        while !session.outcome().is_terminal() {
            write!(self.output, "Your move (row col), r to restart, q to quit: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            let input = Input::parse(&line);
            debug!(?input, "Read input");

            match input {
                Input::Quit => return Ok(false),
                Input::Restart => {
                    session.reset();
                    self.computer_opens(session)?;
                }
                Input::Unrecognized => {
                    writeln!(self.output, "Unrecognized input {:?}", line.trim())?;
                    continue;
                }
                Input::Place(pos) => match session.apply_human_move(pos.row(), pos.col()) {
                    Ok(outcome) if !outcome.is_terminal() => {
                        session.apply_computer_move()?;
                        if let Some(reply) = session.last_move() {
                            writeln!(self.output, "Computer plays {}", reply.position)?;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "Ignoring move");
                        writeln!(self.output, "Move ignored: {e}")?;
                        continue;
                    }
                },
            }

            self.render(session.board())?;
        }
        Ok(true)
    }

    fn computer_opens(&mut self, session: &mut GameSession) -> Result<()> {
        if session.to_move() == Player::Computer && !session.outcome().is_terminal() {
            session.apply_computer_move()?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output, "  0 1 2")?;
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_coords(row, col))
                .map(|pos| self.mark(board.get(pos)).to_string())
                .collect();
            writeln!(self.output, "{} {}", row, cells.join(" "))?;
        }
        Ok(())
    }

    fn mark(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => '.',
            Cell::Occupied(Player::Human) => self.human_mark,
            Cell::Occupied(Player::Computer) => self.computer_mark,
        }
    }
}

fn banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Player::Human) => "YOU WON!",
        Outcome::Win(Player::Computer) => "YOU LOST!",
        Outcome::Draw => "IT'S A TIE!",
        Outcome::InProgress => "",
    }
}
