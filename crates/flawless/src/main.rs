//! Flawless - tic-tac-toe in the terminal against a computer that never loses.

#![warn(missing_docs)]

mod cli;
mod config;
mod terminal;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use flawless_tictactoe::{Board, GameSession, Player, analyze};
use terminal::Terminal;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command.unwrap_or_default() {
        Command::Play { computer_first } => {
            let config = if computer_first {
                config.with_first_player(Player::Computer)
            } else {
                config
            };
            run_play(&config)
        }
        Command::Best { board, json } => run_best(&board, json),
    }
}

/// Play interactive games on stdin/stdout
#[instrument(skip_all, fields(first_player = %config.first_player()))]
fn run_play(config: &GameConfig) -> Result<()> {
    info!("Starting terminal game");

    let mut session = GameSession::with_first_player(*config.first_player());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let tally = Terminal::new(stdin.lock(), stdout.lock(), config).run(&mut session)?;

    println!();
    println!(
        "Won {}, lost {}, tied {}",
        tally.human_wins, tally.computer_wins, tally.draws
    );
    Ok(())
}

/// Print the engine's choice for a board given on the command line
#[instrument]
fn run_best(board: &str, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let outcome = board.outcome();
    if outcome.is_terminal() {
        bail!("Board is already decided: {}", outcome);
    }

    let result = analyze(&board);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{board}");
    println!();
    match result.best_move {
        Some(pos) => println!("Best move: {} (score {})", pos, result.score),
        None => println!("No move available"),
    }
    for (pos, score) in &result.candidates {
        println!("  {pos}: {score}");
    }
    println!("{} positions searched", result.nodes);
    Ok(())
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
