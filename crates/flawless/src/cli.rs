//! Command-line interface for flawless.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Flawless - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "flawless")]
#[command(about = "Tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, global = true, default_value = "flawless.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Let the computer make the opening move
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the computer's best move for a board
    Best {
        /// Nine cells, row-major: O = human, X = computer, . = empty (e.g. "OO./.X./...")
        board: String,

        /// Print the search result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            computer_first: false,
        }
    }
}
