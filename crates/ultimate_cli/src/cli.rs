//! Command-line interface for the `ultimate` binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use ultimate_tictactoe::{Player, Position};

/// Ultimate Tic-Tac-Toe - play games stored as JSON files
#[derive(Parser, Debug)]
#[command(name = "ultimate")]
#[command(about = "Play Ultimate Tic-Tac-Toe games stored on disk", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (`data_dir = "..."`)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory; overrides the config file and DATA_DIR
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new game
    New {
        /// Game id (letters, digits, '-' and '_')
        id: String,
    },

    /// Make a move
    Play {
        /// Game id
        id: String,

        /// Player making the move
        #[arg(value_enum, ignore_case = true)]
        player: PlayerArg,

        /// Sub-board to play in (e.g. top-left, center)
        corner: Position,

        /// Cell within the sub-board
        cell: Position,
    },

    /// Print the board and status
    Show {
        /// Game id
        id: String,
    },

    /// List the moves played, with times and durations
    History {
        /// Game id
        id: String,
    },

    /// List stored games
    List,

    /// Print the JSON schema of a move request
    Schema,
}

/// Player as typed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}
