//! Ultimate Tic-Tac-Toe rules engine.
//!
//! A 3x3 grid of 3x3 sub-boards. Each move lands in one cell of one
//! sub-board, and the cell chosen decides which sub-board the opponent
//! must play in next. Winning three sub-boards in a line wins the game.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], [`Position`], [`ActiveCorner`]
//! - **Boards**: [`SubBoard`] evaluates its own cells; [`GameState`]
//!   evaluates the meta board over sub-board winners
//! - **Engine**: [`Engine::take_turn`] validates a [`Move`], snapshots the
//!   state into [`History`], and applies the move
//! - **Contracts / invariants**: preconditions for moves and properties
//!   every reachable [`Game`] satisfies
//!
//! The engine is synchronous and performs no I/O. Callers that share games
//! across threads must serialize moves per game themselves.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{ActiveCorner, Engine, Game, Move, Player, Position};
//!
//! let mut game = Game::new();
//! Engine::take_turn(&mut game, Move::new(Player::X, Position::Center, Position::TopLeft))?;
//!
//! assert_eq!(game.current().turn(), Player::O);
//! assert_eq!(
//!     game.current().active_corner(),
//!     ActiveCorner::Constrained(Position::TopLeft)
//! );
//! # Ok::<(), ultimate_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod game;
mod history;
mod position;
mod render;
mod state;
mod sub_board;
mod types;
mod wire;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::Engine;
pub use game::Game;
pub use history::{History, Snapshot};
pub use position::{ActiveCorner, ParsePositionError, Position};
pub use state::GameState;
pub use sub_board::SubBoard;
pub use types::{Cell, Outcome, Player};
pub use wire::WireError;
