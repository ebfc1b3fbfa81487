//! Persistence for Ultimate Tic-Tac-Toe games.
//!
//! Games are kept as JSON files, one per game id, in the persisted layout
//! of [`ultimate_tictactoe::Game`]. [`GameDispatcher`] makes sure two moves
//! on the same game never interleave.
//!
//! # Example
//!
//! ```no_run
//! use ultimate_store::{GameDispatcher, GameFileStore, StoreConfig};
//! use ultimate_tictactoe::{Move, Player, Position};
//!
//! let config = StoreConfig::load(None)?;
//! let dispatcher = GameDispatcher::new(GameFileStore::new(&config));
//! dispatcher.start_new_game("friday")?;
//! let game = dispatcher.take_turn(
//!     "friday",
//!     Move::new(Player::X, Position::Center, Position::TopLeft),
//! )?;
//! println!("{game}");
//! # Ok::<(), ultimate_store::StoreError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod dispatcher;
mod error;
mod file_store;

pub use config::{DATA_DIR_ENV, StoreConfig};
pub use dispatcher::GameDispatcher;
pub use error::{StoreError, StoreErrorKind};
pub use file_store::{GameFileStore, GameId};
