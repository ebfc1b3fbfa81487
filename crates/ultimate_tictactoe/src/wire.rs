//! Persisted shape of boards and states.
//!
//! Games are stored as JSON objects keyed by position name:
//!
//! ```json
//! {
//!   "turn": "O", "finished": false, "winner": "", "activeCorner": "topleft",
//!   "topleft": { "finished": false, "winner": "", "topleft": "", ... },
//!   ...
//! }
//! ```
//!
//! The records here mirror that layout field for field; the domain types
//! convert to and from them through serde's `from`/`try_from`/`into`.

use crate::{ActiveCorner, Cell, GameState, Player, Position, SubBoard};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Error raised when a decoded state breaks a structural rule.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game state: {}", message)]
pub struct WireError {
    /// What was wrong.
    pub message: String,
}

impl WireError {
    /// Creates a new wire error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SubBoardRecord {
    finished: bool,
    winner: Cell,
    topleft: Cell,
    topmiddle: Cell,
    topright: Cell,
    middleleft: Cell,
    center: Cell,
    middleright: Cell,
    bottomleft: Cell,
    bottommiddle: Cell,
    bottomright: Cell,
}

impl From<SubBoard> for SubBoardRecord {
    fn from(board: SubBoard) -> Self {
        let [
            topleft,
            topmiddle,
            topright,
            middleleft,
            center,
            middleright,
            bottomleft,
            bottommiddle,
            bottomright,
        ] = board.cells;
        Self {
            finished: board.finished,
            winner: board.winner.into(),
            topleft,
            topmiddle,
            topright,
            middleleft,
            center,
            middleright,
            bottomleft,
            bottommiddle,
            bottomright,
        }
    }
}

impl From<SubBoardRecord> for SubBoard {
    fn from(record: SubBoardRecord) -> Self {
        Self {
            cells: [
                record.topleft,
                record.topmiddle,
                record.topright,
                record.middleleft,
                record.center,
                record.middleright,
                record.bottomleft,
                record.bottommiddle,
                record.bottomright,
            ],
            finished: record.finished,
            winner: record.winner.player(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GameStateRecord {
    turn: Player,
    finished: bool,
    winner: Cell,
    #[serde(rename = "activeCorner")]
    active_corner: ActiveCorner,
    topleft: SubBoard,
    topmiddle: SubBoard,
    topright: SubBoard,
    middleleft: SubBoard,
    center: SubBoard,
    middleright: SubBoard,
    bottomleft: SubBoard,
    bottommiddle: SubBoard,
    bottomright: SubBoard,
}

impl From<GameState> for GameStateRecord {
    fn from(state: GameState) -> Self {
        let [
            topleft,
            topmiddle,
            topright,
            middleleft,
            center,
            middleright,
            bottomleft,
            bottommiddle,
            bottomright,
        ] = state.boards;
        Self {
            turn: state.turn,
            finished: state.finished,
            winner: state.winner.into(),
            active_corner: state.active_corner,
            topleft,
            topmiddle,
            topright,
            middleleft,
            center,
            middleright,
            bottomleft,
            bottommiddle,
            bottomright,
        }
    }
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = WireError;

    /// Rebuilds a state exactly as stored; status fields are trusted.
    ///
    /// Fails if the active corner names a finished sub-board.
    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let state = GameState {
            boards: [
                record.topleft,
                record.topmiddle,
                record.topright,
                record.middleleft,
                record.center,
                record.middleright,
                record.bottomleft,
                record.bottommiddle,
                record.bottomright,
            ],
            turn: record.turn,
            finished: record.finished,
            winner: record.winner.player(),
            active_corner: record.active_corner,
        };

        if let ActiveCorner::Constrained(corner) = state.active_corner
            && state.board(corner).is_finished()
        {
            warn!(%corner, "Rejecting state constrained to a finished sub-board");
            return Err(WireError::new(format!(
                "active corner {} names a finished sub-board",
                corner
            )));
        }

        Ok(state)
    }
}
