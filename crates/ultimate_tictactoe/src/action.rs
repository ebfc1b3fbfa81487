//! Move requests and the reasons a move can be rejected.
//!
//! A move is a domain event: the player's intent, addressed by the
//! sub-board (`corner`) and the cell inside it. It can be validated
//! before anything is applied.

use crate::{Player, Position};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A player placing their mark in `cell` of the sub-board at `corner`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_new::new,
)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Which sub-board to play in.
    pub corner: Position,
    /// Which cell of that sub-board to take.
    #[serde(alias = "position")]
    pub cell: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}/{}", self.player, self.corner, self.cell)
    }
}

/// Why a move was rejected.
///
/// The first five variants are caller errors, checked in declaration
/// order; a rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The meta game has already been won or drawn.
    #[display("The game is already finished")]
    GameAlreadyFinished,

    /// The move was made by the player who is not on turn.
    #[display("It's not {attempted}'s turn ({expected} to move)")]
    NotYourTurn {
        /// The player on turn.
        expected: Player,
        /// The player who tried to move.
        attempted: Player,
    },

    /// The move ignores the active-corner constraint.
    #[display("You must play in the {required} corner, not {attempted}")]
    WrongCorner {
        /// The corner the move had to target.
        required: Position,
        /// The corner the move targeted.
        attempted: Position,
    },

    /// The targeted sub-board is already won or drawn.
    #[display("The {_0} sub-board is already finished")]
    SubBoardFinished(Position),

    /// The targeted cell already holds a mark.
    #[display("The {cell} cell in the {corner} sub-board is already taken")]
    CellOccupied {
        /// Sub-board of the move.
        corner: Position,
        /// Cell of the move.
        cell: Position,
    },

    /// A post-move invariant failed. Indicates an engine bug, not a bad move.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
