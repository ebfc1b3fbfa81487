//! Win detection over a 3x3 grid.

use crate::{Player, Position};
use tracing::{debug, instrument};

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the
/// top-left and top-right diagonals. The first complete line wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopMiddle, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomMiddle,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopMiddle, Position::Center, Position::BottomMiddle],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the owner of the first complete line, if any.
#[instrument(skip(owner))]
pub fn check_winner(owner: impl Fn(Position) -> Option<Player>) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Some(player) = owner(a)
            && owner(b) == Some(player)
            && owner(c) == Some(player)
        {
            debug!(%player, line = ?[a, b, c], "Line completed");
            return Some(player);
        }
    }

    None
}
