//! Core value types shared by both nesting levels of the board.

use schemars::JsonSchema;
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize, Serializer};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The symbol this player writes into a cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A single square, at either nesting level.
///
/// On the wire a cell is the empty string, `"X"` or `"O"`. Sub-board and
/// meta winners use the same encoding, with the empty string meaning
/// "no winner".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Wire symbol: `""`, `"X"` or `"O"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(player) => player.symbol(),
        }
    }

    /// Parses a wire symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" => Some(Cell::Empty),
            "X" => Some(Cell::Occupied(Player::X)),
            "O" => Some(Cell::Occupied(Player::O)),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

impl From<Option<Player>> for Cell {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Cell::from_symbol(&raw).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Str(&raw), &r#""", "X" or "O""#)
        })
    }
}

/// Result of evaluating a board, at either level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Still being played.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Every square is taken and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Builds an outcome from the stored `finished`/`winner` pair.
    pub(crate) fn from_status(finished: bool, winner: Option<Player>) -> Self {
        match (finished, winner) {
            (_, Some(player)) => Outcome::Won(player),
            (true, None) => Outcome::Draw,
            (false, None) => Outcome::InProgress,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the board is won or drawn.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_symbols_round_trip_through_cells() {
        use strum::IntoEnumIterator;
        for player in Player::iter() {
            assert_eq!(player.opponent().opponent(), player);
            assert_eq!(
                Cell::from_symbol(player.symbol()),
                Some(Cell::Occupied(player))
            );
        }
    }

    #[test]
    fn test_cell_wire_encoding() {
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), r#""""#);
        assert_eq!(
            serde_json::to_string(&Cell::Occupied(Player::O)).unwrap(),
            r#""O""#
        );
        let cell: Cell = serde_json::from_str(r#""X""#).unwrap();
        assert_eq!(cell, Cell::Occupied(Player::X));
    }

    #[test]
    fn test_cell_rejects_unknown_symbol() {
        let result: Result<Cell, _> = serde_json::from_str(r#""Z""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(Outcome::from_status(false, None), Outcome::InProgress);
        assert_eq!(Outcome::from_status(true, None), Outcome::Draw);
        assert_eq!(
            Outcome::from_status(true, Some(Player::O)),
            Outcome::Won(Player::O)
        );
    }
}
