//! Named positions shared by both nesting levels.
//!
//! The same nine names address a sub-board on the meta board (a "corner")
//! and a cell inside a sub-board. Persisted games spell them without the
//! hyphen (`topleft`); both spellings are accepted on input.

use schemars::JsonSchema;
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;
use tracing::instrument;

/// One of the nine squares of a 3x3 grid, in row-major order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    #[serde(rename = "topleft", alias = "top-left")]
    TopLeft,
    /// Top-middle (index 1)
    #[serde(rename = "topmiddle", alias = "top-middle")]
    TopMiddle,
    /// Top-right (index 2)
    #[serde(rename = "topright", alias = "top-right")]
    TopRight,
    /// Middle-left (index 3)
    #[serde(rename = "middleleft", alias = "middle-left")]
    MiddleLeft,
    /// Center (index 4)
    #[serde(rename = "center")]
    Center,
    /// Middle-right (index 5)
    #[serde(rename = "middleright", alias = "middle-right")]
    MiddleRight,
    /// Bottom-left (index 6)
    #[serde(rename = "bottomleft", alias = "bottom-left")]
    BottomLeft,
    /// Bottom-middle (index 7)
    #[serde(rename = "bottommiddle", alias = "bottom-middle")]
    BottomMiddle,
    /// Bottom-right (index 8)
    #[serde(rename = "bottomright", alias = "bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopMiddle,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomMiddle,
        Position::BottomRight,
    ];

    /// Human-readable name, e.g. `top-left`.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopMiddle => "top-middle",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::Center => "center",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomMiddle => "bottom-middle",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Key used in persisted games, e.g. `topleft`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Position::TopLeft => "topleft",
            Position::TopMiddle => "topmiddle",
            Position::TopRight => "topright",
            Position::MiddleLeft => "middleleft",
            Position::Center => "center",
            Position::MiddleRight => "middleright",
            Position::BottomLeft => "bottomleft",
            Position::BottomMiddle => "bottommiddle",
            Position::BottomRight => "bottomright",
        }
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a string names none of the nine positions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown position: {:?}", input)]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts the label (`top-left`) or the wire name (`topleft`),
    /// ignoring case and surrounding whitespace.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label() == wanted || pos.wire_name() == wanted)
            .ok_or_else(|| ParsePositionError {
                input: s.to_string(),
            })
    }
}

/// Where the next move may be played.
///
/// A constrained corner always names a sub-board that is still open; the
/// engine clears the constraint instead of pointing it at a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveCorner {
    /// Any open sub-board may be targeted.
    #[default]
    Unconstrained,
    /// The next move must be played in this sub-board.
    Constrained(Position),
}

impl ActiveCorner {
    /// Returns the required corner, if constrained.
    pub fn corner(self) -> Option<Position> {
        match self {
            ActiveCorner::Unconstrained => None,
            ActiveCorner::Constrained(pos) => Some(pos),
        }
    }

    /// Returns true if a move into `corner` satisfies the constraint.
    pub fn permits(self, corner: Position) -> bool {
        match self {
            ActiveCorner::Unconstrained => true,
            ActiveCorner::Constrained(required) => required == corner,
        }
    }
}

impl std::fmt::Display for ActiveCorner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveCorner::Unconstrained => write!(f, "any"),
            ActiveCorner::Constrained(pos) => write!(f, "{}", pos),
        }
    }
}

impl Serialize for ActiveCorner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.corner().map_or("", Position::wire_name))
    }
}

impl<'de> Deserialize<'de> for ActiveCorner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(ActiveCorner::Unconstrained);
        }
        raw.parse::<Position>()
            .map(ActiveCorner::Constrained)
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&raw), &"a position name or \"\""))
    }
}
