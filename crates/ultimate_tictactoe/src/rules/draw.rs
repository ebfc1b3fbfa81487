//! Fullness check used for draw detection.

use crate::Cell;

/// Checks if every square is occupied.
///
/// A full grid with no completed line is a draw.
pub fn is_full<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> bool {
    cells.into_iter().all(|cell| !cell.is_empty())
}
