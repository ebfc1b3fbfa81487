//! A single 3x3 board nested inside the meta board.

use crate::rules;
use crate::wire::SubBoardRecord;
use crate::{Cell, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::{debug, instrument};

/// One 3x3 grid of cells plus its derived status.
///
/// `finished` and `winner` are derived from the cells by
/// [`SubBoard::evaluate`]; the board knows nothing about the outer game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "SubBoardRecord", into = "SubBoardRecord")]
pub struct SubBoard {
    pub(crate) cells: [Cell; 9],
    pub(crate) finished: bool,
    pub(crate) winner: Option<Player>,
}

impl SubBoard {
    /// Creates an empty, unfinished board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from row-major cells and evaluates it.
    #[instrument]
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        let mut board = Self {
            cells,
            finished: false,
            winner: None,
        };
        board.evaluate();
        board
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns all cells, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// True once the board is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The player who completed a line, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Stored status as an [`Outcome`].
    pub fn outcome(&self) -> Outcome {
        Outcome::from_status(self.finished, self.winner)
    }

    /// Writes a mark without any validation.
    pub(crate) fn place(&mut self, pos: Position, player: Player) {
        self.cells[pos.index()] = Cell::Occupied(player);
    }

    /// Recomputes `finished` and `winner` from the cells.
    ///
    /// The first complete line in [`rules::LINES`] order decides the winner.
    /// A full board without a line is finished with no winner.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) {
        if let Some(winner) = rules::check_winner(|pos| self.cell(pos).player()) {
            self.winner = Some(winner);
            self.finished = true;
            return;
        }

        self.winner = None;
        self.finished = self.is_full();
        if self.finished {
            debug!("Sub-board drawn");
        }
    }
}

impl Index<Position> for SubBoard {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Occupied(Player::X);
    const O: Cell = Cell::Occupied(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_new_board_is_open() {
        let board = SubBoard::new();
        assert!(!board.is_finished());
        assert_eq!(board.winner(), None);
        assert!(Position::ALL.iter().all(|pos| board.is_empty_at(*pos)));
    }

    #[test]
    fn test_row_win() {
        let board = SubBoard::from_cells([E, E, E, O, O, O, X, X, E]);
        assert!(board.is_finished());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.outcome(), Outcome::Won(Player::O));
    }

    #[test]
    fn test_draw_permutation() {
        // X,O,X / O,X,O / O,X,O
        let board = SubBoard::from_cells([X, O, X, O, X, O, O, X, O]);
        assert!(board.is_finished());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board = SubBoard::from_cells([X, O, X, O, X, O, O, X, X]);
        assert!(board.is_finished());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut board = SubBoard::from_cells([X, X, E, O, O, E, E, E, E]);
        let first = board.clone();
        board.evaluate();
        assert_eq!(board, first);
        board.evaluate();
        assert_eq!(board, first);
    }

    #[test]
    fn test_evaluate_clears_stale_status() {
        let mut board = SubBoard::new();
        board.finished = true;
        board.winner = Some(Player::O);
        board.evaluate();
        assert!(!board.is_finished());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_place_then_index() {
        let mut board = SubBoard::new();
        board.place(Position::BottomLeft, Player::O);
        assert_eq!(board[Position::BottomLeft], O);
        assert!(!board.is_finished());
    }
}
