//! The meta board: nine sub-boards plus turn, status and corner constraint.

use crate::rules;
use crate::wire::GameStateRecord;
use crate::{ActiveCorner, Move, Outcome, Player, Position, SubBoard};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::{debug, instrument};

/// Complete state of an Ultimate Tic-Tac-Toe game at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord", into = "GameStateRecord")]
pub struct GameState {
    pub(crate) boards: [SubBoard; 9],
    pub(crate) turn: Player,
    pub(crate) finished: bool,
    pub(crate) winner: Option<Player>,
    pub(crate) active_corner: ActiveCorner,
}

impl GameState {
    /// Creates the initial state: X to move, no constraint, every board empty.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: Default::default(),
            turn: Player::X,
            finished: false,
            winner: None,
            active_corner: ActiveCorner::Unconstrained,
        }
    }

    /// Returns the sub-board at the given corner.
    pub fn board(&self, corner: Position) -> &SubBoard {
        &self.boards[corner.index()]
    }

    pub(crate) fn board_mut(&mut self, corner: Position) -> &mut SubBoard {
        &mut self.boards[corner.index()]
    }

    /// Iterates over `(corner, sub-board)` pairs, row-major.
    pub fn boards(&self) -> impl Iterator<Item = (Position, &SubBoard)> {
        Position::ALL.into_iter().zip(self.boards.iter())
    }

    /// The player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// True once the meta game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The meta winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Where the next move must be played.
    pub fn active_corner(&self) -> ActiveCorner {
        self.active_corner
    }

    /// Stored meta status as an [`Outcome`].
    pub fn outcome(&self) -> Outcome {
        Outcome::from_status(self.finished, self.winner)
    }

    /// Sub-boards the player to move may target: open boards the active
    /// corner permits.
    ///
    /// Empty once the meta game is finished.
    pub fn playable_corners(&self) -> Vec<Position> {
        if self.finished {
            return Vec::new();
        }
        self.boards()
            .filter(|(corner, board)| {
                self.active_corner.permits(*corner) && !board.is_finished()
            })
            .map(|(corner, _)| corner)
            .collect()
    }

    /// Every move that would currently pass validation, corner-major.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.playable_corners()
            .into_iter()
            .flat_map(|corner| {
                let board = self.board(corner);
                Position::ALL
                    .into_iter()
                    .filter(move |cell| board.is_empty_at(*cell))
                    .map(move |cell| Move::new(self.turn, corner, cell))
            })
            .collect()
    }

    /// Re-evaluates every sub-board, then the meta board.
    ///
    /// The meta board uses the same eight lines over sub-board winners.
    /// With no meta line, the game is drawn once every sub-board is finished.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) {
        for board in self.boards.iter_mut() {
            board.evaluate();
        }

        if let Some(winner) = rules::check_winner(|corner| self.board(corner).winner()) {
            debug!(%winner, "Meta board won");
            self.winner = Some(winner);
            self.finished = true;
            return;
        }

        self.winner = None;
        self.finished = self.boards.iter().all(SubBoard::is_finished);
        if self.finished {
            debug!("Meta board drawn");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for GameState {
    type Output = SubBoard;

    fn index(&self, corner: Position) -> &SubBoard {
        self.board(corner)
    }
}
