//! Move execution: the game's only state transition.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::{ActiveCorner, Game, Snapshot};
use chrono::Utc;
use tracing::{info, instrument, warn};

/// Stateless move executor.
///
/// The engine holds nothing between calls. Callers must ensure at most
/// one move is applied to a given [`Game`] at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    /// Validates and applies a move, stamping the history entry with the
    /// current wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule as a [`MoveError`]; the game is left
    /// untouched.
    pub fn take_turn(game: &mut Game, mov: Move) -> Result<(), MoveError> {
        Self::take_turn_at(game, mov, Utc::now().timestamp())
    }

    /// Validates and applies a move, stamping the history entry with
    /// `timestamp` (seconds since the epoch).
    ///
    /// On success:
    /// 1. the pre-move state is appended to history
    /// 2. the mark is placed and its sub-board re-evaluated
    /// 3. the next active corner becomes the cell just played, or
    ///    unconstrained if that sub-board is finished
    /// 4. the turn passes to the opponent
    /// 5. the meta board is re-evaluated
    ///
    /// # Errors
    ///
    /// Returns the first failed rule as a [`MoveError`]; the game is left
    /// untouched. In debug builds a failed postcondition is reported as
    /// [`MoveError::InvariantViolation`] and the move is rolled back.
    #[instrument(skip(game), fields(player = %mov.player, corner = %mov.corner, cell = %mov.cell))]
    pub fn take_turn_at(game: &mut Game, mov: Move, timestamp: i64) -> Result<(), MoveError> {
        if let Err(err) = MoveContract::pre(game, &mov) {
            warn!(error = %err, "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = game.clone();

        Self::apply(game, mov, timestamp);

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, game) {
            warn!(error = %err, "Postcondition failed, move rolled back");
            *game = before;
            return Err(err);
        }

        info!(
            moves = game.history.len(),
            next = %game.current_game.turn,
            active_corner = %game.current_game.active_corner,
            outcome = %game.current_game.outcome(),
            "Move applied"
        );
        Ok(())
    }

    /// Snapshots the state, then places the mark and updates turn,
    /// constraint and status. Assumes the move passed validation.
    fn apply(game: &mut Game, mov: Move, timestamp: i64) {
        game.history
            .push(Snapshot::new(game.current_game.clone(), timestamp));

        let state = &mut game.current_game;
        let board = state.board_mut(mov.corner);
        board.place(mov.cell, mov.player);
        board.evaluate();

        state.active_corner = if state.board(mov.cell).is_finished() {
            ActiveCorner::Unconstrained
        } else {
            ActiveCorner::Constrained(mov.cell)
        };
        state.turn = mov.player.opponent();
        state.evaluate();
    }
}
