//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(game, move)} take_turn {Q(before, after)}.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::{ActiveCorner, Game};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the meta game is still being played.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Rejects any move once the game is won or drawn.
    #[instrument(skip(game))]
    pub fn check(_mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.current().is_finished() {
            Err(MoveError::GameAlreadyFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the player not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        let expected = game.current().turn();
        if mov.player != expected {
            Err(MoveError::NotYourTurn {
                expected,
                attempted: mov.player,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move respects the active-corner constraint.
pub struct InActiveCorner;

impl InActiveCorner {
    /// Rejects a move outside the constrained corner.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        match game.current().active_corner() {
            ActiveCorner::Constrained(required) if required != mov.corner => {
                Err(MoveError::WrongCorner {
                    required,
                    attempted: mov.corner,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Precondition: the targeted sub-board is still open.
pub struct SubBoardOpen;

impl SubBoardOpen {
    /// Rejects a move into a won or drawn sub-board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.current().board(mov.corner).is_finished() {
            Err(MoveError::SubBoardFinished(mov.corner))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the targeted cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if !game.current().board(mov.corner).is_empty_at(mov.cell) {
            Err(MoveError::CellOccupied {
                corner: mov.corner,
                cell: mov.cell,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in a fixed order.
///
/// The first failing rule is reported: finished game, turn, corner
/// constraint, finished sub-board, occupied cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameNotFinished::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        InActiveCorner::check(mov, game)?;
        SubBoardOpen::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move execution.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions:
/// - exactly one snapshot was appended, equal to the state before the move
/// - all [`GameInvariants`] hold, if they held before the move
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let appended = after.history().len() == before.history().len() + 1
            && after
                .history()
                .last()
                .is_some_and(|snapshot| snapshot.state() == before.current());
        if !appended {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must gain the pre-move state".to_string(),
            ));
        }

        // Invariants are preserved, not established.
        if GameInvariants::check_all(before).is_err() {
            return Ok(());
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, History, Player, Position};

    fn opened() -> Game {
        let mut game = Game::new();
        Engine::take_turn_at(
            &mut game,
            Move::new(Player::X, Position::Center, Position::TopLeft),
            1,
        )
        .unwrap();
        game
    }

    #[test]
    fn test_precondition_accepts_opening() {
        let game = Game::new();
        let action = Move::new(Player::X, Position::Center, Position::TopLeft);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = Game::new();
        let action = Move::new(Player::O, Position::Center, Position::TopLeft);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::NotYourTurn { .. })
        ));
    }

    #[test]
    fn test_turn_checked_before_corner() {
        // X again, and in the wrong corner: the turn error wins.
        let game = opened();
        let action = Move::new(Player::X, Position::BottomRight, Position::Center);
        assert!(matches!(
            LegalMove::check(&action, &game),
            Err(MoveError::NotYourTurn { .. })
        ));
    }

    #[test]
    fn test_corner_checked_before_cell() {
        // Center/top-left is occupied, but the constraint fails first.
        let game = opened();
        let action = Move::new(Player::O, Position::Center, Position::TopLeft);
        assert_eq!(
            LegalMove::check(&action, &game),
            Err(MoveError::WrongCorner {
                required: Position::TopLeft,
                attempted: Position::Center,
            })
        );
    }

    #[test]
    fn test_occupied_cell() {
        let mut game = opened();
        Engine::take_turn_at(
            &mut game,
            Move::new(Player::O, Position::TopLeft, Position::Center),
            2,
        )
        .unwrap();
        let action = Move::new(Player::X, Position::Center, Position::TopLeft);
        assert_eq!(
            CellIsEmpty::check(&action, &game),
            Err(MoveError::CellOccupied {
                corner: Position::Center,
                cell: Position::TopLeft,
            })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let after = opened();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = opened();
        after
            .current_game
            .board_mut(Position::BottomLeft)
            .place(Position::Center, Player::O);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_does_not_demand_invariants_broken_before() {
        // A game with a mark but no history already breaks the history
        // invariants; a legal move on it is not an engine fault.
        let mut before = opened();
        before.history = History::new();
        let mut after = before.clone();
        Engine::take_turn_at(
            &mut after,
            Move::new(Player::O, Position::TopLeft, Position::Center),
            2,
        )
        .unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_requires_snapshot() {
        let before = opened();
        let after = before.clone();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
