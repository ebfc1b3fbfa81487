//! The persisted aggregate: current state plus history.

use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::{Engine, GameState, History, Move, MoveError, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game of Ultimate Tic-Tac-Toe.
///
/// Owns its current [`GameState`] and [`History`] outright; the only way
/// to change either is [`Engine::take_turn`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Game {
    pub(crate) current_game: GameState,
    pub(crate) history: History,
}

impl Game {
    /// Starts a new game: fresh state, empty history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            current_game: GameState::new(),
            history: History::new(),
        }
    }

    /// The current state.
    pub fn current(&self) -> &GameState {
        &self.current_game
    }

    /// Snapshots of every state before each move.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Meta outcome of the current state.
    pub fn outcome(&self) -> Outcome {
        self.current_game.outcome()
    }

    /// True once the meta game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.current_game.is_finished()
    }

    /// Applies a move; shorthand for [`Engine::take_turn`].
    ///
    /// # Errors
    ///
    /// Returns the first failed rule; the game is left untouched.
    pub fn take_turn(&mut self, mov: Move) -> Result<(), MoveError> {
        Engine::take_turn(self, mov)
    }

    /// Plays `moves` in order on a new game.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mov in moves {
            Engine::take_turn(&mut game, *mov)?;
        }
        debug!(outcome = %game.outcome(), "Replay complete");
        Ok(game)
    }

    /// Checks every game invariant.
    ///
    /// Games built by the engine always pass; use this on games read from
    /// outside, such as storage.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }

    /// Serializes to pretty-printed JSON (2-space indent).
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes from JSON in the persisted layout.
    ///
    /// # Errors
    ///
    /// Fails on missing fields, unknown names or symbols, or an active
    /// corner naming a finished sub-board.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActiveCorner, Player, Position};

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert!(game.history().is_empty());
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.validate().is_ok());
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        let moves = [
            Move::new(Player::X, Position::Center, Position::TopLeft),
            Move::new(Player::O, Position::Center, Position::TopMiddle),
        ];
        let result = Game::replay(&moves);
        assert!(matches!(result, Err(MoveError::WrongCorner { .. })));
    }

    #[test]
    fn test_replay_builds_history() {
        let moves = [
            Move::new(Player::X, Position::Center, Position::TopLeft),
            Move::new(Player::O, Position::TopLeft, Position::Center),
        ];
        let game = Game::replay(&moves).unwrap();
        assert_eq!(game.history().len(), 2);
        assert_eq!(
            game.current().active_corner(),
            ActiveCorner::Constrained(Position::Center)
        );
    }

    #[test]
    fn test_json_top_level_shape() {
        let mut game = Game::new();
        game.take_turn(Move::new(Player::X, Position::Center, Position::TopLeft))
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&game.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["current_game"]["turn"], "O");
        assert_eq!(value["current_game"]["activeCorner"], "topleft");
        assert_eq!(value["current_game"]["center"]["topleft"], "X");
        assert!(value["current_game"].get("next_turn_timestamp").is_none());
        assert_eq!(value["history"].as_array().unwrap().len(), 1);
        assert!(value["history"][0]["next_turn_timestamp"].is_i64());
    }

    #[test]
    fn test_validate_flags_tampered_game() {
        let mut game = Game::replay(&[Move::new(Player::X, Position::Center, Position::Center)])
            .unwrap();
        game.current_game.turn = Player::X;
        let violations = game.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
    }
}
