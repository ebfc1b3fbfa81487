//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: players alternate turns.
///
/// The first recorded state has X to move, consecutive snapshots differ
/// in turn, and the current turn differs from the last snapshot's.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history().as_slice();

        let Some(first) = history.first() else {
            return game.current().turn() == Player::X;
        };

        // First move is always X
        if first.state().turn() != Player::X {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].state().turn() == pair[1].state().turn())
        {
            return false;
        }

        history
            .last()
            .is_some_and(|last| last.state().turn() != game.current().turn())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
