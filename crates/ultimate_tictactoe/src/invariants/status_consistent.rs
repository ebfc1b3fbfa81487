//! Status consistency: stored `finished`/`winner` match the cells.

use super::Invariant;
use crate::{Game, GameState};

/// Invariant: every stored status equals what evaluation would derive.
///
/// Covers each sub-board and the meta board, for the current state and
/// every snapshot in history. Since evaluation is idempotent, this also
/// means re-evaluating a valid game changes nothing.
pub struct StatusConsistentInvariant;

impl StatusConsistentInvariant {
    fn state_holds(state: &GameState) -> bool {
        let mut fresh = state.clone();
        fresh.evaluate();
        fresh == *state
    }
}

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        Self::state_holds(game.current())
            && game
                .history()
                .iter()
                .all(|snapshot| Self::state_holds(snapshot.state()))
    }

    fn description() -> &'static str {
        "Stored finished/winner status matches board contents"
    }
}
