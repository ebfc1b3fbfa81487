//! Active corner invariant: a constraint never points at a finished board.

use super::Invariant;
use crate::{ActiveCorner, Game, GameState};

/// Invariant: a constrained active corner names an unfinished sub-board.
pub struct ActiveCornerOpenInvariant;

impl ActiveCornerOpenInvariant {
    fn state_holds(state: &GameState) -> bool {
        match state.active_corner() {
            ActiveCorner::Unconstrained => true,
            ActiveCorner::Constrained(corner) => !state.board(corner).is_finished(),
        }
    }
}

impl Invariant<Game> for ActiveCornerOpenInvariant {
    fn holds(game: &Game) -> bool {
        Self::state_holds(game.current())
            && game
                .history()
                .iter()
                .all(|snapshot| Self::state_holds(snapshot.state()))
    }

    fn description() -> &'static str {
        "Active corner never names a finished sub-board"
    }
}
