//! History consistency invariant: one snapshot per mark on the board.

use super::Invariant;
use crate::{Game, GameState};

/// Invariant: history length equals the number of occupied cells.
///
/// Every move adds exactly one mark and one snapshot, so snapshot `i`
/// holds exactly `i` marks and the current state holds `len` marks.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    fn marks(state: &GameState) -> usize {
        state
            .boards()
            .map(|(_, board)| board.cells().iter().filter(|c| !c.is_empty()).count())
            .sum()
    }
}

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        history
            .iter()
            .enumerate()
            .all(|(idx, snapshot)| Self::marks(snapshot.state()) == idx)
            && Self::marks(game.current()) == history.len()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
