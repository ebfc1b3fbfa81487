//! Text reports printed by the CLI.

use chrono::SecondsFormat;
use ultimate_tictactoe::{Game, GameState, Position};

/// The (corner, cell) that differs between two consecutive states.
pub fn played_between(before: &GameState, after: &GameState) -> Option<(Position, Position)> {
    Position::ALL.into_iter().find_map(|corner| {
        Position::ALL.into_iter().find_map(|cell| {
            let was = before.board(corner).cell(cell);
            let now = after.board(corner).cell(cell);
            (was.is_empty() && !now.is_empty()).then_some((corner, cell))
        })
    })
}

/// One line per recorded move: number, UTC time, the move, and seconds
/// since the previous move.
pub fn history_lines(game: &Game) -> Vec<String> {
    let history = game.history();
    let durations = history.turn_durations();

    history
        .iter()
        .enumerate()
        .map(|(idx, snapshot)| {
            let after = history
                .get(idx + 1)
                .map_or(game.current(), |next| next.state());
            let when = snapshot.recorded_at().map_or_else(
                || snapshot.next_turn_timestamp().to_string(),
                |at| at.to_rfc3339_opts(SecondsFormat::Secs, true),
            );
            let played = match played_between(snapshot.state(), after) {
                Some((corner, cell)) => format!("{}/{}", corner, cell),
                None => "?".to_string(),
            };
            let elapsed = match idx.checked_sub(1).and_then(|prev| durations.get(prev)) {
                Some(secs) => format!("  (+{}s)", secs),
                None => String::new(),
            };
            format!(
                "{:>3}. {}  {} -> {}{}",
                idx + 1,
                when,
                snapshot.state().turn(),
                played,
                elapsed
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultimate_tictactoe::{Engine, Move, Player};

    fn two_move_game() -> Game {
        let mut game = Game::new();
        Engine::take_turn_at(
            &mut game,
            Move::new(Player::X, Position::Center, Position::TopLeft),
            1_700_000_000,
        )
        .unwrap();
        Engine::take_turn_at(
            &mut game,
            Move::new(Player::O, Position::TopLeft, Position::BottomRight),
            1_700_000_042,
        )
        .unwrap();
        game
    }

    #[test]
    fn test_played_between() {
        let game = two_move_game();
        let first = game.history().get(0).unwrap().state();
        let second = game.history().get(1).unwrap().state();
        assert_eq!(
            played_between(first, second),
            Some((Position::Center, Position::TopLeft))
        );
        assert_eq!(played_between(first, first), None);
    }

    #[test]
    fn test_history_lines() {
        let lines = history_lines(&two_move_game());
        assert_eq!(
            lines,
            vec![
                "  1. 2023-11-14T22:13:20Z  X -> center/top-left".to_string(),
                "  2. 2023-11-14T22:14:02Z  O -> top-left/bottom-right  (+42s)".to_string(),
            ]
        );
    }
}
