//! Plain-text rendering of the full 9x9 grid for logs and terminals.
//!
//! ```text
//!  X | . | . || . | . | . || . | . | .
//!  . | . | . || . | . | . || . | . | .
//!  . | . | . || . | . | . || . | . | .
//! ===========++===========++===========
//! ...
//!
//! --- Game Status ---
//! In progress
//! Turn: O
//! Active Corner: top-left
//! ```

use crate::{Cell, Game, GameState, Outcome, Position};
use std::fmt;

/// Separator between rows of sub-boards.
const BAND_SEPARATOR: &str = "===========++===========++===========";

fn glyph(cell: Cell) -> &'static str {
    match cell.player() {
        Some(player) => player.symbol(),
        None => ".",
    }
}

impl GameState {
    /// Writes one printed line: row `row` of the three boards in `band`.
    fn write_line(&self, f: &mut fmt::Formatter<'_>, band: usize, row: usize) -> fmt::Result {
        let boards = Position::ALL[band * 3..band * 3 + 3]
            .iter()
            .map(|corner| {
                Position::ALL[row * 3..row * 3 + 3]
                    .iter()
                    .map(|cell| glyph(self.board(*corner).cell(*cell)))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>();
        writeln!(f, " {}", boards.join(" || "))
    }

    /// Writes the status block under the grid.
    fn write_status(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Game Status ---")?;
        match self.outcome() {
            Outcome::Won(player) => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Result: DRAW"),
            Outcome::InProgress => {
                writeln!(f, "In progress")?;
                writeln!(f, "Turn: {}", self.turn())?;
                write!(f, "Active Corner: {}", self.active_corner())
            }
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for band in 0..3 {
            if band > 0 {
                writeln!(f, "{}", BAND_SEPARATOR)?;
            }
            for row in 0..3 {
                self.write_line(f, band, row)?;
            }
        }
        writeln!(f)?;
        self.write_status(f)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player};

    #[test]
    fn test_render_fresh_game() {
        let rendered = GameState::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11 + 1 + 4);
        assert_eq!(lines[0], " . | . | . || . | . | . || . | . | .");
        assert_eq!(lines[3], BAND_SEPARATOR);
        assert_eq!(lines[7], BAND_SEPARATOR);
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "--- Game Status ---");
        assert_eq!(lines[13], "In progress");
        assert_eq!(lines[14], "Turn: X");
        assert_eq!(lines[15], "Active Corner: any");
    }

    #[test]
    fn test_render_places_marks_in_grid() {
        let game = Game::replay(&[
            Move::new(Player::X, Position::Center, Position::TopLeft),
            Move::new(Player::O, Position::TopLeft, Position::BottomRight),
        ])
        .unwrap();
        let rendered = game.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        // Center board, top row, sits in the middle band's first line.
        assert_eq!(lines[4], " . | . | . || X | . | . || . | . | .");
        // Top-left board, bottom row.
        assert_eq!(lines[2], " . | . | O || . | . | . || . | . | .");
        assert_eq!(lines[15], "Active Corner: bottom-right");
    }

    #[test]
    fn test_render_is_deterministic() {
        let state = GameState::new();
        assert_eq!(state.to_string(), state.to_string());
    }
}
