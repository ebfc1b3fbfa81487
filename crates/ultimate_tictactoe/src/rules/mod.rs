//! Line rules shared by sub-boards and the meta board.
//!
//! Both levels of the game are a 3x3 grid judged by the same eight lines.
//! These functions only see a lookup from [`Position`](crate::Position) to
//! an optional owner, so the sub-board passes its cells and the meta board
//! passes its sub-board winners.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
