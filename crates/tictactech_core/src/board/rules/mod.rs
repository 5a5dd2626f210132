//! Game rules for the board.
//!
//! Pure functions evaluating a [`Board`](super::Board). Rules are kept
//! apart from storage so the board state, the game flow and tests can all
//! share them.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};
