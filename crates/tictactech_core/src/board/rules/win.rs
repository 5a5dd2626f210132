//! Win detection.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight lines in scan order: rows top to bottom, columns left to
/// right, then the two diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
    ],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [
        Position::TopLeft,
        Position::Center,
        Position::BottomRight,
    ],
    [
        Position::TopRight,
        Position::Center,
        Position::BottomLeft,
    ],
];

/// Returns the first complete line in scan order and its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((player, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
