//! Keyboard and mouse translation into board terms.

use crossterm::event::KeyCode;
use tictactech_core::Position;

/// Moves the keyboard cursor one cell; stays put at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let step = match key {
        KeyCode::Left => cursor.offset(-1, 0),
        KeyCode::Right => cursor.offset(1, 0),
        KeyCode::Up => cursor.offset(0, -1),
        KeyCode::Down => cursor.offset(0, 1),
        _ => None,
    };
    step.unwrap_or(cursor)
}

/// Maps the digit keys `1`..=`9` to cells in reading order.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        digit => Position::from_index(digit as usize - 1),
    }
}

/// Projects a terminal cell to the board-space point at its center.
///
/// Terminal rows are roughly twice as tall as columns are wide, so the
/// row axis is doubled to keep board cells square.
pub fn terminal_to_board(column: u16, row: u16) -> (f32, f32) {
    (f32::from(column) + 0.5, (f32::from(row) + 0.5) * 2.0)
}
