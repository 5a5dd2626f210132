//! Named cells of the 3x3 grid.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board.
///
/// Row-major: `index = y * 3 + x`, with `x` the column (left to right)
/// and `y` the row (top to bottom).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from column `x` and row `y`, both in `0..3`.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x < 3 && y < 3 {
            Self::from_index(y * 3 + x)
        } else {
            None
        }
    }

    /// Column and row of this position.
    pub fn coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index % 3, index / 3)
    }

    /// Column (0-2).
    pub fn x(self) -> usize {
        self.coords().0
    }

    /// Row (0-2).
    pub fn y(self) -> usize {
        self.coords().1
    }

    /// Shifts by `(dx, dy)`, staying on the board.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let (x, y) = self.coords();
        let x = x.checked_add_signed(dx)?;
        let y = y.checked_add_signed(dy)?;
        Self::from_coords(x, y)
    }

    /// Returns the empty positions of `board` in row-major order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
