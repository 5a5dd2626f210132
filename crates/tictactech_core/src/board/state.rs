//! Authoritative board state: grid, legality and geometry.

use super::geometry::Geometry;
use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use crate::math::{Rect, Vec2};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The grid plus its placement on screen.
///
/// Moves are validated here; turn order is not. Callers decide whose
/// turn it is and feed the player in.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct BoardState {
    /// The grid.
    board: Board,
    /// Screen placement.
    geometry: Geometry,
}

impl BoardState {
    /// Creates an empty board at `geometry`.
    #[instrument]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            board: Board::new(),
            geometry,
        }
    }

    /// Places `player` at column `x`, row `y`.
    ///
    /// Returns `false` without touching the grid if the coordinates are
    /// off the board or the cell is taken.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, x: usize, y: usize, player: Player) -> bool {
        match Position::from_coords(x, y) {
            Some(pos) => self.place(pos, player),
            None => {
                debug!("Move out of range");
                false
            }
        }
    }

    /// Places `player` at `pos`. Returns `false` if the cell is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> bool {
        if !self.board.is_empty(pos) {
            debug!("Square is already occupied");
            return false;
        }
        self.board.set(pos, Square::Occupied(player));
        true
    }

    /// Returns true if `(x, y)` is on the board and empty.
    pub fn is_cell_empty(&self, x: usize, y: usize) -> bool {
        Position::from_coords(x, y).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Returns the square at `(x, y)`, or `None` off the board.
    pub fn square(&self, x: usize, y: usize) -> Option<Square> {
        Position::from_coords(x, y).map(|pos| self.board.get(pos))
    }

    /// Winner by the first complete line in scan order.
    pub fn check_winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// First complete line and its owner.
    pub fn winning_line(&self) -> Option<(Player, [Position; 3])> {
        rules::winning_line(&self.board)
    }

    /// Returns true if all nine cells are occupied.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Empties every cell. Geometry is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(occupied = self.board.occupied(), "Resetting board");
        self.board.clear();
    }

    /// Maps a screen point to the cell under it.
    pub fn screen_to_board(&self, px: f32, py: f32) -> Option<Position> {
        self.geometry.screen_to_board(px, py)
    }

    /// Moves the board's top-left corner.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.geometry.set_origin(Vec2::new(x, y));
    }

    /// Replaces the geometry, e.g. after a window resize.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    /// Screen rectangle covered by the board.
    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }
}
