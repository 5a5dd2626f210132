//! Screen placement of the board and screen-to-cell mapping.

use super::position::Position;
use crate::math::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Cell size of the 800x600 windowed layout.
pub const DEFAULT_CELL_SIZE: f32 = 100.0;

/// Error raised for unusable board geometry.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GeometryError {
    /// Cell size must be finite and greater than zero.
    #[display("Invalid cell size {cell_size}: must be finite and greater than zero")]
    InvalidCellSize {
        /// The rejected size.
        cell_size: f32,
    },
}

/// Board origin and uniform cell size in screen units.
///
/// Deserialization goes through [`Geometry::new`], so a stored geometry
/// with an unusable cell size is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryFields")]
pub struct Geometry {
    origin: Vec2,
    cell_size: f32,
}

/// Unchecked serde form of [`Geometry`].
#[derive(Deserialize)]
struct GeometryFields {
    origin: Vec2,
    cell_size: f32,
}

impl TryFrom<GeometryFields> for Geometry {
    type Error = GeometryError;

    fn try_from(fields: GeometryFields) -> Result<Self, Self::Error> {
        Self::new(fields.origin, fields.cell_size)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Geometry {
    /// Creates geometry with the board's top-left corner at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidCellSize`] unless `cell_size` is
    /// finite and positive.
    pub fn new(origin: Vec2, cell_size: f32) -> Result<Self, GeometryError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GeometryError::InvalidCellSize { cell_size });
        }
        Ok(Self { origin, cell_size })
    }

    /// Geometry centering the board inside a `width` x `height` area.
    #[instrument]
    pub fn centered(width: f32, height: f32, cell_size: f32) -> Result<Self, GeometryError> {
        let side = cell_size * 3.0;
        let origin = Vec2::new((width - side) / 2.0, (height - side) / 2.0);
        Self::new(origin, cell_size)
    }

    /// Top-left corner of the board.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Edge length of one cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Moves the board so its top-left corner sits at `origin`.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Edge length of the whole board.
    pub fn side(&self) -> f32 {
        self.cell_size * 3.0
    }

    /// Screen rectangle covered by the board.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.side(), self.side())
    }

    /// Screen rectangle covered by one cell.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            self.origin.x + pos.x() as f32 * self.cell_size,
            self.origin.y + pos.y() as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Center of one cell, where its marker is drawn.
    pub fn cell_center(&self, pos: Position) -> Vec2 {
        self.cell_rect(pos).center()
    }

    /// Maps a screen point to the cell under it.
    ///
    /// Floor-divides the offset from the origin by the cell size. The
    /// board covers `[origin, origin + side)` on each axis, so a point on
    /// an interior grid line belongs to the cell right of / below it and
    /// the far edges are outside. Non-finite points are outside.
    #[instrument(level = "trace", skip(self))]
    pub fn screen_to_board(&self, px: f32, py: f32) -> Option<Position> {
        if !self.bounds().contains(px, py) {
            trace!("Point outside board");
            return None;
        }
        let x = ((px - self.origin.x) / self.cell_size).floor() as usize;
        let y = ((py - self.origin.y) / self.cell_size).floor() as usize;
        // Rounding can land exactly on 3.0 just inside the far edge.
        Position::from_coords(x.min(2), y.min(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry::new(Vec2::new(250.0, 150.0), 100.0).unwrap()
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        for size in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            assert!(Geometry::new(Vec2::ZERO, size).is_err());
        }
    }

    #[test]
    fn test_unchecked_fields_go_through_new() {
        let fields = |cell_size| GeometryFields {
            origin: Vec2::new(1.0, 2.0),
            cell_size,
        };
        assert_eq!(
            Geometry::try_from(fields(0.0)),
            Err(GeometryError::InvalidCellSize { cell_size: 0.0 })
        );
        assert!(Geometry::try_from(fields(f32::NAN)).is_err());
        assert_eq!(
            Geometry::try_from(fields(10.0)),
            Geometry::new(Vec2::new(1.0, 2.0), 10.0)
        );
    }

    #[test]
    fn test_interior_points() {
        let g = geometry();
        assert_eq!(g.screen_to_board(251.0, 151.0), Some(Position::TopLeft));
        assert_eq!(g.screen_to_board(399.0, 299.0), Some(Position::Center));
        assert_eq!(g.screen_to_board(549.9, 449.9), Some(Position::BottomRight));
    }

    #[test]
    fn test_grid_line_resolves_to_one_side() {
        let g = geometry();
        // x = 350 is the line between columns 0 and 1.
        assert_eq!(g.screen_to_board(350.0, 200.0), Some(Position::TopCenter));
        assert_eq!(g.screen_to_board(349.999, 200.0), Some(Position::TopLeft));
        // y = 250 is the line between rows 0 and 1.
        assert_eq!(g.screen_to_board(300.0, 250.0), Some(Position::MiddleLeft));
    }

    #[test]
    fn test_edges() {
        let g = geometry();
        assert_eq!(g.screen_to_board(250.0, 150.0), Some(Position::TopLeft));
        assert_eq!(g.screen_to_board(550.0, 200.0), None);
        assert_eq!(g.screen_to_board(300.0, 450.0), None);
        assert_eq!(g.screen_to_board(249.99, 200.0), None);
        assert_eq!(g.screen_to_board(f32::NAN, 200.0), None);
        assert_eq!(g.screen_to_board(300.0, f32::INFINITY), None);
    }

    #[test]
    fn test_centered_matches_window_layout() {
        // 800x600 window with 100px cells, as in the windowed build.
        let g = Geometry::centered(800.0, 600.0, 100.0).unwrap();
        assert_eq!(g.origin(), Vec2::new(250.0, 150.0));
        assert_eq!(g.cell_center(Position::Center), Vec2::new(400.0, 300.0));
        assert_eq!(g.bounds(), Rect::new(250.0, 150.0, 300.0, 300.0));
    }
}
