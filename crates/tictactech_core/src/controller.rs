//! Composition root tying board moves to marker animations.

use crate::animation::{
    Animation, AnimationError, AnimationRegistry, Property, TargetId, Transform, TransformStore,
    check_duration,
};
use crate::board::{BoardState, Geometry, Player, Position};
use crate::easing::Easing;
use crate::math::Vec2;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Timing of the animations the controller starts.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Seconds for a new marker to grow to full size.
    grow_duration: f32,
    /// Curve applied to the grow-in.
    grow_easing: Easing,
    /// Blinks played on a winning line.
    win_blinks: u32,
    /// Seconds the winning-line blink lasts.
    win_blink_duration: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            grow_duration: 0.2,
            grow_easing: Easing::EaseInOut,
            win_blinks: 3,
            win_blink_duration: 0.9,
        }
    }
}

impl AnimationSettings {
    /// Creates settings, validating both durations.
    pub fn new(
        grow_duration: f32,
        grow_easing: Easing,
        win_blinks: u32,
        win_blink_duration: f32,
    ) -> Result<Self, AnimationError> {
        let settings = Self {
            grow_duration,
            grow_easing,
            win_blinks,
            win_blink_duration,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that both durations are finite and positive.
    pub fn validate(&self) -> Result<(), AnimationError> {
        check_duration(self.grow_duration)?;
        check_duration(self.win_blink_duration)
    }
}

/// Animation key and visual target of the marker in `pos`.
pub(crate) fn cell_key(pos: Position) -> String {
    format!("cell_{}", pos.to_index())
}

/// Animation key of the win highlight on `pos`.
fn highlight_key(pos: Position) -> String {
    format!("win_{}", pos.to_index())
}

/// Owns the board, the animation registry and the marker visuals.
///
/// Every placed marker gets a transform (target `cell_<index>`) that a
/// scale animation under the same key grows from zero to full size.
/// [`reset`](Self::reset) clears all three together.
#[derive(Debug, Clone)]
pub struct BoardController {
    state: BoardState,
    animations: AnimationRegistry,
    markers: TransformStore,
    settings: AnimationSettings,
}

impl BoardController {
    /// Creates a controller with an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::InvalidDuration`] if `settings` holds an
    /// unusable duration.
    #[instrument]
    pub fn new(geometry: Geometry, settings: AnimationSettings) -> Result<Self, AnimationError> {
        settings.validate()?;
        Ok(Self {
            state: BoardState::new(geometry),
            animations: AnimationRegistry::new(),
            markers: TransformStore::new(),
            settings,
        })
    }

    /// Places `player` at column `x`, row `y` and starts its grow-in.
    ///
    /// Returns `false` for off-board or occupied cells.
    #[instrument(skip(self))]
    pub fn place(&mut self, x: usize, y: usize, player: Player) -> bool {
        match Position::from_coords(x, y) {
            Some(pos) => self.place_at(pos, player),
            None => false,
        }
    }

    /// Places `player` at `pos` and starts its grow-in.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, pos: Position, player: Player) -> bool {
        if !self.state.place(pos, player) {
            return false;
        }

        let key = cell_key(pos);
        let target = TargetId::new(key.clone());
        let center = self.state.geometry().cell_center(pos);
        self.markers.insert(
            target.clone(),
            Transform::default()
                .with_position(center)
                .with_scale(Vec2::ZERO),
        );

        match Animation::scale(target.clone(), Vec2::ZERO, Vec2::ONE, self.settings.grow_duration) {
            Ok(grow) => {
                let grow = grow
                    .with_easing(self.settings.grow_easing)
                    .with_completion(Property::Scale(Vec2::ONE));
                self.animations.add(key, grow);
            }
            Err(error) => {
                warn!(%error, "Grow-in rejected, showing marker at full size");
                self.markers.insert(target, Transform::default().with_position(center));
            }
        }

        debug!(%pos, %player, "Marker placed");
        true
    }

    /// Maps a screen click to a cell and places `player` there.
    ///
    /// Returns the cell on success, `None` for clicks off the board or on
    /// an occupied cell.
    #[instrument(skip(self))]
    pub fn click(&mut self, px: f32, py: f32, player: Player) -> Option<Position> {
        let pos = self.state.screen_to_board(px, py)?;
        self.place_at(pos, player).then_some(pos)
    }

    /// Blinks the markers on `line`, ending fully visible.
    #[instrument(skip(self))]
    pub fn highlight(&mut self, line: [Position; 3]) {
        for pos in line {
            let blink = Animation::blink(
                TargetId::new(cell_key(pos)),
                self.settings.win_blinks,
                self.settings.win_blink_duration,
            );
            match blink {
                Ok(blink) => self
                    .animations
                    .add(highlight_key(pos), blink.with_completion(Property::Opacity(1.0))),
                Err(error) => warn!(%error, "Highlight rejected"),
            }
        }
    }

    /// Advances all animations by `delta` seconds against the markers.
    ///
    /// Returns the keys that completed during this tick.
    pub fn tick(&mut self, delta: f32) -> Vec<String> {
        self.animations.tick(delta, &mut self.markers)
    }

    /// Clears animations, markers and grid in one step.
    ///
    /// Animations go first so none can write to a marker of a cell that
    /// already reports empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.animations.clear();
        self.markers.clear();
        self.state.reset();
        info!("Board controller reset");
    }

    /// Moves the board's top-left corner to `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        let mut geometry = *self.state.geometry();
        geometry.set_origin(Vec2::new(x, y));
        self.set_geometry(geometry);
    }

    /// Moves the board and re-centers existing markers.
    #[instrument(skip(self))]
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.state.set_geometry(geometry);
        for pos in Position::ALL {
            let target = TargetId::new(cell_key(pos));
            let center = geometry.cell_center(pos);
            if let Some(marker) = self.markers.get(&target).copied() {
                self.markers.insert(target, marker.with_position(center));
            }
        }
    }

    /// The board state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// The animation registry.
    pub fn animations(&self) -> &AnimationRegistry {
        &self.animations
    }

    /// Marker visuals keyed by `cell_<index>`.
    pub fn markers(&self) -> &TransformStore {
        &self.markers
    }

    /// Transform of the marker in `pos`, if one was placed.
    pub fn marker(&self, pos: Position) -> Option<&Transform> {
        self.markers.get(&TargetId::new(cell_key(pos)))
    }

    /// Animation timing in use.
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }
}
