//! Effect kinds an animation can play.

use super::visuals::Property;
use crate::math::{Vec2, lerp};
use serde::{Deserialize, Serialize};

/// What an animation interpolates, as plain start/end data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, strum::EnumDiscriminants)]
#[strum_discriminants(name(EffectKind), derive(strum::Display))]
pub enum Effect {
    /// Scale from one size to another.
    Scale {
        /// Starting scale.
        from: Vec2,
        /// Final scale.
        to: Vec2,
    },
    /// Opacity ramp.
    Fade {
        /// Starting opacity.
        from: f32,
        /// Final opacity.
        to: f32,
    },
    /// Translation between two positions.
    Move {
        /// Starting position.
        from: Vec2,
        /// Final position.
        to: Vec2,
    },
    /// Rotation between two angles, in degrees.
    Rotate {
        /// Starting angle.
        from: f32,
        /// Final angle.
        to: f32,
    },
    /// Toggles full visibility `count` times over the duration.
    Blink {
        /// Number of hide/show cycles.
        count: u32,
    },
}

impl Effect {
    /// Samples the effect at eased time `t`.
    pub fn sample(&self, t: f32) -> Property {
        match *self {
            Effect::Scale { from, to } => Property::Scale(from.lerp(to, t)),
            Effect::Fade { from, to } => Property::Opacity(lerp(from, to, t)),
            Effect::Move { from, to } => Property::Position(from.lerp(to, t)),
            Effect::Rotate { from, to } => Property::Rotation(lerp(from, to, t)),
            Effect::Blink { count } => {
                // Each blink is one hidden and one visible half-cycle.
                let cycle = (t * count as f32 * 2.0).floor() as u32;
                let visible = cycle % 2 == 0;
                Property::Opacity(if visible { 1.0 } else { 0.0 })
            }
        }
    }

    /// Returns the kind of effect without its data.
    pub fn kind(&self) -> EffectKind {
        EffectKind::from(self)
    }
}
