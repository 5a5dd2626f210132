//! Keyed, time-driven animation engine.
//!
//! Animations are plain data: an [`Effect`] describing what to interpolate
//! and a [`TargetId`] naming the visual to write to. The owner of the
//! visuals implements [`Visuals`]; the engine never holds a reference to
//! a visual, so destroying one before its animation ends is harmless.

mod clip;
mod effect;
mod error;
mod registry;
mod visuals;

pub use clip::Animation;
pub use effect::{Effect, EffectKind};
pub use error::AnimationError;
pub use registry::AnimationRegistry;
pub use visuals::{Property, TargetId, Transform, TransformStore, Visuals};

pub(crate) use clip::check_duration;
