//! Visual targets and the properties animations write to them.

use crate::math::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{instrument, trace};

/// Identifier of a visual an animation writes to.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0}")]
pub struct TargetId(String);

impl TargetId {
    /// Creates a target identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An interpolated value for one visual property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Property {
    /// Uniform or per-axis scale.
    Scale(Vec2),
    /// Opacity in `[0, 1]`.
    Opacity(f32),
    /// Screen position.
    Position(Vec2),
    /// Rotation in degrees.
    Rotation(f32),
}

/// Receiver of animated property values.
///
/// The animation engine only knows target identifiers. Whoever owns the
/// actual visuals implements this trait and decides what a write means;
/// writes to unknown targets must be ignored.
pub trait Visuals {
    /// Writes `property` onto the visual identified by `target`.
    fn apply(&mut self, target: &TargetId, property: Property);
}

/// Plain-data visual state of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct Transform {
    /// Scale factor, `ONE` is natural size.
    pub scale: Vec2,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Screen position.
    pub position: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vec2::ONE,
            opacity: 1.0,
            position: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Transform {
    /// Overwrites the field addressed by `property`.
    pub fn apply(&mut self, property: Property) {
        match property {
            Property::Scale(scale) => self.scale = scale,
            Property::Opacity(opacity) => self.opacity = opacity,
            Property::Position(position) => self.position = position,
            Property::Rotation(rotation) => self.rotation = rotation,
        }
    }
}

/// Transforms keyed by target, the default [`Visuals`] implementation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformStore {
    transforms: HashMap<TargetId, Transform>,
}

impl TransformStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the transform for `target`.
    #[instrument(skip(self))]
    pub fn insert(&mut self, target: TargetId, transform: Transform) -> Option<Transform> {
        self.transforms.insert(target, transform)
    }

    /// Removes the transform for `target`.
    pub fn remove(&mut self, target: &TargetId) -> Option<Transform> {
        self.transforms.remove(target)
    }

    /// Returns the transform for `target`.
    pub fn get(&self, target: &TargetId) -> Option<&Transform> {
        self.transforms.get(target)
    }

    /// Drops every transform.
    pub fn clear(&mut self) {
        self.transforms.clear();
    }

    /// Number of stored transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Iterates over all targets and their transforms.
    pub fn iter(&self) -> impl Iterator<Item = (&TargetId, &Transform)> {
        self.transforms.iter()
    }
}

impl Visuals for TransformStore {
    fn apply(&mut self, target: &TargetId, property: Property) {
        match self.transforms.get_mut(target) {
            Some(transform) => transform.apply(property),
            None => trace!(sprite = %target, ?property, "Ignoring write to unknown target"),
        }
    }
}
