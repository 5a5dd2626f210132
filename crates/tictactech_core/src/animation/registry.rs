//! Keyed collection of running animations.

use super::clip::Animation;
use super::error::AnimationError;
use super::visuals::{TargetId, Visuals};
use crate::math::Vec2;
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Active animations addressed by string key.
///
/// Keys are unique: adding under an existing key replaces the old
/// animation without completing it ("latest wins"). [`remove`](Self::remove)
/// and [`clear`](Self::clear) are silent as well. Only natural completion
/// inside [`tick`](Self::tick) applies completion properties.
#[derive(Debug, Clone, Default)]
pub struct AnimationRegistry {
    animations: HashMap<String, Animation>,
}

impl AnimationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `animation` under `key`, discarding any previous one.
    #[instrument(skip(self, key, animation), fields(key = tracing::field::Empty))]
    pub fn add(&mut self, key: impl Into<String>, animation: Animation) {
        let key = key.into();
        tracing::Span::current().record("key", key.as_str());
        if self.animations.insert(key, animation).is_some() {
            debug!("Replaced running animation");
        }
    }

    /// Drops the animation under `key`, if any. Returns whether one existed.
    #[instrument(skip(self))]
    pub fn remove(&mut self, key: &str) -> bool {
        self.animations.remove(key).is_some()
    }

    /// Drops every animation.
    #[instrument(skip(self), fields(count = self.animations.len()))]
    pub fn clear(&mut self) {
        self.animations.clear();
    }

    /// Advances every animation by `delta` and removes the ones that
    /// completed. Returns the keys removed.
    ///
    /// All animations are advanced before any is erased, so the map is
    /// never mutated mid-iteration.
    #[instrument(level = "trace", skip(self, visuals))]
    pub fn tick<V>(&mut self, delta: f32, visuals: &mut V) -> Vec<String>
    where
        V: Visuals + ?Sized,
    {
        let mut completed = Vec::new();
        for (key, animation) in self.animations.iter_mut() {
            if animation.advance(delta, visuals) {
                completed.push(key.clone());
            }
        }

        for key in &completed {
            self.animations.remove(key);
        }

        if !completed.is_empty() {
            trace!(?completed, remaining = self.animations.len(), "Reaped animations");
        }
        completed
    }

    /// Returns true if an animation is registered under `key`.
    pub fn is_active(&self, key: &str) -> bool {
        self.animations.contains_key(key)
    }

    /// Returns true if any animation is registered.
    pub fn has_any(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Number of registered animations.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Returns true if no animation is registered.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Returns the animation under `key`.
    pub fn get(&self, key: &str) -> Option<&Animation> {
        self.animations.get(key)
    }

    /// Registers a fade-in of `target`.
    pub fn create_fade_in(
        &mut self,
        key: impl Into<String>,
        target: impl Into<TargetId>,
        duration: f32,
    ) -> Result<(), AnimationError> {
        self.add(key, Animation::fade_in(target, duration)?);
        Ok(())
    }

    /// Registers a fade-out of `target`.
    pub fn create_fade_out(
        &mut self,
        key: impl Into<String>,
        target: impl Into<TargetId>,
        duration: f32,
    ) -> Result<(), AnimationError> {
        self.add(key, Animation::fade_out(target, duration)?);
        Ok(())
    }

    /// Registers a scale change of `target`.
    pub fn create_scale(
        &mut self,
        key: impl Into<String>,
        target: impl Into<TargetId>,
        from: Vec2,
        to: Vec2,
        duration: f32,
    ) -> Result<(), AnimationError> {
        self.add(key, Animation::scale(target, from, to, duration)?);
        Ok(())
    }

    /// Registers a translation of `target`.
    pub fn create_move(
        &mut self,
        key: impl Into<String>,
        target: impl Into<TargetId>,
        from: Vec2,
        to: Vec2,
        duration: f32,
    ) -> Result<(), AnimationError> {
        self.add(key, Animation::move_to(target, from, to, duration)?);
        Ok(())
    }

    /// Registers a rotation of `target`.
    pub fn create_rotate(
        &mut self,
        key: impl Into<String>,
        target: impl Into<TargetId>,
        from: f32,
        to: f32,
        duration: f32,
    ) -> Result<(), AnimationError> {
        self.add(key, Animation::rotate(target, from, to, duration)?);
        Ok(())
    }

    /// Registers `count` blinks of `target` spread over `duration`.
    pub fn create_blink(
        &mut self,
        key: impl Into<String>,
        target: impl Into<TargetId>,
        count: u32,
        duration: f32,
    ) -> Result<(), AnimationError> {
        self.add(key, Animation::blink(target, count, duration)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Property, Transform, TransformStore};

    fn store_with(targets: &[&str]) -> TransformStore {
        let mut store = TransformStore::new();
        for target in targets {
            store.insert(TargetId::from(*target), Transform::default());
        }
        store
    }

    #[test]
    fn test_tick_reaps_only_completed() {
        let mut store = store_with(&["a", "b"]);
        let mut registry = AnimationRegistry::new();
        registry.create_fade_in("short", "a", 0.1).unwrap();
        registry.create_fade_in("long", "b", 1.0).unwrap();

        let done = registry.tick(0.2, &mut store);

        assert_eq!(done, vec!["short".to_string()]);
        assert!(!registry.is_active("short"));
        assert!(registry.is_active("long"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_replacing_key_discards_old_completion() {
        let target = TargetId::from("a");
        let mut store = store_with(&["a"]);
        let mut registry = AnimationRegistry::new();

        let first = Animation::fade_out("a", 1.0)
            .unwrap()
            .with_completion(Property::Rotation(45.0));
        registry.add("fx", first);
        registry.tick(0.5, &mut store);

        let second = Animation::fade_in("a", 0.2).unwrap();
        registry.add("fx", second);
        registry.tick(1.0, &mut store);

        let transform = store.get(&target).copied().unwrap_or_default();
        assert_eq!(transform.rotation, 0.0, "replaced completion must not run");
        assert_eq!(transform.opacity, 1.0);
        assert!(!registry.has_any());
    }

    #[test]
    fn test_remove_and_clear_are_silent() {
        let target = TargetId::from("a");
        let mut store = store_with(&["a"]);
        let mut registry = AnimationRegistry::new();
        let snap = Property::Opacity(0.25);

        registry.add("one", Animation::fade_in("a", 1.0).unwrap().with_completion(snap));
        registry.add("two", Animation::fade_in("a", 1.0).unwrap().with_completion(snap));

        assert!(registry.remove("one"));
        assert!(!registry.remove("one"));
        registry.clear();
        registry.tick(10.0, &mut store);

        assert_eq!(store.get(&target).map(|t| t.opacity), Some(1.0));
        assert!(!registry.has_any());
    }

    #[test]
    fn test_missing_target_is_harmless() {
        let mut store = TransformStore::new();
        let mut registry = AnimationRegistry::new();
        registry
            .create_scale("grow", "gone", Vec2::ZERO, Vec2::ONE, 0.1)
            .unwrap();

        assert_eq!(registry.tick(1.0, &mut store), vec!["grow".to_string()]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_bad_duration() {
        let mut registry = AnimationRegistry::new();
        assert!(registry.create_rotate("spin", "a", 0.0, 180.0, 0.0).is_err());
        assert!(registry.create_move("slide", "a", Vec2::ZERO, Vec2::ONE, -1.0).is_err());
        assert!(!registry.has_any());
    }
}
