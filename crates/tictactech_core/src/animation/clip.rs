//! A single timed interpolation.

use super::effect::Effect;
use super::error::AnimationError;
use super::visuals::{Property, TargetId, Visuals};
use crate::easing::Easing;
use crate::math::Vec2;
use tracing::{debug, instrument, trace};

/// Rejects durations that are not finite and strictly positive.
pub(crate) fn check_duration(duration: f32) -> Result<(), AnimationError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(AnimationError::InvalidDuration { duration })
    }
}

/// One timed effect applied to a single target.
///
/// An animation is either running or completed. Completion happens on the
/// first [`advance`](Self::advance) where accumulated time reaches the
/// duration; that frame still writes the final sample, then applies the
/// optional completion property exactly once. Only [`reset`](Self::reset)
/// leaves the completed state.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    target: TargetId,
    effect: Effect,
    easing: Easing,
    duration: f32,
    elapsed: f32,
    completed: bool,
    on_complete: Option<Property>,
}

impl Animation {
    /// Creates a running animation.
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::InvalidDuration`] unless `duration` is
    /// finite and greater than zero.
    #[instrument(skip(target))]
    pub fn new(
        target: impl Into<TargetId>,
        effect: Effect,
        duration: f32,
        easing: Easing,
    ) -> Result<Self, AnimationError> {
        check_duration(duration)?;
        Ok(Self {
            target: target.into(),
            effect,
            easing,
            duration,
            elapsed: 0.0,
            completed: false,
            on_complete: None,
        })
    }

    /// Linear opacity ramp from transparent to opaque.
    pub fn fade_in(target: impl Into<TargetId>, duration: f32) -> Result<Self, AnimationError> {
        Self::new(target, Effect::Fade { from: 0.0, to: 1.0 }, duration, Easing::Linear)
    }

    /// Linear opacity ramp from opaque to transparent.
    pub fn fade_out(target: impl Into<TargetId>, duration: f32) -> Result<Self, AnimationError> {
        Self::new(target, Effect::Fade { from: 1.0, to: 0.0 }, duration, Easing::Linear)
    }

    /// Eased scale change.
    pub fn scale(
        target: impl Into<TargetId>,
        from: Vec2,
        to: Vec2,
        duration: f32,
    ) -> Result<Self, AnimationError> {
        Self::new(target, Effect::Scale { from, to }, duration, Easing::EaseInOut)
    }

    /// Eased translation.
    pub fn move_to(
        target: impl Into<TargetId>,
        from: Vec2,
        to: Vec2,
        duration: f32,
    ) -> Result<Self, AnimationError> {
        Self::new(target, Effect::Move { from, to }, duration, Easing::EaseInOut)
    }

    /// Eased rotation, angles in degrees.
    pub fn rotate(
        target: impl Into<TargetId>,
        from: f32,
        to: f32,
        duration: f32,
    ) -> Result<Self, AnimationError> {
        Self::new(target, Effect::Rotate { from, to }, duration, Easing::EaseInOut)
    }

    /// Visibility toggling `count` times over `duration`.
    pub fn blink(
        target: impl Into<TargetId>,
        count: u32,
        duration: f32,
    ) -> Result<Self, AnimationError> {
        Self::new(target, Effect::Blink { count }, duration, Easing::Linear)
    }

    /// Sets the property snapped onto the target when the animation completes.
    pub fn with_completion(mut self, property: Property) -> Self {
        self.on_complete = Some(property);
        self
    }

    /// Replaces the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advances the clock by `delta` seconds and writes the current sample.
    ///
    /// Returns whether the animation is completed. Once completed, further
    /// calls return `true` without touching `visuals`. Negative and NaN
    /// deltas count as zero.
    #[instrument(level = "trace", skip(self, visuals), fields(sprite = %self.target))]
    pub fn advance<V>(&mut self, delta: f32, visuals: &mut V) -> bool
    where
        V: Visuals + ?Sized,
    {
        if self.completed {
            return true;
        }

        self.elapsed += delta.max(0.0);
        let t = self.normalized_time();
        let property = self.effect.sample(self.easing.apply(t));
        trace!(t, ?property, "Animation sample");
        visuals.apply(&self.target, property);

        if t >= 1.0 {
            self.completed = true;
            if let Some(snap) = self.on_complete {
                visuals.apply(&self.target, snap);
            }
            debug!(sprite = %self.target, kind = %self.effect.kind(), "Animation completed");
        }

        self.completed
    }

    /// Rewinds to the start so the animation can play again.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.completed = false;
    }

    /// Elapsed time over duration, clamped to `[0, 1]`.
    pub fn normalized_time(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }

    /// Returns true once the animation has reached its end.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Accumulated time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The visual this animation writes to.
    pub fn target(&self) -> &TargetId {
        &self.target
    }

    /// The effect being played.
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// The easing curve.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The completion property, if any.
    pub fn on_complete(&self) -> Option<Property> {
        self.on_complete
    }
}
