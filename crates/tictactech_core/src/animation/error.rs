//! Animation error types.

/// Error raised while configuring an animation.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AnimationError {
    /// Duration must be a finite number greater than zero.
    #[display("Invalid animation duration {duration}: must be finite and greater than zero")]
    InvalidDuration {
        /// The rejected duration, in seconds.
        duration: f32,
    },
}
