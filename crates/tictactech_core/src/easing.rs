//! Easing curves for animation timing.
//!
//! Each curve maps normalized time in `[0, 1]` onto `[0, 1]`. Inputs are
//! expected to be clamped by the caller; animations clamp before sampling.

use serde::{Deserialize, Serialize};

/// Quadratic ease-in-out: slow start, fast middle, slow end.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Quadratic ease-in: starts slow.
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out: ends slow.
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Selectable easing curve.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Easing {
    /// Identity curve.
    Linear,
    /// See [`ease_in`].
    EaseIn,
    /// See [`ease_out`].
    EaseOut,
    /// See [`ease_in_out`].
    #[default]
    EaseInOut,
}

impl Easing {
    /// Reshapes normalized time `t`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => ease_in(t),
            Easing::EaseOut => ease_out(t),
            Easing::EaseInOut => ease_in_out(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_endpoints_fixed() {
        for easing in Easing::iter() {
            assert!(easing.apply(0.0).abs() < EPSILON, "{easing} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < EPSILON, "{easing} at 1");
        }
    }

    #[test]
    fn test_known_midpoints() {
        assert!((ease_in(0.5) - 0.25).abs() < EPSILON);
        assert!((ease_out(0.5) - 0.75).abs() < EPSILON);
        assert!((ease_in_out(0.5) - 0.5).abs() < EPSILON);
        assert!((ease_in_out(0.25) - 0.125).abs() < EPSILON);
        assert!((ease_in_out(0.75) - 0.875).abs() < EPSILON);
    }

    #[test]
    fn test_output_stays_in_unit_range_and_monotonic() {
        for easing in Easing::iter() {
            let mut previous = 0.0_f32;
            for step in 0..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!((0.0..=1.0 + EPSILON).contains(&value), "{easing} out of range");
                assert!(value + EPSILON >= previous, "{easing} not monotonic");
                previous = value;
            }
        }
    }

    #[test]
    fn test_ease_in_out_continuous_at_half() {
        let below = ease_in_out(0.5 - 1e-4);
        let above = ease_in_out(0.5 + 1e-4);
        assert!((above - below).abs() < 1e-3);
    }

    #[test]
    fn test_parse_config_names() {
        assert_eq!(Easing::from_str("ease_in_out").ok(), Some(Easing::EaseInOut));
        assert_eq!(Easing::from_str("linear").ok(), Some(Easing::Linear));
        assert!(Easing::from_str("bounce").is_err());
        assert_eq!(Easing::EaseOut.to_string(), "ease_out");
    }
}
