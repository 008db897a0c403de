//! Easing functions for point distribution along a curve
//!
//! The tween maps the linear progress 0..1 to a curve parameter, which
//! controls how densely points cluster along the trajectory. Ease-out
//! variants concentrate points near the destination, mimicking the
//! deceleration of a real hand.

/// Easing function selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tween {
    /// Constant point density
    Linear,
    /// Accelerating; points cluster near the start
    EaseInQuad,
    /// Decelerating; points cluster near the destination
    #[default]
    EaseOutQuad,
    /// Slow at both ends
    EaseInOutQuad,
    /// Stronger deceleration than EaseOutQuad
    EaseOutCubic,
}

impl Tween {
    /// Look up a tween by its config name. Unknown names fall back to the
    /// default ease-out-quad.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Tween::Linear,
            "ease_in_quad" => Tween::EaseInQuad,
            "ease_out_quad" => Tween::EaseOutQuad,
            "ease_in_out_quad" => Tween::EaseInOutQuad,
            "ease_out_cubic" => Tween::EaseOutCubic,
            _ => Tween::default(),
        }
    }

    /// Map linear progress `t` in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Tween::Linear => t,
            Tween::EaseInQuad => t * t,
            Tween::EaseOutQuad => t * (2.0 - t),
            Tween::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Tween::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Tween; 5] = [
        Tween::Linear,
        Tween::EaseInQuad,
        Tween::EaseOutQuad,
        Tween::EaseInOutQuad,
        Tween::EaseOutCubic,
    ];

    #[test]
    fn test_endpoints_fixed() {
        for tween in ALL {
            assert_eq!(tween.apply(0.0), 0.0, "{:?}", tween);
            assert_eq!(tween.apply(1.0), 1.0, "{:?}", tween);
        }
    }

    #[test]
    fn test_monotonic() {
        for tween in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let eased = tween.apply(i as f64 / 100.0);
                assert!(eased >= prev, "{:?} not monotonic", tween);
                prev = eased;
            }
        }
    }

    #[test]
    fn test_ease_out_quad_midpoint() {
        assert_eq!(Tween::EaseOutQuad.apply(0.5), 0.75);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(Tween::from_name("wobble"), Tween::EaseOutQuad);
        assert_eq!(Tween::from_name("linear"), Tween::Linear);
        assert_eq!(Tween::from_name("EASE_OUT_CUBIC"), Tween::EaseOutCubic);
    }
}
