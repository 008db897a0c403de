//! Human-like pointer motion module
//!
//! This module contains the parametric curve generator and its supporting
//! pieces: easing (tween) functions controlling point density and speed
//! tiers controlling trajectory length.

pub mod curve;
pub mod speed;
pub mod tween;

pub use curve::{generate, CurveConfig};
pub use speed::SpeedTier;
pub use tween::Tween;

use serde::{Deserialize, Serialize};

/// A screen coordinate. Plain value type with no identity beyond equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }
}
