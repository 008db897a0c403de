//! Speed tiers for trajectory length
//!
//! A tier resolves to a randomized point-count budget for the curve
//! generator. More points means smoother and slower perceived motion when
//! the trajectory is replayed at a fixed per-point delay.

use std::ops::RangeInclusive;

use rand::Rng;

/// Named movement speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTier {
    Slowest,
    Slow,
    #[default]
    Medium,
    Fast,
    Fastest,
}

impl SpeedTier {
    /// Look up a tier by its config name. Unknown names fall back to Medium.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "slowest" => SpeedTier::Slowest,
            "slow" => SpeedTier::Slow,
            "medium" => SpeedTier::Medium,
            "fast" => SpeedTier::Fast,
            "fastest" => SpeedTier::Fastest,
            _ => SpeedTier::default(),
        }
    }

    /// The point-count range this tier samples from
    pub fn point_range(self) -> RangeInclusive<usize> {
        match self {
            SpeedTier::Slowest => 85..=100,
            SpeedTier::Slow => 65..=80,
            SpeedTier::Medium => 45..=60,
            SpeedTier::Fast => 20..=40,
            SpeedTier::Fastest => 10..=15,
        }
    }

    /// Sample a concrete point count for one trajectory
    pub fn sample_points<R: Rng>(self, rng: &mut R) -> usize {
        rng.gen_range(self.point_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_tier_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let points = SpeedTier::Fast.sample_points(&mut rng);
            assert!((20..=40).contains(&points));
        }
    }

    #[test]
    fn test_all_tier_bounds() {
        let mut rng = rand::thread_rng();
        for tier in [
            SpeedTier::Slowest,
            SpeedTier::Slow,
            SpeedTier::Medium,
            SpeedTier::Fast,
            SpeedTier::Fastest,
        ] {
            for _ in 0..100 {
                assert!(tier.point_range().contains(&tier.sample_points(&mut rng)));
            }
        }
    }

    #[test]
    fn test_unknown_name_is_medium() {
        assert_eq!(SpeedTier::from_name("ludicrous"), SpeedTier::Medium);
        assert_eq!(
            SpeedTier::from_name("ludicrous").point_range(),
            SpeedTier::Medium.point_range()
        );
        assert_eq!(*SpeedTier::Medium.point_range().start(), 45);
        assert_eq!(*SpeedTier::Medium.point_range().end(), 60);
    }

    #[test]
    fn test_known_names() {
        assert_eq!(SpeedTier::from_name("FAST"), SpeedTier::Fast);
        assert_eq!(SpeedTier::from_name("slowest"), SpeedTier::Slowest);
    }
}
