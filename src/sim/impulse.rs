//! Velocity rules: the scatter impulse and the return rule

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{SCATTER_MAX, SCATTER_MIN};

/// Inclusive magnitude range for scatter impulses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterRange {
    pub min: u32,
    pub max: u32,
}

impl Default for ScatterRange {
    fn default() -> Self {
        Self {
            min: SCATTER_MIN,
            max: SCATTER_MAX,
        }
    }
}

impl ScatterRange {
    /// Non-zero magnitudes only, `min <= max`
    pub fn is_valid(&self) -> bool {
        self.min >= 1 && self.min <= self.max
    }

    /// Whole-number magnitude in `[min, max]` with a coin-flip sign
    pub fn sample_axis<R: Rng>(&self, rng: &mut R) -> f32 {
        let magnitude = rng.random_range(self.min..=self.max) as f32;
        if rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Independent sample per axis
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec2 {
        let x = self.sample_axis(rng);
        let y = self.sample_axis(rng);
        Vec2::new(x, y)
    }
}

/// How velocity is rewritten when the pointer is not near a particle
///
/// `Multiplicative` scales velocity by the restoring delta every frame. It does
/// not settle like a spring: depending on the impulse it can land exactly on
/// the origin, oscillate, or grow without bound (eventually to infinity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReturnRule {
    /// `vel *= origin - pos`, unclamped
    #[default]
    Multiplicative,
    /// Same product, each axis clamped to `[-max_speed, max_speed]`
    Clamped { max_speed: f32 },
}

impl ReturnRule {
    pub fn apply(&self, vel: Vec2, restoring_delta: Vec2) -> Vec2 {
        let next = vel * restoring_delta;
        match *self {
            ReturnRule::Multiplicative => next,
            ReturnRule::Clamped { max_speed } => {
                // NaN has no meaningful direction to clamp toward
                let next = Vec2::new(
                    if next.x.is_nan() { 0.0 } else { next.x },
                    if next.y.is_nan() { 0.0 } else { next.y },
                );
                next.clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed))
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            ReturnRule::Multiplicative => true,
            ReturnRule::Clamped { max_speed } => max_speed.is_finite() && max_speed > 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_multiplicative_is_a_plain_product() {
        let rule = ReturnRule::Multiplicative;
        let vel = rule.apply(Vec2::new(3.0, -2.0), Vec2::new(-4.0, -5.0));
        assert_eq!(vel, Vec2::new(-12.0, 10.0));
    }

    #[test]
    fn test_clamped_limits_each_axis() {
        let rule = ReturnRule::Clamped { max_speed: 5.0 };
        let vel = rule.apply(Vec2::new(3.0, -2.0), Vec2::new(-4.0, -5.0));
        assert_eq!(vel, Vec2::new(-5.0, 5.0));

        let vel = rule.apply(Vec2::new(f32::INFINITY, 1.0), Vec2::new(0.0, 2.0));
        assert_eq!(vel, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_return_rule_validity() {
        assert!(ReturnRule::Multiplicative.is_valid());
        assert!(ReturnRule::Clamped { max_speed: 3.0 }.is_valid());
        assert!(!ReturnRule::Clamped { max_speed: 0.0 }.is_valid());
        assert!(!ReturnRule::Clamped { max_speed: f32::NAN }.is_valid());
    }

    #[test]
    fn test_scatter_range_validity() {
        assert!(ScatterRange::default().is_valid());
        assert!(ScatterRange { min: 3, max: 3 }.is_valid());
        assert!(!ScatterRange { min: 0, max: 2 }.is_valid());
        assert!(!ScatterRange { min: 2, max: 1 }.is_valid());
    }

    #[test]
    fn test_both_signs_appear() {
        let mut rng = Pcg32::seed_from_u64(7);
        let range = ScatterRange::default();
        let samples: Vec<f32> = (0..64).map(|_| range.sample_axis(&mut rng)).collect();
        assert!(samples.iter().any(|&v| v > 0.0));
        assert!(samples.iter().any(|&v| v < 0.0));
    }

    proptest! {
        #[test]
        fn scatter_magnitude_stays_in_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let v = ScatterRange::default().sample(&mut rng);
            for axis in [v.x, v.y] {
                prop_assert!((1.0..=2.0).contains(&axis.abs()));
                prop_assert_eq!(axis.fract(), 0.0);
            }
        }
    }
}
