//! A single grid particle

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point-mass anchored to the grid cell it was created in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Current position (surface space)
    pub pos: Vec2,
    /// Velocity applied to `pos` at the start of each update
    pub vel: Vec2,
    /// Render radius
    pub radius: f32,
    /// Grid anchor, fixed at construction
    origin: Vec2,
}

impl Particle {
    /// Create a resting particle at its origin
    pub fn new(origin: Vec2, radius: f32) -> Self {
        Self {
            pos: origin,
            vel: Vec2::ZERO,
            radius,
            origin,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Move by the current velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Vector from the current position back to the origin
    #[inline]
    pub fn restoring_delta(&self) -> Vec2 {
        self.origin - self.pos
    }

    /// True when the pointer is closer than `threshold` on both axes
    #[inline]
    pub fn is_near(&self, pointer: Vec2, threshold: f32) -> bool {
        let d = (pointer - self.pos).abs();
        d.x < threshold && d.y < threshold
    }

    /// Position and velocity are both finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}
