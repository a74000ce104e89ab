//! The particle field: grid layout, per-frame update and draw pass

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::impulse::{ReturnRule, ScatterRange};
use super::particle::Particle;
use crate::consts::*;
use crate::renderer::{Color, Surface};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Latest pointer position in surface space (None before the first move)
    pub pointer: Option<Vec2>,
}

impl FrameInput {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(Vec2::new(x, y)),
        }
    }
}

/// Shape and tuning of a particle field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub rows: usize,
    pub columns: usize,
    /// Extra gap between cells; neighbours sit `1 + spacing` apart
    pub spacing: f32,
    pub radius: f32,
    /// Per-axis pointer distance below which a particle scatters
    pub scatter_threshold: f32,
    pub scatter: ScatterRange,
    pub return_rule: ReturnRule,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            spacing: SPACING,
            radius: PARTICLE_RADIUS,
            scatter_threshold: SCATTER_THRESHOLD,
            scatter: ScatterRange::default(),
            return_rule: ReturnRule::default(),
        }
    }
}

impl FieldConfig {
    /// Replace unusable values with their defaults
    pub fn validate(&mut self) {
        let defaults = Self::default();

        let count = self.rows.checked_mul(self.columns);
        if !matches!(count, Some(n) if n > 0 && n <= MAX_PARTICLES) {
            log::warn!(
                "Unusable grid {}x{}, using {}x{}",
                self.rows,
                self.columns,
                defaults.rows,
                defaults.columns
            );
            self.rows = defaults.rows;
            self.columns = defaults.columns;
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            log::warn!("Invalid spacing {}, using {}", self.spacing, defaults.spacing);
            self.spacing = defaults.spacing;
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            log::warn!("Invalid radius {}, using {}", self.radius, defaults.radius);
            self.radius = defaults.radius;
        }
        if !self.scatter_threshold.is_finite() || self.scatter_threshold < 0.0 {
            log::warn!(
                "Invalid scatter threshold {}, using {}",
                self.scatter_threshold,
                defaults.scatter_threshold
            );
            self.scatter_threshold = defaults.scatter_threshold;
        }
        if !self.scatter.is_valid() {
            log::warn!("Invalid scatter range {:?}, using default", self.scatter);
            self.scatter = defaults.scatter;
        }
        if !self.return_rule.is_valid() {
            log::warn!("Invalid return rule {:?}, using default", self.return_rule);
            self.return_rule = defaults.return_rule;
        }
    }

    /// Surface-space extent covered by the resting grid
    pub fn extent(&self) -> Vec2 {
        let step = 1.0 + self.spacing;
        Vec2::new(self.columns as f32 * step, self.rows as f32 * step)
    }
}

/// Fixed-size, row-major collection of particles
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    /// Seed the scatter RNG was created from
    seed: u64,
    rng: Pcg32,
    divergence_reported: bool,
}

impl ParticleField {
    /// Lay out `rows x columns` resting particles
    ///
    /// Cell (row i, column k) is anchored at `(k + spacing*k, i + spacing*i)`.
    /// The config is validated first, so unusable values fall back to defaults.
    pub fn new(config: &FieldConfig, seed: u64) -> Self {
        let mut config = config.clone();
        config.validate();

        let mut particles = Vec::with_capacity(config.rows * config.columns);
        for i in 0..config.rows {
            for k in 0..config.columns {
                let (row, col) = (i as f32, k as f32);
                let origin = Vec2::new(col + config.spacing * col, row + config.spacing * row);
                particles.push(Particle::new(origin, config.radius));
            }
        }

        log::debug!(
            "Created {}x{} particle field (seed {})",
            config.rows,
            config.columns,
            seed
        );

        Self {
            config,
            particles,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            divergence_reported: false,
        }
    }

    /// Field with default tuning and the given grid shape
    pub fn grid(rows: usize, columns: usize, spacing: f32, seed: u64) -> Self {
        let config = FieldConfig {
            rows,
            columns,
            spacing,
            ..Default::default()
        };
        Self::new(&config, seed)
    }

    /// Advance every particle by one frame
    ///
    /// Each particle moves by its velocity first; the pointer test and the
    /// restoring delta both use the moved position.
    pub fn update(&mut self, pointer: Option<Vec2>) {
        let threshold = self.config.scatter_threshold;

        for p in &mut self.particles {
            p.advance();

            let near = pointer.is_some_and(|ptr| p.is_near(ptr, threshold));
            let restore = p.restoring_delta();

            p.vel = if near {
                self.config.scatter.sample(&mut self.rng)
            } else {
                self.config.return_rule.apply(p.vel, restore)
            };

            if !self.divergence_reported && !p.is_finite() {
                log::warn!(
                    "Particle anchored at ({}, {}) diverged (pos {:?}, vel {:?})",
                    p.origin().x,
                    p.origin().y,
                    p.pos,
                    p.vel
                );
                self.divergence_reported = true;
            }
        }
    }

    /// Emit one filled circle per particle, in field order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Color) {
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, color);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to particle state; the field length stays fixed
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Particle at grid cell (row, column)
    pub fn get(&self, row: usize, column: usize) -> Option<&Particle> {
        if row >= self.config.rows || column >= self.config.columns {
            return None;
        }
        self.particles.get(row * self.config.columns + column)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn columns(&self) -> usize {
        self.config.columns
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Particles whose position or velocity is no longer finite
    pub fn diverged_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_finite()).count()
    }
}
