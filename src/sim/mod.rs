//! Deterministic particle simulation
//!
//! All motion logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (row-major grid scan)
//! - Pointer input arrives as a per-frame snapshot, never read from shared state
//! - No platform dependencies (drawing goes through the `Surface` trait)

pub mod field;
pub mod impulse;
pub mod particle;

pub use field::{FieldConfig, FrameInput, ParticleField};
pub use impulse::{ReturnRule, ScatterRange};
pub use particle::Particle;
