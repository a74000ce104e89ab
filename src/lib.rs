//! Particle Scatter - a grid of particles that flee the pointer
//!
//! Core modules:
//! - `sim`: Deterministic particle field (grid layout, update rule, draw pass)
//! - `driver`: Frame driver with an explicit `run_once` step
//! - `renderer`: Drawing surface abstraction (recording + 2D canvas)
//! - `platform`: Pointer plumbing between browser events and frames
//! - `settings`: Field shape, colors and display toggles

pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{DriverPhase, FrameDriver};
pub use error::SurfaceError;
pub use renderer::{Color, DrawCommand, RecordingSurface, Surface};
pub use settings::Settings;

/// Field configuration constants
pub mod consts {
    /// Grid rows
    pub const ROWS: usize = 50;
    /// Grid columns
    pub const COLUMNS: usize = 200;
    /// Extra gap between neighbouring cells (cells sit `1 + SPACING` apart)
    pub const SPACING: f32 = 3.0;
    /// Upper bound on `rows * columns` accepted from settings
    pub const MAX_PARTICLES: usize = 1_000_000;
    /// Render radius of every particle
    pub const PARTICLE_RADIUS: f32 = 1.0;

    /// Pointer proximity (per axis) that triggers a scatter impulse
    pub const SCATTER_THRESHOLD: f32 = 10.0;
    /// Smallest scatter impulse magnitude
    pub const SCATTER_MIN: u32 = 1;
    /// Largest scatter impulse magnitude
    pub const SCATTER_MAX: u32 = 2;

    /// Pointer label font (CSS shorthand)
    pub const LABEL_FONT: &str = "18px Arial";
}
