//! Drawing surface abstraction
//!
//! The simulation only ever talks to `Surface`. `RecordingSurface` captures
//! commands for tests and headless runs; on wasm `CanvasSurface` forwards them
//! to a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::Color;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

/// Immediate-mode 2D drawing primitives
pub trait Surface {
    /// Drawable size in surface units
    fn size(&self) -> Vec2;

    /// Reset every pixel to transparent
    fn clear(&mut self);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw `text` with its baseline starting at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color);
}
