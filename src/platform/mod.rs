//! Platform abstraction layer
//!
//! Handles browser input plumbing that the simulation must not see:
//! - Converting page-space pointer events to surface-local coordinates
//! - Holding the latest pointer position between frames

use glam::Vec2;

use crate::sim::FrameInput;

/// Convert a client-space event position to surface-local coordinates
///
/// `rect_origin` is the surface's bounding-rect top-left and `scroll` the
/// document's scroll offset.
#[inline]
pub fn surface_local_position(client: Vec2, rect_origin: Vec2, scroll: Vec2) -> Vec2 {
    client - rect_origin - scroll
}

/// Latest pointer position, written by the input observer
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    latest: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move event (surface-local coordinates)
    pub fn record(&mut self, pos: Vec2) {
        self.latest = Some(pos);
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.latest
    }

    /// Freeze the current pointer into a frame input
    pub fn snapshot(&self) -> FrameInput {
        FrameInput {
            pointer: self.latest,
        }
    }
}
