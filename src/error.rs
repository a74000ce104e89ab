//! Host setup errors
//!
//! The simulation itself is infallible; only acquiring the drawing surface
//! from the browser can fail.

use std::fmt;

/// Failure while attaching to the browser drawing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// `window` is not available (not running in a browser main thread)
    NoWindow,
    /// `window.document` is not available
    NoDocument,
    /// No element with the requested id
    MissingElement(String),
    /// Element exists but is not a `<canvas>`
    NotACanvas(String),
    /// The canvas refused to hand out a 2D context
    NoContext,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NoWindow => write!(f, "no global window"),
            SurfaceError::NoDocument => write!(f, "window has no document"),
            SurfaceError::MissingElement(id) => write!(f, "no element with id '{}'", id),
            SurfaceError::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            SurfaceError::NoContext => write!(f, "2d rendering context unavailable"),
        }
    }
}

impl std::error::Error for SurfaceError {}
