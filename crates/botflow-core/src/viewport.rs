//! Canvas viewport: pan offset and zoom.
//!
//! The viewport is not part of the graph semantics, but it is saved next to
//! the elements so reopening a flow restores the same view.

use serde::{Deserialize, Serialize};

/// Zoom applied when a stored document carries none. Restoring at zoom zero
/// would render an invisible canvas, so absent values fall back to 1.0.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Pan/zoom state of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Viewport { x, y, zoom }
    }
}

impl Default for Viewport {
    /// Origin pan at [`DEFAULT_ZOOM`].
    fn default() -> Self {
        Viewport::new(0.0, 0.0, DEFAULT_ZOOM)
    }
}
