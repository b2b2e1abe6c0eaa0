//! Minimal 2D geometry for cell placement.
//!
//! The engine works in pixel coordinates with the origin at the top-left,
//! x to the right, y down. Cell centers and cell sizes are both plain
//! 2D vectors; no linear algebra beyond that is needed.

use serde::{Deserialize, Serialize};

/// A 2D vector in pixel space.
///
/// Used both as a position (cell center) and as a size (cell dimensions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
