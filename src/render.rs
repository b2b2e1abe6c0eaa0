//! Renderer boundary.
//!
//! The engine never draws anything itself. It hands the renderer one
//! quad per non-eliminated cell as a `(center, size, color)` triple, and
//! the renderer turns that into whatever its graphics API needs (an
//! instanced draw, a model matrix per quad, a scene-graph node).
//!
//! `QuadRenderer` is the seam: implement it over your graphics backend
//! and pass it to [`GameEngine::render_into`] once per frame. For
//! backends that prefer pulling, [`GameEngine::quads`] exposes the same
//! instances as an iterator.

use crate::core::{ColorRgb, Vec2};
use crate::engine::GameEngine;

/// One rectangle to draw: position, size, and fill color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadInstance {
    /// Pixel coordinates of the quad center.
    pub center: Vec2,

    /// Pixel dimensions.
    pub size: Vec2,

    /// Fill color.
    pub color: ColorRgb,
}

/// Drawing backend for the grid.
pub trait QuadRenderer {
    /// Draw one filled rectangle.
    fn draw_quad(&mut self, quad: QuadInstance);
}

/// Collects quads into a `Vec`, for tests and software backends.
#[derive(Debug, Default)]
pub struct QuadList {
    /// Quads in grid order (row-major).
    pub quads: Vec<QuadInstance>,
}

impl QuadRenderer for QuadList {
    fn draw_quad(&mut self, quad: QuadInstance) {
        self.quads.push(quad);
    }
}

impl GameEngine {
    /// Iterate over the quads for every non-eliminated cell, row-major.
    pub fn quads(&self) -> impl Iterator<Item = QuadInstance> + '_ {
        self.grid().iter_active().map(|(_, cell)| QuadInstance {
            center: cell.center,
            size: cell.size,
            color: cell.color,
        })
    }

    /// Emit one draw call per non-eliminated cell.
    pub fn render_into<R: QuadRenderer + ?Sized>(&self, renderer: &mut R) {
        for quad in self.quads() {
            renderer.draw_quad(quad);
        }
    }
}
