//! Core types: geometry, colors, configuration, the cell grid, RNG.
//!
//! This module contains the fundamental building blocks the engine is
//! assembled from. None of them know about selections or scoring; that
//! logic lives in `crate::engine`.

pub mod color;
pub mod config;
pub mod geom;
pub mod grid;
pub mod rng;

pub use color::ColorRgb;
pub use config::{GridConfig, DEFAULT_COLOR_TOLERANCE};
pub use geom::Vec2;
pub use grid::{Cell, Grid};
pub use rng::{ColorRng, ColorRngState};
