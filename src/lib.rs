//! # color-grid
//!
//! Game-state engine for a grid-based color matching game: a board of
//! randomly colored cells where clicking one eliminates it together with
//! every cell whose color is similar enough, scored against a running
//! attempt penalty.
//!
//! ## Design Principles
//!
//! 1. **No rendering, no windowing**: The engine consumes pixel-space
//!    click events and produces `(center, size, color)` quads plus a
//!    status line. Graphics and input libraries stay on the other side
//!    of the [`render::QuadRenderer`] seam.
//!
//! 2. **Explicit ownership**: One engine object owns the grid and all
//!    counters. No globals; pass it into your loop by reference.
//!
//! 3. **Two-phase clicks**: Input callbacks only record intent (SELECT);
//!    the loop resolves it deterministically once per tick (RESOLVE).
//!    Exactly one resolution per valid click, regardless of how events
//!    are dispatched.
//!
//! 4. **Deterministic boards**: Colors come from a seeded ChaCha8 stream
//!    whose position is serializable, so sessions can be snapshotted and
//!    resumed exactly.
//!
//! ## Quickstart
//!
//! ```
//! use color_grid::{GameSession, GridConfig};
//!
//! let config = GridConfig::default(); // 6x8 board of 100x100 cells
//! let mut session = GameSession::new(config, 42);
//!
//! // Wire these into your window's callbacks:
//! session.on_click(250.0, 150.0);
//!
//! // And run this once per frame, before drawing:
//! let report = session.tick();
//! if let Some(status) = report.status {
//!     // window.set_title(&status), or draw a HUD line
//!     assert!(status.starts_with("Score:"));
//! }
//!
//! // Drawing: one quad per surviving cell.
//! for quad in session.engine().quads() {
//!     let _ = (quad.center, quad.size, quad.color);
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: Geometry, colors, configuration, the cell grid, RNG
//! - `engine`: Selection and resolution, scoring, game-over
//! - `render`: The quad/renderer boundary
//! - `session`: Event-loop driver (intent recording + per-tick apply)
//! - `snapshot`: Save/restore of a full session

pub mod core;
pub mod engine;
pub mod render;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Cell, ColorRgb, ColorRng, ColorRngState, Grid, GridConfig, Vec2, DEFAULT_COLOR_TOLERANCE,
};

pub use crate::engine::GameEngine;

pub use crate::render::{QuadInstance, QuadList, QuadRenderer};

pub use crate::session::{GameSession, InputEvent, TickReport};

pub use crate::snapshot::GameSnapshot;
