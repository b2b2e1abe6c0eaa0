//! Event-loop driver.
//!
//! `GameSession` wraps a `GameEngine` in the cooperative, single-threaded
//! protocol a render loop expects:
//!
//! - Input callbacks ([`GameSession::on_click`],
//!   [`GameSession::on_restart_requested`]) only record intent. They are
//!   cheap, never scan the grid, and can be called from any event
//!   dispatch mechanism.
//! - [`GameSession::tick`], called once per loop iteration after polling
//!   events, applies the recorded intent: a pending restart resets the
//!   session, otherwise a pending selection is resolved to completion.
//!
//! The tick reports when the status line changed, which by construction
//! happens exactly on a resolution or a reset.
//!
//! ```
//! use color_grid::{GameSession, GridConfig};
//!
//! let mut session = GameSession::new(GridConfig::default(), 42);
//!
//! // Event callbacks record intent...
//! session.on_click(50.0, 50.0);
//!
//! // ...and the next tick applies it.
//! let report = session.tick();
//! assert!(report.removed >= 1);
//! assert!(report.status.is_some());
//!
//! // An idle tick changes nothing.
//! assert!(session.tick().status.is_none());
//! ```

use crate::core::GridConfig;
use crate::engine::GameEngine;

/// An input event, for embedders that route events as values rather
/// than calling the intent methods directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse click at a pixel coordinate (origin top-left, y down).
    Click { x: f32, y: f32 },
    /// Restart request (the R key, a button, a menu entry).
    RestartRequested,
}

/// What a tick did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Cells eliminated by this tick's resolution, 0 if none ran.
    pub removed: usize,

    /// True when this tick restarted the session.
    pub was_reset: bool,

    /// New status line, present exactly when a resolution or reset
    /// happened this tick.
    pub status: Option<String>,
}

/// Single-threaded session driver: records input intent, applies it
/// once per tick.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: GameEngine,
    restart_pending: bool,
}

impl GameSession {
    /// Create a session with a freshly generated board.
    #[must_use]
    pub fn new(config: GridConfig, seed: u64) -> Self {
        Self::with_engine(GameEngine::new(config, seed))
    }

    /// Wrap an existing engine (e.g. one restored from a snapshot).
    #[must_use]
    pub fn with_engine(engine: GameEngine) -> Self {
        Self {
            engine,
            restart_pending: false,
        }
    }

    /// Click callback: records the target cell as the pending selection.
    ///
    /// Invalid clicks (outside the board, on an eliminated cell, after
    /// game over) are routine input and are silently ignored.
    pub fn on_click(&mut self, x: f32, y: f32) {
        self.engine.select_at(x, y);
    }

    /// Restart callback: flags the session for reset on the next tick.
    pub fn on_restart_requested(&mut self) {
        self.restart_pending = true;
    }

    /// Route an event value to the matching intent callback.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { x, y } => self.on_click(x, y),
            InputEvent::RestartRequested => self.on_restart_requested(),
        }
    }

    /// Apply recorded intent, once per loop iteration.
    ///
    /// A pending restart wins over a pending selection: the reset clears
    /// any recorded click along with the rest of the state.
    pub fn tick(&mut self) -> TickReport {
        if self.restart_pending {
            self.restart_pending = false;
            self.engine.reset();
            return TickReport {
                removed: 0,
                was_reset: true,
                status: Some(self.engine.status_text()),
            };
        }

        if self.engine.selection().is_some() && !self.engine.is_game_over() {
            let removed = self.engine.resolve_selection();
            return TickReport {
                removed,
                was_reset: false,
                status: Some(self.engine.status_text()),
            };
        }

        TickReport::default()
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Mutable access to the wrapped engine.
    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }
}
