//! The grid game engine.
//!
//! `GameEngine` owns the board and all game progress: the cell grid, the
//! pending selection, the attempt and score counters, and the game-over
//! flag. It exposes the per-click protocol as two explicit phases:
//!
//! 1. **SELECT** — `select_at` validates a pixel coordinate and records
//!    the target cell. Callable straight from an input callback; it never
//!    mutates the board.
//! 2. **RESOLVE** — `resolve_selection` consumes the pending selection,
//!    eliminates the target plus every active cell whose color lies
//!    within the configured tolerance of the target color, and updates
//!    score, attempts, and game-over.
//!
//! Keeping the phases separate lets the surrounding event loop order
//! input, game-state update, and rendering deterministically once per
//! frame, and guarantees exactly one resolution per valid click.
//!
//! ```
//! use color_grid::{GameEngine, GridConfig};
//!
//! let mut engine = GameEngine::new(GridConfig::new(2, 2), 42);
//!
//! // Click the top-left cell, then resolve it.
//! assert!(engine.select_at(50.0, 50.0));
//! let removed = engine.resolve_selection();
//! assert!(removed >= 1);
//! assert_eq!(engine.attempts(), 1);
//! ```

use crate::core::{ColorRng, Grid, GridConfig};
use crate::snapshot::GameSnapshot;

/// Game-state engine for the color matching grid.
///
/// Single-threaded by design: every operation runs to completion on the
/// caller's thread, so no interleaving of a resolution with a new
/// selection is possible.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GridConfig,
    grid: Grid,
    rng: ColorRng,
    attempts: u32,
    score: u32,
    game_over: bool,
    selected: Option<usize>,
}

impl GameEngine {
    /// Create an engine with a freshly generated board.
    ///
    /// The seed fixes the color sequence; the same seed and config always
    /// produce the same board.
    #[must_use]
    pub fn new(config: GridConfig, seed: u64) -> Self {
        Self::with_rng(config, ColorRng::new(seed))
    }

    /// Create an engine with a non-reproducible board.
    #[must_use]
    pub fn from_entropy(config: GridConfig) -> Self {
        Self::with_rng(config, ColorRng::from_entropy())
    }

    fn with_rng(config: GridConfig, mut rng: ColorRng) -> Self {
        let grid = Grid::generate(&config, &mut rng);
        log::debug!(
            "new game: {}x{} grid, tolerance {}",
            config.rows,
            config.cols,
            config.color_tolerance
        );
        Self {
            config,
            grid,
            rng,
            attempts: 0,
            score: 0,
            game_over: false,
            selected: None,
        }
    }

    /// Restart the session: fresh colors, all counters and flags cleared.
    ///
    /// Layout is recomputed from the same config, so cell centers are
    /// identical across restarts; only the colors change.
    pub fn reset(&mut self) {
        self.grid.regenerate(&self.config, &mut self.rng);
        self.attempts = 0;
        self.score = 0;
        self.game_over = false;
        self.selected = None;
        log::info!("game reset: {} cells active", self.grid.len());
    }

    /// Record the cell under a pixel coordinate as the pending selection.
    ///
    /// A no-op (returning false) when the coordinate falls outside the
    /// board, the game is over, or the target cell is already
    /// eliminated. Never triggers a resolution.
    pub fn select_at(&mut self, x: f32, y: f32) -> bool {
        if self.game_over {
            return false;
        }

        let Some((row, col)) = self.config.cell_at(x, y) else {
            return false;
        };

        // cell_at only returns in-bounds coordinates.
        let index = self.config.linear_index(row, col);
        match self.grid.cell_at(index) {
            Some(cell) if !cell.eliminated => {
                self.selected = Some(index);
                true
            }
            _ => false,
        }
    }

    /// The pending selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selected
    }

    /// Resolve the pending selection.
    ///
    /// Returns 0 with no effect when nothing is pending. Otherwise
    /// eliminates the selected cell, then in a single pass eliminates
    /// every remaining active cell whose normalized RGB distance to the
    /// *selected* color is within tolerance (inclusive). The match is by
    /// proximity to the original color only; it does not chain through
    /// cells that are similar to each other.
    ///
    /// After the pass: the selection is cleared, `attempts` increments,
    /// `score` becomes `max(0, score + removed - attempts)` (the penalty
    /// is the running attempt count, so later attempts cost more), and
    /// the game ends once no active cell remains.
    ///
    /// Returns the number of cells eliminated, at least 1.
    pub fn resolve_selection(&mut self) -> usize {
        let Some(index) = self.selected.take() else {
            return 0;
        };

        // Selection time guarantees the target is active.
        let target = match self.grid.cell_at(index) {
            Some(cell) => {
                debug_assert!(!cell.eliminated);
                cell.color
            }
            None => return 0,
        };

        self.grid.eliminate(index);
        let mut removed = 1usize;

        let tolerance = self.config.color_tolerance;
        for i in 0..self.grid.len() {
            let matches = self
                .grid
                .cell_at(i)
                .is_some_and(|c| !c.eliminated && target.within_tolerance(c.color, tolerance));
            if matches && self.grid.eliminate(i) {
                removed += 1;
            }
        }

        self.attempts += 1;
        let next = i64::from(self.score) + removed as i64 - i64::from(self.attempts);
        self.score = next.max(0) as u32;

        log::info!(
            "attempt {}: removed {}, score {}",
            self.attempts,
            removed,
            self.score
        );

        if !self.grid.any_active() {
            self.game_over = true;
            log::info!("game over, final score {}", self.score);
        }

        removed
    }

    /// True once every cell has been eliminated, until the next reset.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Current score. Never negative.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of resolutions so far this session.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The board configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The cell grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid, for embedders that stage boards
    /// (tests, replays). Gameplay itself never mutates cell colors.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Display line for a window title or HUD.
    ///
    /// Reports score and attempts, with a restart prompt appended once
    /// the game is over.
    #[must_use]
    pub fn status_text(&self) -> String {
        if self.game_over {
            format!(
                "Score: {} | Attempts: {} | Game over! Press R to restart.",
                self.score, self.attempts
            )
        } else {
            format!("Score: {} | Attempts: {}", self.score, self.attempts)
        }
    }

    /// Capture the full engine state for save/restore.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            grid: self.grid.clone(),
            rng: self.rng.state(),
            attempts: self.attempts,
            score: self.score,
            game_over: self.game_over,
            selected: self.selected,
        }
    }

    /// Rebuild an engine from a snapshot, including the RNG position.
    #[must_use]
    pub fn from_snapshot(snapshot: GameSnapshot) -> Self {
        Self {
            config: snapshot.config,
            grid: snapshot.grid,
            rng: ColorRng::from_state(&snapshot.rng),
            attempts: snapshot.attempts,
            score: snapshot.score,
            game_over: snapshot.game_over,
            selected: snapshot.selected,
        }
    }
}
