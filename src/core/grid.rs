//! The cell grid.
//!
//! A `Grid` is a flat, contiguous, row-major sequence of cells indexed by
//! `row * cols + col`, with bounds-checked accessors. Dimensions are
//! fixed at creation; a restart regenerates the same allocation in place.
//!
//! Cells are never removed from the grid. Elimination only flips a
//! monotonic flag: once `eliminated` is true, the only way back is a full
//! regeneration.

use serde::{Deserialize, Serialize};

use super::color::ColorRgb;
use super::config::GridConfig;
use super::geom::Vec2;
use super::rng::ColorRng;

/// One grid position: a colored quad that can be eliminated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Pixel coordinates of the cell center. Fixed at regeneration.
    pub center: Vec2,

    /// Pixel dimensions. Identical for every cell on the board.
    pub size: Vec2,

    /// Cell color. Assigned at regeneration, never mutated by gameplay.
    pub color: ColorRgb,

    /// Monotonic elimination flag.
    pub eliminated: bool,
}

/// Row-major grid of cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid laid out per `config`, with colors drawn from `rng`.
    #[must_use]
    pub fn generate(config: &GridConfig, rng: &mut ColorRng) -> Self {
        let mut grid = Self {
            rows: config.rows,
            cols: config.cols,
            cells: Vec::with_capacity(config.cell_count()),
        };
        grid.fill(config, rng);
        grid
    }

    /// Regenerate every cell in place: fresh colors, all flags cleared.
    ///
    /// Centers are recomputed from the same config, so layout is
    /// identical across restarts.
    pub fn regenerate(&mut self, config: &GridConfig, rng: &mut ColorRng) {
        debug_assert_eq!(self.rows, config.rows);
        debug_assert_eq!(self.cols, config.cols);
        self.cells.clear();
        self.fill(config, rng);
    }

    fn fill(&mut self, config: &GridConfig, rng: &mut ColorRng) {
        let size = config.cell_size();
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.cells.push(Cell {
                    center: config.cell_center(row, col),
                    size,
                    color: rng.next_color(),
                    eliminated: false,
                });
            }
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid holds no cells (never, for a valid config).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear index of `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a cell by `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(self.index_of(row, col)?)
    }

    /// Get a mutable cell by `(row, col)`.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        let index = self.index_of(row, col)?;
        self.cells.get_mut(index)
    }

    /// Get a cell by linear index.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Mark the cell at `index` eliminated.
    ///
    /// Returns true if the cell existed and was active before the call.
    pub fn eliminate(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if !cell.eliminated => {
                cell.eliminated = true;
                true
            }
            _ => false,
        }
    }

    /// Count of non-eliminated cells.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.eliminated).count()
    }

    /// True while at least one cell is still active.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.cells.iter().any(|c| !c.eliminated)
    }

    /// Iterate over all cells with their linear indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().enumerate()
    }

    /// Iterate over non-eliminated cells with their linear indices.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.iter().filter(|(_, c)| !c.eliminated)
    }
}
