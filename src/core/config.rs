//! Grid configuration.
//!
//! `GridConfig` fixes the board geometry for the lifetime of a session:
//! row/column counts, cell pixel dimensions, and the color tolerance used
//! when resolving a selection. It also owns the two pieces of layout math
//! that follow from that geometry:
//!
//! - where the center of cell `(row, col)` sits in pixel space, and
//! - which cell a pixel coordinate falls into.
//!
//! Both are pure functions of the configuration, so they live here rather
//! than on the grid itself.

use serde::{Deserialize, Serialize};

use super::geom::Vec2;

/// Default color tolerance: colors within 20% of the maximum RGB
/// distance of the clicked color are eliminated together with it.
pub const DEFAULT_COLOR_TOLERANCE: f32 = 0.2;

/// Fixed board geometry and matching tolerance.
///
/// Validated at construction; invalid dimensions are a programming
/// error, not a runtime condition, so construction panics on them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (at least 1).
    pub rows: usize,

    /// Number of columns (at least 1).
    pub cols: usize,

    /// Cell width in pixels (positive).
    pub cell_width: f32,

    /// Cell height in pixels (positive).
    pub cell_height: f32,

    /// Normalized color tolerance in [0,1] for selection resolution.
    pub color_tolerance: f32,
}

impl Default for GridConfig {
    /// The classic board: 6 rows by 8 columns of 100x100 cells (an
    /// 800x600 window), tolerance 0.2.
    fn default() -> Self {
        Self::new(6, 8)
    }
}

impl GridConfig {
    /// Create a configuration with the given board dimensions and
    /// 100x100 cells at the default tolerance.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Grid must have at least 1 row");
        assert!(cols > 0, "Grid must have at least 1 column");

        Self {
            rows,
            cols,
            cell_width: 100.0,
            cell_height: 100.0,
            color_tolerance: DEFAULT_COLOR_TOLERANCE,
        }
    }

    /// Set the cell pixel dimensions.
    #[must_use]
    pub fn with_cell_size(mut self, width: f32, height: f32) -> Self {
        assert!(width > 0.0 && height > 0.0, "Cell dimensions must be positive");
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Set the color tolerance.
    #[must_use]
    pub fn with_color_tolerance(mut self, tolerance: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&tolerance),
            "Color tolerance must be in [0,1]"
        );
        self.color_tolerance = tolerance;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Board width in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> f32 {
        self.cols as f32 * self.cell_width
    }

    /// Board height in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    /// Cell pixel dimensions as a vector.
    #[must_use]
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(self.cell_width, self.cell_height)
    }

    /// Pixel coordinates of the center of cell `(row, col)`.
    ///
    /// Centers sit on a regular lattice offset by half a cell from the
    /// top-left origin: `(col*w + w/2, row*h + h/2)`.
    #[must_use]
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            col as f32 * self.cell_width + self.cell_width / 2.0,
            row as f32 * self.cell_height + self.cell_height / 2.0,
        )
    }

    /// Map a pixel coordinate to the `(row, col)` it falls into.
    ///
    /// Subtracts half a cell dimension before dividing, compensating for
    /// centers being stored at cell midpoints rather than corners. The
    /// quotient truncates toward zero, so clicks in the top/left
    /// half-cell margin still land in row/column 0. Returns `None` when
    /// the result is outside the board.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = ((x - self.cell_width / 2.0) / self.cell_width) as i64;
        let row = ((y - self.cell_height / 2.0) / self.cell_height) as i64;

        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return None;
        }

        Some((row as usize, col as usize))
    }

    /// Linear row-major index of cell `(row, col)`.
    ///
    /// Callers must pass in-bounds coordinates.
    #[must_use]
    pub fn linear_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();

        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 8);
        assert_eq!(config.cell_count(), 48);
        assert_eq!(config.pixel_width(), 800.0);
        assert_eq!(config.pixel_height(), 600.0);
        assert_eq!(config.color_tolerance, DEFAULT_COLOR_TOLERANCE);
    }

    #[test]
    fn test_builder() {
        let config = GridConfig::new(2, 3)
            .with_cell_size(50.0, 40.0)
            .with_color_tolerance(0.5);

        assert_eq!(config.rows, 2);
        assert_eq!(config.cols, 3);
        assert_eq!(config.cell_size(), Vec2::new(50.0, 40.0));
        assert_eq!(config.color_tolerance, 0.5);
    }

    #[test]
    #[should_panic(expected = "at least 1 row")]
    fn test_zero_rows_panics() {
        GridConfig::new(0, 8);
    }

    #[test]
    #[should_panic(expected = "Color tolerance")]
    fn test_bad_tolerance_panics() {
        let _ = GridConfig::new(2, 2).with_color_tolerance(1.5);
    }

    #[test]
    fn test_cell_center_lattice() {
        let config = GridConfig::new(6, 8);

        assert_eq!(config.cell_center(0, 0), Vec2::new(50.0, 50.0));
        assert_eq!(config.cell_center(0, 1), Vec2::new(150.0, 50.0));
        assert_eq!(config.cell_center(2, 3), Vec2::new(350.0, 250.0));
        assert_eq!(config.cell_center(5, 7), Vec2::new(750.0, 550.0));
    }

    #[test]
    fn test_cell_at_centers() {
        let config = GridConfig::new(6, 8);

        assert_eq!(config.cell_at(50.0, 50.0), Some((0, 0)));
        assert_eq!(config.cell_at(150.0, 50.0), Some((0, 1)));
        assert_eq!(config.cell_at(750.0, 550.0), Some((5, 7)));
    }

    #[test]
    fn test_cell_at_half_cell_margin() {
        let config = GridConfig::new(6, 8);

        // Truncation toward zero: the top/left half-cell margin maps to
        // row/column 0 rather than falling off the board.
        assert_eq!(config.cell_at(10.0, 10.0), Some((0, 0)));
        assert_eq!(config.cell_at(0.0, 0.0), Some((0, 0)));
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let config = GridConfig::new(6, 8);

        assert_eq!(config.cell_at(850.0, 50.0), None);
        assert_eq!(config.cell_at(50.0, 650.0), None);
        assert_eq!(config.cell_at(-60.0, 50.0), None);
        assert_eq!(config.cell_at(50.0, -60.0), None);
    }

    #[test]
    fn test_linear_index() {
        let config = GridConfig::new(6, 8);

        assert_eq!(config.linear_index(0, 0), 0);
        assert_eq!(config.linear_index(0, 7), 7);
        assert_eq!(config.linear_index(1, 0), 8);
        assert_eq!(config.linear_index(5, 7), 47);
    }
}
