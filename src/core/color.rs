//! RGB colors and color-space similarity.
//!
//! Cell colors live in the unit RGB cube: each channel is a real in
//! [0,1]. Similarity between two colors is their Euclidean distance in
//! that cube divided by the cube diagonal (√3), which maps any pair of
//! colors onto [0,1] and makes the result directly comparable against a
//! normalized tolerance.

use serde::{Deserialize, Serialize};

/// An RGB color with each channel normalized to [0,1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRgb {
    /// The diagonal of the unit RGB cube, √3.
    ///
    /// This is the largest possible Euclidean distance between two
    /// colors, used to normalize distances onto [0,1].
    pub const MAX_DISTANCE: f32 = 1.732_050_8;

    /// Create a color from normalized channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from discrete 8-bit channel levels.
    ///
    /// Each level in 0..=255 is divided by 255, so level 255 maps to
    /// exactly 1.0.
    #[must_use]
    pub fn from_levels(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Euclidean distance to another color in RGB space.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Distance to another color, normalized by the cube diagonal.
    ///
    /// Always in [0,1]: 0 for identical colors, 1 for opposite corners
    /// of the cube (e.g. black and white).
    #[must_use]
    pub fn normalized_distance(self, other: Self) -> f32 {
        self.distance(other) / Self::MAX_DISTANCE
    }

    /// Check whether another color lies within a normalized tolerance.
    ///
    /// The comparison is `normalized_distance <= tolerance` (inclusive),
    /// so a tolerance of 0 still matches identical colors.
    #[must_use]
    pub fn within_tolerance(self, other: Self, tolerance: f32) -> bool {
        self.normalized_distance(other) <= tolerance
    }
}

impl std::fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
    }
}
