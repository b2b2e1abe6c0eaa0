//! Deterministic random color generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical board
//! - **Serializable**: O(1) capture and restore of the stream position
//!
//! Colors are drawn the discrete way: each channel is a uniform level in
//! 0..=255 divided by 255, so exactly 256 values per channel are
//! possible and level 255 maps to exactly 1.0.
//!
//! ```
//! use color_grid::core::ColorRng;
//!
//! let mut a = ColorRng::new(42);
//! let mut b = ColorRng::new(42);
//!
//! // Same seed, same colors.
//! assert_eq!(a.next_color(), b.next_color());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::color::ColorRgb;

/// Deterministic RNG for cell colors.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness,
/// and exposes its stream position for snapshot save/restore.
#[derive(Clone, Debug)]
pub struct ColorRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ColorRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from system entropy.
    ///
    /// For sessions that don't need reproducible boards.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one 8-bit channel level.
    fn next_level(&mut self) -> u8 {
        self.inner.gen_range(0..=255u8)
    }

    /// Draw a random cell color.
    ///
    /// Channels are drawn in r, g, b order, one level each.
    pub fn next_color(&mut self) -> ColorRgb {
        let r = self.next_level();
        let g = self.next_level();
        let b = self.next_level();
        ColorRgb::from_levels(r, g, b)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ColorRngState {
        ColorRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ColorRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many colors have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = ColorRng::new(42);
        let mut rng2 = ColorRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_color(), rng2.next_color());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = ColorRng::new(1);
        let mut rng2 = ColorRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_color()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_color()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_colors_in_unit_cube() {
        let mut rng = ColorRng::new(7);

        for _ in 0..1000 {
            let c = rng.next_color();
            assert!((0.0..=1.0).contains(&c.r));
            assert!((0.0..=1.0).contains(&c.g));
            assert!((0.0..=1.0).contains(&c.b));
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = ColorRng::new(42);

        // Advance the stream.
        for _ in 0..100 {
            rng.next_color();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_color()).collect();

        let mut restored = ColorRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_color()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = ColorRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ColorRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
