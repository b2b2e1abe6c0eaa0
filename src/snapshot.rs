//! Session save/restore.
//!
//! A `GameSnapshot` captures everything a `GameEngine` owns: the config,
//! the full grid (positions, colors, elimination flags), the counters,
//! and the RNG stream position, so a restored session continues exactly
//! where it left off, including the colors future restarts will draw.

use serde::{Deserialize, Serialize};

use crate::core::{ColorRngState, Grid, GridConfig};

/// Serializable capture of a full game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board geometry and tolerance.
    pub config: GridConfig,

    /// The grid, including elimination flags.
    pub grid: Grid,

    /// RNG stream position, so future color draws continue the sequence.
    pub rng: ColorRngState,

    /// Resolutions so far.
    pub attempts: u32,

    /// Current score.
    pub score: u32,

    /// Whether the session has ended.
    pub game_over: bool,

    /// Pending selection, if a click was recorded but not yet resolved.
    pub selected: Option<usize>,
}

impl GameSnapshot {
    /// Encode to compact bytes.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from bytes produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
