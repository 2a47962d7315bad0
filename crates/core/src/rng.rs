//! RNG module - randomness for tile spawning
//!
//! The engine never calls a global random function. Every spawn asks a
//! [`TileRng`] for two decisions: which empty cell to fill, and whether the new
//! tile is a 4 instead of a 2.
//!
//! - [`GameRng`]: seeded ChaCha8 stream used for real games (replayable by seed)
//! - [`ScriptedRng`]: replays a fixed list of decisions, for tests and replays

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::SPAWN_FOUR_PERCENT;

/// Source of the two random decisions a spawn needs.
pub trait TileRng {
    /// Pick an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Should the spawned tile be a 4 (instead of a 2)?
    fn spawn_four(&mut self) -> bool;
}

impl<T: TileRng + ?Sized> TileRng for &mut T {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn spawn_four(&mut self) -> bool {
        (**self).spawn_four()
    }
}

/// Deterministic game RNG
///
/// Uses ChaCha8 so the same seed always produces the same game.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy. The drawn seed is kept so the game can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileRng for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn spawn_four(&mut self) -> bool {
        self.inner.gen_ratio(SPAWN_FOUR_PERCENT, 100)
    }
}

/// Replays a fixed sequence of spawn decisions
///
/// Indices are reduced modulo the number of empty cells. Once a queue runs dry
/// the source keeps answering index 0 and "not a four".
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    indices: VecDeque<usize>,
    fours: VecDeque<bool>,
}

impl ScriptedRng {
    pub fn new(
        indices: impl IntoIterator<Item = usize>,
        fours: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            fours: fours.into_iter().collect(),
        }
    }

    /// Always pick the first empty cell and spawn a 2
    pub fn first_cell() -> Self {
        Self::default()
    }

    /// Decisions not yet consumed, as (indices, fours)
    pub fn remaining(&self) -> (usize, usize) {
        (self.indices.len(), self.fours.len())
    }
}

impl TileRng for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len.max(1)
    }

    fn spawn_four(&mut self) -> bool {
        self.fours.pop_front().unwrap_or(false)
    }
}
