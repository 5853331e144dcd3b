//! Random tile shuffling.
//!
//! Shuffling is the engine's only source of nondeterminism, and it always goes
//! through the [`ShuffleSource`] trait so callers decide where randomness comes
//! from:
//!
//! - [`GameRng`]: seeded ChaCha8, deterministic, snapshot/restore for replay
//! - `rand::rngs::ThreadRng`: ambient, non-seedable
//!
//! ```
//! use mosaic_engine::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6];
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::tile::TileColor;

/// Anything that can apply a uniform random permutation to a tile supply.
pub trait ShuffleSource {
    /// Shuffle tiles in place.
    fn shuffle_tiles(&mut self, tiles: &mut [TileColor]);
}

/// Deterministic RNG for shuffling the tile supply.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so the stream can be replayed from
    /// `state()` afterwards.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl ShuffleSource for GameRng {
    fn shuffle_tiles(&mut self, tiles: &mut [TileColor]) {
        self.shuffle(tiles);
    }
}

impl ShuffleSource for rand::rngs::ThreadRng {
    fn shuffle_tiles(&mut self, tiles: &mut [TileColor]) {
        tiles.shuffle(self);
    }
}

/// Serializable RNG state, persisted next to a match for seeded replay.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many tiles have been shuffled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::ALL_COLORS;

    fn supply() -> Vec<TileColor> {
        ALL_COLORS.iter().flat_map(|&c| std::iter::repeat(c).take(4)).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut a = supply();
        let mut b = supply();
        rng1.shuffle_tiles(&mut a);
        rng2.shuffle_tiles(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let mut a = supply();
        let mut b = supply();
        GameRng::new(1).shuffle_tiles(&mut a);
        GameRng::new(2).shuffle_tiles(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(7);
        let original = supply();
        let mut tiles = original.clone();

        rng.shuffle_tiles(&mut tiles);

        assert_ne!(tiles, original);
        tiles.sort();
        assert_eq!(tiles, original);
    }

    #[test]
    fn test_thread_rng_is_a_source() {
        let mut tiles = supply();
        rand::thread_rng().shuffle_tiles(&mut tiles);
        assert_eq!(tiles.len(), 20);
    }

    #[test]
    fn test_state_restore_continues_stream() {
        let mut rng = GameRng::new(42);
        let mut warmup = supply();
        rng.shuffle_tiles(&mut warmup);

        let saved = rng.state();
        let mut expected = supply();
        rng.shuffle_tiles(&mut expected);

        let mut restored = GameRng::from_state(&saved);
        let mut actual = supply();
        restored.shuffle_tiles(&mut actual);

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
