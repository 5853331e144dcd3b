//! # mosaic-engine
//!
//! A pure, deterministic rules engine for a two-to-four player tile-drafting
//! game: factory displays, a shared center, private pattern lines and a
//! fixed-pattern mosaic wall.
//!
//! ## Design Principles
//!
//! 1. **Stateless calls**: every operation takes a `GameState` by reference
//!    and returns a new value. A rejected move returns only its error.
//!
//! 2. **Injected randomness**: shuffling goes through `ShuffleSource`, so a
//!    seeded `GameRng` gives reproducible matches.
//!
//! 3. **Document-shaped state**: `GameState` serializes to a plain JSON
//!    document the caller can persist as-is.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so applying a
//!   move copies only the chunks it writes.
//!
//! - **Errors as values**: rule violations are `MoveError`s, never panics.
//!
//! ## Modules
//!
//! - `core`: Tiles and wall pattern, players, state, moves, RNG, configuration
//! - `rules`: Setup, move application, round resolution, scoring, winner
//!
//! ## Example
//!
//! ```
//! use mosaic_engine::{GameRng, MosaicEngine, RulesEngine};
//!
//! let engine = MosaicEngine::default();
//! let mut rng = GameRng::new(7);
//! let mut state = engine.create_initial_state(&["ana", "bo"], &mut rng).unwrap();
//!
//! for _ in 0..10 {
//!     let mv = engine.legal_moves(&state)[0];
//!     state = engine.apply_move(&state, state.turn_index, &mv, &mut rng).unwrap().state;
//! }
//! assert_eq!(state.tile_count(), 100);
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    TileColor, ALL_COLORS, BOARD_SIZE, WALL_PATTERN,
    PlayerId, PlayerMap,
    GameRng, GameRngState, ShuffleSource,
    RulesConfig,
    Destination, DraftSource, Move, MovePayload,
    GameState, Phase, PlayerState,
};

pub use crate::rules::{
    MosaicEngine, RulesEngine, GameResult,
    MoveError, SetupError, InvariantViolation,
    MoveOutcome, MoveResponse,
};
