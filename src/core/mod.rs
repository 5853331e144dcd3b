//! Core engine types: tiles, players, state, moves, RNG, configuration.
//!
//! Plain data only. The rules that act on it live in `crate::rules`.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use tile::{wall_color, wall_column, TileColor, ALL_COLORS, BOARD_SIZE, TILE_COLORS, WALL_PATTERN};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::{GameRng, GameRngState, ShuffleSource};
pub use config::{RulesConfig, FLOOR_CAPACITY};
pub use action::{Destination, DraftSource, Move, MovePayload, SourceKind};
pub use state::{Center, Factory, GameState, PatternLine, Phase, PlayerState, Wall};
