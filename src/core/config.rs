//! Rules configuration.
//!
//! The defaults are the standard rules. A `RulesConfig` is copied into every
//! `GameState` at creation so later refills, scoring and audits use the same
//! numbers the match was started with.

use serde::{Deserialize, Serialize};

use super::tile::TILE_COLORS;
use crate::rules::SetupError;

/// Number of floor positions that carry a penalty.
pub const FLOOR_CAPACITY: usize = 7;

/// Configurable rule constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// Tiles of each color in the full supply (default: 20).
    pub tiles_per_color: u32,

    /// Tiles dealt to each factory display (default: 4).
    pub factory_capacity: usize,

    /// Penalty per occupied floor position, left to right.
    pub floor_penalties: [i32; FLOOR_CAPACITY],

    /// End-game bonus per completed wall row (default: 2).
    pub row_bonus: u32,

    /// End-game bonus per completed wall column (default: 7).
    pub column_bonus: u32,

    /// End-game bonus per color placed on all five of its cells (default: 10).
    pub color_bonus: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            tiles_per_color: 20,
            factory_capacity: 4,
            floor_penalties: [-1, -1, -2, -2, -2, -3, -3],
            row_bonus: 2,
            column_bonus: 7,
            color_bonus: 10,
        }
    }
}

impl RulesConfig {
    /// Total number of tiles in play for the whole match.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.tiles_per_color as usize * TILE_COLORS
    }

    /// Number of factory displays for a player count (`2 * players + 1`).
    #[must_use]
    pub fn factory_count(player_count: usize) -> usize {
        2 * player_count + 1
    }

    /// Set the per-color supply.
    #[must_use]
    pub fn with_tiles_per_color(mut self, count: u32) -> Self {
        self.tiles_per_color = count;
        self
    }

    /// Set the factory display size.
    #[must_use]
    pub fn with_factory_capacity(mut self, capacity: usize) -> Self {
        self.factory_capacity = capacity;
        self
    }

    /// Set the floor penalty table.
    #[must_use]
    pub fn with_floor_penalties(mut self, penalties: [i32; FLOOR_CAPACITY]) -> Self {
        self.floor_penalties = penalties;
        self
    }

    /// Set the three end-game bonus values (row, column, color).
    #[must_use]
    pub fn with_bonuses(mut self, row: u32, column: u32, color: u32) -> Self {
        self.row_bonus = row;
        self.column_bonus = column;
        self.color_bonus = color;
        self
    }

    /// Check that a match can be played with these rules.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.tiles_per_color == 0 {
            return Err(SetupError::InvalidConfig("tile supply must not be empty".into()));
        }
        if self.factory_capacity == 0 {
            return Err(SetupError::InvalidConfig(
                "factory capacity must be at least 1".into(),
            ));
        }
        if self.floor_penalties.iter().any(|&p| p > 0) {
            return Err(SetupError::InvalidConfig(
                "floor penalties must not be positive".into(),
            ));
        }
        Ok(())
    }
}
