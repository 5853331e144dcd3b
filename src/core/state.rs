//! Game state.
//!
//! ## GameState
//!
//! The single aggregate passed in and out of every engine call:
//! - Shared drafting area: factory displays and the center
//! - Tile supply: the bag and the discard box
//! - Player boards, in turn order
//! - Progression: phase, whose turn, who started the round, round number
//!
//! Uses `im` persistent vectors for the bag, the discard box, the center and
//! the player boards, so cloning a state is O(1) and a move only copies what
//! it actually changes.
//!
//! ## Conservation
//!
//! Tiles are never created or destroyed after setup. `tile_count()` counts
//! every tile wherever it sits and `check_invariants()` compares it to the
//! configured supply.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{RulesConfig, FLOOR_CAPACITY};
use super::player::{PlayerId, PlayerMap};
use super::tile::{wall_column, wall_color, TileColor, ALL_COLORS, BOARD_SIZE};
use crate::rules::InvariantViolation;

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Players are drafting tiles.
    Offer,
    /// Pattern lines are being moved onto walls. Never observed between calls.
    WallTiling,
    /// Terminal.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Offer => "OFFER",
            Phase::WallTiling => "WALL_TILING",
            Phase::Finished => "FINISHED",
        };
        f.write_str(name)
    }
}

/// One factory display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Factory {
    pub tiles: SmallVec<[TileColor; 4]>,
}

impl Factory {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn contains(&self, color: TileColor) -> bool {
        self.tiles.contains(&color)
    }
}

/// The shared center pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Center {
    pub tiles: Vector<TileColor>,
    #[serde(rename = "firstPlayerMarkerInCenter")]
    pub first_player_marker: bool,
}

impl Center {
    #[must_use]
    pub fn contains(&self, color: TileColor) -> bool {
        self.tiles.contains(&color)
    }

    /// No tiles and no marker.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && !self.first_player_marker
    }
}

/// One pattern line. Row `r` holds at most `r + 1` tiles of a single color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternLine {
    /// `None` while empty.
    pub color: Option<TileColor>,
    pub count: usize,
}

impl PatternLine {
    /// Capacity of the pattern line at `row`.
    #[must_use]
    pub const fn capacity(row: usize) -> usize {
        row + 1
    }

    #[must_use]
    pub fn is_full(&self, row: usize) -> bool {
        self.count == Self::capacity(row)
    }

    /// Free cells left on the line at `row`.
    #[must_use]
    pub fn free(&self, row: usize) -> usize {
        Self::capacity(row).saturating_sub(self.count)
    }
}

/// A player's 5x5 wall. Cell `(r, c)` may only ever hold `wall_color(r, c)`.
pub type Wall = [[Option<TileColor>; BOARD_SIZE]; BOARD_SIZE];

/// Everything one player owns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Caller-supplied player identity.
    pub id: String,
    pub pattern_lines: [PatternLine; BOARD_SIZE],
    pub wall: Wall,
    /// Penalty tiles for this round, left to right.
    pub floor: SmallVec<[TileColor; FLOOR_CAPACITY]>,
    pub has_first_player_marker: bool,
    pub score: u32,
}

impl PlayerState {
    /// Create an empty board for a player.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern_lines: [PatternLine::default(); BOARD_SIZE],
            wall: [[None; BOARD_SIZE]; BOARD_SIZE],
            floor: SmallVec::new(),
            has_first_player_marker: false,
            score: 0,
        }
    }

    /// Apply a signed score change, clamping at zero.
    pub fn add_score(&mut self, delta: i64) {
        self.score = (i64::from(self.score) + delta).clamp(0, i64::from(u32::MAX)) as u32;
    }

    /// Floor positions in use. The first-player marker takes one position.
    #[must_use]
    pub fn floor_slots_used(&self) -> usize {
        self.floor.len() + usize::from(self.has_first_player_marker)
    }

    /// Floor positions still free for tiles.
    #[must_use]
    pub fn floor_space(&self) -> usize {
        FLOOR_CAPACITY.saturating_sub(self.floor_slots_used())
    }

    /// Whether `color` already sits on wall row `row`.
    #[must_use]
    pub fn wall_has(&self, row: usize, color: TileColor) -> bool {
        self.wall[row][wall_column(row, color)].is_some()
    }

    /// Number of completely filled wall rows.
    #[must_use]
    pub fn completed_rows(&self) -> usize {
        self.wall
            .iter()
            .filter(|row| row.iter().all(Option::is_some))
            .count()
    }

    /// Number of completely filled wall columns.
    #[must_use]
    pub fn completed_columns(&self) -> usize {
        (0..BOARD_SIZE)
            .filter(|&col| (0..BOARD_SIZE).all(|row| self.wall[row][col].is_some()))
            .count()
    }

    /// Number of colors placed on all five of their designated cells.
    #[must_use]
    pub fn completed_colors(&self) -> usize {
        ALL_COLORS
            .iter()
            .filter(|&&color| (0..BOARD_SIZE).all(|row| self.wall_has(row, color)))
            .count()
    }

    /// Tiles held on this board: pattern lines, wall and floor.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let lines: usize = self.pattern_lines.iter().map(|line| line.count).sum();
        let wall = self.wall.iter().flatten().filter(|cell| cell.is_some()).count();
        lines + wall + self.floor.len()
    }
}

/// Complete match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Rules the match was created with.
    pub config: RulesConfig,

    /// Factory displays (`2 * players + 1`).
    pub factories: Vec<Factory>,

    pub center: Center,

    /// Player boards in turn order.
    pub players: PlayerMap<PlayerState>,

    /// Undrawn supply; tiles are drawn from the back.
    pub bag: Vector<TileColor>,

    /// Tiles removed from play, recycled into the bag when it runs dry.
    pub discard_box: Vector<TileColor>,

    pub phase: Phase,

    /// Whose turn it is.
    pub turn_index: PlayerId,

    /// Who opened the current round.
    pub round_start_player_index: PlayerId,

    /// Round number, starting at 1.
    pub round: u32,
}

impl GameState {
    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player's board.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(player)
    }

    /// Drafting is exhausted: every display is empty and no tiles are left in the center.
    ///
    /// The marker is ignored; if nobody drafted from the center it simply
    /// stays there for the next round.
    #[must_use]
    pub fn drafting_exhausted(&self) -> bool {
        self.factories.iter().all(Factory::is_empty) && self.center.tiles.is_empty()
    }

    /// Count every tile in the match.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let factories: usize = self.factories.iter().map(Factory::len).sum();
        let players: usize = self.players.iter().map(|(_, p)| p.tile_count()).sum();
        self.bag.len() + self.discard_box.len() + self.center.tiles.len() + factories + players
    }

    /// Check every structural invariant of a state at rest.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let expected = self.config.total_tiles();
        let actual = self.tile_count();
        if actual != expected {
            return Err(InvariantViolation::TileCount { expected, actual });
        }

        if self.phase == Phase::WallTiling {
            return Err(InvariantViolation::TransientPhase);
        }

        if self.phase == Phase::Offer {
            let holders = self
                .players
                .iter()
                .filter(|(_, p)| p.has_first_player_marker)
                .count();
            let in_center = self.center.first_player_marker;
            if !((in_center && holders == 0) || (!in_center && holders == 1)) {
                return Err(InvariantViolation::Marker { in_center, holders });
            }
        }

        for (player, board) in self.players.iter() {
            if board.floor_slots_used() > FLOOR_CAPACITY {
                return Err(InvariantViolation::FloorOverCapacity { player });
            }

            for (row, line) in board.pattern_lines.iter().enumerate() {
                let consistent = match line.color {
                    None => line.count == 0,
                    Some(color) => line.count > 0 && !board.wall_has(row, color),
                };
                if !consistent || line.count > PatternLine::capacity(row) {
                    return Err(InvariantViolation::PatternLine { player, row });
                }
            }

            for (row, cells) in board.wall.iter().enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    if cell.is_some_and(|color| color != wall_color(row, col)) {
                        return Err(InvariantViolation::WallPattern { player, row, col });
                    }
                }
            }
        }

        Ok(())
    }
}
