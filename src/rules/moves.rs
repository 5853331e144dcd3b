//! Move validation and application.
//!
//! `apply_move` never touches its input. It validates against the borrowed
//! state first, then works on an O(1) clone and returns that clone. Only the
//! persistent chunks a move actually writes are copied.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Destination, DraftSource, GameState, Move, Phase, PlayerId, ShuffleSource, TileColor,
    BOARD_SIZE, FLOOR_CAPACITY,
};

use super::round::resolve_round_in_place;
use super::winner::{game_result, GameResult};
use super::MoveError;

/// A successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The state after the move (and after round resolution, if the move ended the round).
    pub state: GameState,
    /// The move exhausted drafting and the wall-tiling phase ran.
    pub round_ended: bool,
    /// Final result, present once the game is over.
    pub result: Option<GameResult>,
}

impl MoveOutcome {
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.result.is_some()
    }
}

/// Wire-shaped result of a move: `{success, error?, newState?, gameOver?, winnerIndex?}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_state: Option<GameState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_index: Option<i32>,
}

impl From<Result<MoveOutcome, MoveError>> for MoveResponse {
    fn from(result: Result<MoveOutcome, MoveError>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                error: None,
                game_over: Some(outcome.game_over()),
                winner_index: outcome.result.as_ref().map(GameResult::winner_index),
                new_state: Some(outcome.state),
            },
            Err(err) => Self {
                success: false,
                error: Some(err.to_string()),
                new_state: None,
                game_over: None,
                winner_index: None,
            },
        }
    }
}

/// Check a move against a state without applying it.
pub fn validate_move(state: &GameState, player: PlayerId, mv: &Move) -> Result<(), MoveError> {
    if state.phase != Phase::Offer {
        return Err(MoveError::WrongPhase(state.phase));
    }
    if player != state.turn_index {
        return Err(MoveError::NotYourTurn {
            expected: state.turn_index,
            actual: player,
        });
    }
    let board = state.player(player).ok_or(MoveError::PlayerOutOfRange(player))?;

    match mv.source {
        DraftSource::Factory(index) => {
            let factory = state
                .factories
                .get(index)
                .ok_or_else(|| {
                    MoveError::FactoryOutOfRange(i64::try_from(index).unwrap_or(i64::MAX))
                })?;
            if factory.is_empty() {
                return Err(MoveError::FactoryEmpty(index));
            }
            if !factory.contains(mv.color) {
                return Err(MoveError::ColorNotInFactory {
                    factory: index,
                    color: mv.color,
                });
            }
        }
        DraftSource::Center => {
            if !state.center.contains(mv.color) {
                return Err(MoveError::ColorNotInCenter(mv.color));
            }
        }
    }

    if let Destination::PatternLine(row) = mv.destination {
        let line = board
            .pattern_lines
            .get(row)
            .ok_or(MoveError::PatternLineOutOfRange(row as i64))?;
        if let Some(existing) = line.color {
            if existing != mv.color {
                return Err(MoveError::PatternLineColorConflict { row, existing });
            }
        }
        if board.wall_has(row, mv.color) {
            return Err(MoveError::WallAlreadyHasColor {
                row,
                color: mv.color,
            });
        }
    }

    Ok(())
}

/// Apply one player's move.
///
/// On success the returned state has the drafted tiles placed, and either the
/// turn passed to the next seat or, if drafting is exhausted, the round
/// resolved (and possibly the game finished). On failure only the error is
/// returned.
pub fn apply_move(
    state: &GameState,
    player: PlayerId,
    mv: &Move,
    rng: &mut impl ShuffleSource,
) -> Result<MoveOutcome, MoveError> {
    if let Err(err) = validate_move(state, player, mv) {
        debug!(%player, error = %err, "move rejected");
        return Err(err);
    }

    let mut next = state.clone();
    let drafted = draft(&mut next, player, mv.source, mv.color);
    let placement = place(&mut next, player, mv.color, mv.destination, drafted);

    debug!(
        %player,
        color = %mv.color,
        drafted,
        to_line = placement.to_line,
        to_floor = placement.to_floor,
        discarded = placement.discarded,
        "move applied"
    );

    let round_ended = next.drafting_exhausted();
    if round_ended {
        resolve_round_in_place(&mut next, rng);
    } else {
        next.turn_index = player.next(next.player_count());
    }

    let result = (next.phase == Phase::Finished).then(|| game_result(&next));
    Ok(MoveOutcome {
        state: next,
        round_ended,
        result,
    })
}

/// Every move the current player may make, in source order.
///
/// Empty once the game is over, or when `turn_index` names no seat.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.phase != Phase::Offer || state.player(state.turn_index).is_none() {
        return Vec::new();
    }

    let mut sources: Vec<(DraftSource, TileColor)> = Vec::new();
    for (index, factory) in state.factories.iter().enumerate() {
        for &color in distinct(factory.tiles.iter().copied()).iter() {
            sources.push((DraftSource::Factory(index), color));
        }
    }
    for &color in distinct(state.center.tiles.iter().copied()).iter() {
        sources.push((DraftSource::Center, color));
    }

    let player = state.turn_index;
    let mut moves = Vec::new();
    for (source, color) in sources {
        for row in 0..BOARD_SIZE {
            let mv = Move {
                source,
                color,
                destination: Destination::PatternLine(row),
            };
            if validate_move(state, player, &mv).is_ok() {
                moves.push(mv);
            }
        }
        moves.push(Move {
            source,
            color,
            destination: Destination::Floor,
        });
    }
    moves
}

fn distinct(tiles: impl Iterator<Item = TileColor>) -> Vec<TileColor> {
    let mut colors: Vec<TileColor> = tiles.collect();
    colors.sort_unstable();
    colors.dedup();
    colors
}

/// Take every tile of `color` from the source. Returns how many were taken.
fn draft(state: &mut GameState, player: PlayerId, source: DraftSource, color: TileColor) -> usize {
    match source {
        DraftSource::Factory(index) => {
            let tiles = std::mem::take(&mut state.factories[index].tiles);
            let mut taken = 0;
            for tile in tiles {
                if tile == color {
                    taken += 1;
                } else {
                    state.center.tiles.push_back(tile);
                }
            }
            taken
        }
        DraftSource::Center => {
            let before = state.center.tiles.len();
            state.center.tiles = state
                .center
                .tiles
                .iter()
                .copied()
                .filter(|&tile| tile != color)
                .collect();
            if state.center.first_player_marker {
                state.center.first_player_marker = false;
                let board = &mut state.players[player];
                board.has_first_player_marker = true;
                // The marker needs a floor position of its own.
                if board.floor_slots_used() > FLOOR_CAPACITY {
                    if let Some(bumped) = board.floor.pop() {
                        state.discard_box.push_back(bumped);
                    }
                }
            }
            before - state.center.tiles.len()
        }
    }
}

struct Placement {
    to_line: usize,
    to_floor: usize,
    discarded: usize,
}

/// Put drafted tiles on the destination, overflowing to the floor and then to the discard box.
fn place(
    state: &mut GameState,
    player: PlayerId,
    color: TileColor,
    destination: Destination,
    count: usize,
) -> Placement {
    let board = &mut state.players[player];

    let to_line = match destination {
        Destination::PatternLine(row) => {
            let line = &mut board.pattern_lines[row];
            let placed = line.free(row).min(count);
            if placed > 0 {
                line.color = Some(color);
                line.count += placed;
            }
            placed
        }
        Destination::Floor => 0,
    };

    let overflow = count - to_line;
    let to_floor = overflow.min(board.floor_space());
    board.floor.extend(std::iter::repeat(color).take(to_floor));

    let discarded = overflow - to_floor;
    state
        .discard_box
        .extend(std::iter::repeat(color).take(discarded));

    Placement {
        to_line,
        to_floor,
        discarded,
    }
}
