//! Round resolution (the wall-tiling phase).
//!
//! Runs once drafting is exhausted. For every player, in seat order:
//! 1. Each full pattern line puts one tile on the wall and scores it; the rest
//!    of the line goes to the discard box.
//! 2. Floor penalties are applied (the marker counts as a floor position),
//!    the floor is emptied into the discard box and the marker is released.
//!
//! Then either the game ends (some wall has a complete row) or the next
//! round is dealt. A round that cannot deal a single tile also ends the game.

use tracing::{debug, info};

use crate::core::{
    wall_column, GameState, PatternLine, Phase, ShuffleSource, TileColor, BOARD_SIZE,
};

use super::scoring::{end_game_bonus, floor_penalty, score_adjacency};
use super::setup::fill_factories;

/// Resolve the round on a copy of `state` and return the copy.
///
/// `state` is expected to have exhausted drafting (see
/// `GameState::drafting_exhausted`).
#[must_use]
pub fn resolve_round(state: &GameState, rng: &mut impl ShuffleSource) -> GameState {
    let mut next = state.clone();
    resolve_round_in_place(&mut next, rng);
    next
}

pub(crate) fn resolve_round_in_place(state: &mut GameState, rng: &mut impl ShuffleSource) {
    debug_assert!(state.drafting_exhausted(), "round resolved while tiles remain");
    state.phase = Phase::WallTiling;

    let config = state.config;
    let mut discarded: Vec<TileColor> = Vec::new();
    let mut marker_holder = None;

    for (player, board) in state.players.iter_mut() {
        for row in 0..BOARD_SIZE {
            let line = board.pattern_lines[row];
            let Some(color) = line.color else { continue };
            if !line.is_full(row) {
                continue;
            }

            let col = wall_column(row, color);
            board.wall[row][col] = Some(color);
            let points = score_adjacency(&board.wall, row, col);
            board.add_score(i64::from(points));

            discarded.extend(std::iter::repeat(color).take(line.count - 1));
            board.pattern_lines[row] = PatternLine::default();
            debug!(%player, row, col, %color, points, "tile placed on wall");
        }

        let penalty = floor_penalty(board.floor_slots_used(), &config);
        board.add_score(penalty);
        discarded.extend(board.floor.drain(..));

        if board.has_first_player_marker {
            board.has_first_player_marker = false;
            marker_holder = Some(player);
        }
        debug!(%player, penalty, score = board.score, "floor cleared");
    }

    state.discard_box.extend(discarded);

    if state.players.iter().any(|(_, board)| board.completed_rows() > 0) {
        finish(state);
        return;
    }

    let start = marker_holder
        .unwrap_or_else(|| state.round_start_player_index.next(state.player_count()));
    state.round += 1;
    state.phase = Phase::Offer;
    state.center.first_player_marker = true;
    state.turn_index = start;
    state.round_start_player_index = start;
    fill_factories(state, rng);

    if state.drafting_exhausted() {
        // Every tile is locked on the boards; nothing can be drafted.
        info!(round = state.round, "no tiles left to deal");
        finish(state);
        return;
    }

    info!(round = state.round, %start, bag = state.bag.len(), "round started");
}

/// Add end-game bonuses and mark the game finished.
fn finish(state: &mut GameState) {
    let config = state.config;
    for (player, board) in state.players.iter_mut() {
        let bonus = end_game_bonus(board, &config);
        board.score = board.score.saturating_add(bonus);
        debug!(%player, bonus, score = board.score, "end-game bonus");
    }
    state.phase = Phase::Finished;
    info!(round = state.round, "game finished");
}
