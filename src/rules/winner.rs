//! Win determination.
//!
//! Highest score wins. Ties are broken by the number of completed wall rows
//! among the tied players; a tie that survives that is a draw.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Phase, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Winner seat index, or `-1` for a draw.
    #[must_use]
    pub fn winner_index(&self) -> i32 {
        match self {
            GameResult::Winner(p) => i32::from(p.0),
            GameResult::Draw => -1,
        }
    }
}

/// Whether the match has reached its terminal state.
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    state.phase == Phase::Finished
}

/// Rank the current scores.
///
/// Pure over the scores and walls; does not look at the phase.
#[must_use]
pub fn game_result(state: &GameState) -> GameResult {
    let Some(best) = state.players.iter().map(|(_, p)| p.score).max() else {
        return GameResult::Draw;
    };
    let leaders: Vec<PlayerId> = state
        .players
        .iter()
        .filter(|(_, p)| p.score == best)
        .map(|(id, _)| id)
        .collect();
    if let [only] = leaders.as_slice() {
        return GameResult::Winner(*only);
    }

    let rows = |id: &PlayerId| state.players[*id].completed_rows();
    let most_rows = leaders.iter().map(rows).max().unwrap_or(0);
    let finalists: Vec<PlayerId> = leaders.into_iter().filter(|id| rows(id) == most_rows).collect();
    match finalists.as_slice() {
        [only] => GameResult::Winner(*only),
        _ => GameResult::Draw,
    }
}

/// Winner seat index, or `-1` for a draw or an unfinished game.
#[must_use]
pub fn winner_index(state: &GameState) -> i32 {
    if is_game_over(state) {
        game_result(state).winner_index()
    } else {
        -1
    }
}

/// Final scores in seat order, once the game is over.
#[must_use]
pub fn final_scores(state: &GameState) -> Option<Vec<u32>> {
    is_game_over(state).then(|| state.players.iter().map(|(_, p)| p.score).collect())
}
