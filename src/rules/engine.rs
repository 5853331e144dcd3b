//! Rules engine trait and the standard rule set.
//!
//! The service layer drives a match through `RulesEngine`:
//! - create the opening state once per match
//! - submit moves, persisting the returned state
//! - query terminal status and the winner
//!
//! ## Implementation Notes
//!
//! - The engine holds no session state; every call is a pure function of its
//!   arguments plus the injected shuffle source
//! - Turn ownership between concurrent requests is the caller's problem; the
//!   engine only checks the acting seat against `turn_index`

use crate::core::{GameState, Move, MovePayload, PlayerId, RulesConfig, ShuffleSource};

use super::moves::{self, MoveOutcome, MoveResponse};
use super::setup;
use super::winner::{self, GameResult};
use super::{MoveError, SetupError};

/// Rules engine trait.
pub trait RulesEngine {
    /// Get the rules used for new matches.
    fn config(&self) -> &RulesConfig;

    /// Build the opening state for a match of 2 to 4 players.
    fn create_initial_state<S: AsRef<str>>(
        &self,
        player_ids: &[S],
        rng: &mut impl ShuffleSource,
    ) -> Result<GameState, SetupError>;

    /// Enumerate all legal moves for the player whose turn it is.
    fn legal_moves(&self, state: &GameState) -> Vec<Move>;

    /// Validate and apply a move. The input state is never modified.
    fn apply_move(
        &self,
        state: &GameState,
        player: PlayerId,
        mv: &Move,
        rng: &mut impl ShuffleSource,
    ) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Apply a submitted document-shaped move and report in the wire shape.
    fn apply_payload(
        &self,
        state: &GameState,
        player: PlayerId,
        payload: MovePayload,
        rng: &mut impl ShuffleSource,
    ) -> MoveResponse {
        let result =
            Move::try_from(payload).and_then(|mv| self.apply_move(state, player, &mv, rng));
        MoveResponse::from(result)
    }

    /// Winner seat index, `-1` for a draw or an unfinished game.
    fn winner_index(&self, state: &GameState) -> i32 {
        self.is_terminal(state).map_or(-1, |result| result.winner_index())
    }
}

/// The standard tile-drafting rules.
#[derive(Clone, Debug, Default)]
pub struct MosaicEngine {
    config: RulesConfig,
}

impl MosaicEngine {
    /// Create an engine with the given rules.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for MosaicEngine {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn create_initial_state<S: AsRef<str>>(
        &self,
        player_ids: &[S],
        rng: &mut impl ShuffleSource,
    ) -> Result<GameState, SetupError> {
        setup::create_initial_state(player_ids, self.config, rng)
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        moves::legal_moves(state)
    }

    fn apply_move(
        &self,
        state: &GameState,
        player: PlayerId,
        mv: &Move,
        rng: &mut impl ShuffleSource,
    ) -> Result<MoveOutcome, MoveError> {
        moves::apply_move(state, player, mv, rng)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        winner::is_game_over(state).then(|| winner::game_result(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, SourceKind, TileColor};

    #[test]
    fn test_engine_uses_its_config() {
        let engine = MosaicEngine::new(RulesConfig::default().with_tiles_per_color(10));
        let state = engine.create_initial_state(&["a", "b"], &mut GameRng::new(3)).unwrap();

        assert_eq!(engine.config().tiles_per_color, 10);
        assert_eq!(state.tile_count(), 50);
        assert_eq!(state.bag.len(), 30);
    }

    #[test]
    fn test_apply_payload_success() {
        let engine = MosaicEngine::default();
        let mut rng = GameRng::new(3);
        let state = engine.create_initial_state(&["a", "b"], &mut rng).unwrap();
        let color = state.factories[0].tiles[0];

        let payload = MovePayload {
            source: SourceKind::Factory,
            factory_index: Some(0),
            color,
            pattern_line_index: -1,
        };
        let response = engine.apply_payload(&state, PlayerId::new(0), payload, &mut rng);

        assert!(response.success);
        assert_eq!(response.game_over, Some(false));
        assert_eq!(response.winner_index, None);
        let next = response.new_state.unwrap();
        assert_eq!(next.turn_index, PlayerId::new(1));
        assert!(!next.players[PlayerId::new(0)].floor.is_empty());
    }

    #[test]
    fn test_apply_payload_rejects_bad_index() {
        let engine = MosaicEngine::default();
        let mut rng = GameRng::new(3);
        let state = engine.create_initial_state(&["a", "b"], &mut rng).unwrap();

        let payload = MovePayload {
            source: SourceKind::Center,
            factory_index: None,
            color: TileColor::Red,
            pattern_line_index: 9,
        };
        let response = engine.apply_payload(&state, PlayerId::new(0), payload, &mut rng);

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("pattern line 9 does not exist"));
        assert!(response.new_state.is_none());
    }

    #[test]
    fn test_fresh_game_is_not_terminal() {
        let engine = MosaicEngine::default();
        let state = engine.create_initial_state(&["a", "b", "c"], &mut GameRng::new(3)).unwrap();
        assert_eq!(engine.is_terminal(&state), None);
        assert_eq!(engine.winner_index(&state), -1);
    }
}
