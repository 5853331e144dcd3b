//! Engine error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Phase, PlayerId, TileColor};

/// Errors creating a match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a match needs 2 to 4 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("player id at seat {0} is empty")]
    EmptyPlayerId(usize),

    #[error("player id {0:?} appears more than once")]
    DuplicatePlayerId(String),

    #[error("invalid rules configuration: {0}")]
    InvalidConfig(String),
}

/// A rejected move. The input state is never modified when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("moves are only accepted during the offer phase (phase is {0})")]
    WrongPhase(Phase),

    #[error("not your turn: waiting for {expected}, got {actual}")]
    NotYourTurn { expected: PlayerId, actual: PlayerId },

    #[error("{0} is not seated in this match")]
    PlayerOutOfRange(PlayerId),

    #[error("a factory move needs a factory index")]
    MissingFactoryIndex,

    #[error("factory {0} does not exist")]
    FactoryOutOfRange(i64),

    #[error("factory {0} is empty")]
    FactoryEmpty(usize),

    #[error("factory {factory} has no {color} tiles")]
    ColorNotInFactory { factory: usize, color: TileColor },

    #[error("the center has no {0} tiles")]
    ColorNotInCenter(TileColor),

    #[error("pattern line {0} does not exist")]
    PatternLineOutOfRange(i64),

    #[error("pattern line {row} already holds {existing} tiles")]
    PatternLineColorConflict { row: usize, existing: TileColor },

    #[error("wall row {row} already has a {color} tile")]
    WallAlreadyHasColor { row: usize, color: TileColor },
}

/// A structural invariant that does not hold for a state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("tile count is {actual}, supply is {expected}")]
    TileCount { expected: usize, actual: usize },

    #[error("state is resting in the transient wall-tiling phase")]
    TransientPhase,

    #[error("first-player marker: in center = {in_center}, held by {holders} players")]
    Marker { in_center: bool, holders: usize },

    #[error("{player} has more than 7 floor positions in use")]
    FloorOverCapacity { player: PlayerId },

    #[error("{player} pattern line {row} is inconsistent")]
    PatternLine { player: PlayerId, row: usize },

    #[error("{player} wall cell ({row}, {col}) holds the wrong color")]
    WallPattern { player: PlayerId, row: usize, col: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let err = MoveError::NotYourTurn {
            expected: PlayerId::new(1),
            actual: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "not your turn: waiting for Player 1, got Player 0");

        let err = MoveError::ColorNotInFactory {
            factory: 2,
            color: TileColor::Red,
        };
        assert_eq!(err.to_string(), "factory 2 has no red tiles");

        assert_eq!(
            SetupError::InvalidPlayerCount(5).to_string(),
            "a match needs 2 to 4 players, got 5"
        );
    }

    #[test]
    fn test_move_error_serde() {
        let err = MoveError::WrongPhase(Phase::Finished);
        let json = serde_json::to_string(&err).unwrap();
        let back: MoveError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
