//! Game rules as pure functions over `GameState`.
//!
//! - `setup`: opening state and factory refills
//! - `moves`: move validation, application and enumeration
//! - `round`: the wall-tiling phase between rounds
//! - `scoring`: placement, floor and end-game scoring
//! - `winner`: terminal status and ranking
//! - `engine`: the `RulesEngine` trait the service layer calls

pub mod engine;
pub mod error;
pub mod moves;
pub mod round;
pub mod scoring;
pub mod setup;
pub mod winner;

pub use engine::{MosaicEngine, RulesEngine};
pub use error::{InvariantViolation, MoveError, SetupError};
pub use moves::{apply_move, legal_moves, validate_move, MoveOutcome, MoveResponse};
pub use round::resolve_round;
pub use scoring::{end_game_bonus, floor_penalty, score_adjacency};
pub use setup::{create_initial_state, fill_factories};
pub use winner::{final_scores, game_result, is_game_over, winner_index, GameResult};
