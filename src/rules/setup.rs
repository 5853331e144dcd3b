//! Match creation and factory refills.

use im::Vector;
use tracing::{debug, info};

use crate::core::{
    Center, Factory, GameState, Phase, PlayerId, PlayerMap, PlayerState, RulesConfig,
    ShuffleSource, TileColor, ALL_COLORS, MAX_PLAYERS, MIN_PLAYERS,
};

use super::SetupError;

/// Build the opening state for a match.
///
/// Allocates `tiles_per_color` tiles of each color, shuffles them into the bag
/// and deals `2 * players + 1` factory displays. Player 0 moves first and the
/// first-player marker starts in the center.
///
/// ```
/// use mosaic_engine::core::{GameRng, Phase, RulesConfig};
/// use mosaic_engine::rules::create_initial_state;
///
/// let mut rng = GameRng::new(42);
/// let state = create_initial_state(&["a", "b"], RulesConfig::default(), &mut rng).unwrap();
///
/// assert_eq!(state.factories.len(), 5);
/// assert_eq!(state.bag.len(), 80);
/// assert_eq!(state.phase, Phase::Offer);
/// ```
pub fn create_initial_state<S: AsRef<str>>(
    player_ids: &[S],
    config: RulesConfig,
    rng: &mut impl ShuffleSource,
) -> Result<GameState, SetupError> {
    let player_count = player_ids.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(SetupError::InvalidPlayerCount(player_count));
    }
    config.validate()?;

    for (seat, id) in player_ids.iter().enumerate() {
        let id = id.as_ref();
        if id.trim().is_empty() {
            return Err(SetupError::EmptyPlayerId(seat));
        }
        if player_ids[..seat].iter().any(|other| other.as_ref() == id) {
            return Err(SetupError::DuplicatePlayerId(id.to_string()));
        }
    }

    let mut supply: Vec<TileColor> = ALL_COLORS
        .iter()
        .flat_map(|&color| std::iter::repeat(color).take(config.tiles_per_color as usize))
        .collect();
    rng.shuffle_tiles(&mut supply);

    let mut state = GameState {
        config,
        factories: vec![Factory::default(); RulesConfig::factory_count(player_count)],
        center: Center {
            tiles: Vector::new(),
            first_player_marker: true,
        },
        players: PlayerMap::new(player_count, |p| PlayerState::new(player_ids[p.index()].as_ref())),
        bag: supply.into_iter().collect(),
        discard_box: Vector::new(),
        phase: Phase::Offer,
        turn_index: PlayerId::new(0),
        round_start_player_index: PlayerId::new(0),
        round: 1,
    };

    fill_factories(&mut state, rng);

    info!(
        players = player_count,
        factories = state.factories.len(),
        bag = state.bag.len(),
        "match created"
    );
    Ok(state)
}

/// Deal `factory_capacity` tiles into every display.
///
/// Draws from the back of the bag. When the bag runs dry the discard box is
/// shuffled into a fresh bag; when both are empty the remaining displays stay
/// short.
pub fn fill_factories(state: &mut GameState, rng: &mut impl ShuffleSource) {
    let capacity = state.config.factory_capacity;

    for factory in state.factories.iter_mut() {
        factory.tiles.clear();
        while factory.tiles.len() < capacity {
            match draw_tile(&mut state.bag, &mut state.discard_box, rng) {
                Some(tile) => factory.tiles.push(tile),
                None => {
                    debug!("tile supply exhausted while dealing factories");
                    return;
                }
            }
        }
    }
}

/// Draw one tile, recycling the discard box into a freshly shuffled bag if needed.
fn draw_tile(
    bag: &mut Vector<TileColor>,
    discard_box: &mut Vector<TileColor>,
    rng: &mut impl ShuffleSource,
) -> Option<TileColor> {
    if bag.is_empty() && !discard_box.is_empty() {
        let mut recycled: Vec<TileColor> = std::mem::take(discard_box).into_iter().collect();
        rng.shuffle_tiles(&mut recycled);
        debug!(tiles = recycled.len(), "recycling discard box into bag");
        *bag = recycled.into_iter().collect();
    }
    bag.pop_back()
}
