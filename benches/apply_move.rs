use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use mosaic_engine::{GameRng, GameState, MosaicEngine, RulesEngine};
use std::hint::black_box;

fn opening(player_count: usize, seed: u64) -> GameState {
    let ids: Vec<String> = (0..player_count).map(|i| format!("p{i}")).collect();
    MosaicEngine::default()
        .create_initial_state(&ids[..], &mut GameRng::new(seed))
        .unwrap()
}

/// Play one full match with a seeded random policy, returning the move count.
fn play_out(engine: &MosaicEngine, mut state: GameState, seed: u64) -> usize {
    let mut rng = GameRng::new(seed);
    let mut moves_played = 0;
    loop {
        let mut moves = engine.legal_moves(&state);
        if moves.is_empty() {
            return moves_played;
        }
        rng.shuffle(&mut moves);
        state = engine
            .apply_move(&state, state.turn_index, &moves[0], &mut rng)
            .unwrap()
            .state;
        moves_played += 1;
    }
}

fn bench_setup(c: &mut Criterion) {
    let engine = MosaicEngine::default();
    c.bench_function("setup/4p", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(engine.create_initial_state(&["a", "b", "c", "d"], &mut GameRng::new(seed)))
        })
    });
}

fn bench_moves(c: &mut Criterion) {
    let engine = MosaicEngine::default();
    let state = opening(4, 9);

    c.bench_function("legal_moves/opening", |b| {
        b.iter(|| black_box(engine.legal_moves(black_box(&state))))
    });

    let first = engine.legal_moves(&state)[0];
    c.bench_function("apply_move/opening", |b| {
        let mut rng = GameRng::new(1);
        b.iter(|| black_box(engine.apply_move(&state, state.turn_index, &first, &mut rng)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let engine = MosaicEngine::default();
    for player_count in [2, 4] {
        c.bench_function(&format!("full_game/{player_count}p"), |b| {
            b.iter_batched(
                || opening(player_count, 17),
                |state| black_box(play_out(&engine, state, 17)),
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_setup, bench_moves, bench_full_game);
criterion_main!(benches);
