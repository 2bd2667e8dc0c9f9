use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dual_board_chess::dual_board::turn_phase;
use dual_board_chess::game_state::chess_types::BoardKind;
use dual_board_chess::game_state::game_state::GameState;
use dual_board_chess::utils::random_playout::RandomPlayer;

fn bench_random_playouts(c: &mut Criterion) {
    let max_submissions = std::env::var("DUAL_BENCH_PLIES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(120);

    let mut group = c.benchmark_group("random_playout");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    let player = RandomPlayer::new();
    let start = GameState::new_game();

    for seed in [1u64, 2, 3] {
        group.bench_with_input(
            BenchmarkId::new(format!("seed_{seed}"), max_submissions),
            &seed,
            |b, seed| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(*seed);
                    let end = player
                        .play_out(black_box(&start), &mut rng, max_submissions)
                        .expect("random playout should succeed");
                    black_box(end.move_log.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_single_transition(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let mid_game = RandomPlayer::new()
        .play_out(&GameState::new_game(), &mut rng, 30)
        .expect("setup playout should succeed");

    c.bench_function("apply_first_legal_intent", |b| {
        b.iter(|| {
            let intents = turn_phase::legal_intents(black_box(&mid_game)).expect("kings present");
            let Some(intent) = intents.first() else {
                return None;
            };
            let phase = mid_game.active_board().unwrap_or(BoardKind::Main);
            turn_phase::apply_move(&mid_game, phase, intent).ok()
        });
    });
}

criterion_group!(playout_benches, bench_random_playouts, bench_single_transition);
criterion_main!(playout_benches);
