use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use chessboard_engine::controller::game_controller::GameController;
use chessboard_engine::engines::engine_random::RandomEngine;
use chessboard_engine::game_state::chess_types::{GameMode, Square};
use chessboard_engine::timing::clock_config::ClockConfig;

/// Plays `plies` human moves against the random opponent, each chosen by a
/// second random engine, then undoes everything.
fn play_and_unwind(controller: &mut GameController, driver: &mut RandomEngine, plies: usize) {
    for _ in 0..plies {
        let color = controller.current_player();
        let Some(mv) = driver.pick(controller.board(), color) else {
            break;
        };
        controller.select(mv.from);
        black_box(controller.select(mv.to));
    }
    while controller.undo().is_some() {}
}

fn bench_ai_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("ai_game_40_plies_then_undo", |b| {
        let mut controller = GameController::with_engine(
            GameMode::HumanVsAi,
            ClockConfig::default(),
            Box::new(RandomEngine::seeded(5)),
        );
        let mut driver = RandomEngine::seeded(9);
        b.iter(|| {
            controller.reset(GameMode::HumanVsAi);
            play_and_unwind(&mut controller, &mut driver, 40);
        })
    });

    group.bench_function("select_deselect_cycle", |b| {
        let mut controller = GameController::new(GameMode::HumanVsHuman, ClockConfig::default());
        let (Ok(from), Ok(to)) = (Square::new(6, 4), Square::new(3, 4)) else {
            return;
        };
        b.iter(|| {
            controller.select(from);
            black_box(controller.select(to))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ai_game);
criterion_main!(benches);
