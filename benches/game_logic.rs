use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{
    apply_move, available_moves, has_available_move, initialize, GameRng, Grid, ScriptedRng,
};
use tui_2048::types::Direction;

fn busy_grid() -> Grid {
    Grid::from_rows(vec![
        vec![2, 2, 4, 8],
        vec![0, 4, 4, 16],
        vec![32, 0, 2, 2],
        vec![64, 128, 0, 256],
    ])
    .unwrap()
}

fn stuck_grid() -> Grid {
    Grid::from_rows(vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ])
    .unwrap()
}

fn bench_apply_move(c: &mut Criterion) {
    let grid = busy_grid();
    let mut rng = ScriptedRng::first_cell();

    c.bench_function("apply_move_left", |b| {
        b.iter(|| apply_move(black_box(&grid), Direction::Left, 2048, &mut rng))
    });
    c.bench_function("apply_move_down", |b| {
        b.iter(|| apply_move(black_box(&grid), Direction::Down, 2048, &mut rng))
    });
}

fn bench_has_available_move(c: &mut Criterion) {
    let stuck = stuck_grid();
    let busy = busy_grid();

    c.bench_function("has_available_move_stuck", |b| {
        b.iter(|| has_available_move(black_box(&stuck)))
    });
    c.bench_function("available_moves_busy", |b| {
        b.iter(|| available_moves(black_box(&busy)))
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("random_playout_4x4", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = GameRng::new(seed);
            let mut grid = initialize(4, 2048, &mut rng).unwrap();
            let mut moves = 0u32;
            while let Some(&dir) = available_moves(&grid).first() {
                grid = apply_move(&grid, dir, 2048, &mut rng).grid;
                moves += 1;
            }
            black_box(moves)
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_has_available_move,
    bench_playout
);
criterion_main!(benches);
