use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use slide_2048::engine::{self as GameEngine, Grid, Move};
use std::hint::black_box;

fn corpus() -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grids = Vec::new();
    grids.push(Grid::EMPTY);
    let mut g = GameEngine::new_game(&mut rng);
    grids.push(g);
    // Walk a fixed move cycle to get a spread of densities
    for i in 0..40 {
        let dir = Move::ALL[i % Move::ALL.len()];
        g = g.make_move(dir, &mut rng);
        grids.push(g);
    }
    grids
}

fn bench_shift(c: &mut Criterion) {
    for (name, dir) in [
        ("shift/left", Move::Left),
        ("shift/right", Move::Right),
        ("shift/up", Move::Up),
        ("shift/down", Move::Down),
    ] {
        c.bench_function(name, |bch| {
            let grids = corpus();
            bch.iter(|| {
                let mut acc = 0u32;
                for &g in &grids {
                    acc ^= g.shift(dir).highest_tile();
                }
                black_box(acc)
            })
        });
    }
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("grid/with_random_tile", |bch| {
        bch.iter_batched(
            || (Grid::EMPTY, StdRng::seed_from_u64(7)),
            |(mut g, mut rng)| {
                for _ in 0..16 {
                    g = g.with_random_tile(&mut rng);
                }
                black_box(g)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("grid/make_move_left", |bch| {
        bch.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(9);
                let g = GameEngine::new_game(&mut rng);
                (g, rng)
            },
            |(mut g, mut rng)| {
                for _ in 0..64 {
                    g = g.make_move(Move::Left, &mut rng);
                }
                black_box(g)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    c.bench_function("query/has_legal_move", |bch| {
        let grids = corpus();
        bch.iter(|| grids.iter().filter(|&&g| GameEngine::has_legal_move(g)).count())
    });
    c.bench_function("query/has_reached_target", |bch| {
        let grids = corpus();
        bch.iter(|| grids.iter().filter(|&&g| GameEngine::has_reached_target(g)).count())
    });
    c.bench_function("query/count_empty", |bch| {
        let grids = corpus();
        bch.iter(|| grids.iter().map(|&g| GameEngine::count_empty(g)).sum::<usize>())
    });
}

criterion_group!(engine_ops, bench_shift, bench_spawn, bench_queries);
criterion_main!(engine_ops);
