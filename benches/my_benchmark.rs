use astar_pathfinding::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nanorand::{Rng, WyRand};

fn random_grid(size: usize, seed: u64) -> CostGrid {
    let mut rng = WyRand::new_seed(seed);
    let mut grid = CostGrid::new(size, size).unwrap();
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let cost = match rng.generate_range(0_u32..10) {
                0..=6 => 0.0,
                7 | 8 => rng.generate_range(1_u32..10) as f64,
                _ => BARRIER_COST,
            };
            grid.set_cost(Location::new(x, y), cost).unwrap();
        }
    }
    grid.set_cost(grid.start(), 0.0).unwrap();
    grid.set_cost(grid.finish(), 0.0).unwrap();
    grid
}

fn bench_astar(c: &mut Criterion) {
    let open = CostGrid::new(128, 128).unwrap();
    c.bench_function("astar open 128x128", |b| {
        b.iter(|| compute_path(black_box(&open)).unwrap())
    });

    let random = random_grid(128, 42);
    c.bench_function("astar random 128x128", |b| {
        b.iter(|| compute_path(black_box(&random)).unwrap())
    });

    let grids: Vec<_> = (0..16).map(|seed| random_grid(64, seed)).collect();
    let pathfinder = Pathfinder::default();
    c.bench_function("astar batch 16x 64x64", |b| {
        b.iter(|| pathfinder.compute_paths(black_box(&grids)))
    });
}

criterion_group!(benches, bench_astar);
criterion_main!(benches);
