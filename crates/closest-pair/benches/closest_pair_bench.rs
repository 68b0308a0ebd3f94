//! Criterion benchmarks: divide & conquer vs brute force.
//! Focus sizes: n in {32, 128, 512, 2048}; brute force is capped at 512.

use closest_pair::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn cloud(n: usize, seed: u64) -> Vec<Point> {
    draw_cloud(
        n,
        Bounds2::default(),
        ReplayToken {
            seed,
            index: n as u64,
        },
    )
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    for &n in &[32usize, 128, 512, 2048] {
        group.bench_with_input(BenchmarkId::new("divide_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| closest_pair(&pts).unwrap(),
                BatchSize::SmallInput,
            )
        });
        if n <= 512 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
                b.iter_batched(
                    || cloud(n, 43),
                    |pts| brute_force(&pts),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair_clustered");
    for &n in &[128usize, 2048] {
        group.bench_with_input(BenchmarkId::new("divide_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    draw_clustered(
                        n,
                        8,
                        0.05,
                        Bounds2::default(),
                        ReplayToken {
                            seed: 44,
                            index: n as u64,
                        },
                    )
                },
                |pts| closest_pair(&pts).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solvers, bench_clustered);
criterion_main!(benches);
