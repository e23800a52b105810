//! Criterion benchmarks for u-tsp.
//!
//! Uses synthetic asymmetric instances so the timings reflect matrix
//! reduction and search overhead rather than any cost model.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tsp::bnb::{BnbConfig, BnbRunner};
use u_tsp::heuristic::{greedy_tour, HeuristicConfig, HeuristicRunner};
use u_tsp::model::{CostMatrix, Instance, TableCity};

// ===========================================================================
// Instances
// ===========================================================================

/// Asymmetric costs in [1, 100) with roughly 10% missing edges.
fn random_table(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i != j && rng.random_range(0.0..1.0) < 0.1 {
                        f64::INFINITY
                    } else {
                        rng.random_range(1.0..100.0)
                    }
                })
                .collect()
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_reduce");

    for &n in &[10usize, 50, 200] {
        let matrix = CostMatrix::from_rows(random_table(n, 42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| {
                let mut m = m.clone();
                black_box(m.reduce())
            })
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[50usize, 200, 500] {
        let instance = Instance::from_table(&random_table(n, 7)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            b.iter(|| black_box(greedy_tour(black_box(inst), 0)))
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_valid");

    for &n in &[20usize, 100] {
        let cities = TableCity::from_table(vec![vec![1.0; n]; n]);
        let config = HeuristicConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(cities, config),
            |b, (cities, config)| {
                b.iter(|| black_box(HeuristicRunner::random(black_box(cities), config)))
            },
        );
    }
    group.finish();
}

fn bench_bnb(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut group = c.benchmark_group("bnb");
    group.sample_size(10);

    for &n in &[8usize, 12, 15] {
        let cities = TableCity::from_table(random_table(n, 3));
        let config = BnbConfig::default().with_time_allowance(Duration::from_secs(2));
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(cities, config),
            |b, (cities, config)| {
                b.iter(|| {
                    let result = BnbRunner::run(black_box(cities), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_reduce, bench_greedy, bench_random, bench_bnb);
criterion_main!(benches);
