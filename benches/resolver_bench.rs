use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use stonegame::batch::{run_batch, BatchConfig, BatchGame};
use stonegame::protocol::values::parse_values;
use stonegame::resolve::{resolve, Resolver, TieBreak};

fn random_values(rng: &mut SmallRng, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(1..=100)).collect()
}

fn bench_resolve_sizes(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut group = c.benchmark_group("resolve");
    for n in [10usize, 1_000, 100_000] {
        let alice = random_values(&mut rng, n);
        let bob = random_values(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| resolve(black_box(&alice), black_box(&bob)))
        });
    }
    group.finish();
}

fn bench_resolve_all_ties(c: &mut Criterion) {
    let values = vec![7i64; 100_000];
    let stable = Resolver::with_tie_break(TieBreak::Stable);
    let reversed = Resolver::with_tie_break(TieBreak::Reversed);
    c.bench_function("resolve_100k_ties_stable", |b| {
        b.iter(|| stable.resolve(black_box(&values), black_box(&values)))
    });
    c.bench_function("resolve_100k_ties_reversed", |b| {
        b.iter(|| reversed.resolve(black_box(&values), black_box(&values)))
    });
}

fn bench_parse_values(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let values = random_values(&mut rng, 100_000);
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    let text = format!("[{}]", parts.join(", "));
    c.bench_function("parse_100k_values", |b| {
        b.iter(|| parse_values(black_box(&text)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(99);
    let games: Vec<BatchGame> = (0..256)
        .map(|i| BatchGame {
            id: Some(i.to_string()),
            alice: random_values(&mut rng, 1_000),
            bob: random_values(&mut rng, 1_000),
        })
        .collect();

    let mut group = c.benchmark_group("batch_256x1000");
    for threads in [1usize, 4] {
        let config = BatchConfig {
            threads,
            quiet: true,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, _| {
            b.iter(|| run_batch(black_box(&games), &config))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_sizes,
    bench_resolve_all_ties,
    bench_parse_values,
    bench_batch
);
criterion_main!(benches);
