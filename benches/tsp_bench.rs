//! Criterion benchmarks for the TSP solver.
//!
//! Measures the fitness function on its own and full runs at a few
//! population sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_ga::random::create_rng;
use tsp_ga::{
    crossover, generate_destinations, mutate, tour_length, EvolutionConfig, EvolutionDriver,
    NoopReporter,
};

fn bench_tour_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_length");

    for &n in &[10usize, 100, 1000] {
        let mut rng = create_rng(42);
        let tour = generate_destinations(n, 0, 1000, &mut rng).expect("valid range");
        group.bench_with_input(BenchmarkId::from_parameter(n), &tour, |b, t| {
            b.iter(|| black_box(tour_length(black_box(t))))
        });
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    for &n in &[20usize, 100, 500] {
        let mut rng = create_rng(42);
        let p1 = generate_destinations(n, 0, 1000, &mut rng).expect("valid range");
        let mut p2 = p1.clone();
        p2.reverse();
        group.bench_with_input(BenchmarkId::new("crossover_mutate", n), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| {
                let child = crossover(p1, p2, n / 4, &mut rng).expect("same destinations");
                black_box(mutate(&child, &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution");
    group.sample_size(10);

    for (pop, gen) in [(20usize, 500usize), (100, 200), (200, 100)] {
        let config = EvolutionConfig::default()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = EvolutionDriver::run(black_box(c), NoopReporter);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tour_length, bench_operators, bench_evolution);
criterion_main!(benches);
