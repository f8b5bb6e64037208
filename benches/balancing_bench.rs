//! Criterion benchmarks for the customer-success balancer.
//!
//! Covers the dense single-candidate case (every customer fits exactly one
//! agent) and random rosters where most agents are eligible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cs_balancer::balancing::{BalanceProblem, Balancer, BalancerConfig, Score, TieBreaker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Problems
// ===========================================================================

/// Agents scored `1..=n`, all customers at `n - 1`, top agent away.
fn single_candidate(n: Score, customers: usize) -> BalanceProblem {
    let agents: Vec<Score> = (1..=n).collect();
    let customer_scores = vec![n - 1; customers];
    BalanceProblem::from_scores(&agents, &customer_scores, &[n as u32])
}

fn random_problem(agents: usize, customers: usize, seed: u64) -> BalanceProblem {
    let mut rng = StdRng::seed_from_u64(seed);
    let agent_scores: Vec<Score> = (0..agents).map(|_| rng.random_range(0..10_000)).collect();
    let customer_scores: Vec<Score> = (0..customers).map(|_| rng.random_range(0..10_000)).collect();
    let away: Vec<u32> = (0..agents / 10)
        .map(|_| rng.random_range(1..=agents as u32))
        .collect();
    BalanceProblem::from_scores(&agent_scores, &customer_scores, &away)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_single_candidate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_candidate");
    group.sample_size(10);

    for (agents, customers) in [(100, 1_000usize), (999, 10_000)] {
        let problem = single_candidate(agents, customers);
        let config = BalancerConfig::default();
        group.bench_with_input(
            BenchmarkId::new(format!("a{}_c{}", agents, customers), agents),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = Balancer::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_random_roster(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_roster");
    group.sample_size(10);

    for tb in [TieBreaker::RosterOrder, TieBreaker::FewestAssigned, TieBreaker::LowestId] {
        let problem = random_problem(500, 5_000, 42);
        let config = BalancerConfig::default().with_tie_breaker(tb);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", tb)),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = Balancer::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    let problems: Vec<BalanceProblem> =
        (0..64).map(|seed| random_problem(100, 1_000, seed)).collect();
    let config = BalancerConfig::default();
    group.bench_function("p64_a100_c1000", |b| {
        b.iter(|| {
            let results = Balancer::execute_batch(black_box(&problems), black_box(&config));
            black_box(results)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_single_candidate, bench_random_roster, bench_batch);
criterion_main!(benches);
