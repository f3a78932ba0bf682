use adaptive_centrality::centrality::{
    adaptive_approximate_betweenness, adaptive_approximate_coverage,
};
use adaptive_centrality::core::graph::Graph;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Builds a reproducible Erdos-Renyi-style graph for benchmarking: `n` vertices, each candidate
/// edge included independently with probability `p`.
fn random_graph(n: usize, p: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random::<f64>() < p {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(n, edges)
}

fn bench_adaptive_coverage(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_coverage");

    for size in [50, 200, 500].iter() {
        let graph = random_graph(*size, 0.05, 42);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("k5_m2048", size), size, |b, _| {
            b.iter(|| black_box(adaptive_approximate_coverage(&graph, 2048, 5, Some(1))));
        });
    }

    group.finish();
}

fn bench_adaptive_betweenness(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_betweenness");

    for size in [50, 200, 500].iter() {
        let graph = random_graph(*size, 0.05, 42);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("k5_m2048", size), size, |b, _| {
            b.iter(|| black_box(adaptive_approximate_betweenness(&graph, 2048, 5, Some(1))));
        });
    }

    group.finish();
}

fn bench_sample_budget_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_budget_scaling");
    let graph = random_graph(200, 0.05, 7);

    for m in [256, 1024, 4096].iter() {
        group.throughput(Throughput::Elements(*m as u64));
        group.bench_with_input(BenchmarkId::new("adaptive_coverage", m), m, |b, &m| {
            b.iter(|| black_box(adaptive_approximate_coverage(&graph, m, 5, Some(1))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_adaptive_coverage,
    bench_adaptive_betweenness,
    bench_sample_budget_scaling,
);
criterion_main!(benches);
