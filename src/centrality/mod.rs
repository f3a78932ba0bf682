//! Coverage and betweenness centrality, exact and via hypergraph-sketch approximation, with
//! adaptive seed-avoiding selection on top of both. Every entry point takes an optional RNG seed
//! for reproducible sampling rather than reaching for a global RNG: `seed` is threaded down into
//! a freshly constructed [`rand::rngs::StdRng`] via [`create_rng`], which every sampling routine
//! below borrows by `&mut` reference.

pub mod bfs;
pub mod dependency;
pub mod exact;
pub mod hypergraph;
pub mod selector;

use crate::config::{DEFAULT_EPSILON, DEFAULT_M};
use crate::core::graph::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds a seedable RNG: deterministic if `seed` is given, otherwise seeded from the OS.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Exact seed-avoiding betweenness centrality, one value per vertex.
pub fn exact_betweenness(graph: &Graph, seeds: &[usize]) -> Vec<f64> {
    exact::exact_betweenness(graph, seeds)
}

/// Exact seed-avoiding coverage centrality, one value per vertex.
pub fn exact_coverage(graph: &Graph, seeds: &[usize]) -> Vec<u64> {
    exact::exact_coverage(graph, seeds)
}

/// Hypergraph-sketch approximation of seed-avoiding betweenness centrality, drawn from `m`
/// random vertex pairs.
pub fn approximate_betweenness(
    graph: &Graph,
    m: usize,
    seeds: &[usize],
    seed: Option<u64>,
) -> Vec<f64> {
    let mut rng = create_rng(seed);
    let (hypergraph, _) = hypergraph::build_betweenness_hypergraph(graph, m, seeds, &mut rng);
    let mut total = vec![0.0f64; graph.vertex_count()];
    for whe in &hypergraph {
        for &(v, weight) in whe {
            total[v] += weight;
        }
    }
    total
}

/// Hypergraph-sketch approximation of seed-avoiding coverage centrality, drawn from `m` random
/// vertex pairs.
pub fn approximate_coverage(
    graph: &Graph,
    m: usize,
    seeds: &[usize],
    seed: Option<u64>,
) -> Vec<u64> {
    let mut rng = create_rng(seed);
    let hypergraph = hypergraph::build_coverage_hypergraph(graph, m, seeds, &mut rng);
    let mut total = vec![0u64; graph.vertex_count()];
    for he in &hypergraph {
        for &v in he {
            total[v] += 1;
        }
    }
    total
}

/// Adaptively selects up to `k` seeds maximizing betweenness centrality via lazy greedy
/// selection over an `m`-sample hypergraph sketch. Returns the chosen seeds in selection order
/// alongside each one's marginal weight.
pub fn adaptive_approximate_betweenness(
    graph: &Graph,
    m: usize,
    k: usize,
    seed: Option<u64>,
) -> (Vec<usize>, Vec<f64>) {
    let mut rng = create_rng(seed);
    selector::select_betweenness(graph, m, k, DEFAULT_EPSILON, &mut rng)
}

/// Adaptively selects up to `k` seeds maximizing coverage centrality via lazy greedy selection
/// over an `m`-sample hypergraph sketch. Returns the chosen seeds in selection order alongside
/// each one's marginal weight.
pub fn adaptive_approximate_coverage(
    graph: &Graph,
    m: usize,
    k: usize,
    seed: Option<u64>,
) -> (Vec<usize>, Vec<f64>) {
    let mut rng = create_rng(seed);
    selector::select_coverage(graph, m, k, DEFAULT_EPSILON, &mut rng)
}

/// Runs the [`crate::config::Config`]-selected method against `graph`, dispatching to whichever
/// of the six entry points above the configured [`crate::config::Method`] names. Coverage and
/// betweenness results are both reported as `f64` here so the two families share a return type.
pub fn run(graph: &Graph, config: &crate::config::Config) -> (Vec<usize>, Vec<f64>) {
    use crate::config::Method;
    match config.method {
        Method::ExactCoverage => {
            let scores = exact_coverage(graph, &[]);
            ((0..scores.len()).collect(), scores.into_iter().map(|c| c as f64).collect())
        }
        Method::ApproximateCoverage => {
            let scores = approximate_coverage(graph, config.m, &[], config.seed);
            ((0..scores.len()).collect(), scores.into_iter().map(|c| c as f64).collect())
        }
        Method::TopkCoverage => {
            adaptive_approximate_coverage(graph, config.m, config.k, config.seed)
        }
        Method::ExactBetweenness => {
            let scores = exact_betweenness(graph, &[]);
            ((0..scores.len()).collect(), scores)
        }
        Method::ApproximateBetweenness => {
            let scores = approximate_betweenness(graph, config.m, &[], config.seed);
            ((0..scores.len()).collect(), scores)
        }
        Method::TopkBetweenness => {
            adaptive_approximate_betweenness(graph, config.m, config.k, config.seed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)])
    }

    #[test]
    fn create_rng_is_deterministic_with_a_seed() {
        use rand::Rng;
        let mut a = create_rng(Some(99));
        let mut b = create_rng(Some(99));
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_eq!(x, y);
    }

    #[test]
    fn approximate_betweenness_converges_towards_exact() {
        let g = path_graph();
        let m = 4096;
        let exact = exact_betweenness(&g, &[]);
        let approx = approximate_betweenness(&g, m, &[], Some(1));
        let v = g.vertex_count() as f64;
        for u in 0..g.vertex_count() {
            let scaled = approx[u] * v * v / m as f64;
            assert!(
                (exact[u] - scaled).abs() < 0.75,
                "vertex {u}: {} vs scaled {}",
                exact[u],
                scaled
            );
        }
    }

    #[test]
    fn run_dispatches_topk_coverage_by_default() {
        let g = path_graph();
        let config = crate::config::Config::default();
        let (seeds, weights) = run(&g, &config);
        assert!(seeds.len() <= config.k);
        assert_eq!(seeds.len(), weights.len());
    }
}
