/*!
# Hypergraph Sampling

Builds the Monte-Carlo hypergraph sketch both approximate engines reduce to: each of `m` samples
draws a uniformly random ordered vertex pair `(s, t)` and records which vertices' seed-avoiding
shortest-path traffic the pair touches, as one hyperedge.

- Coverage: a hyperedge is the set of vertices strictly between `s` and `t` on some shortest
  path (the pair's endpoints are never "covered" by their own pair), discarded entirely if no
  such path exists or a seed already intercepts it ([`seed_is_on_the_way`]).
- Betweenness: a hyperedge is the set of vertices lying on some shortest `s -> t` path, each
  weighted by its seed-avoiding dependency on that one pair ([`backward_weighted_hyperedge`]).

[`rebuild_betweenness_hyperedge`] is the localized counterpart used by the adaptive selector: once
a hyperedge's originating pair's domain is known, it recomputes the pair's weighted hyperedge
restricted to that domain rather than over the whole graph, so a selection only costs work
proportional to the hyperedges it touches.
*/

use crate::centrality::bfs::{bfs_domain, bfs_full, restricted_bfs_dense, restricted_bfs_domain};
use crate::core::graph::Graph;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// Returns true if some seed vertex lies on a shortest path from the BFS source (implicit in
/// `dists`) to `t`, i.e. `t`'s contribution to coverage is already claimed.
pub fn seed_is_on_the_way(graph: &Graph, t: usize, dists: &[i64], is_seed: &[bool]) -> bool {
    if is_seed[t] {
        return true;
    }
    let mut added = vec![false; graph.vertex_count()];
    added[t] = true;
    let mut queue = VecDeque::new();
    queue.push_back(t);

    while let Some(u) = queue.pop_front() {
        for &w in graph.neighbors(u) {
            if !added[w] && dists[w] != -1 && dists[w] == dists[u] - 1 {
                added[w] = true;
                if is_seed[w] {
                    return true;
                }
                queue.push_back(w);
            }
        }
    }
    false
}

/// Collects every vertex strictly between `s` and `t` on a shortest path, or `None` if `t` is
/// unreachable from `s` or a seed already intercepts the pair. `s` and `t` themselves are never
/// included: a pair's own endpoints are not "covered" by the pair.
pub fn coverage_hyperedge(
    graph: &Graph,
    s: usize,
    t: usize,
    dists: &[i64],
    is_seed: &[bool],
) -> Option<Vec<usize>> {
    if s == t || dists[t] == -1 {
        return None;
    }
    if seed_is_on_the_way(graph, t, dists, is_seed) {
        return None;
    }

    let mut added = vec![false; graph.vertex_count()];
    let mut he = Vec::new();
    added[t] = true;
    added[s] = true;
    let mut queue = VecDeque::new();
    queue.push_back(t);

    while let Some(u) = queue.pop_front() {
        for &w in graph.neighbors(u) {
            if !added[w] && dists[w] != -1 && dists[w] == dists[u] - 1 {
                added[w] = true;
                if w != s {
                    he.push(w);
                }
                queue.push_back(w);
            }
        }
    }
    Some(he)
}

/// Builds the coverage hypergraph: `m` samples, each either a hyperedge or discarded.
pub fn build_coverage_hypergraph(
    graph: &Graph,
    m: usize,
    seeds: &[usize],
    rng: &mut StdRng,
) -> Vec<Vec<usize>> {
    let v = graph.vertex_count();
    let mut is_seed = vec![false; v];
    for &s in seeds {
        is_seed[s] = true;
    }

    let mut hypergraph = Vec::new();
    for _ in 0..m {
        let s = rng.random_range(0..v);
        let t = rng.random_range(0..v);
        let base = bfs_full(graph, s);
        if let Some(he) = coverage_hyperedge(graph, s, t, &base.dists, &is_seed) {
            hypergraph.push(he);
        }
    }
    hypergraph
}

/// Walks backward from `t` through the shortest-path DAG rooted at `s` (implicit in `dists`),
/// accumulating each visited vertex's seed-avoiding dependency on the pair. `s` itself is
/// excluded from the result, matching the design's convention that a vertex never depends on
/// itself.
pub fn backward_weighted_hyperedge(
    graph: &Graph,
    s: usize,
    dists: &[i64],
    nums: &[u64],
    nums_with_seeds: &[u64],
    is_seed: &[bool],
    t: usize,
) -> Vec<(usize, f64)> {
    let v = graph.vertex_count();
    let mut btws = vec![0.0f64; v];
    let mut added = vec![false; v];
    let mut whe = Vec::new();
    added[t] = true;
    let mut queue = VecDeque::new();
    queue.push_back(t);

    while let Some(u) = queue.pop_front() {
        if u == s {
            continue;
        }
        for &w in graph.neighbors(u) {
            if dists[w] == dists[u] - 1 {
                if !added[w] {
                    added[w] = true;
                    queue.push_back(w);
                }
            } else if dists[w] == dists[u] + 1 {
                debug_assert!(nums[w] > 0, "w is a BFS successor, so it was reached");
                let mut k = nums_with_seeds[u] as f64 / nums[w] as f64;
                if nums_with_seeds[w] != 0 && !is_seed[w] {
                    k += btws[w] / nums_with_seeds[w] as f64 * nums_with_seeds[u] as f64;
                }
                btws[u] += k;
            }
        }
        whe.push((u, btws[u]));
    }
    whe
}

/// Builds the betweenness hypergraph, returning the weighted hyperedges alongside the `(s, t)`
/// pair each one was sampled from (the adaptive selector needs the pair to rebuild a hyperedge
/// after a seed is chosen).
pub fn build_betweenness_hypergraph(
    graph: &Graph,
    m: usize,
    seeds: &[usize],
    rng: &mut StdRng,
) -> (Vec<Vec<(usize, f64)>>, Vec<(usize, usize)>) {
    let v = graph.vertex_count();
    let mut is_seed = vec![false; v];
    for &s in seeds {
        is_seed[s] = true;
    }

    let mut hypergraph = Vec::with_capacity(m);
    let mut pairs = Vec::with_capacity(m);
    for _ in 0..m {
        let s = rng.random_range(0..v);
        let t = rng.random_range(0..v);
        let base = bfs_full(graph, s);
        let nws = restricted_bfs_dense(graph, s, &base.dists, &is_seed);
        let whe = backward_weighted_hyperedge(graph, s, &base.dists, &base.nums, &nws, &is_seed, t);
        hypergraph.push(whe);
        pairs.push((s, t));
    }
    (hypergraph, pairs)
}

/// Rebuilds a single betweenness hyperedge restricted to `domain`, the vertex set it previously
/// touched plus its originating pair. Used after a seed is chosen to refresh only the affected
/// hyperedges instead of resampling the whole hypergraph.
pub fn rebuild_betweenness_hyperedge(
    graph: &Graph,
    s: usize,
    t: usize,
    is_seed: &[bool],
    domain: &HashSet<usize>,
) -> Vec<(usize, f64)> {
    let (dists, nums) = bfs_domain(graph, s, domain);
    let nums_with_seeds = restricted_bfs_domain(graph, s, &dists, is_seed, domain);

    let mut btws: std::collections::HashMap<usize, f64> = std::collections::HashMap::new();
    let mut added = HashSet::new();
    let mut whe = Vec::new();
    added.insert(t);
    let mut queue = VecDeque::new();
    queue.push_back(t);

    while let Some(u) = queue.pop_front() {
        if u == s {
            continue;
        }
        let du = dists[&u];
        for &w in graph.neighbors(u) {
            if !domain.contains(&w) || !dists.contains_key(&w) {
                continue;
            }
            let dw = dists[&w];
            if dw == du - 1 {
                if added.insert(w) {
                    queue.push_back(w);
                }
            } else if dw == du + 1 {
                let nu = nums_with_seeds.get(&u).copied().unwrap_or(0);
                let nw_total = nums[&w];
                debug_assert!(nw_total > 0, "w is a BFS successor, so it was reached");
                let mut k = nu as f64 / nw_total as f64;
                let nw_seeds = nums_with_seeds.get(&w).copied().unwrap_or(0);
                if nw_seeds != 0 && !is_seed[w] {
                    k += btws.get(&w).copied().unwrap_or(0.0) / nw_seeds as f64 * nu as f64;
                }
                *btws.entry(u).or_insert(0.0) += k;
            }
        }
        whe.push((u, btws.get(&u).copied().unwrap_or(0.0)));
    }
    whe
}
