/*!
# Adaptive Lazy-Greedy Selector

Greedily picks `k` seed vertices from a hypergraph sketch, highest marginal weight first, using a
lazy max-heap (CELF-style): a vertex's heap entries are never mutated in place, so after a pop the
popped weight is checked against the vertex's current live weight and the entry is discarded as
stale if they disagree by more than `epsilon`. Live weights only ever move in one direction after
a selection (coverage strictly decreases, betweenness is recomputed and may move either way on the
affected hyperedges), so a fresh push with the latest weight always eventually resurfaces.

Coverage deactivates a selected vertex's whole touched hyperedges in one pass ([`select_coverage`]).
Betweenness instead rebuilds each touched hyperedge over its own vertex domain before adjusting
the affected vertices' weights ([`select_betweenness`]), since marking a vertex as a seed changes
every other vertex's seed-avoiding dependency on that hyperedge's pair, not just the selected
vertex's own weight.
*/

use crate::centrality::hypergraph::{build_betweenness_hypergraph, build_coverage_hypergraph, rebuild_betweenness_hyperedge};
use crate::core::graph::Graph;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Greedily selects up to `k` seeds that maximize coverage centrality, using an `m`-sample
/// hypergraph sketch. Returns the selected seeds in selection order alongside each one's marginal
/// weight at the time it was chosen.
pub fn select_coverage(
    graph: &Graph,
    m: usize,
    k: usize,
    epsilon: f64,
    rng: &mut StdRng,
) -> (Vec<usize>, Vec<f64>) {
    let v = graph.vertex_count();
    let hypergraph = build_coverage_hypergraph(graph, m, &[], rng);

    let mut degrees = vec![0.0f64; v];
    let mut vertex_to_heids: Vec<Vec<usize>> = vec![Vec::new(); v];
    for (heid, he) in hypergraph.iter().enumerate() {
        for &u in he {
            degrees[u] += 1.0;
            vertex_to_heids[u].push(heid);
        }
    }

    let mut heap: BinaryHeap<(OrderedFloat<f64>, usize)> =
        (0..v).map(|u| (OrderedFloat(degrees[u]), u)).collect();
    let mut current_degrees = degrees;
    let mut vertex_done = vec![false; v];
    let mut he_done = vec![false; hypergraph.len()];

    let mut seeds = Vec::new();
    let mut weights = Vec::new();

    while let Some((OrderedFloat(weight), u)) = heap.pop() {
        if seeds.len() >= k {
            break;
        }
        if vertex_done[u] {
            continue;
        }
        if (weight - current_degrees[u]).abs() > epsilon {
            continue;
        }
        vertex_done[u] = true;
        seeds.push(u);
        weights.push(weight);

        for &heid in &vertex_to_heids[u] {
            if he_done[heid] {
                continue;
            }
            he_done[heid] = true;
            for &w in &hypergraph[heid] {
                current_degrees[w] -= 1.0;
                heap.push((OrderedFloat(current_degrees[w]), w));
            }
        }
    }

    (seeds, weights)
}

/// Greedily selects up to `k` seeds that maximize betweenness centrality, using an `m`-sample
/// hypergraph sketch. After each selection, every hyperedge the new seed touches is rebuilt over
/// its own vertex domain so the remaining vertices' weights reflect seed-avoiding shortest paths.
pub fn select_betweenness(
    graph: &Graph,
    m: usize,
    k: usize,
    epsilon: f64,
    rng: &mut StdRng,
) -> (Vec<usize>, Vec<f64>) {
    let v = graph.vertex_count();
    let (mut hypergraph, pairs) = build_betweenness_hypergraph(graph, m, &[], rng);

    let mut degrees = vec![0.0f64; v];
    let mut vertex_to_heids: Vec<Vec<usize>> = vec![Vec::new(); v];
    let mut vertices_in_whes: Vec<HashSet<usize>> = vec![HashSet::new(); hypergraph.len()];
    for (heid, whe) in hypergraph.iter().enumerate() {
        for &(u, weight) in whe {
            degrees[u] += weight;
            vertex_to_heids[u].push(heid);
            vertices_in_whes[heid].insert(u);
        }
        vertices_in_whes[heid].insert(pairs[heid].0);
        vertices_in_whes[heid].insert(pairs[heid].1);
    }

    let mut heap: BinaryHeap<(OrderedFloat<f64>, usize)> =
        (0..v).map(|u| (OrderedFloat(degrees[u]), u)).collect();
    let mut current_degrees = degrees;
    let mut vertex_done = vec![false; v];
    let mut is_seed = vec![false; v];

    let mut seeds = Vec::new();
    let mut weights = Vec::new();

    while let Some((OrderedFloat(weight), u)) = heap.pop() {
        if seeds.len() >= k {
            break;
        }
        if vertex_done[u] {
            continue;
        }
        if (weight - current_degrees[u]).abs() > epsilon {
            continue;
        }
        vertex_done[u] = true;
        is_seed[u] = true;
        seeds.push(u);
        weights.push(weight);

        for &heid in &vertex_to_heids[u] {
            let (s, t) = pairs[heid];
            let new_whe = rebuild_betweenness_hyperedge(graph, s, t, &is_seed, &vertices_in_whes[heid]);
            let new_weights: HashMap<usize, f64> = new_whe.into_iter().collect();

            for entry in hypergraph[heid].iter_mut() {
                let (w, old_weight) = *entry;
                if vertex_done[w] {
                    continue;
                }
                // A vertex absent from the rebuilt hyperedge no longer lies on any
                // seed-avoiding shortest path for this pair; its contribution drops to zero.
                let new_weight = new_weights.get(&w).copied().unwrap_or(0.0);
                if (new_weight - old_weight).abs() > f64::EPSILON {
                    current_degrees[w] += new_weight - old_weight;
                    entry.1 = new_weight;
                }
                heap.push((OrderedFloat(current_degrees[w]), w));
            }
        }
    }

    (seeds, weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn select_coverage_respects_budget() {
        let g = Graph::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let mut rng = StdRng::seed_from_u64(7);
        let (seeds, weights) = select_coverage(&g, 256, 3, 1e-8, &mut rng);
        assert!(seeds.len() <= 3);
        assert_eq!(seeds.len(), weights.len());
    }

    #[test]
    fn select_coverage_never_picks_the_same_vertex_twice() {
        let g = Graph::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let mut rng = StdRng::seed_from_u64(11);
        let (seeds, _) = select_coverage(&g, 256, 4, 1e-8, &mut rng);
        let unique: HashSet<usize> = seeds.iter().copied().collect();
        assert_eq!(unique.len(), seeds.len());
    }

    #[test]
    fn select_betweenness_respects_budget() {
        let g = Graph::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let mut rng = StdRng::seed_from_u64(7);
        let (seeds, weights) = select_betweenness(&g, 256, 2, 1e-8, &mut rng);
        assert!(seeds.len() <= 2);
        assert_eq!(seeds.len(), weights.len());
    }

    #[test]
    fn select_betweenness_never_picks_the_same_vertex_twice() {
        let g = Graph::from_edges(7, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
        let mut rng = StdRng::seed_from_u64(3);
        let (seeds, _) = select_betweenness(&g, 256, 3, 1e-8, &mut rng);
        let unique: HashSet<usize> = seeds.iter().copied().collect();
        assert_eq!(unique.len(), seeds.len());
    }

    #[test]
    fn zero_budget_selects_nothing() {
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let mut rng = StdRng::seed_from_u64(1);
        let (seeds, weights) = select_coverage(&g, 64, 0, 1e-8, &mut rng);
        assert!(seeds.is_empty());
        assert!(weights.is_empty());
    }
}
