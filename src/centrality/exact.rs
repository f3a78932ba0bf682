/*!
# Exact Reference Engines

Non-adaptive, exhaustive engines used to validate the hypergraph-sketch approximations: each runs
a full BFS from every vertex and accumulates that source's exact contribution to every other
vertex's seed-avoiding centrality. `O(V * E)` time, `O(V)` space per source — fine for validation
graphs, not meant for the sizes the approximators target.
*/

use crate::centrality::bfs::{bfs_full, restricted_bfs_dense};
use crate::centrality::dependency::accumulate_dependencies;
use crate::centrality::hypergraph::coverage_hyperedge;
use crate::core::graph::Graph;

/// Computes the exact seed-avoiding betweenness centrality of every vertex.
pub fn exact_betweenness(graph: &Graph, seeds: &[usize]) -> Vec<f64> {
    let v = graph.vertex_count();
    let mut is_seed = vec![false; v];
    for &s in seeds {
        is_seed[s] = true;
    }

    let mut total = vec![0.0f64; v];
    for s in 0..v {
        let base = bfs_full(graph, s);
        let nws = restricted_bfs_dense(graph, s, &base.dists, &is_seed);
        let btws = accumulate_dependencies(graph, s, &base.dists, &base.nums, &nws, &is_seed);
        for u in 0..v {
            if is_seed[u] {
                continue;
            }
            total[u] += btws[u];
        }
    }
    total
}

/// Computes the exact seed-avoiding coverage centrality of every vertex: for every unordered
/// pair `{s, t}` whose shortest path is not intercepted by a seed, every vertex strictly between
/// `s` and `t` gets one point. Endpoints never score from their own pair.
pub fn exact_coverage(graph: &Graph, seeds: &[usize]) -> Vec<u64> {
    let v = graph.vertex_count();
    let mut is_seed = vec![false; v];
    for &s in seeds {
        is_seed[s] = true;
    }

    let mut total = vec![0u64; v];
    for s in 0..v {
        let base = bfs_full(graph, s);
        for t in (s + 1)..v {
            if let Some(internal) = coverage_hyperedge(graph, s, t, &base.dists, &is_seed) {
                for w in internal {
                    total[w] += 1;
                }
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_graph_midpoint_has_highest_exact_betweenness() {
        let g = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        let btws = exact_betweenness(&g, &[]);
        assert!(btws[2] > btws[0]);
        assert!(btws[2] > btws[4]);
    }

    #[test]
    fn seeded_vertex_is_excluded_from_exact_betweenness_output() {
        let g = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        let btws = exact_betweenness(&g, &[2]);
        assert_eq!(btws[2], 0.0);
    }

    #[test]
    fn path_graph_interior_vertices_score_above_endpoints() {
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let cov = exact_coverage(&g, &[]);
        assert_eq!(cov, vec![0, 2, 2, 0]);
    }

    #[test]
    fn triangle_has_no_internal_vertex_on_any_pair() {
        let g = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
        assert_eq!(exact_coverage(&g, &[]), vec![0, 0, 0]);
        assert_eq!(exact_betweenness(&g, &[]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn star_center_covers_every_leaf_pair_leaves_cover_none() {
        let g = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(exact_coverage(&g, &[]), vec![3, 0, 0, 0]);
    }

    #[test]
    fn seeded_vertex_blocks_the_pairs_it_would_have_covered() {
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let cov_seeded = exact_coverage(&g, &[1]);
        assert_eq!(cov_seeded, vec![0, 0, 0, 0]);
    }
}
