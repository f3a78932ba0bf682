/*!
# Dependency Accumulation

The seed-avoiding generalization of Brandes' dependency-accumulation step: given a source `s`'s
distance field, its unrestricted shortest-path counts `nums`, and its seed-avoiding counts
`nums_with_seeds`, accumulate each vertex's betweenness dependency on `s` by walking the
shortest-path DAG in reverse topological order (farthest vertices first).

The recurrence, for an edge `u -> v` with `dists[v] == dists[u] + 1`:

```text
k  = nums_with_seeds[u] / nums[v]
k += if v is not a seed and nums_with_seeds[v] != 0 { btws[v] / nums_with_seeds[v] * nums_with_seeds[u] } else { 0 }
btws[u] += k
```

Reverse topological order is obtained the same way a Kahn's-algorithm toposort would, but driven
by *out*-degree in the DAG (edges point away from `s`): a vertex enters the queue once every edge
leaving it towards a farther vertex has been relaxed.
*/

use crate::core::graph::Graph;

/// Accumulates betweenness dependencies on source `s` across the whole graph.
///
/// `dists` and `nums` are `s`'s full BFS result; `nums_with_seeds` is `s`'s seed-avoiding BFS
/// result (see [`crate::centrality::bfs::restricted_bfs_dense`]). Returns one dependency value
/// per vertex, `s`'s own contribution to every other vertex's seed-avoiding betweenness.
pub fn accumulate_dependencies(
    graph: &Graph,
    source: usize,
    dists: &[i64],
    nums: &[u64],
    nums_with_seeds: &[u64],
    is_seed: &[bool],
) -> Vec<f64> {
    let v = graph.vertex_count();
    let mut btws = vec![0.0f64; v];
    let mut out_degree = vec![0u32; v];

    for u in 0..v {
        for &w in graph.neighbors(u) {
            if dists[w] == dists[u] + 1 {
                out_degree[u] += 1;
            }
        }
    }

    let mut queue: std::collections::VecDeque<usize> =
        (0..v).filter(|&u| out_degree[u] == 0).collect();

    while let Some(u) = queue.pop_front() {
        if u == source {
            continue;
        }
        for &w in graph.neighbors(u) {
            if dists[w] == dists[u] - 1 {
                out_degree[w] -= 1;
                if out_degree[w] == 0 {
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
    }

    btws
}
