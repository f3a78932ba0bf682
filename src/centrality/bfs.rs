/*!
# Breadth-First Search Primitives

Three BFS variants, all counting shortest paths alongside distances (the `nums[v] += nums[u]`
accumulation below is the standard shortest-path-counting recurrence used by Brandes' algorithm):

- [`bfs_full`]: dense, whole-graph BFS from a single source.
- [`bfs_domain`]: BFS restricted to a vertex domain, for rebuilding a hyperedge over only the
  vertices it originally touched rather than the whole graph.
- [`restricted_bfs_dense`] / [`restricted_bfs_domain`]: BFS that additionally respects a baseline
  distance array and skips seed vertices, used to recompute shortest-path counts on the subgraph
  of paths that avoid already-chosen seeds (`nums_with_seeds` in the design).
*/

use crate::core::graph::Graph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Result of a full, dense BFS from one source: per-vertex distance (`-1` if unreached) and
/// shortest-path count.
#[derive(Debug, Clone)]
pub struct BfsResult {
    pub dists: Vec<i64>,
    pub nums: Vec<u64>,
}

/// Dense BFS from `source` over the whole graph.
pub fn bfs_full(graph: &Graph, source: usize) -> BfsResult {
    let v = graph.vertex_count();
    let mut dists = vec![-1i64; v];
    let mut nums = vec![0u64; v];
    let mut queue = VecDeque::with_capacity(v);

    dists[source] = 0;
    nums[source] = 1;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &w in graph.neighbors(u) {
            if dists[w] == -1 || dists[w] == dists[u] + 1 {
                nums[w] += nums[u];
            }
            if dists[w] == -1 {
                dists[w] = dists[u] + 1;
                queue.push_back(w);
            }
        }
    }

    BfsResult { dists, nums }
}

/// BFS from `source`, visiting only vertices in `domain`.
///
/// Returns empty maps if `source` itself is not in `domain`.
pub fn bfs_domain(
    graph: &Graph,
    source: usize,
    domain: &HashSet<usize>,
) -> (HashMap<usize, i64>, HashMap<usize, u64>) {
    let mut dists = HashMap::new();
    let mut nums = HashMap::new();

    if !domain.contains(&source) {
        return (dists, nums);
    }

    let mut queue = VecDeque::new();
    dists.insert(source, 0i64);
    nums.insert(source, 1u64);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let du = dists[&u];
        let nu = nums[&u];
        for &w in graph.neighbors(u) {
            if !domain.contains(&w) {
                continue;
            }
            let entry_is_new = !dists.contains_key(&w);
            if entry_is_new || dists[&w] == du + 1 {
                *nums.entry(w).or_insert(0) += nu;
            }
            if entry_is_new {
                dists.insert(w, du + 1);
                queue.push_back(w);
            }
        }
    }

    (dists, nums)
}

/// Dense, seed-avoiding BFS from `source`: a neighbor `w` is only relaxed if it is not a seed
/// and `baseline_dists[w] == baseline_dists[u] + 1`, i.e. it lies on a shortest path in the
/// baseline distance field. Returns all-zero counts if `source` is not itself at baseline
/// distance zero (the design's seed-abort guard: a restricted search only makes sense rooted at
/// the original source).
pub fn restricted_bfs_dense(
    graph: &Graph,
    source: usize,
    baseline_dists: &[i64],
    is_seed: &[bool],
) -> Vec<u64> {
    let v = graph.vertex_count();
    let mut nums = vec![0u64; v];

    if baseline_dists[source] != 0 {
        return nums;
    }

    let mut dists = vec![-1i64; v];
    let mut queue = VecDeque::with_capacity(v);
    dists[source] = 0;
    nums[source] = 1;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &w in graph.neighbors(u) {
            if is_seed[w] {
                continue;
            }
            if baseline_dists[w] != baseline_dists[u] + 1 {
                continue;
            }
            if dists[w] == -1 || dists[w] == dists[u] + 1 {
                nums[w] += nums[u];
            }
            if dists[w] == -1 {
                dists[w] = dists[u] + 1;
                queue.push_back(w);
            }
        }
    }

    nums
}

/// Domain- and seed-restricted BFS from `source`, for rebuilding a hyperedge over the vertex set
/// it originally touched. Same seed-abort guard as [`restricted_bfs_dense`], plus a domain guard.
pub fn restricted_bfs_domain(
    graph: &Graph,
    source: usize,
    baseline_dists: &HashMap<usize, i64>,
    is_seed: &[bool],
    domain: &HashSet<usize>,
) -> HashMap<usize, u64> {
    let mut nums = HashMap::new();

    if !domain.contains(&source) {
        return nums;
    }
    if let Some(&d) = baseline_dists.get(&source) {
        if d != 0 {
            return nums;
        }
    }

    let mut dists = HashMap::new();
    let mut queue = VecDeque::new();
    dists.insert(source, 0i64);
    nums.insert(source, 1u64);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let du = dists[&u];
        let nu = nums[&u];
        for &w in graph.neighbors(u) {
            if !domain.contains(&w) || is_seed[w] {
                continue;
            }
            let Some(&bw) = baseline_dists.get(&w) else {
                continue;
            };
            if bw != baseline_dists[&u] + 1 {
                continue;
            }
            let entry_is_new = !dists.contains_key(&w);
            if entry_is_new || dists[&w] == du + 1 {
                *nums.entry(w).or_insert(0) += nu;
            }
            if entry_is_new {
                dists.insert(w, du + 1);
                queue.push_back(w);
            }
        }
    }

    nums
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)])
    }

    #[test]
    fn bfs_full_counts_single_path() {
        let g = path_graph();
        let r = bfs_full(&g, 0);
        assert_eq!(r.dists, vec![0, 1, 2, 3]);
        assert_eq!(r.nums, vec![1, 1, 1, 1]);
    }

    #[test]
    fn bfs_full_counts_diamond_paths() {
        let g = Graph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
        let r = bfs_full(&g, 0);
        assert_eq!(r.dists, vec![0, 1, 1, 2]);
        assert_eq!(r.nums[3], 2);
    }

    #[test]
    fn bfs_domain_ignores_outside_domain() {
        let g = path_graph();
        let domain: HashSet<usize> = [0, 1].into_iter().collect();
        let (dists, nums) = bfs_domain(&g, 0, &domain);
        assert_eq!(dists.get(&1), Some(&1));
        assert_eq!(dists.get(&2), None);
        assert_eq!(nums.get(&1), Some(&1));
    }

    #[test]
    fn bfs_domain_empty_when_source_excluded() {
        let g = path_graph();
        let domain: HashSet<usize> = [1, 2].into_iter().collect();
        let (dists, nums) = bfs_domain(&g, 0, &domain);
        assert!(dists.is_empty());
        assert!(nums.is_empty());
    }

    #[test]
    fn restricted_bfs_dense_skips_seeds() {
        let g = path_graph();
        let base = bfs_full(&g, 0);
        let mut is_seed = vec![false; 4];
        is_seed[2] = true;
        let nums = restricted_bfs_dense(&g, 0, &base.dists, &is_seed);
        assert_eq!(nums[1], 1);
        assert_eq!(nums[2], 0, "seed vertex itself is never relaxed into");
        assert_eq!(nums[3], 0, "only reachable via the seed at distance 2");
    }

    #[test]
    fn restricted_bfs_dense_aborts_off_baseline_source() {
        let g = path_graph();
        let base = bfs_full(&g, 0);
        let is_seed = vec![false; 4];
        let nums = restricted_bfs_dense(&g, 1, &base.dists, &is_seed);
        assert!(nums.iter().all(|&n| n == 0));
    }

    #[test]
    fn restricted_bfs_domain_matches_dense_within_domain() {
        let g = Graph::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        let base = bfs_full(&g, 0);
        let is_seed = vec![false; 5];
        let domain: HashSet<usize> = (0..5).collect();
        let base_map: HashMap<usize, i64> = base.dists.iter().copied().enumerate().collect();
        let nums = restricted_bfs_domain(&g, 0, &base_map, &is_seed, &domain);
        let dense = restricted_bfs_dense(&g, 0, &base.dists, &is_seed);
        for v in 0..5 {
            assert_eq!(nums.get(&v).copied().unwrap_or(0), dense[v]);
        }
    }
}
