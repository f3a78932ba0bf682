//! Loads an edge list, then runs each of the six centrality entry points over it, printing the
//! chosen seeds (or top scores) and their values.

use adaptive_centrality::centrality::{
    adaptive_approximate_betweenness, adaptive_approximate_coverage, approximate_betweenness,
    approximate_coverage, exact_betweenness, exact_coverage,
};
use adaptive_centrality::core::io::read_edge_list;

fn main() {
    let edge_list = "\
0 1\n\
1 2\n\
2 3\n\
3 4\n\
4 0\n\
1 5\n\
2 6\n";
    let graph = read_edge_list(edge_list.as_bytes()).expect("valid edge list");

    println!("graph: {} vertices, {} edges", graph.vertex_count(), graph.edge_count());

    let coverage = exact_coverage(&graph, &[]);
    println!("exact coverage: {coverage:?}");

    let betweenness = exact_betweenness(&graph, &[]);
    println!("exact betweenness: {betweenness:?}");

    let approx_coverage = approximate_coverage(&graph, 4096, &[], Some(1));
    println!("approximate coverage (m=4096): {approx_coverage:?}");

    let approx_betweenness = approximate_betweenness(&graph, 4096, &[], Some(1));
    println!("approximate betweenness (m=4096): {approx_betweenness:?}");

    let (seeds, weights) = adaptive_approximate_coverage(&graph, 4096, 3, Some(1));
    println!("adaptive coverage seeds: {seeds:?}, marginals: {weights:?}");

    let (seeds, weights) = adaptive_approximate_betweenness(&graph, 4096, 3, Some(1));
    println!("adaptive betweenness seeds: {seeds:?}, marginals: {weights:?}");
}
