/*!
# Input/Output (I/O) Routines

Reads the whitespace-separated edge-list format described in the design: one edge per line as two
non-negative integer vertex ids, `#` starting a line (or appearing mid-line) introduces a comment,
and the vertex universe is `0..=max(id_seen)` so that ids mentioned only implicitly (never as an
endpoint) still yield isolated vertices. Duplicate edges are allowed and collapsed by
[`Graph::from_edges`](crate::core::graph::Graph::from_edges).
*/

use crate::core::error::CentralityError;
use crate::core::graph::Graph;
use std::io::BufRead;

/// Reads an undirected edge list from any [`BufRead`] source.
///
/// # Errors
///
/// Returns [`CentralityError::InvalidInput`] if a non-comment, non-empty line does not contain
/// two parseable vertex ids.
///
/// # Example
///
/// ```rust
/// use adaptive_centrality::core::io::read_edge_list;
///
/// let data = "# a comment\n0 1\n1 2 # trailing comment\n";
/// let graph = read_edge_list(data.as_bytes()).expect("valid edge list");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub fn read_edge_list(source: impl BufRead) -> Result<Graph, CentralityError> {
    let mut edges = Vec::new();
    let mut max_id = None;

    for line in source.lines() {
        let line = line?;
        let line = match line.find('#') {
            Some(idx) => &line[..idx],
            None => &line[..],
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() < 2 {
            return Err(CentralityError::InvalidInput(format!(
                "expected two vertex ids, got: {:?}",
                tokens
            )));
        }
        let u: usize = tokens[0].parse().map_err(|e| {
            CentralityError::InvalidInput(format!("bad source id '{}': {}", tokens[0], e))
        })?;
        let v: usize = tokens[1].parse().map_err(|e| {
            CentralityError::InvalidInput(format!("bad target id '{}': {}", tokens[1], e))
        })?;
        max_id = Some(max_id.map_or(u.max(v), |m: usize| m.max(u).max(v)));
        edges.push((u, v));
    }

    let vertex_count = max_id.map_or(0, |m| m + 1);
    Ok(Graph::from_edges(vertex_count, edges))
}

/// Reads an undirected edge list from a file path.
///
/// # Errors
///
/// Returns [`CentralityError::Io`] if the file cannot be opened, or
/// [`CentralityError::InvalidInput`] if a line is malformed.
pub fn read_edge_list_file(path: &str) -> Result<Graph, CentralityError> {
    let file = std::fs::File::open(path)?;
    read_edge_list(std::io::BufReader::new(file))
}
