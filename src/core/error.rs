/*!
# Unified Error Type

This crate's algorithmic core (BFS, dependency accumulation, sampling, selection) is total: every
recoverable condition identified by the design (a disconnected sample, a seed-intercepted pair, an
exhausted selection budget) is handled locally by skipping the sample or stopping the loop. The
only fallible edge of the system is loading a graph from an external edge list, so this module
stays small relative to a general-purpose library's exception hierarchy.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for `adaptive_centrality` operations.
#[derive(Debug)]
pub enum CentralityError {
    /// A line in an edge-list file could not be parsed.
    InvalidInput(String),

    /// An I/O error occurred while reading or writing a graph file.
    Io(String),
}

impl fmt::Display for CentralityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CentralityError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CentralityError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for CentralityError {}

impl From<std::io::Error> for CentralityError {
    fn from(e: std::io::Error) -> Self {
        CentralityError::Io(e.to_string())
    }
}
