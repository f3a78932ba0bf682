//! Typed configuration surface.
//!
//! This module is the boundary artifact a caller (a thin CLI binary, a service, a notebook)
//! would deserialize from TOML/JSON/env and hand to the library's entry points in
//! [`crate::centrality`]. The library's algorithmic core never parses argv or env itself —
//! that remains the out-of-scope glue named in the design's purpose statement.

use serde::{Deserialize, Serialize};

/// Numerical tolerance for lazy-heap staleness checks in the adaptive selector.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Default sample budget for the hypergraph sampler.
pub const DEFAULT_M: usize = 1024;

/// Default adaptive seed budget.
pub const DEFAULT_K: usize = 2;

/// Which centrality objective and evaluation strategy to run.
///
/// The string form of each variant matches the method names used by the original
/// `adaptive-betweenness-centrality` CLI (`exact-coverage`, `topk-betweenness`, ...), kept here
/// for configuration-file compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    ExactCoverage,
    ApproximateCoverage,
    TopkCoverage,
    ExactBetweenness,
    ApproximateBetweenness,
    TopkBetweenness,
}

/// Typed configuration bundling the options recognized by the design's external interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Which objective and evaluation strategy to run.
    pub method: Method,

    /// Sample budget for the hypergraph sampler.
    #[serde(default = "default_m")]
    pub m: usize,

    /// Adaptive seed budget.
    #[serde(default = "default_k")]
    pub k: usize,

    /// Lazy-heap staleness tolerance.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Optional RNG seed for reproducible sampling.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_m() -> usize {
    DEFAULT_M
}

fn default_k() -> usize {
    DEFAULT_K
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: Method::TopkCoverage,
            m: DEFAULT_M,
            k: DEFAULT_K,
            epsilon: DEFAULT_EPSILON,
            seed: None,
        }
    }
}
