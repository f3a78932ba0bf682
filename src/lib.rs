//! Adaptive seed selection for coverage and betweenness centrality.
//!
//! This crate samples a hypergraph sketch of shortest-path traffic on an
//! undirected graph and uses it to greedily pick a budget of `k` seed
//! vertices that jointly maximize coverage or betweenness centrality, where
//! a vertex's contribution is only counted on shortest paths that do not
//! already pass through a previously chosen seed. Exact, non-adaptive
//! reference engines are included alongside the adaptive approximators for
//! validation; see [`centrality`] for the full API.

pub mod centrality;
pub mod config;
pub mod core;
#[cfg(feature = "logging")]
mod settings;
