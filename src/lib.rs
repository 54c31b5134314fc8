//! Shortest Path - point-to-point Dijkstra over generic directed graphs
//!
//! The engine computes the cheapest route between two nodes of a directed graph
//! with real non-negative arc weights. Tentative distances live in an indexed
//! binary min-heap that supports decrease-key in O(log n), so each query runs
//! in O((n + m) log n).
//!
//! Graphs are supplied through the read-only [`graph::GraphProvider`] contract;
//! [`DirectedGraph`] is the bundled adjacency-list provider.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

pub use algorithm::{
    dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{Arc, DirectedGraph, GraphProvider};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error<N, W>
where
    N: Debug,
    W: Debug,
{
    #[error("Unknown node: {id:?}")]
    UnknownNode { id: N },

    #[error("Negative arc weight {weight:?} on arc from {from:?} to {to:?}")]
    NegativeWeight { from: N, to: N, weight: W },

    /// No chain of arcs leads from `origin` to `target`. A path whose distance
    /// overflows the weight type is still found, reported at `W::max_value()`.
    #[error("No path from {origin:?} to {target:?}")]
    Unreachable { origin: N, target: N },
}

impl<N, W> Error<N, W>
where
    N: Debug,
    W: Debug,
{
    /// Returns true for the "no path" outcome, which is a legitimate query answer
    /// rather than a defect in the graph
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Unreachable { .. })
    }
}

/// Result type for the library
pub type Result<T, N, W> = std::result::Result<T, Error<N, W>>;

/// Finds the cheapest path from `source` to `target` using Dijkstra's algorithm
/// with its default settings.
pub fn shortest_path<N, W, G>(
    graph: &G,
    source: &N,
    target: &N,
) -> Result<ShortestPathResult<N, W>, N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
    G: GraphProvider<N, W>,
{
    Dijkstra::new().shortest_path(graph, source, target)
}
