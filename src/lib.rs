//! negcycle_apsp - Shortest paths on directed graphs with negative edge weights
//!
//! This library provides Bellman-Ford single-source shortest paths with
//! negative-cycle detection and Johnson's all-pairs shortest paths, both over
//! an immutable directed graph whose vertices can be any hashable value.
//!
//! Johnson's algorithm runs Bellman-Ford once from a virtual source to obtain
//! a potential function, reweights every edge to be non-negative, and then
//! runs Dijkstra from every vertex, in O(V·E + V²·log V) overall.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    bellman_ford::BellmanFord,
    dijkstra::Dijkstra,
    johnson::{AllPairsResult, AugmentedVertex, Johnson},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{Distance, Weight};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex not found in graph: {0}")]
    UnknownVertex(String),

    #[error("Graph contains negative egde cycle reachable from {origin}")]
    NegativeCycle { origin: String },

    #[error("Auxiliary vertex {0} already belongs to the graph")]
    AuxiliaryVertexInGraph(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(String),

    #[error("Edge weight arithmetic overflowed")]
    WeightOverflow,
}

impl Error {
    /// Builds an `UnknownVertex` error from any debuggable vertex value
    pub fn unknown_vertex<T: std::fmt::Debug>(vertex: &T) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }

    /// Builds a `NegativeCycle` error naming the evaluation source
    pub fn negative_cycle<T: std::fmt::Debug>(source: &T) -> Self {
        Error::NegativeCycle {
            origin: format!("{:?}", source),
        }
    }

    /// Returns true if this error reports a negative-weight cycle
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Error::NegativeCycle { .. })
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
