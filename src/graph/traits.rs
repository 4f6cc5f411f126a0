use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::Weight;
use crate::graph::Edge;

/// Anything usable as a vertex: compared and hashed by value
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing an immutable weighted directed graph
///
/// Besides the vertex-level queries, every vertex has a dense index in
/// `0..vertex_count()`. The shortest-path algorithms work on those indices and
/// only translate back to vertex values when building their results.
pub trait Graph<T, W>: Debug
where
    T: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertices in index order
    fn vertices(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Returns an iterator over the edges in insertion order
    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<T, W>> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex as `(target, weight)`
    fn outgoing_edges(&self, vertex: &T) -> Box<dyn Iterator<Item = (&T, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &T) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &T, to: &T) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of the cheapest edge `from -> to` if one exists
    fn get_edge_weight(&self, from: &T, to: &T) -> Option<W>;

    /// Dense index of a vertex
    fn index_of(&self, vertex: &T) -> Option<usize>;

    /// Vertex stored at a dense index
    fn vertex_at(&self, index: usize) -> Option<&T>;

    /// Outgoing edges of the vertex at `index` as `(target index, weight)`
    fn outgoing_indexed(&self, index: usize) -> &[(usize, W)];
}
