use std::collections::HashMap;

use crate::data_structures::Weight;
use crate::graph::traits::{Graph, Vertex};
use crate::graph::Edge;
use crate::{Error, Result};

/// An immutable directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Vertices in insertion order; position is the vertex index
    vertices: Vec<T>,

    /// Vertex value -> index into `vertices`
    index: HashMap<T, usize>,

    /// Edges as given at construction
    edges: Vec<Edge<T, W>>,

    /// Outgoing edges for each vertex index: [(target_index, weight)]
    outgoing: Vec<Vec<(usize, W)>>,
}

impl<T, W> DirectedGraph<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Builds a graph from a vertex collection and an edge collection.
    ///
    /// Repeated vertices are ignored after their first occurrence. Fails with
    /// `Error::UnknownVertex` if an edge endpoint is not in the vertex
    /// collection, and with `Error::InvalidWeight` for non-finite weights.
    pub fn new<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        E: IntoIterator,
        E::Item: Into<Edge<T, W>>,
    {
        let mut graph = DirectedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
        };

        for vertex in vertices {
            if graph.index.contains_key(&vertex) {
                continue;
            }
            graph.index.insert(vertex.clone(), graph.vertices.len());
            graph.vertices.push(vertex);
            graph.outgoing.push(Vec::new());
        }

        for edge in edges {
            let edge: Edge<T, W> = edge.into();
            let from = graph
                .index
                .get(&edge.from)
                .copied()
                .ok_or_else(|| Error::unknown_vertex(&edge.from))?;
            let to = graph
                .index
                .get(&edge.to)
                .copied()
                .ok_or_else(|| Error::unknown_vertex(&edge.to))?;
            if !edge.weight.is_valid() {
                return Err(Error::InvalidWeight(format!("{:?}", edge.weight)));
            }

            graph.outgoing[from].push((to, edge.weight));
            graph.edges.push(edge);
        }

        Ok(graph)
    }

    /// Creates a graph with no vertices and no edges
    pub fn empty() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Builds a graph with the same vertices and edges but transformed weights.
    ///
    /// `f` receives `(from_index, to_index, weight)` for every edge.
    pub fn map_weights<F>(&self, mut f: F) -> Result<DirectedGraph<T, W>>
    where
        F: FnMut(usize, usize, W) -> Result<W>,
    {
        let mut outgoing = Vec::with_capacity(self.outgoing.len());
        for (u, edges) in self.outgoing.iter().enumerate() {
            let mapped = edges
                .iter()
                .map(|&(v, w)| f(u, v, w).map(|w| (v, w)))
                .collect::<Result<Vec<_>>>()?;
            outgoing.push(mapped);
        }

        // Rebuild the edge list from the adjacency so both stay in step
        let edges = outgoing
            .iter()
            .enumerate()
            .flat_map(|(u, targets)| {
                targets
                    .iter()
                    .map(move |&(v, w)| Edge::new(self.vertices[u].clone(), self.vertices[v].clone(), w))
            })
            .collect();

        Ok(DirectedGraph {
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            edges,
            outgoing,
        })
    }

    /// Returns true if no edge has a negative weight
    pub fn validate_non_negative(&self) -> bool {
        self.edges.iter().all(|edge| edge.weight >= W::zero())
    }
}

impl<T, W> Graph<T, W> for DirectedGraph<T, W>
where
    T: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.vertices.iter())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<T, W>> + '_> {
        Box::new(self.edges.iter())
    }

    fn outgoing_edges(&self, vertex: &T) -> Box<dyn Iterator<Item = (&T, W)> + '_> {
        match self.index.get(vertex) {
            Some(&u) => Box::new(
                self.outgoing[u]
                    .iter()
                    .map(move |&(v, w)| (&self.vertices[v], w)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, from: &T, to: &T) -> Option<W> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        self.outgoing[u]
            .iter()
            .filter(|(target, _)| *target == v)
            .map(|(_, weight)| *weight)
            .min()
    }

    fn index_of(&self, vertex: &T) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn vertex_at(&self, index: usize) -> Option<&T> {
        self.vertices.get(index)
    }

    fn outgoing_indexed(&self, index: usize) -> &[(usize, W)] {
        self.outgoing.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}
