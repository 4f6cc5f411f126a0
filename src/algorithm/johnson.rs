use num_traits::Zero;
use log::{debug, trace};
use rayon::prelude::*;
use std::collections::HashMap;
use std::iter;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::data_structures::{Distance, Weight};
use crate::graph::{DirectedGraph, Edge, Graph, Vertex};
use crate::{Error, Result};

/// Vertex of the augmented graph Johnson's algorithm builds internally
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AugmentedVertex<T> {
    /// A vertex of the caller's graph
    Original(T),
    /// The extra source with a zero-weight edge to every original vertex
    VirtualSource,
}

/// Shortest distances for every reachable ordered pair of distinct vertices.
///
/// Each entry is a synthetic edge `(from, to, distance)`. The order of the
/// entries is unspecified.
#[derive(Debug, Clone)]
pub struct AllPairsResult<T, W> {
    edges: Vec<Edge<T, W>>,
}

impl<T, W> AllPairsResult<T, W>
where
    T: Vertex,
    W: Weight,
{
    pub fn edges(&self) -> &[Edge<T, W>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<T, W>> {
        self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Distance from `from` to `to`; `Infinite` for unreachable or self pairs
    pub fn distance(&self, from: &T, to: &T) -> Distance<W> {
        self.edges
            .iter()
            .find(|edge| edge.from == *from && edge.to == *to)
            .map(|edge| Distance::Finite(edge.weight))
            .unwrap_or(Distance::Infinite)
    }

    /// Indexes the result by `(from, to)` for repeated lookups
    pub fn to_map(&self) -> HashMap<(T, T), W> {
        self.edges
            .iter()
            .map(|edge| ((edge.from.clone(), edge.to.clone()), edge.weight))
            .collect()
    }
}

impl<T, W> IntoIterator for AllPairsResult<T, W> {
    type Item = Edge<T, W>;
    type IntoIter = std::vec::IntoIter<Edge<T, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Johnson's all-pairs shortest paths.
///
/// Runs Bellman-Ford once from a virtual source to get a potential `h`,
/// reweights every edge to `w + h(u) - h(v) >= 0`, then runs Dijkstra from
/// every vertex and undoes the reweighting on the results.
#[derive(Debug, Clone, Default)]
pub struct Johnson {
    /// Run the per-source Dijkstra passes on the rayon pool
    parallel: bool,
}

impl Johnson {
    /// Creates a new sequential Johnson instance
    pub fn new() -> Self {
        Johnson { parallel: false }
    }

    /// Enable or disable parallel per-source relaxation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Computes all-pairs shortest distances.
    ///
    /// Fails with `Error::NegativeCycle` if the graph contains a negative cycle.
    pub fn all_pairs<T, W, G>(&self, graph: &G) -> Result<AllPairsResult<T, W>>
    where
        T: Vertex + Send + Sync,
        W: Weight,
        G: Graph<T, W>,
    {
        let augmented = augment(
            graph,
            |v| AugmentedVertex::Original(v.clone()),
            AugmentedVertex::VirtualSource,
        )?;
        self.solve(graph, &augmented)
    }

    /// Computes all-pairs shortest distances using `auxiliary` as the label of
    /// the virtual source.
    ///
    /// Fails with `Error::AuxiliaryVertexInGraph` if `auxiliary` is already a
    /// vertex of `graph`.
    pub fn all_pairs_with_auxiliary<T, W, G>(
        &self,
        graph: &G,
        auxiliary: T,
    ) -> Result<AllPairsResult<T, W>>
    where
        T: Vertex + Send + Sync,
        W: Weight,
        G: Graph<T, W>,
    {
        if graph.has_vertex(&auxiliary) {
            return Err(Error::AuxiliaryVertexInGraph(format!("{:?}", auxiliary)));
        }
        let augmented = augment(graph, T::clone, auxiliary)?;
        self.solve(graph, &augmented)
    }

    fn solve<T, W, G, V>(&self, graph: &G, augmented: &DirectedGraph<V, W>) -> Result<AllPairsResult<T, W>>
    where
        T: Vertex + Send + Sync,
        W: Weight,
        G: Graph<T, W>,
        V: Vertex,
    {
        let n = graph.vertex_count();
        debug!(
            "Johnson: {} vertices, {} edges, parallel={}",
            n,
            graph.edge_count(),
            self.parallel
        );

        // The virtual source sits right after the original vertices
        let potentials = potentials(augmented, n)?;
        let reweighted = reweight(graph, &potentials)?;
        debug!("Johnson: reweighted {} edges", reweighted.edge_count());

        let labels: Vec<&T> = graph.vertices().collect();
        let from_source = |s: usize| -> Result<Vec<Edge<T, W>>> {
            trace!("Johnson: Dijkstra from {:?}", labels[s]);
            let paths = Dijkstra::run_indexed(&reweighted, s)?;

            let mut edges = Vec::new();
            for (v, distance) in paths.distances.into_iter().enumerate() {
                let Distance::Finite(reduced) = distance else {
                    continue;
                };
                if v == s {
                    continue;
                }
                let restored = reduced
                    .checked_difference(potentials[s])
                    .and_then(|d| d.checked_sum(potentials[v]))
                    .and_then(W::narrow)
                    .ok_or(Error::WeightOverflow)?;
                edges.push(Edge::new(labels[s].clone(), labels[v].clone(), restored));
            }
            Ok(edges)
        };

        let per_source: Vec<Vec<Edge<T, W>>> = if self.parallel {
            (0..n).into_par_iter().map(from_source).collect::<Result<_>>()?
        } else {
            (0..n).map(from_source).collect::<Result<_>>()?
        };

        let edges: Vec<Edge<T, W>> = per_source.into_iter().flatten().collect();
        debug!("Johnson: {} reachable pairs", edges.len());
        Ok(AllPairsResult { edges })
    }
}

/// Copies `graph` under new vertex labels and appends `virtual_source` with a
/// zero-weight edge to every vertex. Original vertex indices are preserved.
fn augment<T, W, G, V, F>(graph: &G, wrap: F, virtual_source: V) -> Result<DirectedGraph<V, W>>
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
    V: Vertex,
    F: Fn(&T) -> V,
{
    let vertices = graph
        .vertices()
        .map(&wrap)
        .chain(iter::once(virtual_source.clone()));

    let edges = graph
        .edges()
        .map(|edge| Edge::new(wrap(&edge.from), wrap(&edge.to), edge.weight))
        .chain(
            graph
                .vertices()
                .map(|v| Edge::new(virtual_source.clone(), wrap(v), W::zero())),
        );

    DirectedGraph::new(vertices, edges)
}

/// Bellman-Ford from the virtual source at index `virtual_index`; `h(v)` per original vertex.
///
/// Potentials stay in the wide accumulator type: they are path sums and may
/// lie outside the range of `W`.
fn potentials<V, W>(
    augmented: &DirectedGraph<V, W>,
    virtual_index: usize,
) -> Result<Vec<W::Wide>>
where
    V: Vertex,
    W: Weight,
{
    let paths = BellmanFord::new().run_wide(augmented, virtual_index)?;

    // Every vertex is one zero-weight hop from the virtual source, so all
    // potentials are finite and at most zero.
    Ok(paths.distances[..virtual_index]
        .iter()
        .map(|d| d.finite().unwrap_or_else(W::Wide::zero))
        .collect())
}

/// Builds the index-labelled graph with weights `w + h(u) - h(v)`, held in
/// the wide type since a reduced weight can exceed the maximum of `W`
fn reweight<T, W, G>(
    graph: &G,
    potentials: &[W::Wide],
) -> Result<DirectedGraph<usize, W::Wide>>
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    let n = graph.vertex_count();
    let mut edges = Vec::with_capacity(graph.edge_count());

    for u in 0..n {
        for &(v, weight) in graph.outgoing_indexed(u) {
            let reduced = weight
                .widen()
                .checked_sum(potentials[u])
                .and_then(|w| w.checked_difference(potentials[v]))
                .ok_or(Error::WeightOverflow)?;
            if reduced < W::Wide::zero() {
                return Err(Error::NegativeWeight(format!(
                    "reweighted edge {} -> {} is {:?}",
                    u, v, reduced
                )));
            }
            edges.push(Edge::new(u, v, reduced));
        }
    }

    DirectedGraph::new(0..n, edges)
}
