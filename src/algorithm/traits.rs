use log::warn;
use std::collections::{HashMap, HashSet};

use crate::data_structures::{Distance, Weight};
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Result of a single-source shortest path computation
#[derive(Debug, Clone)]
pub struct ShortestPathResult<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Distance from the source to every vertex of the graph
    pub distances: HashMap<T, Distance<W>>,

    /// Predecessor of each reached vertex in the shortest path tree
    pub predecessors: HashMap<T, T>,

    /// Source vertex
    pub source: T,
}

impl<T, W> ShortestPathResult<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Translates index-level distances back to vertex values
    pub(crate) fn from_indexed<G>(graph: &G, source: usize, paths: IndexedPaths<W>) -> Self
    where
        G: Graph<T, W>,
    {
        let labels: Vec<&T> = graph.vertices().collect();

        let distances = labels
            .iter()
            .map(|v| (*v).clone())
            .zip(paths.distances)
            .collect();

        let predecessors = paths
            .predecessors
            .iter()
            .enumerate()
            .filter_map(|(v, pred)| pred.map(|p| (labels[v].clone(), labels[p].clone())))
            .collect();

        ShortestPathResult {
            distances,
            predecessors,
            source: labels[source].clone(),
        }
    }

    /// Distance to `target`, or `None` if the vertex is not in the graph
    pub fn distance_to(&self, target: &T) -> Option<Distance<W>> {
        self.distances.get(target).copied()
    }

    /// Iterates over the vertices with a finite distance
    pub fn reachable(&self) -> impl Iterator<Item = (&T, W)> + '_ {
        self.distances
            .iter()
            .filter_map(|(v, d)| d.finite().map(|w| (v, w)))
    }

    /// Walks the predecessor chain from `target` back to the source
    pub fn path_to(&self, target: &T) -> Option<Vec<T>> {
        if !matches!(self.distances.get(target), Some(Distance::Finite(_))) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut visited = HashSet::new();
        visited.insert(target);
        let mut current = target;

        while *current != self.source {
            let pred = self.predecessors.get(current)?;
            if !visited.insert(pred) {
                warn!("Cycle detected in path reconstruction at vertex {:?}", pred);
                return None;
            }
            path.push(pred.clone());
            current = pred;
        }

        path.reverse();
        Some(path)
    }
}

/// Distances and predecessors addressed by dense vertex index
#[derive(Debug, Clone)]
pub(crate) struct IndexedPaths<W> {
    pub distances: Vec<Distance<W>>,
    pub predecessors: Vec<Option<usize>>,
}

impl<W: Weight> IndexedPaths<W> {
    /// All vertices unreached except `source`, which sits at distance zero
    pub fn init(n: usize, source: usize) -> Self {
        let mut distances = vec![Distance::Infinite; n];
        distances[source] = Distance::zero();
        IndexedPaths {
            distances,
            predecessors: vec![None; n],
        }
    }

    /// Converts accumulated distances back to `N`, failing if any does not fit
    pub fn narrow<N>(self) -> Result<IndexedPaths<N>>
    where
        N: Weight<Wide = W>,
    {
        let distances = self
            .distances
            .into_iter()
            .map(|distance| match distance {
                Distance::Finite(wide) => N::narrow(wide)
                    .map(Distance::Finite)
                    .ok_or(Error::WeightOverflow),
                Distance::Infinite => Ok(Distance::Infinite),
            })
            .collect::<Result<_>>()?;

        Ok(IndexedPaths {
            distances,
            predecessors: self.predecessors,
        })
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<T, W, G>
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &T) -> Result<ShortestPathResult<T, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<T, W>, target: &T) -> Option<Vec<T>> {
        result.path_to(target)
    }
}
