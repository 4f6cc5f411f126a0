use crate::algorithm::traits::IndexedPaths;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeapWrapper, Distance, Weight};
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation for non-negative edge weights
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs Dijkstra from the vertex at `source` without checking edge signs.
    ///
    /// Callers must guarantee every edge weight is non-negative.
    pub(crate) fn run_indexed<T, W, G>(graph: &G, source: usize) -> Result<IndexedPaths<W>>
    where
        T: Vertex,
        W: Weight,
        G: Graph<T, W>,
    {
        let mut paths = IndexedPaths::init(graph.vertex_count(), source);
        let mut settled = vec![false; graph.vertex_count()];

        let mut queue = BinaryHeapWrapper::with_capacity(graph.vertex_count());
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry for an already settled vertex
            if settled[u] {
                continue;
            }
            settled[u] = true;

            for &(v, weight) in graph.outgoing_indexed(u) {
                if settled[v] {
                    continue;
                }
                let candidate = Distance::Finite(dist_u).add_weight(weight)?;
                if candidate < paths.distances[v] {
                    paths.distances[v] = candidate;
                    paths.predecessors[v] = Some(u);
                    if let Distance::Finite(d) = candidate {
                        queue.push(v, d);
                    }
                }
            }
        }

        Ok(paths)
    }
}

impl<T, W, G> ShortestPathAlgorithm<T, W, G> for Dijkstra
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &T) -> Result<ShortestPathResult<T, W>> {
        let source_index = graph
            .index_of(source)
            .ok_or_else(|| Error::unknown_vertex(source))?;

        if let Some(edge) = graph.edges().find(|edge| edge.weight < W::zero()) {
            return Err(Error::NegativeWeight(format!(
                "{:?} -> {:?} has weight {:?}",
                edge.from, edge.to, edge.weight
            )));
        }

        let paths = Self::run_indexed(graph, source_index)?;
        Ok(ShortestPathResult::from_indexed(graph, source_index, paths))
    }
}
