use num_traits::Zero;
use log::{debug, warn};

use crate::algorithm::traits::IndexedPaths;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{Distance, Weight};
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths.
///
/// Handles negative edge weights and fails with `Error::NegativeCycle` when a
/// negative-weight cycle is reachable from the source. O(V·E).
#[derive(Debug, Clone)]
pub struct BellmanFord {
    /// Stop relaxing once a full pass changes nothing
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with early exit enabled
    pub fn new() -> Self {
        BellmanFord { early_exit: true }
    }

    /// Enable or disable stopping before `|V| - 1` passes when nothing changes
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Computes the distance from `source` to every vertex of `graph`.
    ///
    /// Fails with `Error::UnknownVertex` if `source` is not in the graph.
    pub fn evaluate<T, W, G>(&self, source: &T, graph: &G) -> Result<ShortestPathResult<T, W>>
    where
        T: Vertex,
        W: Weight,
        G: Graph<T, W>,
    {
        let source_index = graph
            .index_of(source)
            .ok_or_else(|| Error::unknown_vertex(source))?;
        let paths = self.run_indexed(graph, source_index)?;
        Ok(ShortestPathResult::from_indexed(graph, source_index, paths))
    }

    pub(crate) fn run_indexed<T, W, G>(&self, graph: &G, source: usize) -> Result<IndexedPaths<W>>
    where
        T: Vertex,
        W: Weight,
        G: Graph<T, W>,
    {
        self.run_wide(graph, source)?.narrow()
    }

    /// Runs the relaxation with distances held in `W::Wide`.
    ///
    /// Johnson keeps these wide distances as its potentials, which may lie
    /// below the minimum of `W` even when every edge weight fits.
    pub(crate) fn run_wide<T, W, G>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<IndexedPaths<W::Wide>>
    where
        T: Vertex,
        W: Weight,
        G: Graph<T, W>,
    {
        let n = graph.vertex_count();
        let mut paths = IndexedPaths::init(n, source);

        let mut passes = 0;
        for _ in 0..n.saturating_sub(1) {
            passes += 1;
            if !relax_all(graph, &mut paths)? && self.early_exit {
                break;
            }
        }
        debug!("Bellman-Ford settled after {} of {} passes", passes, n.saturating_sub(1));

        // One more pass: anything still relaxable lies on or behind a negative cycle
        for u in 0..n {
            let Distance::Finite(dist_u) = paths.distances[u] else {
                continue;
            };
            for &(v, weight) in graph.outgoing_indexed(u) {
                let weight = weight.widen();
                let relaxable = match dist_u.checked_sum(weight) {
                    Some(candidate) => Distance::Finite(candidate) < paths.distances[v],
                    // Below the accumulator's minimum, so below any stored distance
                    None => weight < W::Wide::zero(),
                };
                if relaxable {
                    let origin = graph
                        .vertex_at(source)
                        .map(Error::negative_cycle)
                        .unwrap_or_else(|| Error::negative_cycle(&source));
                    warn!("{}", origin);
                    return Err(origin);
                }
            }
        }

        Ok(paths)
    }
}

/// Relaxes every edge once, returning whether any distance improved
fn relax_all<T, W, G>(graph: &G, paths: &mut IndexedPaths<W::Wide>) -> Result<bool>
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    let mut updated = false;

    for u in 0..graph.vertex_count() {
        let Distance::Finite(dist_u) = paths.distances[u] else {
            continue;
        };
        for &(v, weight) in graph.outgoing_indexed(u) {
            let weight = weight.widen();
            let candidate = match dist_u.checked_sum(weight) {
                Some(candidate) => Distance::Finite(candidate),
                // Left for the verification pass, which reports it as a cycle
                None if weight < W::Wide::zero() => continue,
                None if paths.distances[v].is_infinite() => return Err(Error::WeightOverflow),
                None => continue,
            };
            if candidate < paths.distances[v] {
                paths.distances[v] = candidate;
                paths.predecessors[v] = Some(u);
                updated = true;
            }
        }
    }

    Ok(updated)
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W, G> ShortestPathAlgorithm<T, W, G> for BellmanFord
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &T) -> Result<ShortestPathResult<T, W>> {
        self.evaluate(source, graph)
    }
}
