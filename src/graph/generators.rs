use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{DirectedGraph, Edge};
use crate::Result;

/// Number of edges to draw for `n` vertices at the given average out-degree
fn edge_budget(n: usize, edge_factor: f64) -> usize {
    (edge_factor.max(0.0) * n as f64) as usize
}

/// Generates a random directed graph with approximately `edge_factor * n` edges.
///
/// Weights are drawn uniformly from `[1, 100)`. Self-loops are skipped.
/// The same `seed` always yields the same graph.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();

    if n > 1 {
        for _ in 0..edge_budget(n, edge_factor) {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                edges.push(Edge::new(u, v, OrderedFloat(rng.gen_range(1.0..100.0))));
            }
        }
    }

    DirectedGraph::new(0..n, edges)
}

/// Generates a graph with negative edges but no negative cycle.
///
/// Every edge gets a non-negative base weight shifted by `p(u) - p(v)` for a
/// random potential `p`. Around any cycle the shifts cancel, so every cycle
/// keeps its non-negative base total while individual edges go negative.
pub fn generate_potential_graph(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> Result<DirectedGraph<usize, i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let potentials: Vec<i64> = (0..n).map(|_| rng.gen_range(0..50)).collect();
    let mut edges = Vec::new();

    if n > 1 {
        for _ in 0..edge_budget(n, edge_factor) {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let base: i64 = rng.gen_range(0..20);
                edges.push(Edge::new(u, v, base + potentials[u] - potentials[v]));
            }
        }
    }

    DirectedGraph::new(0..n, edges)
}

/// Generates a ring `0 -> 1 -> ... -> n-1 -> 0` whose total weight is -1.
///
/// All ring edges weigh 1 except the closing edge, which weighs `-n`. With
/// `n == 1` the ring degenerates to a self-loop of weight -1.
pub fn generate_negative_cycle_graph(n: usize) -> Result<DirectedGraph<usize, i64>> {
    let edges = (0..n).map(|u| {
        let v = (u + 1) % n;
        let weight = if v == 0 { -(n as i64) } else { 1 };
        Edge::new(u, v, weight)
    });

    DirectedGraph::new(0..n, edges)
}
