use negcycle_apsp::graph::Graph;
use negcycle_apsp::{BellmanFord, DirectedGraph, Distance, Johnson, ShortestPathAlgorithm};

fn main() -> Result<(), negcycle_apsp::Error> {
    // A small graph with one negative edge and no negative cycle
    let graph = DirectedGraph::new(
        ["a", "b", "c", "d", "e"],
        [
            ("a", "b", 6),
            ("a", "c", 7),
            ("b", "d", 5),
            ("b", "e", -4),
            ("c", "d", -3),
            ("c", "e", 9),
            ("d", "b", -2),
            ("e", "a", 2),
            ("e", "d", 7),
        ],
    )?;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    // Single source
    let bellman_ford = BellmanFord::new();
    let result = bellman_ford.evaluate(&"a", &graph)?;

    println!(
        "\n{} results from a:",
        <BellmanFord as ShortestPathAlgorithm<&str, i32, DirectedGraph<&str, i32>>>::name(&bellman_ford)
    );
    for v in graph.vertices() {
        match result.distance_to(v) {
            Some(Distance::Finite(dist)) => {
                let path = result.path_to(v).unwrap_or_default();
                println!("Vertex {}: distance = {}, path = {:?}", v, dist, path);
            }
            _ => println!("Vertex {}: unreachable", v),
        }
    }

    // All pairs
    let all_pairs = Johnson::new().all_pairs(&graph)?;
    println!("\nJohnson found {} reachable pairs:", all_pairs.len());
    let mut edges = all_pairs.into_edges();
    edges.sort_by(|x, y| (x.from, x.to).cmp(&(y.from, y.to)));
    for edge in edges {
        println!("  {} -> {}: {}", edge.from, edge.to, edge.weight);
    }

    Ok(())
}
