use std::time::{Duration, Instant};

use negcycle_apsp::graph::generators::generate_potential_graph;
use negcycle_apsp::graph::{DirectedGraph, Graph};
use negcycle_apsp::{BellmanFord, Johnson};

// Runs Bellman-Ford from every vertex, the baseline Johnson improves on
fn repeated_bellman_ford(graph: &DirectedGraph<usize, i64>) -> (Duration, usize) {
    let bellman_ford = BellmanFord::new();
    let start = Instant::now();
    let mut pairs = 0;

    for source in graph.vertices() {
        match bellman_ford.evaluate(source, graph) {
            Ok(result) => pairs += result.reachable().count() - 1,
            Err(err) => {
                eprintln!("  Bellman-Ford failed from {}: {}", source, err);
                return (start.elapsed(), 0);
            }
        }
    }

    (start.elapsed(), pairs)
}

fn johnson(graph: &DirectedGraph<usize, i64>, parallel: bool) -> (Duration, usize) {
    let start = Instant::now();
    match Johnson::new().with_parallel(parallel).all_pairs(graph) {
        Ok(result) => (start.elapsed(), result.len()),
        Err(err) => {
            eprintln!("  Johnson failed: {}", err);
            (start.elapsed(), 0)
        }
    }
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![50, 100, 200, 400];
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Johnson vs repeated Bellman-Ford");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = match generate_potential_graph(size, edge_factor, size as u64) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("Failed to generate graph with {} vertices: {}", size, err);
                continue;
            }
        };
        println!(
            "\nGraph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let (bf_time, bf_pairs) = repeated_bellman_ford(&graph);
        let (seq_time, seq_pairs) = johnson(&graph, false);
        let (par_time, par_pairs) = johnson(&graph, true);

        if bf_pairs != seq_pairs || seq_pairs != par_pairs {
            eprintln!(
                "  Pair counts disagree: bellman-ford={} johnson={} johnson-parallel={}",
                bf_pairs, seq_pairs, par_pairs
            );
        }

        println!("  Repeated Bellman-Ford: {:?}", bf_time);
        println!("  Johnson (sequential):  {:?}", seq_time);
        println!("  Johnson (parallel):    {:?}", par_time);

        results.push((size, bf_time, seq_time, par_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<10}",
        "Vertices", "BF x V (ms)", "Johnson (ms)", "Parallel (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, bf_time, seq_time, par_time) in &results {
        let speedup = bf_time.as_secs_f64() / seq_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15} | {:<10.2}",
            size,
            bf_time.as_millis(),
            seq_time.as_millis(),
            par_time.as_millis(),
            speedup
        );
    }
}
