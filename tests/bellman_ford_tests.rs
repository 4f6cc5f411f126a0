use negcycle_apsp::graph::generators::generate_random_graph;
use negcycle_apsp::graph::{DirectedGraph, Graph};
use negcycle_apsp::{BellmanFord, Dijkstra, Distance, Error, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

fn scenario_graph() -> DirectedGraph<u32, i64> {
    DirectedGraph::new(
        0..4,
        [(0, 2, 3), (1, 0, 2), (2, 1, 7), (2, 3, 1), (3, 0, 6)],
    )
    .unwrap()
}

#[test]
fn test_distances_from_source() {
    let graph = scenario_graph();
    let result = BellmanFord::new().evaluate(&0, &graph).unwrap();

    assert_eq!(result.source, 0);
    assert_eq!(result.distance_to(&0), Some(Distance::Finite(0)));
    assert_eq!(result.distance_to(&1), Some(Distance::Finite(10)));
    assert_eq!(result.distance_to(&2), Some(Distance::Finite(3)));
    assert_eq!(result.distance_to(&3), Some(Distance::Finite(4)));
}

#[test]
fn test_negative_edges_without_cycle() {
    let graph = DirectedGraph::new(
        ["a", "b", "c", "d"],
        [("a", "b", 4), ("a", "c", 2), ("c", "b", -1), ("b", "d", 2)],
    )
    .unwrap();
    let result = BellmanFord::new().evaluate(&"a", &graph).unwrap();

    assert_eq!(result.distance_to(&"b"), Some(Distance::Finite(1)));
    assert_eq!(result.distance_to(&"d"), Some(Distance::Finite(3)));
    assert_eq!(result.path_to(&"d"), Some(vec!["a", "c", "b", "d"]));
}

#[test]
fn test_negative_cycle_is_detected() {
    let graph: DirectedGraph<i32, i32> = DirectedGraph::new(
        0..4,
        [(0, 1, 1), (1, 2, -1), (2, 3, -1), (3, 0, -1)],
    )
    .unwrap();

    let err = BellmanFord::new().evaluate(&0, &graph).unwrap_err();
    assert!(err.is_negative_cycle());
    assert!(err.to_string().contains("Graph contains negative egde cycle"));
}

#[test]
fn test_negative_cycle_unreachable_from_source() {
    let graph = DirectedGraph::new(
        0..5,
        [(0, 1, 1), (1, 2, -1), (2, 3, -1), (3, 0, -1), (4, 4, 0)],
    )
    .unwrap();

    let result = BellmanFord::new().evaluate(&4, &graph).unwrap();
    assert_eq!(result.distance_to(&4), Some(Distance::Finite(0)));
    for v in 0..4 {
        assert_eq!(result.distance_to(&v), Some(Distance::Infinite));
    }
}

#[test]
fn test_negative_self_loop_is_a_cycle() {
    let graph = DirectedGraph::new(0..2, [(0, 1, 5), (1, 1, -1)]).unwrap();
    assert!(BellmanFord::new().evaluate(&0, &graph).unwrap_err().is_negative_cycle());
}

#[test]
fn test_unreachable_vertices_are_infinite() {
    let graph = DirectedGraph::new(0..4, [(0, 1, 2), (2, 3, 1)]).unwrap();
    let result = BellmanFord::new().evaluate(&0, &graph).unwrap();

    assert_eq!(result.distance_to(&1), Some(Distance::Finite(2)));
    assert!(result.distance_to(&2).unwrap().is_infinite());
    assert!(result.distance_to(&3).unwrap().is_infinite());
    assert_eq!(result.path_to(&3), None);
    assert_eq!(result.reachable().count(), 2);
}

#[test]
fn test_unknown_source_fails_fast() {
    let graph = scenario_graph();
    let err = BellmanFord::new().evaluate(&17, &graph).unwrap_err();
    assert_eq!(err, Error::UnknownVertex("17".to_string()));
}

#[test]
fn test_single_vertex_graph() {
    let graph: DirectedGraph<char, i32> = DirectedGraph::new(['x'], Vec::<(char, char, i32)>::new()).unwrap();
    let result = BellmanFord::new().evaluate(&'x', &graph).unwrap();
    assert_eq!(result.distance_to(&'x'), Some(Distance::Finite(0)));
    assert_eq!(result.path_to(&'x'), Some(vec!['x']));
}

#[test]
fn test_full_passes_match_early_exit() {
    let graph = scenario_graph();
    for source in 0..4 {
        let early = BellmanFord::new().evaluate(&source, &graph).unwrap();
        let full = BellmanFord::new().with_early_exit(false).evaluate(&source, &graph).unwrap();
        assert_eq!(early.distances, full.distances);
    }
}

#[test]
fn test_overflow_is_reported() {
    let graph = DirectedGraph::new(0..3, [(0, 1, 100i8), (1, 2, 100i8)]).unwrap();
    assert_eq!(
        BellmanFord::new().evaluate(&0, &graph).unwrap_err(),
        Error::WeightOverflow
    );
}

#[test]
fn test_path_reconstruction_through_trait() {
    let graph = scenario_graph();
    let bellman_ford = BellmanFord::new();
    let result = bellman_ford.compute_shortest_paths(&graph, &0).unwrap();

    let path = <BellmanFord as ShortestPathAlgorithm<u32, i64, DirectedGraph<u32, i64>>>::get_path(
        &bellman_ford,
        &result,
        &1,
    );
    assert_eq!(path, Some(vec![0, 2, 1]));

    let path = result.path_to(&0).unwrap();
    assert_eq!(path, vec![0]);
}

#[test]
fn test_matches_dijkstra_on_non_negative_graphs() {
    let graph = generate_random_graph(60, 3.0, 42).unwrap();
    let bellman_ford = BellmanFord::new();
    let dijkstra = Dijkstra::new();

    for source in [0usize, 7, 23, 59] {
        let expected = dijkstra.compute_shortest_paths(&graph, &source).unwrap();
        let actual = bellman_ford.evaluate(&source, &graph).unwrap();

        for v in graph.vertices() {
            match (expected.distance_to(v).unwrap(), actual.distance_to(v).unwrap()) {
                (Distance::Finite(a), Distance::Finite(b)) => {
                    assert!((a.into_inner() - b.into_inner()).abs() < 1e-9, "vertex {}", v)
                }
                (a, b) => assert_eq!(a, b, "vertex {}", v),
            }
        }
    }
}

#[test]
fn test_dijkstra_rejects_negative_weights() {
    let graph = DirectedGraph::new(0..2, [(0, 1, OrderedFloat(-1.5))]).unwrap();
    let err = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight(_)));
}

#[test]
fn test_float_weights() {
    let graph = DirectedGraph::new(
        ["s", "t", "u"],
        [
            ("s", "t", OrderedFloat(2.5)),
            ("s", "u", OrderedFloat(1.0)),
            ("u", "t", OrderedFloat(-0.5)),
        ],
    )
    .unwrap();
    let result = BellmanFord::new().evaluate(&"s", &graph).unwrap();
    assert_eq!(result.distance_to(&"t"), Some(Distance::Finite(OrderedFloat(0.5))));
}

#[test]
fn test_negative_cycle_with_large_weights() {
    let graph = DirectedGraph::new(0..2, [(0, 1, -1_500_000_000i32), (1, 0, -1_500_000_000)]).unwrap();
    let err = BellmanFord::new().evaluate(&0, &graph).unwrap_err();

    assert!(err.is_negative_cycle());
    assert!(err.to_string().contains("Graph contains negative egde cycle"));
}

#[test]
fn test_negative_cycle_beyond_accumulator_range() {
    let weight = -(3i128 << 125);
    let graph = DirectedGraph::new(0..2, [(0, 1, weight), (1, 0, weight)]).unwrap();
    let err = BellmanFord::new().evaluate(&0, &graph).unwrap_err();

    assert!(err.is_negative_cycle());
}

#[test]
fn test_distance_at_weight_maximum() {
    let graph = DirectedGraph::new(0..3, [(0, 1, i64::MAX), (2, 1, -5)]).unwrap();
    let result = BellmanFord::new().evaluate(&0, &graph).unwrap();

    assert_eq!(result.distance_to(&1), Some(Distance::Finite(i64::MAX)));
    assert_eq!(result.distance_to(&2), Some(Distance::Infinite));
}

#[test]
fn test_acyclic_path_below_weight_minimum_overflows() {
    let graph = DirectedGraph::new(0..3, [(0, 1, -1_500_000_000i32), (1, 2, -1_500_000_000)]).unwrap();
    let err = BellmanFord::new().evaluate(&0, &graph).unwrap_err();

    assert_eq!(err, Error::WeightOverflow);
}
