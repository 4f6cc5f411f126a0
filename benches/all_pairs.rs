use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use negcycle_apsp::graph::generators::generate_potential_graph;
use negcycle_apsp::graph::Graph;
use negcycle_apsp::{BellmanFord, Johnson};

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(10);

    for &size in &[50usize, 100, 200] {
        let graph = generate_potential_graph(size, 4.0, 7).expect("generated graph is valid");

        group.bench_with_input(BenchmarkId::new("johnson", size), &graph, |b, graph| {
            b.iter(|| Johnson::new().all_pairs(black_box(graph)))
        });

        group.bench_with_input(BenchmarkId::new("johnson_parallel", size), &graph, |b, graph| {
            b.iter(|| Johnson::new().with_parallel(true).all_pairs(black_box(graph)))
        });

        group.bench_with_input(BenchmarkId::new("repeated_bellman_ford", size), &graph, |b, graph| {
            let bellman_ford = BellmanFord::new();
            b.iter(|| {
                graph
                    .vertices()
                    .map(|source| bellman_ford.evaluate(source, black_box(graph)))
                    .collect::<Result<Vec<_>, _>>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_all_pairs);
criterion_main!(benches);
