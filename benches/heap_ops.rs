use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use indexed_sssp::graph::generators::generate_grid;
use indexed_sssp::graph::DirectedGraph;
use indexed_sssp::IndexedMinHeap;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Weight = OrderedFloat<f64>;

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_min_heap");

    for &n in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let keys: Vec<Weight> = (0..n).map(|_| OrderedFloat(rng.gen_range(0.0..1e6))).collect();

        group.bench_with_input(BenchmarkId::new("build_and_drain", n), &keys, |b, keys| {
            b.iter(|| {
                let heap = IndexedMinHeap::from_pairs(keys.iter().copied().zip(0..)).unwrap();
                black_box(heap.into_sorted_vec())
            })
        });

        group.bench_with_input(BenchmarkId::new("decrease_all", n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::from_pairs(keys.iter().copied().zip(0usize..)).unwrap();
                for (v, key) in keys.iter().enumerate() {
                    heap.decrease_key(&v, OrderedFloat(key.into_inner() - 1e6)).unwrap();
                }
                black_box(heap.len())
            })
        });
    }

    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");

    for &side in &[32usize, 128, 256] {
        let graph: DirectedGraph<Weight> = generate_grid(side, side).unwrap();
        let target = side * side - 1;
        let dijkstra = Dijkstra::new();

        group.bench_with_input(BenchmarkId::from_parameter(side), &graph, |b, graph| {
            b.iter(|| {
                let result: indexed_sssp::PathResult<Weight> =
                    dijkstra.shortest_path(graph, 0, target).unwrap();
                black_box(result.distance)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_heap, bench_dijkstra);
criterion_main!(benches);
