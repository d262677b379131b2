use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use indexed_sssp::algorithm::{dijkstra::Dijkstra, floyd_warshall::FloydWarshall, ShortestPathAlgorithm};
use indexed_sssp::graph::generators::generate_sparse;
use indexed_sssp::graph::{DirectedGraph, Graph};

type Weight = OrderedFloat<f64>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm(
    algorithm: &dyn ShortestPathAlgorithm<Weight, DirectedGraph<Weight>>,
    graph: &DirectedGraph<Weight>,
    source: usize,
    target: usize,
) -> Result<Duration, indexed_sssp::Error> {
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.shortest_path(graph, source, target)?;
    let duration = start.elapsed();

    if result.is_reachable() {
        println!("  - Distance {:.2} over {} vertices in {:?}", result.distance.into_inner(), result.path.len(), duration);
    } else {
        println!("  - No path from {} to {} ({:?})", source, target, duration);
    }

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![100, 400, 1_000, 10_000, 100_000, 500_000];

    // Floyd-Warshall is cubic; only run it on the small sizes
    let brute_force_limit = 400;

    // Average number of edges per vertex
    let out_degree = 3;

    println!("=====================================================");
    println!("Benchmark: indexed-heap Dijkstra");
    println!("Out degree: {} edges per vertex", out_degree);
    println!("=====================================================");

    // Fixed seed so runs are comparable
    let mut rng = StdRng::seed_from_u64(2025);

    let dijkstra = Dijkstra::new();
    let floyd_warshall = FloydWarshall::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_sparse(&mut rng, size, out_degree)?;
        let source = 0;
        let target = size - 1;

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let dijkstra_time = benchmark_algorithm(&dijkstra, &graph, source, target)?;
        let brute_time = if size <= brute_force_limit {
            Some(benchmark_algorithm(&floyd_warshall, &graph, source, target)?)
        } else {
            None
        };

        results.push((size, graph.edge_count(), dijkstra_time, brute_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15}", "Vertices", "Edges", "Dijkstra (us)", "Floyd-W. (us)");
    println!("-----------------------------------------------------");

    for (size, edges, dijkstra_time, brute_time) in &results {
        let brute = brute_time
            .map(|t| t.as_micros().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<10} | {:<10} | {:<15} | {:<15}", size, edges, dijkstra_time.as_micros(), brute);
    }

    Ok(())
}
