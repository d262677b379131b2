use crate::graph::DirectedGraph;
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with `n` vertices and `m` edges.
///
/// Endpoints are drawn uniformly, so self-loops and parallel edges occur.
/// Weights are whole numbers in `0..=max_weight`, which keeps sums exact
/// when results from different solvers are compared.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    max_weight: u32,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    if n == 0 {
        return Ok(DirectedGraph::new());
    }

    let edges: Vec<_> = (0..m)
        .map(|_| {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            let weight = OrderedFloat(f64::from(rng.gen_range(0..=max_weight)));
            (u, v, weight)
        })
        .collect();

    DirectedGraph::from_edges(n, edges)
}

/// Generates a random graph where every vertex gets up to `out_degree`
/// outgoing edges with real weights in `1.0..100.0`
pub fn generate_sparse<R: Rng>(
    rng: &mut R,
    n: usize,
    out_degree: usize,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut edges = Vec::with_capacity(n * out_degree);

    for u in 0..n {
        for _ in 0..out_degree {
            let v = rng.gen_range(0..n);
            // Avoid self-loops and ensure positive weights
            if u != v {
                edges.push((u, v, OrderedFloat(rng.gen_range(1.0..100.0))));
            }
        }
    }

    DirectedGraph::from_edges(n, edges)
}

/// Generates a 2D grid graph with dimensions width*height
/// Returns a directed graph with unit weights and 4-connectivity
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let index = |x: usize, y: usize| -> usize { y * width + x };
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);

            if x > 0 {
                edges.push((current, index(x - 1, y), OrderedFloat(1.0)));
            }
            if x + 1 < width {
                edges.push((current, index(x + 1, y), OrderedFloat(1.0)));
            }
            if y > 0 {
                edges.push((current, index(x, y - 1), OrderedFloat(1.0)));
            }
            if y + 1 < height {
                edges.push((current, index(x, y + 1), OrderedFloat(1.0)));
            }
        }
    }

    DirectedGraph::from_edges(width * height, edges)
}
