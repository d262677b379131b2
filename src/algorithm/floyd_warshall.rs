use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::traits::{reconstruct_path, validate_endpoints};
use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::Result;

/// All-pairs Floyd-Warshall, used as a brute-force reference for small graphs.
///
/// Runs in O(n^3) time and O(n^2) memory regardless of the query, so it is
/// only meant for cross-checking other solvers.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes the full distance matrix and, for each pair `(i, j)`, the
    /// vertex preceding `j` on the best known `i -> j` path
    pub fn all_pairs<W, G>(&self, graph: &G) -> (Vec<Vec<W>>, Vec<Vec<Option<usize>>>)
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut dist = vec![vec![W::infinity(); n]; n];
        let mut pred = vec![vec![None; n]; n];

        for (u, row) in dist.iter_mut().enumerate() {
            row[u] = W::zero();
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < row[v] {
                    row[v] = weight;
                    pred[u][v] = Some(u);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                if dist[i][k].is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = dist[i][k] + dist[k][j];
                    if through_k < dist[i][j] {
                        dist[i][j] = through_k;
                        pred[i][j] = pred[k][j];
                    }
                }
            }
        }

        (dist, pred)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for FloydWarshall
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn shortest_path(&self, graph: &G, source: usize, target: usize) -> Result<PathResult<W>> {
        validate_endpoints::<W, G>(graph, source, target)?;

        let (dist, pred) = self.all_pairs(graph);
        let distance = dist[source][target];
        let path = if distance.is_finite() {
            reconstruct_path(&pred[source], source, target)
        } else {
            Vec::new()
        };

        Ok(PathResult {
            source,
            target,
            distance,
            path,
        })
    }
}
