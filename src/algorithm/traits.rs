use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a single-pair shortest path search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex ID
    pub source: usize,

    /// Target vertex ID
    pub target: usize,

    /// Length of the shortest path, `W::infinity()` if the target is unreachable
    pub distance: W,

    /// Vertices from source to target inclusive; empty if the target is unreachable
    pub path: Vec<usize>,
}

impl<W> PathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns true if a path from source to target was found
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Trait for single-pair shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute the shortest path from `source` to `target`
    fn shortest_path(&self, graph: &G, source: usize, target: usize) -> Result<PathResult<W>>;

    /// Answer whether `target` can be reached from `source` at all
    fn is_reachable(&self, graph: &G, source: usize, target: usize) -> Result<bool> {
        Ok(self.shortest_path(graph, source, target)?.is_reachable())
    }
}

/// Fails with `Error::InvalidGraph` unless both endpoints are vertices of `graph`
pub fn validate_endpoints<W, G>(graph: &G, source: usize, target: usize) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    for (role, vertex) in [("start", source), ("end", target)] {
        if !graph.has_vertex(vertex) {
            return Err(Error::InvalidGraph(format!(
                "{} vertex {} is outside 0..{}",
                role,
                vertex,
                graph.vertex_count()
            )));
        }
    }
    Ok(())
}

/// Walks `predecessors` back from `target` to `source` and returns the path in
/// source -> target order.
///
/// Returns an empty path if the chain breaks before reaching `source` or
/// loops back on itself.
pub fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors.get(current).copied().flatten() {
            Some(pred) => {
                current = pred;
                path.push(current);
            }
            None => return Vec::new(),
        }

        if path.len() > predecessors.len() {
            warn!("Cycle detected in predecessor chain ending at vertex {}", target);
            return Vec::new();
        }
    }

    path.reverse();
    path
}
