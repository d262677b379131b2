use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::traits::{reconstruct_path, validate_endpoints};
use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::Result;

/// Classic Dijkstra's algorithm driven by an indexed decrease-key heap.
///
/// Every vertex is queued up front with its initial distance and each
/// improvement lowers the queued key in place, so the heap never holds more
/// than one entry per vertex. The search stops as soon as the target is
/// settled or the cheapest queued vertex is unreachable.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path(&self, graph: &G, source: usize, target: usize) -> Result<PathResult<W>> {
        validate_endpoints::<W, G>(graph, source, target)?;

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[source] = W::zero();

        let mut queue = IndexedMinHeap::from_pairs(
            distances.iter().copied().enumerate().map(|(v, d)| (d, v)),
        )?;

        let mut settled = 0usize;
        while !visited[target] {
            let u = queue.extract_min()?;
            visited[u] = true;
            settled += 1;

            let dist_u = distances[u];
            if dist_u.is_infinite() {
                // Everything still queued is unreachable
                debug!("Frontier exhausted after settling {} of {} vertices", settled, n);
                break;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u + weight;
                if new_dist < distances[v] {
                    trace!("Relaxing {} -> {}: {:?} -> {:?}", u, v, distances[v], new_dist);
                    distances[v] = new_dist;
                    predecessors[v] = Some(u);
                    queue.decrease_key(&v, new_dist)?;
                }
            }
        }

        let distance = distances[target];
        let path = if distance.is_finite() {
            reconstruct_path(&predecessors, source, target)
        } else {
            Vec::new()
        };

        debug!(
            "Dijkstra {} -> {}: distance {:?}, {} vertices settled",
            source, target, distance, settled
        );

        Ok(PathResult {
            source,
            target,
            distance,
            path,
        })
    }
}
