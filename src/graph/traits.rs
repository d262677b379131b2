use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing a weighted directed graph over the dense vertex ids `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the lightest weight among the edges from `from` to `to`, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best, w| match best {
                Some(b) if b <= w => Some(b),
                _ => Some(w),
            })
    }
}

/// Trait for building a graph up before a search runs over it
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Appends a directed edge between existing vertices.
    ///
    /// Fails with `Error::InvalidGraph` if either endpoint is out of range or
    /// the weight is negative or NaN.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
