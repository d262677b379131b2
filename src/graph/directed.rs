use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using dense adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Total number of stored edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with the specified number of isolated vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph over `0..vertices` from `(from, to, weight)` triples.
    ///
    /// Edge order is preserved per source vertex. The first out-of-range
    /// endpoint or negative weight aborts the load.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_capacity(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the outgoing adjacency slice of a vertex
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        self.outgoing_edges
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.neighbors(vertex).iter().copied())
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.outgoing_edges.len();
        self.outgoing_edges.push(Vec::new());
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        let n = self.vertex_count();
        if from >= n || to >= n {
            return Err(Error::InvalidGraph(format!(
                "edge {} -> {} references a vertex outside 0..{}",
                from, to, n
            )));
        }
        // Also rejects NaN
        if !(weight >= W::zero()) {
            return Err(Error::InvalidGraph(format!(
                "edge {} -> {} has negative weight {:?}",
                from, to, weight
            )));
        }

        // Parallel edges and self-loops are kept as given
        self.outgoing_edges[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }
}
