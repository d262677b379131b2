//! Indexed SSSP - single-pair shortest paths with an indexed decrease-key heap
//!
//! This library implements Dijkstra's algorithm on directed graphs with real
//! non-negative edge weights. The frontier is kept in a binary min-heap that
//! tracks the array position of every queued vertex, so tentative distances
//! can be lowered in place instead of pushing duplicate entries.
//!
//! Around the solver sits a small judge-style surface: a whitespace token
//! reader for batches of graphs, renderers for the path / reachability / JSON
//! outputs, and a batch driver used by the `shortest_path` binary.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod runner;

pub use algorithm::{
    dijkstra::Dijkstra, floyd_warshall::FloydWarshall, PathResult, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use data_structures::IndexedMinHeap;
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Heap is empty")]
    EmptyContainer,

    #[error("Value not found in heap")]
    NotFound,

    #[error("Only strict key decreases are supported")]
    UnsupportedOperation,

    #[error("Value is already present in heap")]
    DuplicateValue,

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
