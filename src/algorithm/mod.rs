pub mod traits;
pub mod dijkstra;
pub mod floyd_warshall;

pub use traits::{PathResult, ShortestPathAlgorithm};
