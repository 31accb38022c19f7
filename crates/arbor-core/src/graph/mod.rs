//! Directed weighted graph with observable traversal
//!
//! Provides:
//! - `WeightedGraph` storage with a vertex/edge API
//! - BFS and DFS searches that stop at an end vertex
//! - Dijkstra single-source shortest paths
//! - `GraphObserver` callbacks reporting algorithm progress

pub mod algos;
pub mod observer;
pub mod types;
pub mod weighted;

pub use algos::{bfs_search, dfs_search, dijkstra_shortest_path};
pub use observer::{EventLog, GraphEvent, GraphObserver, TracingObserver};
pub use types::{Cost, FinishedVertex, SearchOutcome, ShortestPath, Weight};
pub use weighted::WeightedGraph;
