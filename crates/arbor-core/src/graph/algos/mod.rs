//! Graph algorithm implementations
//!
//! Contains the algorithms that drive observer notifications:
//! - `search`: breadth-first and depth-first search sharing one loop
//! - `dijkstra`: single-source shortest paths with path reconstruction

pub mod dijkstra;
pub mod search;

pub use dijkstra::dijkstra_shortest_path;
pub use search::{bfs_search, dfs_search};
