//! Arbor Core Library
//!
//! An ordered map backed by an unbalanced binary search tree, and a directed
//! weighted graph with observable breadth-first, depth-first and Dijkstra
//! searches.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod grid;
pub mod logging;
pub mod tree;
